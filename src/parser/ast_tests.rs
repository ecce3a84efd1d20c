use crate::parser::tests::parse;
use crate::parser::{Declaration, DeclarationKind, Type};

#[test]
fn qualified_name_joins_segments_with_dots() {
    let unit = parse("using System.Collections.Generic;");
    let using = unit.usings().next().expect("using directive");
    let name = using.name().expect("qualified name");
    assert_eq!(name.text(), "System.Collections.Generic");
    assert_eq!(name.segments().count(), 3);
}

#[test]
fn using_alias_is_present_only_when_written() {
    let unit = parse("using Foo = System.Text;");
    let using = unit.usings().next().expect("using directive");
    assert!(using.alias().is_present());
    assert_eq!(using.alias().value().unwrap().text(), "Foo");

    let unit = parse("using System.Text;");
    let using = unit.usings().next().expect("using directive");
    assert!(!using.alias().is_present());
}

#[test]
fn base_type_list_is_a_separated_list_with_one_fewer_separator_than_element() {
    let unit = parse("class C : IFoo, IBar { }");
    let Declaration::Class(class) = unit.members().next().expect("class") else {
        panic!("expected class")
    };
    let base_types = class.base_types().expect("base type list");
    let types = base_types.types();
    assert_eq!(types.len(), 2);
    assert_eq!(types.separators().len(), 1);
    assert!(!types.is_empty());
}

#[test]
fn parameter_list_separated_list_has_no_separator_for_a_single_parameter() {
    let unit = parse("class C { void M(int x) { } }");
    let Declaration::Class(class) = unit.members().next().expect("class") else {
        panic!("expected class")
    };
    let Declaration::Method(method) = class.members().next().expect("method") else {
        panic!("expected method")
    };
    let params = method.parameters().expect("parameter list");
    let list = params.parameters();
    assert_eq!(list.len(), 1);
    assert!(list.separators().is_empty());
}

#[test]
fn declaration_cast_round_trips_through_kind_and_as_cst() {
    let unit = parse("class C { }");
    let member = unit.members().next().expect("member");
    assert_eq!(member.kind(), DeclarationKind::Class);
    let roundtrip = Declaration::cast(member.as_cst().clone()).expect("cast back");
    assert_eq!(roundtrip.kind(), member.kind());
}

#[test]
fn declaration_modifiers_preserves_source_order() {
    let unit = parse("public static class C { }");
    let member = unit.members().next().expect("member");
    let mod_texts: Vec<_> = member.modifiers().iter().map(|t| t.text().to_string()).collect();
    assert_eq!(mod_texts, vec!["public", "static"]);
}

#[test]
fn predefined_type_is_distinguished_from_simple_type() {
    let unit = parse("class C { int x; Foo y; }");
    let Declaration::Class(class) = unit.members().next().expect("class") else {
        panic!("expected class")
    };
    let mut members = class.members();
    let Declaration::Field(int_field) = members.next().expect("int field") else {
        panic!("expected field")
    };
    let Declaration::Field(foo_field) = members.next().expect("foo field") else {
        panic!("expected field")
    };
    assert!(matches!(int_field.ty(), Some(Type::Predefined(_))));
    assert!(matches!(foo_field.ty(), Some(Type::Simple(_))));
}

#[test]
fn array_type_rank_specifiers_are_valid_only_without_sizes() {
    let unit = parse("class C { int[] xs; }");
    let Declaration::Class(class) = unit.members().next().expect("class") else {
        panic!("expected class")
    };
    let Declaration::Field(field) = class.members().next().expect("field") else {
        panic!("expected field")
    };
    let Some(Type::Array(array_ty)) = field.ty() else {
        panic!("expected array type")
    };
    assert!(array_ty.is_valid_type());
    assert_eq!(array_ty.rank_specifiers().count(), 1);
}
