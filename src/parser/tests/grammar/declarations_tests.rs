use indoc::indoc;

use crate::parser::tests::{dump, parse, parse_with_diagnostics};
use crate::parser::{Declaration, DeclarationKind};

#[test]
fn empty_source() {
    let unit = parse("");
    insta::assert_snapshot!(dump(unit.as_cst()), @"CompilationUnit\n");
    assert_eq!(unit.members().count(), 0);
}

#[test]
fn using_directive_and_namespace() {
    let input = indoc! {r#"
        using System;
        using Generic = System.Collections.Generic;

        namespace Demo
        {
            class Empty {}
        }
    "#};
    let unit = parse(input);

    let usings: Vec<_> = unit.usings().collect();
    assert_eq!(usings.len(), 2);
    assert!(!usings[0].alias().is_present());
    assert_eq!(usings[0].name().unwrap().text(), "System");
    assert_eq!(
        usings[1].alias().value().map(|t| t.text().to_string()),
        Some("Generic".to_string())
    );
    assert_eq!(usings[1].name().unwrap().text(), "System.Collections.Generic");

    let members: Vec<_> = unit.members().collect();
    assert_eq!(members.len(), 1);
    let Declaration::Namespace(ns) = &members[0] else {
        panic!("expected a namespace declaration");
    };
    assert_eq!(ns.name().unwrap().text(), "Demo");
    let inner: Vec<_> = ns.members().collect();
    assert_eq!(inner.len(), 1);
    assert_eq!(inner[0].kind(), DeclarationKind::Class);
}

#[test]
fn class_with_field_property_and_method() {
    let input = indoc! {r#"
        public class Point
        {
            private int x;
            public int X { get; set; }
            public int Sum(int other)
            {
                return x + other;
            }
        }
    "#};
    let unit = parse(input);
    let members: Vec<_> = unit.members().collect();
    assert_eq!(members.len(), 1);
    let Declaration::Class(class) = &members[0] else {
        panic!("expected a class declaration");
    };
    assert_eq!(class.name().unwrap().text(), "Point");
    assert!(class.base_types().is_none());

    let class_members: Vec<_> = class.members().collect();
    assert_eq!(
        class_members.iter().map(Declaration::kind).collect::<Vec<_>>(),
        vec![DeclarationKind::Field, DeclarationKind::Property, DeclarationKind::Method]
    );

    let Declaration::Field(field) = &class_members[0] else { unreachable!() };
    assert!(!field.is_const());
    let declarators: Vec<_> = field.declarators().elements().to_vec();
    assert_eq!(declarators.len(), 1);
    assert_eq!(declarators[0].name().unwrap().text(), "x");

    let Declaration::Property(prop) = &class_members[1] else { unreachable!() };
    assert_eq!(prop.name().unwrap().text(), "X");
    let accessors: Vec<_> = prop.accessors().unwrap().accessors().collect();
    assert_eq!(accessors.len(), 2);

    let Declaration::Method(method) = &class_members[2] else { unreachable!() };
    assert_eq!(method.name().unwrap().text(), "Sum");
    let params: Vec<_> = method.parameters().unwrap().parameters().elements().to_vec();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].name().unwrap().text(), "other");
    assert!(method.body().is_present());
}

#[test]
fn enum_with_explicit_and_implicit_values() {
    let input = "enum Color { Red = 1, Green, Blue }";
    let unit = parse(input);
    let members: Vec<_> = unit.members().collect();
    let Declaration::Enum(e) = &members[0] else { panic!("expected enum") };
    assert_eq!(e.name().unwrap().text(), "Color");
    let enum_members: Vec<_> = e.members().elements().to_vec();
    assert_eq!(enum_members.len(), 3);
    assert_eq!(enum_members[0].name().unwrap().text(), "Red");
    assert!(enum_members[0].value().is_some());
    assert_eq!(enum_members[1].name().unwrap().text(), "Green");
    assert!(enum_members[1].value().is_none());
}

#[test]
fn interface_members_have_no_body() {
    let input = indoc! {r#"
        interface IShape
        {
            double Area();
            int Sides { get; }
        }
    "#};
    let unit = parse(input);
    let members: Vec<_> = unit.members().collect();
    let Declaration::Interface(iface) = &members[0] else { panic!("expected interface") };
    let iface_members: Vec<_> = iface.members().collect();
    assert_eq!(
        iface_members.iter().map(Declaration::kind).collect::<Vec<_>>(),
        vec![DeclarationKind::Method, DeclarationKind::Property]
    );
    let Declaration::Method(method) = &iface_members[0] else { unreachable!() };
    assert!(!method.body().is_present());
}

#[test]
fn delegate_declaration() {
    let input = "delegate void Handler(object sender, int value);";
    let unit = parse(input);
    let members: Vec<_> = unit.members().collect();
    let Declaration::Delegate(del) = &members[0] else { panic!("expected delegate") };
    assert_eq!(del.name().unwrap().text(), "Handler");
    assert_eq!(del.parameters().unwrap().parameters().len(), 2);
}

#[test]
fn new_modifier_permitted_outside_namespace() {
    // `new` shadows a base-class member; only invalid directly in a namespace body.
    let input = "class Outer { class Inner { new public int Field; } }";
    let (_unit, diagnostics) = parse_with_diagnostics(input);
    assert!(!diagnostics.has_errors(), "{:?}", diagnostics);
}

#[test]
fn duplicate_modifier_is_an_error() {
    let input = "public public class Foo {}";
    let (_unit, diagnostics) = parse_with_diagnostics(input);
    assert!(diagnostics.has_errors());
}

#[test]
fn const_field_rejects_static() {
    let input = "class C { static const int X = 1; }";
    let (_unit, diagnostics) = parse_with_diagnostics(input);
    assert!(diagnostics.has_errors());
}

#[test]
fn constructor_with_base_initializer() {
    let input = indoc! {r#"
        class Widget : Base
        {
            public Widget(int id) : base(id)
            {
            }
        }
    "#};
    let unit = parse(input);
    let members: Vec<_> = unit.members().collect();
    let Declaration::Class(class) = &members[0] else { panic!("expected class") };
    assert!(class.base_types().is_some());
    let class_members: Vec<_> = class.members().collect();
    let Declaration::Constructor(ctor) = &class_members[0] else { panic!("expected constructor") };
    assert_eq!(ctor.name().unwrap().text(), "Widget");
    let init = ctor.initializer().into_value().expect("constructor initializer");
    assert_eq!(init.target_keyword().unwrap().text(), "base");
}

#[test]
fn attribute_target_accepts_known_targets() {
    let input = "[assembly: CLSCompliant(true)]\nclass C {}";
    let (_unit, diagnostics) = parse_with_diagnostics(input);
    assert!(!diagnostics.has_errors());
}

#[test]
fn attribute_target_rejects_unknown_target() {
    let input = "[bogus: CLSCompliant(true)]\nclass C {}";
    let (_unit, diagnostics) = parse_with_diagnostics(input);
    assert!(diagnostics.has_errors());
}

#[test]
fn attribute_target_rejects_accessor_keywords() {
    let input = "[get: CLSCompliant(true)]\nclass C {}";
    let (_unit, diagnostics) = parse_with_diagnostics(input);
    assert!(diagnostics.has_errors());
}
