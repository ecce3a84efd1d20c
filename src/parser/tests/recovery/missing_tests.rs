use crate::parser::tests::parse_with_diagnostics;
use crate::parser::Declaration;

#[test]
fn missing_class_name_synthesizes_an_empty_identifier_token() {
    let source = "class { }";
    let (unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());

    let Declaration::Class(class) = unit.members().next().expect("class") else {
        panic!("expected class")
    };
    let name = class.name().expect("a synthesized identifier token is still present");
    assert_eq!(name.text(), "");
    assert!(class.base_types().is_none());
    assert_eq!(class.members().count(), 0);
}

#[test]
fn missing_semicolon_after_using_directive_does_not_drop_the_name() {
    let source = "using System\nclass C {}";
    let (unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());

    let using = unit.usings().next().expect("using directive");
    assert_eq!(using.name().unwrap().text(), "System");
    assert_eq!(unit.members().count(), 1);
}

#[test]
fn missing_closing_paren_still_yields_a_parameter_list_node() {
    let source = "class C { void M( { } }";
    let (unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());

    let Declaration::Class(class) = unit.members().next().expect("class") else {
        panic!("expected class")
    };
    let Declaration::Method(method) = class.members().next().expect("method") else {
        panic!("expected method")
    };
    assert!(method.parameters().is_some());
}
