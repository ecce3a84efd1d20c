use crate::parser::tests::parse_with_diagnostics;
use crate::parser::{Declaration, SyntaxKind};

#[test]
fn unclosed_class_body_reports_an_error_and_still_yields_the_class() {
    let source = "class Foo { int x;";
    let (unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());
    let members: Vec<_> = unit.members().collect();
    assert_eq!(members.len(), 1);
    assert!(matches!(members[0], Declaration::Class(_)));
}

#[test]
fn missing_semicolon_after_field_reports_an_error() {
    let source = "class Foo { int x }";
    let (_unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());
}

#[test]
fn unclosed_parenthesized_expression_reports_an_error() {
    let source = "class C { void M() { int x = (1 + 2; } }";
    let (_unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());
}

#[test]
fn unclosed_string_literal_is_still_tokenized() {
    // The lexer's `StringLiteral` regex tolerates a missing closing quote; the parser
    // sees one (unterminated) literal token rather than losing sync entirely.
    let source = r#"class C { void M() { var s = "unterminated; } }"#;
    let (unit, _diagnostics) = parse_with_diagnostics(source);
    assert_eq!(unit.as_cst().kind(), SyntaxKind::CompilationUnit);
}

#[test]
fn truncated_input_ends_cleanly() {
    let source = "namespace N { class";
    let (_unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());
}
