use crate::parser::tests::parse_with_diagnostics;
use crate::parser::{Declaration, SyntaxKind};

#[test]
fn garbage_between_members_is_wrapped_as_an_error_node_and_parsing_continues() {
    let source = "class C { $$$ int x; }";
    let (unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());
    let Declaration::Class(class) = unit.members().next().expect("class") else {
        panic!("expected class")
    };
    let members: Vec<_> = class.members().collect();
    assert_eq!(members.len(), 1, "recovery should still find the field after the garbage");
    assert!(matches!(members[0], Declaration::Field(_)));
}

#[test]
fn unexpected_token_at_top_level_does_not_stop_parsing_the_next_namespace() {
    let source = "???\nnamespace N { class Ok {} }";
    let (unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());
    let members: Vec<_> = unit.members().collect();
    assert!(
        members.iter().any(|m| m.kind() == crate::parser::DeclarationKind::Namespace),
        "{members:?}"
    );
}

#[test]
fn error_node_contains_the_skipped_tokens() {
    let source = "class C { @ int x; }";
    let (unit, _diagnostics) = parse_with_diagnostics(source);
    let has_error_node = unit
        .as_cst()
        .descendants()
        .any(|n| n.kind() == SyntaxKind::Error);
    assert!(has_error_node);
}

#[test]
fn unexpected_token_inside_a_block_recovers_to_the_next_statement() {
    let source = "class C { void M() { $$$ return 1; } }";
    let (_unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());
}

#[test]
fn duplicate_closing_brace_is_reported() {
    let source = "class C { } }";
    let (_unit, diagnostics) = parse_with_diagnostics(source);
    assert!(diagnostics.has_errors());
}
