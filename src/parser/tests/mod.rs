mod grammar;
mod recovery;

use crate::parser::ast::CompilationUnit;
use crate::parser::{Parser, SyntaxNode, lex};

/// Parses `source` with no fuel limits and returns the compilation unit. Parsing never
/// fails outright (errors end up as diagnostics), so the only failure mode here is fuel
/// exhaustion, which none of these tests exercise.
pub(super) fn parse(source: &str) -> CompilationUnit {
    let (tokens, _lex_errors) = lex(source);
    Parser::new(source, tokens)
        .parse()
        .expect("no fuel limit set")
        .compilation_unit
}

pub(super) fn parse_with_diagnostics(source: &str) -> (CompilationUnit, crate::Diagnostics) {
    let (tokens, _lex_errors) = lex(source);
    let result = Parser::new(source, tokens).parse().expect("no fuel limit set");
    (result.compilation_unit, result.diagnostics)
}

/// Renders `node`'s subtree as an indented outline of kinds and token text, ignoring
/// trivia and source ranges so snapshots only move when tree shape or text changes.
fn dump(node: &SyntaxNode) -> String {
    let mut out = String::new();
    dump_node(node, 0, &mut out);
    out
}

fn dump_node(node: &SyntaxNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&format!("{:?}\n", node.kind()));
    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => dump_node(&n, depth + 1, out),
            rowan::NodeOrToken::Token(t) if !t.kind().is_trivia() => {
                out.push_str(&"  ".repeat(depth + 1));
                out.push_str(&format!("{:?} {:?}\n", t.kind(), t.text()));
            }
            rowan::NodeOrToken::Token(_) => {}
        }
    }
}
