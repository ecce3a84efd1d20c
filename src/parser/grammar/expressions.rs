//! Expression grammar: precedence climbing from assignment down to primary.
//!
//! Each precedence level is its own function; the checkpoint-reuse technique from
//! `types::parse_type` wraps the left operand in a `BinaryExpression` for every
//! operator consumed at that level, giving left-associative chains without building
//! an explicit tree first.

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::EXPR_FIRST;

pub(crate) fn at_expression_start(p: &mut Parser<'_>) -> bool {
    EXPR_FIRST.contains(p.peek())
}

pub(crate) fn parse_expression(p: &mut Parser<'_>) {
    parse_assignment(p);
}

fn is_assignment_operator(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Equals
            | SyntaxKind::PlusEquals
            | SyntaxKind::MinusEquals
            | SyntaxKind::StarEquals
            | SyntaxKind::SlashEquals
            | SyntaxKind::PercentEquals
            | SyntaxKind::AmpEquals
            | SyntaxKind::PipeEquals
            | SyntaxKind::CaretEquals
            | SyntaxKind::LtLtEquals
            | SyntaxKind::GtGtEquals
    )
}

fn parse_assignment(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    parse_conditional(p);
    if is_assignment_operator(p.peek()) {
        p.bump();
        parse_assignment(p);
        p.start_node_at(cp, SyntaxKind::AssignmentExpression);
        p.finish_node();
    }
}

fn parse_conditional(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    parse_logical_or(p);
    if p.peek() == SyntaxKind::Question {
        p.bump();
        parse_expression(p);
        p.expect(SyntaxKind::Colon, "':'");
        parse_expression(p);
        p.start_node_at(cp, SyntaxKind::ConditionalExpression);
        p.finish_node();
    }
}

/// Builds a left-associative chain of `BinaryExpression` nodes for one precedence
/// level: parses `next`, then repeatedly consumes any operator in `ops` followed by
/// another `next`, rewrapping the same checkpoint each time.
fn parse_binary_level(p: &mut Parser<'_>, next: fn(&mut Parser<'_>), ops: &[SyntaxKind]) {
    let cp = p.checkpoint();
    next(p);
    while ops.contains(&p.peek()) {
        p.bump();
        next(p);
        p.start_node_at(cp, SyntaxKind::BinaryExpression);
        p.finish_node();
    }
}

fn parse_logical_or(p: &mut Parser<'_>) {
    parse_binary_level(p, parse_logical_and, &[SyntaxKind::PipePipe]);
}

fn parse_logical_and(p: &mut Parser<'_>) {
    parse_binary_level(p, parse_bit_or, &[SyntaxKind::AmpAmp]);
}

fn parse_bit_or(p: &mut Parser<'_>) {
    parse_binary_level(p, parse_bit_xor, &[SyntaxKind::Pipe]);
}

fn parse_bit_xor(p: &mut Parser<'_>) {
    parse_binary_level(p, parse_bit_and, &[SyntaxKind::Caret]);
}

fn parse_bit_and(p: &mut Parser<'_>) {
    parse_binary_level(p, parse_equality, &[SyntaxKind::Amp]);
}

fn parse_equality(p: &mut Parser<'_>) {
    parse_binary_level(
        p,
        parse_relational,
        &[SyntaxKind::EqualsEquals, SyntaxKind::BangEquals],
    );
}

/// Relational level also hosts `is`/`as`, whose right operand is a type, not an
/// expression, so it can't be folded into `parse_binary_level`.
fn parse_relational(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    parse_shift(p);
    loop {
        match p.peek() {
            SyntaxKind::Lt | SyntaxKind::Gt | SyntaxKind::LtEquals | SyntaxKind::GtEquals => {
                p.bump();
                parse_shift(p);
                p.start_node_at(cp, SyntaxKind::BinaryExpression);
                p.finish_node();
            }
            SyntaxKind::KwIs => {
                p.bump();
                super::types::parse_type(p);
                p.start_node_at(cp, SyntaxKind::IsExpression);
                p.finish_node();
            }
            SyntaxKind::KwAs => {
                p.bump();
                super::types::parse_type(p);
                p.start_node_at(cp, SyntaxKind::AsExpression);
                p.finish_node();
            }
            _ => break,
        }
    }
}

fn parse_shift(p: &mut Parser<'_>) {
    parse_binary_level(p, parse_additive, &[SyntaxKind::LtLt, SyntaxKind::GtGt]);
}

fn parse_additive(p: &mut Parser<'_>) {
    parse_binary_level(p, parse_multiplicative, &[SyntaxKind::Plus, SyntaxKind::Minus]);
}

fn parse_multiplicative(p: &mut Parser<'_>) {
    parse_binary_level(
        p,
        super::atoms::parse_unary,
        &[SyntaxKind::Star, SyntaxKind::Slash, SyntaxKind::Percent],
    );
}
