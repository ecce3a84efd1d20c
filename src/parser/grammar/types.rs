//! Type reference parsing: predefined types, simple/qualified names, pointers, arrays.

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::PREDEFINED_TYPES;

/// A dotted name: `Identifier ('.' Identifier)*`. Always produces a `QualifiedName`
/// node, even for a single segment, so callers don't need two cases.
pub(crate) fn parse_qualified_name(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::QualifiedName);
    p.expect_identifier();
    while p.peek() == SyntaxKind::Dot {
        p.bump();
        p.expect_identifier();
    }
    p.finish_node();
}

/// `predefinedType | simpleType | qualifiedName`, followed by any number of `*`
/// (pointer) and `[...]` (array rank) suffixes, each wrapping everything parsed so far.
pub(crate) fn parse_type(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    parse_type_base(p);
    loop {
        match p.peek() {
            SyntaxKind::Star => {
                p.bump();
                p.start_node_at(cp, SyntaxKind::PointerType);
                p.finish_node();
            }
            SyntaxKind::BracketOpen => {
                parse_array_rank_specifier(p, false);
                p.start_node_at(cp, SyntaxKind::ArrayType);
                p.finish_node();
            }
            _ => break,
        }
    }
}

pub(crate) fn parse_type_base(p: &mut Parser<'_>) {
    if PREDEFINED_TYPES.contains(p.peek()) {
        p.start_node(SyntaxKind::PredefinedType);
        p.bump();
        p.finish_node();
        return;
    }
    if p.peek() == SyntaxKind::Identifier {
        parse_qualified_name(p);
        return;
    }
    p.report_error("Type expected");
    p.start_node(SyntaxKind::ErrorExpression);
    p.finish_node();
}

/// `'[' (expr (',' expr)* | ','*)? ']'`. `allow_sizes` distinguishes `new T[n]` (array
/// creation, sizes permitted) from a plain type reference (`T[]`, `T[,]` - rank only).
pub(crate) fn parse_array_rank_specifier(p: &mut Parser<'_>, allow_sizes: bool) {
    p.start_node(SyntaxKind::ArrayRankSpecifier);
    p.expect(SyntaxKind::BracketOpen, "'['");
    if allow_sizes && super::expressions::at_expression_start(p) {
        super::expressions::parse_expression(p);
        while p.peek() == SyntaxKind::Comma {
            p.bump();
            super::expressions::parse_expression(p);
        }
    } else {
        while p.peek() == SyntaxKind::Comma {
            p.bump();
        }
    }
    p.expect(SyntaxKind::BracketClose, "']'");
    p.finish_node();
}
