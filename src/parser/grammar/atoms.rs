//! Primary expressions and the unary/postfix layers around them: literals, names,
//! `new`, `typeof`/`sizeof`, casts, and postfix chains (`.`, `->`, `(...)`, `[...]`,
//! `++`/`--`).

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::PREDEFINED_TYPES;

pub(crate) fn parse_unary(p: &mut Parser<'_>) {
    match p.peek() {
        SyntaxKind::Plus
        | SyntaxKind::Minus
        | SyntaxKind::Bang
        | SyntaxKind::Tilde
        | SyntaxKind::Star
        | SyntaxKind::Amp
        | SyntaxKind::PlusPlus
        | SyntaxKind::MinusMinus => {
            p.start_node(SyntaxKind::PrefixUnaryExpression);
            p.bump();
            parse_unary(p);
            p.finish_node();
        }
        SyntaxKind::ParenOpen => parse_paren_or_cast(p),
        _ => parse_postfix(p),
    }
}

/// `(` starts either a parenthesized expression or a cast. Disambiguated by scanning
/// ahead with `peek_nth` (no tokens are bumped, so nothing needs to be undone):
/// a cast requires `( type )` immediately followed by a token that starts a
/// unary expression.
fn parse_paren_or_cast(p: &mut Parser<'_>) {
    if looks_like_cast(p) {
        let cp = p.checkpoint();
        p.bump(); // '('
        super::types::parse_type(p);
        p.expect(SyntaxKind::ParenClose, "')'");
        parse_unary(p);
        p.start_node_at(cp, SyntaxKind::CastExpression);
        p.finish_node();
        return;
    }
    p.start_node(SyntaxKind::ParenthesizedExpression);
    p.bump(); // '('
    super::expressions::parse_expression(p);
    p.expect(SyntaxKind::ParenClose, "')'");
    p.finish_node();
}

fn looks_like_cast(p: &mut Parser<'_>) -> bool {
    let mut offset = 1;
    let first = p.peek_nth(offset);
    if !(PREDEFINED_TYPES.contains(first) || first == SyntaxKind::Identifier) {
        return false;
    }
    offset += 1;
    loop {
        match p.peek_nth(offset) {
            SyntaxKind::Dot => {
                offset += 1;
                if p.peek_nth(offset) != SyntaxKind::Identifier {
                    return false;
                }
                offset += 1;
            }
            SyntaxKind::Star => offset += 1,
            SyntaxKind::BracketOpen => {
                offset += 1;
                while p.peek_nth(offset) == SyntaxKind::Comma {
                    offset += 1;
                }
                if p.peek_nth(offset) != SyntaxKind::BracketClose {
                    return false;
                }
                offset += 1;
            }
            _ => break,
        }
    }
    if p.peek_nth(offset) != SyntaxKind::ParenClose {
        return false;
    }
    offset += 1;
    let next = p.peek_nth(offset);
    PREDEFINED_TYPES.contains(next)
        || matches!(
            next,
            SyntaxKind::Identifier
                | SyntaxKind::NumericLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::CharacterLiteral
                | SyntaxKind::ParenOpen
                | SyntaxKind::KwThis
                | SyntaxKind::KwBase
                | SyntaxKind::KwNew
                | SyntaxKind::KwTypeof
                | SyntaxKind::KwSizeof
                | SyntaxKind::KwStackalloc
                | SyntaxKind::KwTrue
                | SyntaxKind::KwFalse
                | SyntaxKind::KwNull
                | SyntaxKind::KwChecked
                | SyntaxKind::KwUnchecked
                | SyntaxKind::Bang
                | SyntaxKind::Tilde
        )
}

fn parse_postfix(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    parse_primary(p);
    loop {
        match p.peek() {
            SyntaxKind::Dot => {
                p.bump();
                p.expect_identifier();
                p.start_node_at(cp, SyntaxKind::MemberAccessExpression);
                p.finish_node();
            }
            SyntaxKind::Arrow => {
                p.bump();
                p.expect_identifier();
                p.start_node_at(cp, SyntaxKind::PointerMemberAccessExpression);
                p.finish_node();
            }
            SyntaxKind::ParenOpen => {
                parse_argument_list(p);
                p.start_node_at(cp, SyntaxKind::InvocationExpression);
                p.finish_node();
            }
            SyntaxKind::BracketOpen => {
                parse_bracketed_argument_list(p);
                p.start_node_at(cp, SyntaxKind::ElementAccessExpression);
                p.finish_node();
            }
            SyntaxKind::PlusPlus | SyntaxKind::MinusMinus => {
                p.bump();
                p.start_node_at(cp, SyntaxKind::PostfixUnaryExpression);
                p.finish_node();
            }
            _ => break,
        }
    }
}

fn parse_primary(p: &mut Parser<'_>) {
    match p.peek() {
        SyntaxKind::NumericLiteral
        | SyntaxKind::StringLiteral
        | SyntaxKind::CharacterLiteral
        | SyntaxKind::KwTrue
        | SyntaxKind::KwFalse
        | SyntaxKind::KwNull => {
            p.start_node(SyntaxKind::LiteralExpression);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::KwThis => {
            p.start_node(SyntaxKind::ThisExpression);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::KwBase => {
            p.start_node(SyntaxKind::BaseExpression);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::Identifier => {
            p.start_node(SyntaxKind::IdentifierName);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::ParenOpen => parse_paren_or_cast(p),
        SyntaxKind::KwNew => parse_object_or_array_creation(p),
        SyntaxKind::KwTypeof => {
            p.start_node(SyntaxKind::TypeOfExpression);
            p.bump();
            p.expect(SyntaxKind::ParenOpen, "'('");
            super::types::parse_type(p);
            p.expect(SyntaxKind::ParenClose, "')'");
            p.finish_node();
        }
        SyntaxKind::KwSizeof => {
            p.start_node(SyntaxKind::SizeOfExpression);
            p.bump();
            p.expect(SyntaxKind::ParenOpen, "'('");
            super::types::parse_type(p);
            p.expect(SyntaxKind::ParenClose, "')'");
            p.finish_node();
        }
        SyntaxKind::KwStackalloc => {
            p.start_node(SyntaxKind::StackAllocExpression);
            p.bump();
            let cp = p.checkpoint();
            super::types::parse_type_base(p);
            if p.peek() == SyntaxKind::BracketOpen {
                super::types::parse_array_rank_specifier(p, true);
            }
            p.start_node_at(cp, SyntaxKind::ArrayType);
            p.finish_node();
            p.finish_node();
        }
        SyntaxKind::KwChecked => {
            p.start_node(SyntaxKind::CheckedExpression);
            p.bump();
            p.expect(SyntaxKind::ParenOpen, "'('");
            super::expressions::parse_expression(p);
            p.expect(SyntaxKind::ParenClose, "')'");
            p.finish_node();
        }
        SyntaxKind::KwUnchecked => {
            p.start_node(SyntaxKind::UncheckedExpression);
            p.bump();
            p.expect(SyntaxKind::ParenOpen, "'('");
            super::expressions::parse_expression(p);
            p.expect(SyntaxKind::ParenClose, "')'");
            p.finish_node();
        }
        kind if PREDEFINED_TYPES.contains(kind) => {
            p.start_node(SyntaxKind::PredefinedType);
            p.bump();
            p.finish_node();
        }
        _ => {
            p.report_error("Expected expression");
            p.start_node(SyntaxKind::ErrorExpression);
            p.finish_node();
        }
    }
}

fn parse_object_or_array_creation(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    p.bump(); // 'new'
    let type_cp = p.checkpoint();
    super::types::parse_type_base(p);
    if p.peek() == SyntaxKind::BracketOpen {
        super::types::parse_array_rank_specifier(p, true);
        p.start_node_at(type_cp, SyntaxKind::ArrayType);
        p.finish_node();
        if p.peek() == SyntaxKind::BraceOpen {
            parse_array_initializer(p);
        }
        p.start_node_at(cp, SyntaxKind::ArrayCreationExpression);
        p.finish_node();
        return;
    }
    if p.peek() == SyntaxKind::ParenOpen {
        parse_argument_list(p);
    }
    p.start_node_at(cp, SyntaxKind::ObjectCreationExpression);
    p.finish_node();
}

fn parse_array_initializer(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ArrayInitializer);
    p.bump(); // '{'
    while p.peek() != SyntaxKind::BraceClose && !p.should_stop() {
        if p.peek() == SyntaxKind::BraceOpen {
            parse_array_initializer(p);
        } else {
            super::expressions::parse_expression(p);
        }
        if p.peek() == SyntaxKind::Comma {
            p.bump();
        } else {
            break;
        }
    }
    p.expect(SyntaxKind::BraceClose, "'}'");
    p.finish_node();
}

pub(crate) fn parse_argument_list(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ArgumentList);
    p.bump(); // '('
    while p.peek() != SyntaxKind::ParenClose && !p.should_stop() {
        parse_argument(p);
        if p.peek() == SyntaxKind::Comma {
            p.bump();
        } else {
            break;
        }
    }
    p.expect(SyntaxKind::ParenClose, "')'");
    p.finish_node();
}

fn parse_bracketed_argument_list(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::BracketedArgumentList);
    p.bump(); // '['
    parse_argument(p);
    while p.peek() == SyntaxKind::Comma {
        p.bump();
        parse_argument(p);
    }
    p.expect(SyntaxKind::BracketClose, "']'");
    p.finish_node();
}

fn parse_argument(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::Argument);
    if matches!(p.peek(), SyntaxKind::KwRef | SyntaxKind::KwOut) {
        p.bump();
    }
    super::expressions::parse_expression(p);
    p.finish_node();
}
