//! Statement grammar: blocks and every statement form reachable inside one.

use crate::parser::Parser;
use crate::parser::context::ParserContext;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{STATEMENT_START, TYPE_START};

use super::expressions::{at_expression_start, parse_expression};
use super::items::parse_attribute_sections;
use super::types::parse_type;

pub(crate) fn parse_block(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::Block);
    let _ctx = p.enter_context(ParserContext::Statement);
    p.expect(SyntaxKind::BraceOpen, "'{'");
    while p.peek() != SyntaxKind::BraceClose && !p.should_stop() {
        parse_statement(p);
    }
    p.expect(SyntaxKind::BraceClose, "'}'");
    p.finish_node();
}

fn parse_statement(p: &mut Parser<'_>) {
    match p.peek() {
        SyntaxKind::BraceOpen => parse_block(p),
        SyntaxKind::KwIf => parse_if_statement(p),
        SyntaxKind::KwSwitch => parse_switch_statement(p),
        SyntaxKind::KwFor => parse_for_statement(p),
        SyntaxKind::KwForeach => parse_foreach_statement(p),
        SyntaxKind::KwWhile => parse_while_statement(p),
        SyntaxKind::KwDo => parse_do_statement(p),
        SyntaxKind::KwBreak => parse_break_statement(p),
        SyntaxKind::KwContinue => parse_continue_statement(p),
        SyntaxKind::KwGoto => parse_goto_statement(p),
        SyntaxKind::KwReturn => parse_return_statement(p),
        SyntaxKind::KwThrow => parse_throw_statement(p),
        SyntaxKind::KwTry => parse_try_statement(p),
        SyntaxKind::KwChecked => parse_checked_statement(p),
        SyntaxKind::KwUnchecked => parse_unchecked_statement(p),
        SyntaxKind::KwLock => parse_lock_statement(p),
        SyntaxKind::KwUsing => parse_using_statement(p),
        SyntaxKind::KwFixed => parse_fixed_statement(p),
        SyntaxKind::KwUnsafe => parse_unsafe_statement(p),
        SyntaxKind::Semicolon => {
            p.start_node(SyntaxKind::EmptyStatement);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::Identifier if p.peek_nth(1) == SyntaxKind::Colon => parse_labeled_statement(p),
        _ if is_local_declaration_start(p) => parse_local_declaration_statement(p),
        _ if at_expression_start(p) => {
            p.start_node(SyntaxKind::ExpressionStatement);
            parse_expression(p);
            p.expect(SyntaxKind::Semicolon, "';'");
            p.finish_node();
        }
        _ => p.error_recover(
            "expected a statement",
            STATEMENT_START.union(crate::parser::cst::TokenSet::new(&[SyntaxKind::BraceClose])),
        ),
    }
}

/// `const`, or a type reference followed by an identifier, starts a local variable
/// declaration rather than an expression statement. `Type Identifier` can't appear
/// as a standalone expression, so seeing it here is unambiguous.
fn is_local_declaration_start(p: &mut Parser<'_>) -> bool {
    if p.peek() == SyntaxKind::KwConst {
        return true;
    }
    TYPE_START.contains(p.peek()) && p.peek_nth(1) == SyntaxKind::Identifier
}

fn parse_local_declaration_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::LocalDeclarationStatement);
    let is_const = p.peek() == SyntaxKind::KwConst;
    if is_const {
        p.bump();
    }
    parse_variable_declaration(p);
    p.expect(SyntaxKind::Semicolon, "';'");
    p.finish_node();
}

fn parse_variable_declaration(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::VariableDeclaration);
    parse_type(p);
    parse_local_variable_declarator(p);
    while p.peek() == SyntaxKind::Comma {
        p.bump();
        parse_local_variable_declarator(p);
    }
    p.finish_node();
}

fn parse_local_variable_declarator(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::VariableDeclarator);
    p.expect_identifier();
    if p.peek() == SyntaxKind::Equals {
        p.bump();
        parse_expression(p);
    }
    p.finish_node();
}

fn parse_if_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::IfStatement);
    p.bump(); // 'if'
    p.expect(SyntaxKind::ParenOpen, "'('");
    parse_expression(p);
    p.expect(SyntaxKind::ParenClose, "')'");
    parse_statement(p);
    if p.peek() == SyntaxKind::KwElse {
        p.start_node(SyntaxKind::ElseClause);
        p.bump();
        parse_statement(p);
        p.finish_node();
    }
    p.finish_node();
}

fn parse_switch_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::SwitchStatement);
    p.bump(); // 'switch'
    p.expect(SyntaxKind::ParenOpen, "'('");
    parse_expression(p);
    p.expect(SyntaxKind::ParenClose, "')'");
    p.expect(SyntaxKind::BraceOpen, "'{'");
    while p.peek() != SyntaxKind::BraceClose && !p.should_stop() {
        parse_switch_section(p);
    }
    p.expect(SyntaxKind::BraceClose, "'}'");
    p.finish_node();
}

fn parse_switch_section(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::SwitchSection);
    loop {
        match p.peek() {
            SyntaxKind::KwCase => {
                p.start_node(SyntaxKind::CaseSwitchLabel);
                p.bump();
                parse_expression(p);
                p.expect(SyntaxKind::Colon, "':'");
                p.finish_node();
            }
            SyntaxKind::KwDefault => {
                p.start_node(SyntaxKind::DefaultSwitchLabel);
                p.bump();
                p.expect(SyntaxKind::Colon, "':'");
                p.finish_node();
            }
            _ => break,
        }
    }
    while !matches!(p.peek(), SyntaxKind::KwCase | SyntaxKind::KwDefault | SyntaxKind::BraceClose)
        && !p.should_stop()
    {
        parse_statement(p);
    }
    p.finish_node();
}

fn parse_for_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ForStatement);
    p.bump(); // 'for'
    p.expect(SyntaxKind::ParenOpen, "'('");
    if p.peek() != SyntaxKind::Semicolon {
        p.start_node(SyntaxKind::ForInitializer);
        if is_local_declaration_start(p) {
            parse_variable_declaration(p);
        } else {
            parse_expression(p);
            while p.peek() == SyntaxKind::Comma {
                p.bump();
                parse_expression(p);
            }
        }
        p.finish_node();
    }
    p.expect(SyntaxKind::Semicolon, "';'");
    if p.peek() != SyntaxKind::Semicolon {
        parse_expression(p);
    }
    p.expect(SyntaxKind::Semicolon, "';'");
    if p.peek() != SyntaxKind::ParenClose {
        parse_expression(p);
        while p.peek() == SyntaxKind::Comma {
            p.bump();
            parse_expression(p);
        }
    }
    p.expect(SyntaxKind::ParenClose, "')'");
    parse_statement(p);
    p.finish_node();
}

fn parse_foreach_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ForEachStatement);
    p.bump(); // 'foreach'
    p.expect(SyntaxKind::ParenOpen, "'('");
    parse_type(p);
    p.expect_identifier();
    p.expect(SyntaxKind::KwIn, "'in'");
    parse_expression(p);
    p.expect(SyntaxKind::ParenClose, "')'");
    parse_statement(p);
    p.finish_node();
}

fn parse_while_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::WhileStatement);
    p.bump(); // 'while'
    p.expect(SyntaxKind::ParenOpen, "'('");
    parse_expression(p);
    p.expect(SyntaxKind::ParenClose, "')'");
    parse_statement(p);
    p.finish_node();
}

fn parse_do_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::DoStatement);
    p.bump(); // 'do'
    parse_statement(p);
    p.expect(SyntaxKind::KwWhile, "'while'");
    p.expect(SyntaxKind::ParenOpen, "'('");
    parse_expression(p);
    p.expect(SyntaxKind::ParenClose, "')'");
    p.expect(SyntaxKind::Semicolon, "';'");
    p.finish_node();
}

fn parse_break_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::BreakStatement);
    p.bump();
    p.expect(SyntaxKind::Semicolon, "';'");
    p.finish_node();
}

fn parse_continue_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ContinueStatement);
    p.bump();
    p.expect(SyntaxKind::Semicolon, "';'");
    p.finish_node();
}

fn parse_goto_statement(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    p.bump(); // 'goto'
    match p.peek() {
        SyntaxKind::KwCase => {
            p.bump();
            parse_expression(p);
            p.expect(SyntaxKind::Semicolon, "';'");
            p.start_node_at(cp, SyntaxKind::GotoCaseStatement);
            p.finish_node();
        }
        SyntaxKind::KwDefault => {
            p.bump();
            p.expect(SyntaxKind::Semicolon, "';'");
            p.start_node_at(cp, SyntaxKind::GotoDefaultStatement);
            p.finish_node();
        }
        _ => {
            p.expect_identifier();
            p.expect(SyntaxKind::Semicolon, "';'");
            p.start_node_at(cp, SyntaxKind::GotoStatement);
            p.finish_node();
        }
    }
}

fn parse_return_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ReturnStatement);
    p.bump(); // 'return'
    if at_expression_start(p) {
        parse_expression(p);
    }
    p.expect(SyntaxKind::Semicolon, "';'");
    p.finish_node();
}

fn parse_throw_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ThrowStatement);
    p.bump(); // 'throw'
    if at_expression_start(p) {
        parse_expression(p);
    }
    p.expect(SyntaxKind::Semicolon, "';'");
    p.finish_node();
}

fn parse_try_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::TryStatement);
    p.bump(); // 'try'
    parse_block(p);
    while p.peek() == SyntaxKind::KwCatch {
        p.start_node(SyntaxKind::CatchClause);
        p.bump();
        if p.peek() == SyntaxKind::ParenOpen {
            p.start_node(SyntaxKind::CatchDeclaration);
            p.bump();
            parse_type(p);
            if p.peek() == SyntaxKind::Identifier {
                p.bump();
            }
            p.expect(SyntaxKind::ParenClose, "')'");
            p.finish_node();
        }
        parse_block(p);
        p.finish_node();
    }
    if p.peek() == SyntaxKind::KwFinally {
        p.start_node(SyntaxKind::FinallyClause);
        p.bump();
        parse_block(p);
        p.finish_node();
    }
    p.finish_node();
}

fn parse_checked_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::CheckedStatement);
    p.bump();
    parse_block(p);
    p.finish_node();
}

fn parse_unchecked_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::UncheckedStatement);
    p.bump();
    parse_block(p);
    p.finish_node();
}

fn parse_lock_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::LockStatement);
    p.bump(); // 'lock'
    p.expect(SyntaxKind::ParenOpen, "'('");
    parse_expression(p);
    p.expect(SyntaxKind::ParenClose, "')'");
    parse_statement(p);
    p.finish_node();
}

fn parse_using_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::UsingStatement);
    p.bump(); // 'using'
    p.expect(SyntaxKind::ParenOpen, "'('");
    p.start_node(SyntaxKind::ForInitializer);
    if is_local_declaration_start(p) {
        parse_variable_declaration(p);
    } else {
        parse_expression(p);
    }
    p.finish_node();
    p.expect(SyntaxKind::ParenClose, "')'");
    parse_statement(p);
    p.finish_node();
}

fn parse_fixed_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::FixedStatement);
    p.bump(); // 'fixed'
    p.expect(SyntaxKind::ParenOpen, "'('");
    parse_variable_declaration(p);
    p.expect(SyntaxKind::ParenClose, "')'");
    parse_statement(p);
    p.finish_node();
}

fn parse_unsafe_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::UnsafeStatement);
    p.bump(); // 'unsafe'
    parse_block(p);
    p.finish_node();
}

fn parse_labeled_statement(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::LabeledStatement);
    p.bump(); // identifier
    p.bump(); // ':'
    parse_statement(p);
    p.finish_node();
}
