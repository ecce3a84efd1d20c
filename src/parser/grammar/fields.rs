//! Type-member grammar: fields, properties, indexers, events, methods,
//! constructors, destructors, operators, and parameter lists.

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{TYPE_DECL_START, TYPE_START};
use crate::parser::modifiers::ModifierSubject;

use super::items::parse_attribute_sections;
use super::validation;

pub(crate) fn parse_member(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    parse_attribute_sections(p);
    let mods = validation::collect_modifiers(p);

    if p.peek() == SyntaxKind::Tilde {
        validation::validate_modifiers(p, &mods, ModifierSubject::Destructor);
        p.bump(); // '~'
        p.expect_identifier();
        parse_parameter_list(p);
        parse_method_body(p);
        p.start_node_at(cp, SyntaxKind::DestructorDeclaration);
        p.finish_node();
        return;
    }

    if matches!(p.peek(), SyntaxKind::KwImplicit | SyntaxKind::KwExplicit) {
        validation::validate_modifiers(p, &mods, ModifierSubject::Operator);
        p.bump(); // 'implicit' / 'explicit'
        p.expect(SyntaxKind::KwOperator, "'operator'");
        super::types::parse_type(p);
        parse_parameter_list(p);
        parse_method_body(p);
        p.start_node_at(cp, SyntaxKind::ConversionOperatorDeclaration);
        p.finish_node();
        return;
    }

    if p.peek() == SyntaxKind::KwEvent {
        parse_event_member(p, cp, &mods);
        return;
    }

    if p.peek() == SyntaxKind::Identifier && p.peek_nth(1) == SyntaxKind::ParenOpen {
        validation::validate_modifiers(p, &mods, ModifierSubject::Method);
        p.bump(); // constructor name
        parse_parameter_list(p);
        if p.peek() == SyntaxKind::Colon {
            parse_constructor_initializer(p);
        }
        parse_method_body(p);
        p.start_node_at(cp, SyntaxKind::ConstructorDeclaration);
        p.finish_node();
        return;
    }

    if TYPE_DECL_START.contains(p.peek()) {
        super::structures::parse_nested_type_declaration(p, cp, &mods);
        return;
    }

    if !TYPE_START.contains(p.peek()) {
        p.error_recover(
            "Expected declaration",
            crate::parser::cst::token_sets::DECLARATION_RECOVERY,
        );
        return;
    }

    super::types::parse_type(p);

    if p.peek() == SyntaxKind::KwOperator {
        validation::validate_modifiers(p, &mods, ModifierSubject::Operator);
        p.bump();
        parse_overloadable_operator(p);
        parse_parameter_list(p);
        parse_method_body(p);
        p.start_node_at(cp, SyntaxKind::OperatorDeclaration);
        p.finish_node();
        return;
    }

    if p.peek() == SyntaxKind::Identifier && p.peek_nth(1) == SyntaxKind::Dot {
        parse_explicit_interface_specifier(p);
    }

    if p.peek() == SyntaxKind::KwThis {
        validation::validate_modifiers(p, &mods, ModifierSubject::PropertyOrIndexer);
        p.bump(); // 'this'
        parse_bracketed_parameter_list(p);
        parse_accessor_list(p);
        p.start_node_at(cp, SyntaxKind::IndexerDeclaration);
        p.finish_node();
        return;
    }

    if p.peek() != SyntaxKind::Identifier {
        p.report_error("Invalid member declaration");
        p.start_node_at(cp, SyntaxKind::IncompleteMember);
        p.finish_node();
        return;
    }

    match p.peek_nth(1) {
        SyntaxKind::ParenOpen => {
            validation::validate_modifiers(p, &mods, ModifierSubject::Method);
            p.bump(); // name
            parse_parameter_list(p);
            parse_method_body(p);
            p.start_node_at(cp, SyntaxKind::MethodDeclaration);
        }
        SyntaxKind::BraceOpen => {
            validation::validate_modifiers(p, &mods, ModifierSubject::PropertyOrIndexer);
            p.bump(); // name
            parse_accessor_list(p);
            p.start_node_at(cp, SyntaxKind::PropertyDeclaration);
        }
        _ => {
            let is_const = mods.iter().any(|m| m.kind == SyntaxKind::KwConst);
            if is_const {
                validation::validate_const_field_modifiers(p, &mods);
            } else {
                validation::validate_modifiers(p, &mods, ModifierSubject::Field);
            }
            let _ctx = is_const.then(|| p.enter_context(crate::parser::context::ParserContext::Constant));
            let decl_cp = p.checkpoint();
            p.bump(); // name
            parse_variable_declarator_rest(p);
            p.start_node_at(decl_cp, SyntaxKind::VariableDeclarator);
            p.finish_node();
            while p.peek() == SyntaxKind::Comma {
                p.bump();
                parse_variable_declarator(p);
            }
            p.expect(SyntaxKind::Semicolon, "';'");
            p.start_node_at(cp, SyntaxKind::FieldDeclaration);
        }
    }
    p.finish_node();
}

/// Interface bodies only admit members without a body (or with `;`); most shapes are
/// shared with [`parse_member`], but constructors/destructors/fields have no place
/// in an interface, so this is a narrower dispatch.
pub(crate) fn parse_interface_member(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    parse_attribute_sections(p);
    let mods = validation::collect_modifiers(p);
    validation::validate_modifiers(p, &mods, ModifierSubject::InterfaceMember);

    if !TYPE_START.contains(p.peek()) {
        p.error_recover(
            "Expected declaration",
            crate::parser::cst::token_sets::DECLARATION_RECOVERY,
        );
        return;
    }

    super::types::parse_type(p);

    if p.peek() == SyntaxKind::KwThis {
        p.bump();
        parse_bracketed_parameter_list(p);
        parse_accessor_list(p);
        p.start_node_at(cp, SyntaxKind::IndexerDeclaration);
        p.finish_node();
        return;
    }

    if !p.expect_identifier() {
        p.start_node_at(cp, SyntaxKind::IncompleteMember);
        p.finish_node();
        return;
    }

    if p.peek() == SyntaxKind::ParenOpen {
        parse_parameter_list(p);
        p.expect(SyntaxKind::Semicolon, "';'");
        p.start_node_at(cp, SyntaxKind::MethodDeclaration);
    } else {
        parse_accessor_list(p);
        p.start_node_at(cp, SyntaxKind::PropertyDeclaration);
    }
    p.finish_node();
}

fn parse_method_body(p: &mut Parser<'_>) {
    if p.peek() == SyntaxKind::BraceOpen {
        super::statements::parse_block(p);
    } else {
        p.expect(SyntaxKind::Semicolon, "';'");
    }
}

fn parse_explicit_interface_specifier(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ExplicitInterfaceSpecifier);
    super::types::parse_qualified_name(p);
    p.expect(SyntaxKind::Dot, "'.'");
    p.finish_node();
}

fn parse_overloadable_operator(p: &mut Parser<'_>) {
    const OPERATORS: &[SyntaxKind] = &[
        SyntaxKind::Plus,
        SyntaxKind::Minus,
        SyntaxKind::Bang,
        SyntaxKind::Tilde,
        SyntaxKind::PlusPlus,
        SyntaxKind::MinusMinus,
        SyntaxKind::Star,
        SyntaxKind::Slash,
        SyntaxKind::Percent,
        SyntaxKind::Amp,
        SyntaxKind::Pipe,
        SyntaxKind::Caret,
        SyntaxKind::LtLt,
        SyntaxKind::GtGt,
        SyntaxKind::EqualsEquals,
        SyntaxKind::BangEquals,
        SyntaxKind::Lt,
        SyntaxKind::Gt,
        SyntaxKind::LtEquals,
        SyntaxKind::GtEquals,
        SyntaxKind::KwTrue,
        SyntaxKind::KwFalse,
    ];
    if OPERATORS.contains(&p.peek()) {
        p.bump();
    } else {
        p.report_error("Invalid member declaration");
    }
}

fn parse_constructor_initializer(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ConstructorInitializer);
    p.bump(); // ':'
    if matches!(p.peek(), SyntaxKind::KwThis | SyntaxKind::KwBase) {
        p.bump();
    } else {
        p.report_error("Expected 'base' or 'this'");
    }
    super::atoms::parse_argument_list(p);
    p.finish_node();
}

fn parse_event_member(p: &mut Parser<'_>, cp: rowan::Checkpoint, mods: &[validation::CollectedModifier]) {
    p.bump(); // 'event'
    super::types::parse_type(p);
    p.expect_identifier();
    if p.peek() == SyntaxKind::BraceOpen {
        validation::validate_modifiers(p, mods, ModifierSubject::PropertyOrIndexer);
        parse_event_accessor_list(p);
        p.start_node_at(cp, SyntaxKind::EventDeclaration);
    } else {
        validation::validate_modifiers(p, mods, ModifierSubject::Field);
        while p.peek() == SyntaxKind::Comma {
            p.bump();
            p.expect_identifier();
        }
        p.expect(SyntaxKind::Semicolon, "';'");
        p.start_node_at(cp, SyntaxKind::EventFieldDeclaration);
    }
    p.finish_node();
}

fn parse_event_accessor_list(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::AccessorList);
    p.expect(SyntaxKind::BraceOpen, "'{'");
    while p.peek() != SyntaxKind::BraceClose && !p.should_stop() {
        p.start_node(SyntaxKind::AccessorDeclaration);
        if p.at_contextual(crate::parser::cst::ContextualKeyword::Add)
            || p.at_contextual(crate::parser::cst::ContextualKeyword::Remove)
        {
            p.bump();
        } else {
            p.report_error("A add or remove accessor expected");
        }
        super::statements::parse_block(p);
        p.finish_node();
    }
    p.expect(SyntaxKind::BraceClose, "'}'");
    p.finish_node();
}

fn parse_accessor_list(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::AccessorList);
    p.expect(SyntaxKind::BraceOpen, "'{'");
    while p.peek() != SyntaxKind::BraceClose && !p.should_stop() {
        parse_accessor_declaration(p);
    }
    p.expect(SyntaxKind::BraceClose, "'}'");
    p.finish_node();
}

fn parse_accessor_declaration(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::AccessorDeclaration);
    parse_attribute_sections(p);
    let mods = validation::collect_modifiers(p);
    validation::validate_modifiers(p, &mods, ModifierSubject::PropertyOrIndexer);
    if p.at_contextual(crate::parser::cst::ContextualKeyword::Get)
        || p.at_contextual(crate::parser::cst::ContextualKeyword::Set)
    {
        p.bump();
    } else {
        p.report_error("A get or set accessor expected");
    }
    if p.peek() == SyntaxKind::BraceOpen {
        super::statements::parse_block(p);
    } else {
        p.expect(SyntaxKind::Semicolon, "';'");
    }
    p.finish_node();
}

pub(crate) fn parse_parameter_list(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ParameterList);
    let _ctx = p.enter_context(crate::parser::context::ParserContext::ParameterList);
    p.expect(SyntaxKind::ParenOpen, "'('");
    while p.peek() != SyntaxKind::ParenClose && !p.should_stop() {
        parse_parameter(p);
        if p.peek() == SyntaxKind::Comma {
            p.bump();
        } else {
            break;
        }
    }
    p.expect(SyntaxKind::ParenClose, "')'");
    p.finish_node();
}

fn parse_bracketed_parameter_list(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ParameterList);
    let _ctx = p.enter_context(crate::parser::context::ParserContext::ParameterList);
    p.expect(SyntaxKind::BracketOpen, "'['");
    parse_parameter(p);
    while p.peek() == SyntaxKind::Comma {
        p.bump();
        parse_parameter(p);
    }
    p.expect(SyntaxKind::BracketClose, "']'");
    p.finish_node();
}

fn parse_parameter(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::Parameter);
    parse_attribute_sections(p);
    if matches!(p.peek(), SyntaxKind::KwRef | SyntaxKind::KwOut | SyntaxKind::KwParams) {
        p.bump();
    }
    super::types::parse_type(p);
    p.expect_identifier();
    if p.peek() == SyntaxKind::Equals {
        p.bump();
        super::expressions::parse_expression(p);
    }
    p.finish_node();
}

fn parse_variable_declarator(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::VariableDeclarator);
    p.expect_identifier();
    if p.peek() == SyntaxKind::Equals {
        p.bump();
        super::expressions::parse_expression(p);
    }
    p.finish_node();
}

/// The first declarator's name is bumped by the caller from a checkpoint it keeps,
/// so only the optional initializer remains here.
fn parse_variable_declarator_rest(p: &mut Parser<'_>) {
    if p.peek() == SyntaxKind::Equals {
        p.bump();
        super::expressions::parse_expression(p);
    }
}
