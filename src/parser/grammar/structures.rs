//! Type declarations: class, struct, interface, enum, delegate.

use rowan::Checkpoint;

use crate::parser::Parser;
use crate::parser::context::ParserContext;
use crate::parser::cst::SyntaxKind;
use crate::parser::modifiers::ModifierSubject;

use super::items::parse_attribute_sections;
use super::types::parse_type;
use super::validation::{self, CollectedModifier};

pub(crate) fn parse_type_declaration(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    parse_attribute_sections(p);
    let mods = validation::collect_modifiers(p);
    validation::validate_modifiers(p, &mods, ModifierSubject::Type);
    dispatch_type_declaration(p, cp);
}

/// Entry point used from member position: attributes and modifiers were already
/// collected by the caller (it had to see them before it could tell a nested type
/// declaration apart from a field or method), so only the dispatch on keyword
/// remains.
pub(crate) fn parse_nested_type_declaration(p: &mut Parser<'_>, cp: Checkpoint, mods: &[CollectedModifier]) {
    validation::validate_modifiers(p, mods, ModifierSubject::Type);
    dispatch_type_declaration(p, cp);
}

fn dispatch_type_declaration(p: &mut Parser<'_>, cp: Checkpoint) {
    match p.peek() {
        SyntaxKind::KwClass => parse_class_declaration(p, cp),
        SyntaxKind::KwStruct => parse_struct_declaration(p, cp),
        SyntaxKind::KwInterface => parse_interface_declaration(p, cp),
        SyntaxKind::KwEnum => parse_enum_declaration(p, cp),
        SyntaxKind::KwDelegate => parse_delegate_declaration(p, cp),
        _ => p.error_recover(
            "Expected declaration",
            crate::parser::cst::token_sets::DECLARATION_RECOVERY,
        ),
    }
}

fn parse_base_type_list(p: &mut Parser<'_>) {
    if p.peek() != SyntaxKind::Colon {
        return;
    }
    p.start_node(SyntaxKind::BaseTypeList);
    p.bump();
    parse_type(p);
    while p.peek() == SyntaxKind::Comma {
        p.bump();
        parse_type(p);
    }
    p.finish_node();
}

fn parse_type_body(p: &mut Parser<'_>) {
    p.expect(SyntaxKind::BraceOpen, "'{'");
    let _ctx = p.enter_context(ParserContext::Type);
    while p.peek() != SyntaxKind::BraceClose && !p.should_stop() {
        super::fields::parse_member(p);
    }
    p.expect(SyntaxKind::BraceClose, "'}'");
}

fn parse_class_declaration(p: &mut Parser<'_>, cp: Checkpoint) {
    p.bump(); // 'class'
    p.expect_identifier();
    parse_base_type_list(p);
    parse_type_body(p);
    p.start_node_at(cp, SyntaxKind::ClassDeclaration);
    p.finish_node();
}

fn parse_struct_declaration(p: &mut Parser<'_>, cp: Checkpoint) {
    p.bump(); // 'struct'
    p.expect_identifier();
    parse_base_type_list(p);
    parse_type_body(p);
    p.start_node_at(cp, SyntaxKind::StructDeclaration);
    p.finish_node();
}

fn parse_interface_declaration(p: &mut Parser<'_>, cp: Checkpoint) {
    p.bump(); // 'interface'
    p.expect_identifier();
    parse_base_type_list(p);
    p.expect(SyntaxKind::BraceOpen, "'{'");
    let _ctx = p.enter_context(ParserContext::Type);
    while p.peek() != SyntaxKind::BraceClose && !p.should_stop() {
        super::fields::parse_interface_member(p);
    }
    p.expect(SyntaxKind::BraceClose, "'}'");
    p.start_node_at(cp, SyntaxKind::InterfaceDeclaration);
    p.finish_node();
}

fn parse_enum_declaration(p: &mut Parser<'_>, cp: Checkpoint) {
    p.bump(); // 'enum'
    p.expect_identifier();
    if p.peek() == SyntaxKind::Colon {
        p.bump();
        parse_type(p);
    }
    p.expect(SyntaxKind::BraceOpen, "'{'");
    let _ctx = p.enter_context(ParserContext::EnumMember);
    while p.peek() != SyntaxKind::BraceClose && !p.should_stop() {
        parse_enum_member(p);
        if p.peek() == SyntaxKind::Comma {
            p.bump();
        } else {
            break;
        }
    }
    p.expect(SyntaxKind::BraceClose, "'}'");
    p.start_node_at(cp, SyntaxKind::EnumDeclaration);
    p.finish_node();
}

fn parse_enum_member(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::EnumMemberDeclaration);
    parse_attribute_sections(p);
    p.expect_identifier();
    if p.peek() == SyntaxKind::Equals {
        p.bump();
        super::expressions::parse_expression(p);
    }
    p.finish_node();
}

fn parse_delegate_declaration(p: &mut Parser<'_>, cp: Checkpoint) {
    p.bump(); // 'delegate'
    let _ctx = p.enter_context(ParserContext::Delegate);
    parse_type(p);
    p.expect_identifier();
    super::fields::parse_parameter_list(p);
    p.expect(SyntaxKind::Semicolon, "';'");
    p.start_node_at(cp, SyntaxKind::DelegateDeclaration);
    p.finish_node();
}
