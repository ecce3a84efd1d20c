//! Top-level grammar: compilation unit, using directives, namespaces, attributes.

use crate::parser::context::ParserContext;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::NAMESPACE_MEMBER_START;
use crate::parser::cst::ContextualKeyword;
use crate::parser::Parser;

use super::types::parse_qualified_name;

pub(crate) fn parse_compilation_unit(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::CompilationUnit);
    let _ctx = p.enter_context(ParserContext::Namespace);
    parse_using_directives(p);
    parse_namespace_body(p);
    p.finish_node();
}

pub(crate) fn parse_using_directives(p: &mut Parser<'_>) {
    while p.peek() == SyntaxKind::KwUsing {
        parse_using_directive(p);
    }
}

fn parse_using_directive(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::UsingDirective);
    p.bump(); // 'using'
    if p.peek() == SyntaxKind::Identifier && p.peek_nth(1) == SyntaxKind::Equals {
        p.bump(); // alias
        p.bump(); // '='
    }
    parse_qualified_name(p);
    p.expect(SyntaxKind::Semicolon, "';'");
    p.finish_node();
}

/// Parses the member list shared by a compilation unit and a namespace body: zero or
/// more namespace/type declarations, until EOF or (for a nested namespace) `}`.
pub(crate) fn parse_namespace_body(p: &mut Parser<'_>) {
    while !p.should_stop() && p.peek() != SyntaxKind::BraceClose {
        parse_namespace_member(p);
    }
}

fn parse_namespace_member(p: &mut Parser<'_>) {
    if p.peek() == SyntaxKind::KwNamespace {
        parse_namespace_declaration(p);
        return;
    }
    if NAMESPACE_MEMBER_START.contains(p.peek())
        || crate::parser::cst::token_sets::MEMBER_MODIFIER_OR_START.contains(p.peek())
    {
        super::structures::parse_type_declaration(p);
        return;
    }
    p.error_recover(
        "The compilation unit or namespace contains an invalid declaration or directive",
        crate::parser::cst::token_sets::DECLARATION_RECOVERY,
    );
}

fn parse_namespace_declaration(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::NamespaceDeclaration);
    p.bump(); // 'namespace'
    parse_qualified_name(p);
    p.expect(SyntaxKind::BraceOpen, "'{'");
    parse_using_directives(p);
    parse_namespace_body(p);
    p.expect(SyntaxKind::BraceClose, "'}'");
    p.finish_node();
}

/// `'[' attribute (',' attribute)* ']'`, repeated for however many bracket groups
/// appear consecutively.
pub(crate) fn parse_attribute_sections(p: &mut Parser<'_>) {
    while p.peek() == SyntaxKind::BracketOpen {
        parse_attribute_section(p);
    }
}

fn parse_attribute_section(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::AttributeSection);
    p.bump(); // '['
    if p.peek() == SyntaxKind::Identifier && p.peek_nth(1) == SyntaxKind::Colon {
        p.start_node(SyntaxKind::AttributeTargetSpecifier);
        let text = p.current_text().to_string();
        let range = p.current_span();
        if !is_valid_attribute_target(&text) {
            p.report_error_at(format!("'{text}' is not a valid attribute target"), range);
        }
        p.bump();
        p.bump();
        p.finish_node();
    }
    parse_attribute(p);
    while p.peek() == SyntaxKind::Comma {
        p.bump();
        if p.peek() == SyntaxKind::BracketClose {
            break;
        }
        parse_attribute(p);
    }
    p.expect(SyntaxKind::BracketClose, "']'");
    p.finish_node();
}

/// `get`/`set`/`add`/`remove` are contextual keywords too, but they're accessor
/// keywords, not attribute targets.
fn is_valid_attribute_target(text: &str) -> bool {
    matches!(
        SyntaxKind::contextual_keyword_text(text),
        Some(
            ContextualKeyword::Assembly
                | ContextualKeyword::Module
                | ContextualKeyword::Field
                | ContextualKeyword::Event
                | ContextualKeyword::Method
                | ContextualKeyword::Param
                | ContextualKeyword::Property
                | ContextualKeyword::Return
                | ContextualKeyword::Type
        )
    )
}

fn parse_attribute(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::Attribute);
    parse_qualified_name(p);
    if p.peek() == SyntaxKind::ParenOpen {
        p.start_node(SyntaxKind::AttributeArgumentList);
        p.bump();
        while p.peek() != SyntaxKind::ParenClose && !p.should_stop() {
            p.start_node(SyntaxKind::AttributeArgument);
            if p.peek() == SyntaxKind::Identifier && p.peek_nth(1) == SyntaxKind::Colon {
                p.bump();
                p.bump();
            }
            super::expressions::parse_expression(p);
            p.finish_node();
            if p.peek() != SyntaxKind::Comma {
                break;
            }
            p.bump();
        }
        p.expect(SyntaxKind::ParenClose, "')'");
        p.finish_node();
    }
    p.finish_node();
}
