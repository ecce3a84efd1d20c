//! Modifier collection and validation, shared by type and member declarations.
//!
//! Modifiers are collected as a flat token run before the declaration shape that
//! follows them is known (a `class` keyword vs. a member name vs. `~`), so
//! collection and validation are split into two passes: [`collect_modifiers`] bumps
//! the run without judging it, then the caller picks the right [`ModifierSubject`]
//! once the shape is clear and calls [`validate_modifiers`].

use rowan::TextRange;

use crate::parser::Parser;
use crate::parser::context::ParserContext;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::MODIFIERS;
use crate::parser::modifiers::{ModifierSubject, is_modifier_valid, is_modifier_valid_for_const_field, modifier_text};

pub(crate) struct CollectedModifier {
    pub(crate) kind: SyntaxKind,
    pub(crate) range: TextRange,
}

pub(crate) fn collect_modifiers(p: &mut Parser<'_>) -> Vec<CollectedModifier> {
    let mut mods = Vec::new();
    while MODIFIERS.contains(p.peek()) {
        let range = p.current_span();
        let kind = p.peek();
        p.bump();
        mods.push(CollectedModifier { kind, range });
    }
    mods
}

fn current_context(p: &Parser<'_>) -> ParserContext {
    p.context.current().unwrap_or(ParserContext::Namespace)
}

pub(crate) fn validate_modifiers(p: &mut Parser<'_>, mods: &[CollectedModifier], subject: ModifierSubject) {
    let context = current_context(p);
    let mut seen: Vec<SyntaxKind> = Vec::new();
    for m in mods {
        if !is_modifier_valid(subject, context, m.kind) {
            p.report_error_at(
                format!("The modifier '{}' is not valid for this item", modifier_text(m.kind)),
                m.range,
            );
        }
        if seen.contains(&m.kind) {
            p.report_error_at(format!("Duplicate '{}' modifier", modifier_text(m.kind)), m.range);
        } else {
            seen.push(m.kind);
        }
    }
}

/// `const` disallows the storage modifiers (`static`/`readonly`/`volatile`); used
/// instead of [`validate_modifiers`] when a field's declarator list is `const`.
pub(crate) fn validate_const_field_modifiers(p: &mut Parser<'_>, mods: &[CollectedModifier]) {
    let context = current_context(p);
    let mut seen: Vec<SyntaxKind> = Vec::new();
    for m in mods {
        if m.kind == SyntaxKind::KwConst {
            continue;
        }
        if !is_modifier_valid_for_const_field(context, m.kind) {
            p.report_error_at(
                format!("'{}' modifier cannot be combined with 'const'", modifier_text(m.kind)),
                m.range,
            );
        }
        if seen.contains(&m.kind) {
            p.report_error_at(format!("Duplicate '{}' modifier", modifier_text(m.kind)), m.range);
        } else {
            seen.push(m.kind);
        }
    }
}
