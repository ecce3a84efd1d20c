use crate::parser::cst::token_sets::*;
use crate::parser::cst::{ContextualKeyword, KLang, SyntaxKind::*, TokenSet};
use rowan::Language;

#[test]
fn token_set_contains() {
    let set = TokenSet::new(&[ParenOpen, ParenClose, Star]);
    assert!(set.contains(ParenOpen));
    assert!(set.contains(ParenClose));
    assert!(set.contains(Star));
    assert!(!set.contains(Plus));
    assert!(!set.contains(Colon));
}

#[test]
fn token_set_union() {
    let a = TokenSet::new(&[ParenOpen, ParenClose]);
    let b = TokenSet::new(&[Star, Plus]);
    let c = a.union(b);
    assert!(c.contains(ParenOpen));
    assert!(c.contains(ParenClose));
    assert!(c.contains(Star));
    assert!(c.contains(Plus));
    assert!(!c.contains(Colon));
}

#[test]
fn token_set_single() {
    let set = TokenSet::single(Colon);
    assert!(set.contains(Colon));
    assert!(!set.contains(ParenOpen));
}

#[test]
fn token_set_covers_node_kinds_too() {
    // The bitset must be wide enough for node kinds, not just the lexer's token range.
    let set = TokenSet::single(ErrorExpression);
    assert!(set.contains(ErrorExpression));
    assert!(!set.contains(CastExpression));
}

#[test]
fn token_set_debug() {
    let set = TokenSet::new(&[ParenOpen, Star, Plus]);
    let debug_str = format!("{:?}", set);
    assert!(debug_str.contains("ParenOpen"));
    assert!(debug_str.contains("Star"));
    assert!(debug_str.contains("Plus"));
}

#[test]
fn token_set_empty_debug() {
    let set = TokenSet::EMPTY;
    let debug_str = format!("{:?}", set);
    assert_eq!(debug_str, "{}");
}

#[test]
fn is_keyword_covers_exactly_the_keyword_block() {
    assert!(KwClass.is_keyword());
    assert!(KwWhile.is_keyword());
    assert!(!ParenOpen.is_keyword());
    assert!(!Identifier.is_keyword());
    assert!(!CompilationUnit.is_keyword());
}

#[test]
fn is_trivia() {
    assert!(Whitespace.is_trivia());
    assert!(EndOfLine.is_trivia());
    assert!(SingleLineComment.is_trivia());
    assert!(MultiLineComment.is_trivia());
    assert!(!ParenOpen.is_trivia());
    assert!(!Error.is_trivia());
}

#[test]
fn is_error() {
    assert!(Error.is_error());
    assert!(Unknown.is_error());
    assert!(!ParenOpen.is_error());
    assert!(!Identifier.is_error());
    assert!(!Whitespace.is_error());
}

#[test]
fn contextual_keyword_text_matches_known_identifiers_only() {
    use super::cst::SyntaxKind::contextual_keyword_text;
    assert_eq!(contextual_keyword_text("get"), Some(ContextualKeyword::Get));
    assert_eq!(
        contextual_keyword_text("property"),
        Some(ContextualKeyword::Property)
    );
    assert_eq!(contextual_keyword_text("class"), None);
    assert_eq!(contextual_keyword_text("whatever"), None);
}

#[test]
fn klang_roundtrip() {
    for kind in [ParenOpen, ParenClose, Star, Plus, Identifier, Error, Whitespace, ClassDeclaration] {
        let raw = KLang::kind_to_raw(kind);
        let back = KLang::kind_from_raw(raw);
        assert_eq!(kind, back);
    }
}

#[test]
fn modifiers_excludes_declaration_keywords() {
    assert!(MODIFIERS.contains(KwStatic));
    assert!(MODIFIERS.contains(KwConst));
    assert!(!MODIFIERS.contains(KwClass));
    assert!(!MODIFIERS.contains(Identifier));
}

#[test]
fn type_start_includes_predefined_types_and_identifiers() {
    assert!(TYPE_START.contains(KwInt));
    assert!(TYPE_START.contains(KwVoid));
    assert!(TYPE_START.contains(Identifier));
    assert!(!TYPE_START.contains(KwClass));
}

#[test]
fn type_decl_start_is_the_five_declaration_keywords() {
    for kw in [KwClass, KwStruct, KwInterface, KwEnum, KwDelegate] {
        assert!(TYPE_DECL_START.contains(kw));
    }
    assert!(!TYPE_DECL_START.contains(KwNamespace));
}

#[test]
fn namespace_member_start_adds_namespace_to_type_decl_start() {
    assert!(NAMESPACE_MEMBER_START.contains(KwNamespace));
    assert!(NAMESPACE_MEMBER_START.contains(KwClass));
}

#[test]
fn expr_first_covers_literals_prefixes_and_predefined_types() {
    assert!(EXPR_FIRST.contains(NumericLiteral));
    assert!(EXPR_FIRST.contains(StringLiteral));
    assert!(EXPR_FIRST.contains(Bang));
    assert!(EXPR_FIRST.contains(PlusPlus));
    assert!(EXPR_FIRST.contains(KwInt));
    assert!(!EXPR_FIRST.contains(Semicolon));
}

#[test]
fn statement_start_is_a_superset_of_expr_first_and_type_start() {
    assert!(STATEMENT_START.contains(KwIf));
    assert!(STATEMENT_START.contains(Semicolon));
    assert!(STATEMENT_START.contains(KwConst));
    for kind in [NumericLiteral, Identifier, KwInt] {
        assert!(STATEMENT_START.contains(kind));
    }
}

#[test]
fn declaration_recovery_includes_brace_close_and_member_starts() {
    assert!(DECLARATION_RECOVERY.contains(BraceClose));
    assert!(DECLARATION_RECOVERY.contains(KwPublic));
    assert!(DECLARATION_RECOVERY.contains(Tilde));
    assert!(DECLARATION_RECOVERY.contains(BracketOpen));
    assert!(!DECLARATION_RECOVERY.contains(Semicolon));
}
