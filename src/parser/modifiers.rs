//! Per-declaration-kind modifier validity tables.
//!
//! Each declaration kind names the modifiers it accepts in a given enclosing
//! [`ParserContext`]. `new` is handled separately per the spec's adopted resolution:
//! valid for any member whose enclosing context is not `Namespace` (the surveyed
//! sources disagreed on this across revisions; this is the most permissive coherent
//! reading).

use super::context::ParserContext;
use super::cst::SyntaxKind;

/// The kind of declaration a modifier list is attached to, as needed to pick the
/// right validity table. Distinct from `DeclarationKind` in `ast.rs`, which also
/// covers declarations with no modifiers of their own (e.g. `UsingDirective`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierSubject {
    Field,
    Method,
    PropertyOrIndexer,
    Destructor,
    Operator,
    InterfaceMember,
    Type,
}

/// True if `modifier` is permitted on `subject` declared inside `context`.
pub fn is_modifier_valid(subject: ModifierSubject, context: ParserContext, modifier: SyntaxKind) -> bool {
    if modifier == SyntaxKind::KwNew {
        return context != ParserContext::Namespace;
    }

    let allowed: &[SyntaxKind] = match subject {
        ModifierSubject::Field => &[
            SyntaxKind::KwPublic,
            SyntaxKind::KwProtected,
            SyntaxKind::KwInternal,
            SyntaxKind::KwPrivate,
            SyntaxKind::KwStatic,
            SyntaxKind::KwReadonly,
            SyntaxKind::KwVolatile,
            SyntaxKind::KwUnsafe,
        ],
        ModifierSubject::Method => &[
            SyntaxKind::KwPublic,
            SyntaxKind::KwProtected,
            SyntaxKind::KwInternal,
            SyntaxKind::KwPrivate,
            SyntaxKind::KwStatic,
            SyntaxKind::KwVirtual,
            SyntaxKind::KwOverride,
            SyntaxKind::KwAbstract,
            SyntaxKind::KwSealed,
            SyntaxKind::KwExtern,
            SyntaxKind::KwUnsafe,
        ],
        ModifierSubject::PropertyOrIndexer => &[
            SyntaxKind::KwPublic,
            SyntaxKind::KwProtected,
            SyntaxKind::KwInternal,
            SyntaxKind::KwPrivate,
            SyntaxKind::KwStatic,
            SyntaxKind::KwVirtual,
            SyntaxKind::KwOverride,
            SyntaxKind::KwAbstract,
            SyntaxKind::KwSealed,
            SyntaxKind::KwExtern,
            SyntaxKind::KwUnsafe,
        ],
        ModifierSubject::Destructor => &[SyntaxKind::KwExtern],
        ModifierSubject::Operator => &[SyntaxKind::KwPublic, SyntaxKind::KwStatic, SyntaxKind::KwUnsafe, SyntaxKind::KwExtern],
        ModifierSubject::InterfaceMember => &[
            SyntaxKind::KwPublic,
            SyntaxKind::KwProtected,
            SyntaxKind::KwInternal,
            SyntaxKind::KwPrivate,
            SyntaxKind::KwUnsafe,
        ],
        ModifierSubject::Type => &[
            SyntaxKind::KwPublic,
            SyntaxKind::KwProtected,
            SyntaxKind::KwInternal,
            SyntaxKind::KwPrivate,
            SyntaxKind::KwStatic,
            SyntaxKind::KwSealed,
            SyntaxKind::KwAbstract,
            SyntaxKind::KwUnsafe,
        ],
    };

    allowed.contains(&modifier)
}

/// `field` is `const`: storage modifiers (`static`/`readonly`/`volatile`) are
/// disallowed alongside `const`, per the spec's field rule.
pub fn is_modifier_valid_for_const_field(context: ParserContext, modifier: SyntaxKind) -> bool {
    if matches!(
        modifier,
        SyntaxKind::KwStatic | SyntaxKind::KwReadonly | SyntaxKind::KwVolatile
    ) {
        return false;
    }
    is_modifier_valid(ModifierSubject::Field, context, modifier)
}

pub fn modifier_text(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::KwPublic => "public",
        SyntaxKind::KwProtected => "protected",
        SyntaxKind::KwInternal => "internal",
        SyntaxKind::KwPrivate => "private",
        SyntaxKind::KwStatic => "static",
        SyntaxKind::KwVirtual => "virtual",
        SyntaxKind::KwOverride => "override",
        SyntaxKind::KwAbstract => "abstract",
        SyntaxKind::KwSealed => "sealed",
        SyntaxKind::KwNew => "new",
        SyntaxKind::KwReadonly => "readonly",
        SyntaxKind::KwVolatile => "volatile",
        SyntaxKind::KwExtern => "extern",
        SyntaxKind::KwUnsafe => "unsafe",
        SyntaxKind::KwConst => "const",
        _ => "modifier",
    }
}
