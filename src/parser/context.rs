//! The parser's context stack: grammatical scope tags that drive modifier validity
//! and error-recovery synchronization.

use std::cell::RefCell;
use std::rc::Rc;

use super::cst::{SyntaxKind, TokenSet, token_sets};

/// A grammatical scope the parser is currently inside. Pushed on entry to a
/// production, popped on every exit path (including recovery) via [`ContextGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserContext {
    Namespace,
    Type,
    Delegate,
    ParameterList,
    AttributeList,
    EnumMember,
    Property,
    Indexer,
    Event,
    Constant,
    Statement,
}

impl ParserContext {
    /// The token set that legitimately begins or continues this context, used by
    /// `is_token_valid_in_preceding_context` to find a recovery sync point.
    fn valid_tokens(self) -> TokenSet {
        match self {
            ParserContext::Namespace => token_sets::NAMESPACE_MEMBER_START.union(TokenSet::new(&[
                SyntaxKind::KwUsing,
                SyntaxKind::KwNamespace,
                SyntaxKind::BracketOpen,
            ])),
            ParserContext::Type => token_sets::MEMBER_MODIFIER_OR_START
                .union(TokenSet::new(&[SyntaxKind::Tilde, SyntaxKind::BraceClose])),
            ParserContext::Delegate => TokenSet::new(&[SyntaxKind::Semicolon]),
            ParserContext::ParameterList => {
                token_sets::TYPE_START.union(TokenSet::new(&[
                    SyntaxKind::Comma,
                    SyntaxKind::ParenClose,
                    SyntaxKind::KwRef,
                    SyntaxKind::KwOut,
                    SyntaxKind::KwParams,
                ]))
            }
            ParserContext::AttributeList => {
                TokenSet::new(&[SyntaxKind::Comma, SyntaxKind::BracketClose])
            }
            ParserContext::EnumMember => {
                TokenSet::new(&[SyntaxKind::Comma, SyntaxKind::BraceClose, SyntaxKind::Identifier])
            }
            ParserContext::Property | ParserContext::Indexer => TokenSet::new(&[
                SyntaxKind::Identifier,
                SyntaxKind::BraceClose,
                SyntaxKind::BraceOpen,
            ]),
            ParserContext::Event => TokenSet::new(&[SyntaxKind::Identifier, SyntaxKind::BraceClose]),
            ParserContext::Constant => {
                TokenSet::new(&[SyntaxKind::Comma, SyntaxKind::Semicolon, SyntaxKind::Equals])
            }
            ParserContext::Statement => token_sets::STATEMENT_START
                .union(TokenSet::new(&[SyntaxKind::BraceClose])),
        }
    }
}

/// Stack of nested [`ParserContext`]s. Pushes are made through [`ContextStack::enter`],
/// which returns a guard that pops on drop so every exit path - including early
/// returns during error recovery - restores the stack correctly.
///
/// The stack itself lives behind `Rc<RefCell<_>>` rather than being borrowed
/// directly: a [`ContextGuard`] needs to outlive arbitrary further calls on the
/// owning `Parser` (the whole point of entering a context before recursing into
/// nested productions), and a guard holding a plain `&mut` into the parser would
/// make it impossible to pass the parser to anything else while the guard is alive.
#[derive(Debug, Default, Clone)]
pub struct ContextStack {
    stack: Rc<RefCell<Vec<ParserContext>>>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self { stack: Rc::new(RefCell::new(Vec::new())) }
    }

    pub fn current(&self) -> Option<ParserContext> {
        self.stack.borrow().last().copied()
    }

    /// True if `kind` legitimately begins or continues any context currently on the
    /// stack, walking from innermost to outermost.
    pub fn is_token_valid_in_preceding_context(&self, kind: SyntaxKind) -> bool {
        self.stack
            .borrow()
            .iter()
            .rev()
            .any(|ctx| ctx.valid_tokens().contains(kind))
    }

    #[must_use = "the context is popped when the guard is dropped"]
    pub fn enter(&self, context: ParserContext) -> ContextGuard {
        self.stack.borrow_mut().push(context);
        ContextGuard { stack: Rc::clone(&self.stack) }
    }
}

/// RAII scope guard for a pushed [`ParserContext`]. Dropping it pops the context,
/// regardless of which exit path (normal return, early return, recovery) triggered it.
pub struct ContextGuard {
    stack: Rc<RefCell<Vec<ParserContext>>>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        // An empty pop is a logic error elsewhere, but per the spec's RAII-equivalent
        // note a stack underflow must still leave `current()` at `None`, not panic.
        self.stack.borrow_mut().pop();
    }
}
