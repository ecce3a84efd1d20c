//! Parser infrastructure for a C#-like object-oriented language.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//! Key design decisions borrowed from rust-analyzer, rnix-parser, and taplo:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: retroactively wrap nodes whose kind isn't known until
//!   after their first child is parsed (binary expressions, nested type declarations)
//! - Explicit recovery sets: per-production sets determine when to bail vs consume diagnostics
//! - A context stack of enclosing grammatical positions, consulted during recovery so an
//!   unexpected token that's valid one level up ends the skip instead of swallowing it
//!
//! # Recovery Strategy
//!
//! The parser is resilient — it always produces a tree. Recovery follows these rules:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. Recovery sets define "synchronization points" per production
//! 4. On recursion limit, remaining input goes into single Error node
//!
//! However, fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub(crate) mod context;
mod cst;
mod lexer;
pub(crate) mod modifiers;
pub(crate) mod token_stream;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod cst_tests;
#[cfg(test)]
mod tests;

pub use cst::{ContextualKeyword, SyntaxKind, SyntaxNode, SyntaxToken, TokenSet};

pub use ast::*;

pub use core::{ParseResult, Parser};

pub use lexer::{LiteralValue, Token, lex, token_text};
