//! Grammar productions for the C#-like language, implemented as an extension of
//! `Parser`. Each submodule owns one grammatical layer:
//!
//! - `items`: compilation unit, using directives, namespaces
//! - `structures`: type declarations (class/struct/interface/enum/delegate)
//! - `fields`: type members (fields, properties, methods, constructors, ...)
//! - `statements`: statement forms
//! - `expressions`: Pratt-style expression parsing
//! - `atoms`: primary (non-recursive-precedence) expressions
//! - `validation`: modifier and declaration-shape validation

mod atoms;
mod expressions;
mod fields;
mod items;
mod statements;
mod structures;
mod types;
mod validation;

use super::core::Parser;

/// Entry point: parses an entire source file as a `CompilationUnit`.
pub(super) fn compilation_unit(p: &mut Parser<'_>) {
    items::parse_compilation_unit(p);
}
