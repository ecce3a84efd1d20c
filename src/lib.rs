//! Lossless lexer and recursive-descent parser for a C#-like object-oriented language.
//!
//! # Example
//!
//! ```
//! use keystone_syntax::parser::{Parser, lex};
//!
//! let source = "class Hello {}";
//! let (tokens, _lex_errors) = lex(source);
//! let result = Parser::new(source, tokens).parse().expect("no fuel limit set");
//! if result.diagnostics.has_errors() {
//!     eprintln!("{}", result.diagnostics.printer(source).render());
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;
pub mod source_text;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity, Suppression};
pub use source_text::SourceText;

/// Errors that can occur while parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, Error>;
