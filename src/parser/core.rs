//! Parser state machine and low-level operations.
//!
//! Trivia tokens (whitespace, comments) are buffered and flushed as leading trivia when
//! starting a new node. This gives predictable trivia attachment without backtracking.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::ast::CompilationUnit;
use super::context::{ContextGuard, ContextStack, ParserContext};
use super::cst::{SyntaxKind, SyntaxNode, TokenSet};
use super::lexer::{Token, token_text};
use super::token_stream::{RestorePoint, TokenStream};
use crate::diagnostics::{Diagnostics, Suppression};

use crate::Error;

#[derive(Debug)]
pub struct ParseResult {
    pub compilation_unit: CompilationUnit,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) stream: TokenStream,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) context: ContextStack,
    pub(super) depth: u32,
    last_diagnostic_pos: Option<TextSize>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            stream: TokenStream::new(tokens),
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            context: ContextStack::new(),
            depth: 0,
            last_diagnostic_pos: None,
            debug_fuel: std::cell::Cell::new(256),
            exec_fuel_initial: None,
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_initial = limit;
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<ParseResult, Error> {
        super::grammar::compilation_unit(&mut self);
        let (cst, diagnostics, exec_fuel_consumed) = self.finish()?;
        let compilation_unit = CompilationUnit::cast(SyntaxNode::new_root(cst))
            .expect("parser always produces CompilationUnit at the root");
        Ok(ParseResult {
            compilation_unit,
            diagnostics,
            exec_fuel_consumed,
        })
    }

    fn finish(mut self) -> Result<(GreenNode, Diagnostics, u32), Error> {
        self.drain_trivia();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        let exec_fuel_consumed = match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        };
        Ok((self.builder.finish(), self.diagnostics, exec_fuel_consumed))
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.stream.peek(lookahead).kind
    }

    /// The decoded literal value attached to the current token, if any.
    pub(super) fn current_value(&self) -> Option<super::lexer::LiteralValue> {
        self.stream.current().value
    }

    /// The raw lexeme text of the current token.
    pub(super) fn current_text(&self) -> &'src str {
        token_text(self.source, &self.stream.current())
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.stream.current().span
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.stream.is_eof()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// True if the current token's text matches a contextual keyword, regardless of
    /// its lexed kind (always `Identifier`). Callers must have already called `peek`
    /// (directly or via `eat`/`at`) so trivia has been skipped.
    pub(super) fn at_contextual(&self, keyword: super::cst::ContextualKeyword) -> bool {
        self.at(SyntaxKind::Identifier)
            && SyntaxKind::contextual_keyword_text(self.current_text()) == Some(keyword)
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    /// Wraps previously-parsed content using a checkpoint, for constructs whose node
    /// kind isn't known until after parsing their first child (e.g. binary expressions).
    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.drain_trivia();
        self.builder.checkpoint()
    }

    fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    fn skip_trivia_to_buffer(&mut self) {
        while !self.stream.is_eof() && self.stream.current().kind.is_trivia() {
            self.trivia_buffer.push(self.stream.advance());
        }
    }

    pub(super) fn peek(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.current()
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        let mut count = 0;
        let mut offset = 0;
        loop {
            let tok = self.stream.peek(offset);
            if tok.kind == SyntaxKind::EndOfFile && offset > 0 {
                return SyntaxKind::EndOfFile;
            }
            if !tok.kind.is_trivia() {
                if count == n {
                    return tok.kind;
                }
                count += 1;
            }
            offset += 1;
        }
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.peek();
        self.drain_trivia();
        self.reset_debug_fuel();
        self.consume_exec_fuel();
        let token = self.stream.advance();
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
    }

    pub(super) fn skip_token(&mut self) {
        assert!(!self.eof(), "skip_token called at EOF");
        self.peek();
        self.reset_debug_fuel();
        self.consume_exec_fuel();
        self.stream.advance();
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.peek() == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emits a diagnostic, then inserts a zero-width token of `kind` so
    /// the tree shape is preserved, leaving recovery to the caller.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.report_error(format!("{what} expected"));
        self.synthesize(kind);
        false
    }

    /// Consumes an `Identifier`, or synthesizes a missing one and reports it.
    pub(super) fn expect_identifier(&mut self) -> bool {
        self.expect(SyntaxKind::Identifier, "Identifier")
    }

    /// Consumes the current token if `pred` holds for it, without requiring a specific
    /// kind; used for contextual-keyword dispatch where the lexed kind is always
    /// `Identifier`.
    pub(super) fn expect_if(&mut self, pred: impl FnOnce(SyntaxKind) -> bool, what: &str) -> bool {
        if pred(self.peek()) {
            self.bump();
            true
        } else {
            self.report_error(format!("{what} expected"));
            false
        }
    }

    /// Inserts a zero-width token of `kind` at the current position without consuming
    /// input, for a production whose piece can legally be missing (e.g. an absent
    /// accessor body, or the name on an incomplete declaration).
    pub(super) fn synthesize(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.token(kind.into(), "");
    }

    pub(super) fn report_error(&mut self, message: impl Into<String>) {
        let range = self.current_span();
        let pos = range.start();
        if self.last_diagnostic_pos == Some(pos) {
            return;
        }
        self.last_diagnostic_pos = Some(pos);
        self.diagnostics.error(message, range).emit();
    }

    pub(super) fn report_error_at(&mut self, message: impl Into<String>, range: TextRange) {
        let pos = range.start();
        if self.last_diagnostic_pos == Some(pos) {
            return;
        }
        self.last_diagnostic_pos = Some(pos);
        self.diagnostics.error(message, range).emit();
    }

    pub(super) fn report_warning_at(&mut self, message: impl Into<String>, range: TextRange) {
        self.diagnostics.warning(message, range).emit();
    }

    pub(super) fn report_error_with_fix(
        &mut self,
        message: impl Into<String>,
        range: TextRange,
        fix_description: impl Into<String>,
        fix_replacement: impl Into<String>,
    ) {
        let pos = range.start();
        if self.last_diagnostic_pos == Some(pos) {
            return;
        }
        self.last_diagnostic_pos = Some(pos);
        self.diagnostics
            .error(message, range)
            .fix(fix_description, fix_replacement)
            .emit();
    }

    pub(super) fn report_error_with_related(
        &mut self,
        message: impl Into<String>,
        range: TextRange,
        related_msg: impl Into<String>,
        related_range: TextRange,
    ) {
        let pos = range.start();
        if self.last_diagnostic_pos == Some(pos) {
            return;
        }
        self.last_diagnostic_pos = Some(pos);
        self.diagnostics
            .error(message, range)
            .related_to(related_msg, related_range)
            .emit();
    }

    pub(super) fn error_and_bump(&mut self, message: impl Into<String>) {
        self.report_error(message);
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Consumes tokens into an `Error` node until `recovery` is seen, a token valid in
    /// an enclosing context is seen, or the stream ends.
    pub(super) fn error_recover(&mut self, message: impl Into<String>, recovery: TokenSet) {
        if self.at_set(recovery) || self.should_stop() {
            self.report_error(message);
            return;
        }
        self.start_node(SyntaxKind::Error);
        self.report_error(message);
        while !self.should_stop()
            && !self.at_set(recovery)
            && !self.context.is_token_valid_in_preceding_context(self.current())
        {
            self.bump();
        }
        self.finish_node();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit {
            if self.depth >= limit {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::RecursionLimitExceeded);
                }
                return false;
            }
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    /// Pushes a grammatical context, returning a guard that pops it on drop. The
    /// pushed context's `valid_tokens` set is consulted by `error_recover` to decide
    /// where to stop skipping.
    #[must_use = "the context is popped when the guard is dropped"]
    pub(super) fn enter_context(&mut self, context: ParserContext) -> ContextGuard {
        self.context.enter(context)
    }

    /// Snapshot of both the token cursor and the diagnostics log, for a speculative
    /// parse that may be abandoned. Pair with [`Parser::rollback`] or
    /// [`Parser::commit`].
    pub(super) fn speculate(&mut self) -> (RestorePoint, Suppression) {
        (self.stream.checkpoint(), self.diagnostics.suppress())
    }

    /// Restores the token cursor to `point` and discards any diagnostics emitted since
    /// `suppression` was taken. Note: this does not undo green-tree nodes already
    /// built by the builder; speculative grammar productions that call this must do so
    /// before calling `start_node`/`checkpoint` for the attempt being abandoned.
    pub(super) fn rollback(&mut self, point: RestorePoint, suppression: Suppression) {
        self.stream.restore(point);
        suppression.restore(&mut self.diagnostics);
    }
}
