//! Cursor over a lexed token sequence, with checkpoint/restore for speculative parsing.

use rowan::TextRange;

use super::cst::SyntaxKind;
use super::lexer::Token;

/// An opaque snapshot of the cursor position, taken via [`TokenStream::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestorePoint(usize);

/// Cursor over an immutable token sequence. `current`/`lookahead`/`previous` never
/// panic: past the end of the sequence they return a synthetic `EndOfFile` token
/// positioned one past the last token's end.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    eof_position: u32,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof_position = tokens
            .last()
            .map(|t| u32::from(t.span.end()))
            .unwrap_or(0);
        Self {
            tokens,
            pos: 0,
            eof_position,
        }
    }

    fn synthetic_eof(&self) -> Token {
        Token::new(
            SyntaxKind::EndOfFile,
            TextRange::empty(self.eof_position.into()),
        )
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.peek(0)
    }

    #[inline]
    pub fn lookahead(&self) -> Token {
        self.peek(1)
    }

    /// The most recently consumed non-virtual token, or a zero-width token at the
    /// start of input if nothing has been consumed yet.
    pub fn previous(&self) -> Token {
        if self.pos == 0 {
            Token::new(SyntaxKind::EndOfFile, TextRange::empty(0.into()))
        } else {
            self.tokens[self.pos - 1].clone()
        }
    }

    pub fn peek(&self, offset: usize) -> Token {
        self.tokens
            .get(self.pos + offset)
            .cloned()
            .unwrap_or_else(|| self.synthetic_eof())
    }

    /// Advances the cursor by one and returns the token that was current.
    pub fn advance(&mut self) -> Token {
        let tok = self.current();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    #[inline]
    pub fn checkpoint(&self) -> RestorePoint {
        RestorePoint(self.pos)
    }

    #[inline]
    pub fn restore(&mut self, point: RestorePoint) {
        self.pos = point.0;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
