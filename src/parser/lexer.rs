//! Lexer for the C#-like language.
//!
//! Produces one token per lexeme, trivia included, in source order. Trivia is not
//! filtered out here - the parser buffers and attaches it to the tree, which is what
//! keeps the tree lossless. Text is sliced from source lazily via [`token_text`]; the
//! one exception is literal tokens, whose decoded constant is computed eagerly here
//! since decoding needs the raw lexeme anyway.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;

/// A decoded literal constant, attached to `NumericLiteral`, `CharacterLiteral`, and
/// `StringLiteral` tokens when the lexeme decodes successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int32(i32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    /// Decoded `decimal` suffix (`m`/`M`); kept as text, exact decimal arithmetic is out
    /// of scope for this front-end.
    Decimal(String),
    Char(char),
    String(String),
}

/// A lexed token: kind, span, and (for literals) a decoded value. Non-literal tokens
/// borrow their text from the source via [`token_text`] rather than storing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
    pub value: Option<LiteralValue>,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self {
            kind,
            span,
            value: None,
        }
    }

    #[inline]
    fn with_value(kind: SyntaxKind, span: TextRange, value: LiteralValue) -> Self {
        Self {
            kind,
            span,
            value: Some(value),
        }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// A lexical error produced while scanning a single token. Attached at the lexeme's
/// start position, per the "lexical errors reported against the lexeme's start" rule.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub position: u32,
    pub message: String,
}

/// Tokenizes source into the ordered token sequence (trivia included), plus any
/// lexical diagnostics (unterminated comment/string, invalid number, bad escape, etc).
///
/// The returned token sequence never contains a terminating `EndOfFile` token; the
/// caller's [`super::TokenStream`] synthesizes one on demand past the last real token.
pub fn lex(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = match result {
            Ok(kind) => kind,
            Err(()) => SyntaxKind::Unknown,
        };

        let text = &source[span.clone()];
        let range = range_to_text_range(span.clone());

        let token = match kind {
            SyntaxKind::NumericLiteral => lex_numeric_literal(text, range, &mut errors),
            SyntaxKind::CharacterLiteral => lex_character_literal(text, range, &mut errors),
            SyntaxKind::StringLiteral => lex_string_literal(text, range, &mut errors),
            SyntaxKind::MultiLineComment if !text.ends_with("*/") => {
                errors.push(LexError {
                    position: range.start().into(),
                    message: "End-of-file found, '*/' expected".to_string(),
                });
                Token::new(kind, range)
            }
            _ => Token::new(kind, range),
        };

        tokens.push(token);
    }

    (tokens, errors)
}

fn lex_numeric_literal(text: &str, span: TextRange, errors: &mut Vec<LexError>) -> Token {
    match decode_numeric(text) {
        Some(value) => Token::with_value(SyntaxKind::NumericLiteral, span, value),
        None => {
            errors.push(LexError {
                position: span.start().into(),
                message: "Invalid number".to_string(),
            });
            Token::new(SyntaxKind::NumericLiteral, span)
        }
    }
}

fn decode_numeric(text: &str) -> Option<LiteralValue> {
    if let Some(hex_body) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        let (digits, suffix) = split_trailing_suffix(hex_body, "uUlL");
        if digits.is_empty() {
            return None;
        }
        let raw = u64::from_str_radix(digits, 16).ok()?;
        return Some(classify_integer(raw, suffix));
    }

    let is_float = text.contains('.') || text.contains('e') || text.contains('E');
    let (digits, suffix) = split_trailing_suffix(text, "fFdDmMlLuU");

    if is_float || matches!(suffix, "f" | "F" | "d" | "D" | "m" | "M") {
        if digits.is_empty() || digits == "." {
            return None;
        }
        let parsed: f64 = digits.parse().ok()?;
        return Some(match suffix {
            "f" | "F" => LiteralValue::Float32(parsed as f32),
            "m" | "M" => LiteralValue::Decimal(digits.to_string()),
            _ => LiteralValue::Float64(parsed),
        });
    }

    if digits.is_empty() {
        return None;
    }
    let raw: u64 = digits.parse().ok()?;
    Some(classify_integer(raw, suffix))
}

/// Splits a numeric lexeme into its digit body and a recognized type-suffix tail
/// (case-sensitive two-letter combinations like `UL`/`LU` are treated as one suffix).
fn split_trailing_suffix<'a>(text: &'a str, suffix_chars: &str) -> (&'a str, &'a str) {
    let mut split = text.len();
    for (i, c) in text.char_indices().rev() {
        if suffix_chars.contains(c) {
            split = i;
        } else {
            break;
        }
    }
    (&text[..split], &text[split..])
}

fn classify_integer(raw: u64, suffix: &str) -> LiteralValue {
    let upper = suffix.to_ascii_uppercase();
    let wants_unsigned = upper.contains('U');
    let wants_long = upper.contains('L');

    if wants_unsigned {
        return LiteralValue::UInt64(raw);
    }
    if wants_long {
        return LiteralValue::Int64(raw as i64);
    }
    if let Ok(v) = i32::try_from(raw) {
        LiteralValue::Int32(v)
    } else if let Ok(v) = i64::try_from(raw) {
        LiteralValue::Int64(v)
    } else {
        LiteralValue::UInt64(raw)
    }
}

fn lex_character_literal(text: &str, span: TextRange, errors: &mut Vec<LexError>) -> Token {
    let inner = text
        .strip_prefix('\'')
        .unwrap_or(text)
        .strip_suffix('\'')
        .unwrap_or_else(|| text.strip_prefix('\'').unwrap_or(text));

    if inner.is_empty() {
        errors.push(LexError {
            position: span.start().into(),
            message: "Empty character literal".to_string(),
        });
        return Token::with_value(SyntaxKind::CharacterLiteral, span, LiteralValue::Char('\0'));
    }

    match decode_one_char(inner) {
        Some((ch, consumed)) if consumed == inner.len() => {
            Token::with_value(SyntaxKind::CharacterLiteral, span, LiteralValue::Char(ch))
        }
        Some((ch, _)) => {
            errors.push(LexError {
                position: span.start().into(),
                message: "Too many characters in character literal".to_string(),
            });
            Token::with_value(SyntaxKind::CharacterLiteral, span, LiteralValue::Char(ch))
        }
        None => {
            errors.push(LexError {
                position: span.start().into(),
                message: "Unrecognized escape sequence".to_string(),
            });
            Token::new(SyntaxKind::CharacterLiteral, span)
        }
    }
}

/// Decodes a single (possibly escaped) character starting at the beginning of `text`,
/// returning the character and the number of bytes consumed from `text`.
fn decode_one_char(text: &str) -> Option<(char, usize)> {
    let mut chars = text.char_indices();
    let (_, first) = chars.next()?;

    if first != '\\' {
        let len = first.len_utf8();
        return Some((first, len));
    }

    let (_, escape) = chars.next()?;
    match escape {
        '"' => Some(('"', 2)),
        '\\' => Some(('\\', 2)),
        '\'' => Some(('\'', 2)),
        '0' => Some(('\0', 2)),
        'a' => Some(('\u{7}', 2)),
        'b' => Some(('\u{8}', 2)),
        'f' => Some(('\u{C}', 2)),
        'n' => Some(('\n', 2)),
        'r' => Some(('\r', 2)),
        't' => Some(('\t', 2)),
        'v' => Some(('\u{B}', 2)),
        'x' => decode_hex_escape(&text[2..], 1, 4).map(|(cp, n)| (cp, 2 + n)),
        'u' => decode_hex_escape(&text[2..], 4, 4).map(|(cp, n)| (cp, 2 + n)),
        'U' => decode_hex_escape(&text[2..], 8, 8).map(|(cp, n)| (cp, 2 + n)),
        _ => None,
    }
}

/// Decodes `min..=max` hex digits from the start of `text` into a `char`. Used for
/// `\x` (1-4 digits), `\u` (exactly 4), and `\U` (exactly 8, validated <= 0x10FFFF).
///
/// Surrogate-pair splitting for code points above `0xFFFF` is a UTF-16 concern for
/// downstream consumers of the decoded value, not representable in a single Rust
/// `char`; callers that need the raw code point should re-derive it from the token's
/// source text rather than this helper.
fn decode_hex_escape(text: &str, min: usize, max: usize) -> Option<(char, usize)> {
    let hex_len = text
        .char_indices()
        .take(max)
        .take_while(|(_, c)| c.is_ascii_hexdigit())
        .count();
    if hex_len < min {
        return None;
    }
    let digits = &text[..hex_len];
    let code = u32::from_str_radix(digits, 16).ok()?;
    if code > 0x10FFFF {
        return None;
    }
    char::from_u32(code).map(|c| (c, hex_len))
}

fn lex_string_literal(text: &str, span: TextRange, errors: &mut Vec<LexError>) -> Token {
    if let Some(body) = text.strip_prefix('@') {
        return lex_verbatim_string(body, span, errors);
    }

    let unterminated = !text.ends_with('"') || text == "\"";
    let inner = text
        .strip_prefix('"')
        .unwrap_or(text)
        .trim_end_matches('"');

    if unterminated {
        errors.push(LexError {
            position: span.start().into(),
            message: "Unterminated string literal".to_string(),
        });
    }

    let mut decoded = String::new();
    let mut rest = inner;
    let mut newline_reported = false;
    while !rest.is_empty() {
        if rest.starts_with('\n') && !newline_reported {
            errors.push(LexError {
                position: span.start().into(),
                message: "Newline in constant".to_string(),
            });
            newline_reported = true;
        }
        match decode_one_char(rest) {
            Some((ch, consumed)) => {
                decoded.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                errors.push(LexError {
                    position: span.start().into(),
                    message: "Unrecognized escape sequence".to_string(),
                });
                rest = &rest[1..];
            }
        }
    }

    Token::with_value(SyntaxKind::StringLiteral, span, LiteralValue::String(decoded))
}

fn lex_verbatim_string(body: &str, span: TextRange, errors: &mut Vec<LexError>) -> Token {
    let unterminated = !body.ends_with('"') || body == "\"";
    let inner = body
        .strip_prefix('"')
        .unwrap_or(body)
        .trim_end_matches('"');

    if unterminated {
        errors.push(LexError {
            position: span.start().into(),
            message: "Unterminated string literal".to_string(),
        });
    }

    // In verbatim strings `""` is an embedded quote and backslashes are literal.
    let decoded = inner.replace("\"\"", "\"");
    Token::with_value(SyntaxKind::StringLiteral, span, LiteralValue::String(decoded))
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
