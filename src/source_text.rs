//! Immutable source buffer with line/column lookup.

/// A 1-based (line, column) position, as reported in human-facing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePosition {
    pub line: u32,
    pub column: u32,
}

/// Immutable source text plus a sorted index of line-start byte offsets, supporting
/// `(line, column)` lookups via binary search rather than a linear newline scan.
#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    line_starts: Vec<u32>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0u32];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { text, line_starts }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Substring of `self` covering `span`.
    pub fn slice(&self, span: rowan::TextRange) -> &str {
        &self.text[std::ops::Range::<usize>::from(span)]
    }

    /// Maps a byte offset to a 1-based (line, column) pair via binary search over
    /// line-start offsets.
    pub fn line_position(&self, offset: u32) -> LinePosition {
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts[line_index];
        let column = offset.saturating_sub(line_start);
        LinePosition {
            line: line_index as u32 + 1,
            column: column + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source() {
        let source = SourceText::new("");
        assert_eq!(source.len(), 0);
        assert_eq!(
            source.line_position(0),
            LinePosition { line: 1, column: 1 }
        );
    }

    #[test]
    fn multi_line_lookup() {
        let source = SourceText::new("abc\ndef\nghi");
        assert_eq!(
            source.line_position(0),
            LinePosition { line: 1, column: 1 }
        );
        assert_eq!(
            source.line_position(4),
            LinePosition { line: 2, column: 1 }
        );
        assert_eq!(
            source.line_position(9),
            LinePosition { line: 3, column: 2 }
        );
    }

    #[test]
    fn line_position_inverse_law() {
        let source = SourceText::new("one\ntwo\nthree");
        for offset in 0..=source.len() as u32 {
            let pos = source.line_position(offset);
            let line_start = source.line_starts[(pos.line - 1) as usize];
            let substr = &source.text[line_start as usize..offset as usize];
            assert!(!substr.contains('\n'));
        }
    }
}
