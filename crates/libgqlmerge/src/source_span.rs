use crate::SourcePosition;
use std::fmt;
use std::sync::Arc;

/// Represents a span of source text from start to end position within a
/// named source file.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
///
/// The file name is an opaque label supplied by whoever handed the text to
/// the parser. It is shared (`Arc<str>`) across every span produced from the
/// same source.
///
/// Spans are diagnostic metadata only: they never take part in structural
/// equality of AST nodes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceSpan {
    pub file_name: Arc<str>,
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl SourceSpan {
    pub fn new(
        file_name: Arc<str>,
        start: SourcePosition,
        end: SourcePosition,
    ) -> Self {
        Self {
            file_name,
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// 1-based line of the first character in this span.
    pub fn line(&self) -> usize {
        self.start_inclusive.line() + 1
    }

    /// 1-based column of the first character in this span.
    pub fn column(&self) -> usize {
        self.start_inclusive.col_utf8() + 1
    }
}

impl fmt::Display for SourceSpan {
    /// Renders as `file:line:col` (1-based).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line(), self.column())
    }
}
