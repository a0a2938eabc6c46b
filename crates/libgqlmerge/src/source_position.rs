/// A position within a single SDL source text.
///
/// This is a pure data struct with no mutation methods. The lexer is
/// responsible for computing position values as it scans input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the source
/// - `col_utf8`: character count within the current line
/// - `char_offset`: character count from the start of the source
///
/// Human-facing renderings (`file:line:col`) add 1 to `line` and `col_utf8`.
///
/// Offsets are counted in characters rather than bytes because the lexer
/// consumes a lazily-produced character stream and never sees the
/// underlying encoding.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// Character count within current line (0-based: first position is 0)
    col_utf8: usize,

    /// Character offset from start of source (0-based)
    char_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `col_utf8`: 0-based character count within current line
    /// - `char_offset`: 0-based character offset from source start
    pub fn new(line: usize, col_utf8: usize, char_offset: usize) -> Self {
        Self {
            line,
            col_utf8,
            char_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based character offset from source start.
    pub fn char_offset(&self) -> usize {
        self.char_offset
    }
}
