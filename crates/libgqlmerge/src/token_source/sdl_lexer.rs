//! An [`SdlTokenSource`](crate::token_source::SdlTokenSource) that lexes from
//! any character iterator.
//!
//! The lexer pulls characters lazily, so a file can be tokenized while it is
//! still being decoded. A small lookahead buffer covers the few places that
//! need more than one character of lookahead (`"""`, `...`, signed numbers,
//! exponents).
//!
//! # Usage
//!
//! ```rust
//! use libgqlmerge::token_source::SdlLexer;
//!
//! let lexer = SdlLexer::from_text("scalar Date", "schema.graphql");
//! for token in lexer {
//!     println!("{:?}", token.kind);
//! }
//! // Output:
//! // Scalar
//! // Name("Date")
//! // Eof
//! ```

use crate::token::SdlToken;
use crate::token::SdlTokenKind;
use crate::LexicalErrorKind;
use crate::SdlErrorNote;
use crate::SourcePosition;
use crate::SourceSpan;
use smallvec::smallvec;
use std::collections::VecDeque;
use std::str::Chars;
use std::sync::Arc;

/// Lexes SDL text from a character iterator into [`SdlToken`]s.
///
/// See module documentation for details.
pub struct SdlLexer<TChars: Iterator<Item = char>> {
    chars: TChars,

    /// Characters pulled from `chars` but not yet consumed.
    lookahead: VecDeque<char>,

    /// Opaque file label stamped on every span.
    file_name: Arc<str>,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current character column (0-based).
    curr_col_utf8: usize,

    /// Characters consumed so far.
    curr_char_offset: usize,

    /// Whether the previous character was `\r`.
    ///
    /// Used to handle `\r\n` as a single newline.
    last_char_was_cr: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> SdlLexer<Chars<'src>> {
    /// Creates a lexer over an already-read text buffer.
    pub fn from_text(text: &'src str, file_name: impl Into<Arc<str>>) -> Self {
        Self::new(text.chars(), file_name)
    }
}

impl<TChars: Iterator<Item = char>> SdlLexer<TChars> {
    /// Creates a lexer over a lazily-produced character stream.
    pub fn new(chars: TChars, file_name: impl Into<Arc<str>>) -> Self {
        Self {
            chars,
            lookahead: VecDeque::new(),
            file_name: file_name.into(),
            curr_line: 0,
            curr_col_utf8: 0,
            curr_char_offset: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col_utf8, self.curr_char_offset)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.peek_char_nth(0)
    }

    /// Peeks at the nth character ahead without consuming.
    ///
    /// `peek_char_nth(0)` is equivalent to `peek_char()`.
    fn peek_char_nth(&mut self, n: usize) -> Option<char> {
        while self.lookahead.len() <= n {
            let ch = self.chars.next()?;
            self.lookahead.push_back(ch);
        }
        self.lookahead.get(n).copied()
    }

    fn peek_is_triple_quote(&mut self, offset: usize) -> bool {
        self.peek_char_nth(offset) == Some('"')
            && self.peek_char_nth(offset + 1) == Some('"')
            && self.peek_char_nth(offset + 2) == Some('"')
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = match self.lookahead.pop_front() {
            Some(ch) => ch,
            None => self.chars.next()?,
        };

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.last_char_was_cr = false;
        }

        self.curr_char_offset += 1;
        Some(ch)
    }

    /// Consumes the next character, appending it to `buf`.
    fn consume_into(&mut self, buf: &mut String) {
        if let Some(ch) = self.consume() {
            buf.push(ch);
        }
    }

    /// Creates a `SourceSpan` from a start position to the current position.
    fn make_span(&self, start: SourcePosition) -> SourceSpan {
        SourceSpan::new(self.file_name.clone(), start, self.curr_position())
    }

    fn punctuator(&mut self, kind: SdlTokenKind, start: SourcePosition) -> SdlToken {
        self.consume();
        SdlToken::new(kind, self.make_span(start))
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> SdlToken {
        self.skip_whitespace();
        let start = self.curr_position();

        match self.peek_char() {
            None => SdlToken::new(SdlTokenKind::Eof, self.make_span(start)),

            Some('#') => self.lex_comment(start),

            Some('!') => self.punctuator(SdlTokenKind::Bang, start),
            Some('$') => self.punctuator(SdlTokenKind::Dollar, start),
            Some('&') => self.punctuator(SdlTokenKind::Ampersand, start),
            Some('(') => self.punctuator(SdlTokenKind::ParenOpen, start),
            Some(')') => self.punctuator(SdlTokenKind::ParenClose, start),
            Some('*') => self.punctuator(SdlTokenKind::Star, start),
            Some(',') => self.punctuator(SdlTokenKind::Comma, start),
            Some('/') => self.punctuator(SdlTokenKind::Slash, start),
            Some(':') => self.punctuator(SdlTokenKind::Colon, start),
            Some('=') => self.punctuator(SdlTokenKind::Equals, start),
            Some('@') => self.punctuator(SdlTokenKind::At, start),
            Some('[') => self.punctuator(SdlTokenKind::SquareBracketOpen, start),
            Some(']') => self.punctuator(SdlTokenKind::SquareBracketClose, start),
            Some('{') => self.punctuator(SdlTokenKind::CurlyBraceOpen, start),
            Some('|') => self.punctuator(SdlTokenKind::Pipe, start),
            Some('}') => self.punctuator(SdlTokenKind::CurlyBraceClose, start),

            Some('.') => self.lex_dot_or_ellipsis(start),

            Some('"') => self.lex_string(start),

            Some(ch) if is_name_start(ch) => self.lex_name(start),

            Some(ch) if ch.is_ascii_digit() => self.lex_number(start),

            // A sign only belongs to a number when a digit follows directly.
            Some(sign @ ('-' | '+')) => {
                if self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                    self.lex_number(start)
                } else if sign == '-' {
                    self.punctuator(SdlTokenKind::Minus, start)
                } else {
                    self.punctuator(SdlTokenKind::Plus, start)
                }
            },

            Some(ch) => self.lex_invalid_character(ch, start),
        }
    }

    // =========================================================================
    // Whitespace and comments
    // =========================================================================

    /// Skips spaces, tabs, line terminators and the BOM. Line breaks carry no
    /// meaning in SDL; definitions are delimited by keywords and braces.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    /// Lexes a `#` comment through (but not including) the end of the line.
    fn lex_comment(&mut self, start: SourcePosition) -> SdlToken {
        let mut text = String::new();
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.consume_into(&mut text);
        }
        SdlToken::new(SdlTokenKind::LineComment(text), self.make_span(start))
    }

    // =========================================================================
    // Dot / Ellipsis
    // =========================================================================

    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> SdlToken {
        if self.peek_char_nth(1) == Some('.') && self.peek_char_nth(2) == Some('.') {
            self.consume();
            self.consume();
            self.consume();
            SdlToken::new(SdlTokenKind::Ellipsis, self.make_span(start))
        } else {
            self.punctuator(SdlTokenKind::Dot, start)
        }
    }

    // =========================================================================
    // Names and numbers
    // =========================================================================

    /// Lexes a name or keyword matching `[_A-Za-z][_0-9A-Za-z]*`.
    fn lex_name(&mut self, start: SourcePosition) -> SdlToken {
        let mut name = String::new();
        while let Some(ch) = self.peek_char() {
            if !is_name_continue(ch) {
                break;
            }
            self.consume_into(&mut name);
        }

        if let Some(error) = self.check_value_terminator(&name) {
            return error;
        }

        let kind = SdlTokenKind::keyword(&name).unwrap_or(SdlTokenKind::Name(name));
        SdlToken::new(kind, self.make_span(start))
    }

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional sign: `-` or `+`
    /// - Integer part: `[0-9]+`
    /// - Optional decimal part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    fn lex_number(&mut self, start: SourcePosition) -> SdlToken {
        let mut text = String::new();
        let mut is_float = false;

        if matches!(self.peek_char(), Some('-' | '+')) {
            self.consume_into(&mut text);
        }
        self.consume_digits(&mut text);

        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit())
        {
            is_float = true;
            self.consume_into(&mut text);
            self.consume_digits(&mut text);
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            let sign_len = usize::from(matches!(self.peek_char_nth(1), Some('-' | '+')));
            if self.peek_char_nth(1 + sign_len).is_some_and(|ch| ch.is_ascii_digit()) {
                is_float = true;
                for _ in 0..=sign_len {
                    self.consume_into(&mut text);
                }
                self.consume_digits(&mut text);
            }
        }

        if let Some(error) = self.check_value_terminator(&text) {
            return error;
        }

        let kind = if is_float {
            SdlTokenKind::FloatValue(text)
        } else {
            SdlTokenKind::int_value(&text)
        };
        SdlToken::new(kind, self.make_span(start))
    }

    fn consume_digits(&mut self, buf: &mut String) {
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.consume_into(buf);
        }
    }

    /// After a name or number, only whitespace, end of input, or one of
    /// `( ) [ ] { } : ! ,` may follow. Anything else (`1a`, `Foo%`) is an
    /// invalid token.
    fn check_value_terminator(&mut self, completed: &str) -> Option<SdlToken> {
        let ch = self.peek_char()?;
        if is_value_terminator(ch) {
            return None;
        }

        let start = self.curr_position();
        self.consume();
        let kind = SdlTokenKind::Error {
            kind: LexicalErrorKind::InvalidTokenAdjacency {
                after: completed.to_string(),
                found: ch,
            },
            message: format!("Invalid token after `{completed}`: unexpected `{ch}`"),
            error_notes: smallvec![SdlErrorNote::help(
                "Separate the value from what follows with whitespace"
            )],
        };
        Some(SdlToken::new(kind, self.make_span(start)))
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal (single-line or block string).
    fn lex_string(&mut self, start: SourcePosition) -> SdlToken {
        if self.peek_is_triple_quote(0) {
            return self.lex_block_string(start);
        }

        let mut text = String::new();
        self.consume_into(&mut text);

        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    let span = self.make_span(start);
                    let kind = SdlTokenKind::Error {
                        kind: LexicalErrorKind::UnterminatedString,
                        message: "Unterminated string literal".to_string(),
                        error_notes: smallvec![
                            SdlErrorNote::general_with_span("String started here", span.clone()),
                            SdlErrorNote::help(
                                "Add a closing `\"`, or use a block string (`\"\"\"`) for \
                                 multi-line text"
                            ),
                        ],
                    };
                    return SdlToken::new(kind, span);
                },
                Some('"') => {
                    self.consume_into(&mut text);
                    break;
                },
                Some('\\') => {
                    self.consume_into(&mut text);
                    if !matches!(self.peek_char(), None | Some('\n') | Some('\r')) {
                        self.consume_into(&mut text);
                    }
                },
                Some(_) => self.consume_into(&mut text),
            }
        }

        SdlToken::new(SdlTokenKind::StringValue(text), self.make_span(start))
    }

    /// Lexes a `"""` block string. `\"""` inside the block does not close it.
    fn lex_block_string(&mut self, start: SourcePosition) -> SdlToken {
        let mut text = String::new();
        for _ in 0..3 {
            self.consume_into(&mut text);
        }

        loop {
            match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    let kind = SdlTokenKind::Error {
                        kind: LexicalErrorKind::UnterminatedBlockString,
                        message: "Unterminated block string".to_string(),
                        error_notes: smallvec![
                            SdlErrorNote::general_with_span(
                                "Block string started here",
                                span.clone(),
                            ),
                            SdlErrorNote::help("Add closing `\"\"\"`"),
                        ],
                    };
                    return SdlToken::new(kind, span);
                },
                Some('\\') if self.peek_is_triple_quote(1) => {
                    for _ in 0..4 {
                        self.consume_into(&mut text);
                    }
                },
                Some('"') if self.peek_is_triple_quote(0) => {
                    for _ in 0..3 {
                        self.consume_into(&mut text);
                    }
                    break;
                },
                // Line breaks are stored as `\n` whatever the source used.
                Some('\r') => {
                    self.consume();
                    if self.peek_char() == Some('\n') {
                        self.consume();
                    }
                    text.push('\n');
                },
                Some(_) => self.consume_into(&mut text),
            }
        }

        SdlToken::new(SdlTokenKind::BlockString(text), self.make_span(start))
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    fn lex_invalid_character(&mut self, ch: char, start: SourcePosition) -> SdlToken {
        self.consume();
        let kind = SdlTokenKind::Error {
            kind: LexicalErrorKind::UnexpectedCharacter { found: ch },
            message: format!("Unexpected character {}", describe_char(ch)),
            error_notes: smallvec![],
        };
        SdlToken::new(kind, self.make_span(start))
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<TChars: Iterator<Item = char>> Iterator for SdlLexer<TChars> {
    type Item = SdlToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, SdlTokenKind::Eof) {
            self.finished = true;
        }

        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

fn is_value_terminator(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' | '(' | ')' | '[' | ']' | '{' | '}' | ':' | '!' | ','
    )
}

/// Returns a human-readable description of a character for error messages.
///
/// For printable characters, returns the character in backticks.
/// For invisible/control characters, includes the Unicode code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
