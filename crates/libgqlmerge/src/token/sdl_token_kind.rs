use crate::LexicalErrorKind;
use crate::SdlErrorNotes;

/// The kind of an SDL token.
///
/// Literal values store display text: `StringValue`/`BlockString` keep their
/// quotes and escapes exactly as written so they can be re-emitted verbatim,
/// `IntValue` is canonicalized (see [`SdlTokenKind::int_value`]), and
/// `FloatValue` is raw.
///
/// # Signed Numeric Literals
///
/// `-` or `+` immediately followed by a digit is lexed as part of the number
/// (e.g. `IntValue("-123")`). Otherwise the sign is its own `Minus`/`Plus`
/// token.
#[derive(Clone, Debug, PartialEq)]
pub enum SdlTokenKind {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `.`
    Dot,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `-`
    Minus,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `+`
    Plus,
    /// `/`
    Slash,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,
    /// `*`
    Star,

    // =========================================================================
    // Keywords
    // =========================================================================
    Directive,
    Enum,
    Extend,
    Implements,
    Input,
    Interface,
    On,
    Repeatable,
    Scalar,
    Schema,
    Type,
    Union,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A non-keyword identifier.
    Name(String),

    /// Canonical text of an integer literal (e.g. `"-123"`, `"0"`).
    IntValue(String),

    /// Raw source text of a float literal (e.g. `"-1.5e3"`).
    FloatValue(String),

    /// Raw source text of a `"..."` string, including quotes.
    StringValue(String),

    /// Raw source text of a `"""..."""` block string, including quotes.
    BlockString(String),

    /// Raw source text of a `#` comment through end of line, including the
    /// `#`.
    LineComment(String),

    // =========================================================================
    // End of input
    // =========================================================================
    Eof,

    // =========================================================================
    // Lexer error
    // =========================================================================
    /// A lexer error. The parser converts the first one it reaches into a
    /// fatal [`SdlError`](crate::SdlError).
    Error {
        kind: LexicalErrorKind,
        /// A human-readable error message.
        message: String,
        /// Optional notes providing additional context or suggestions.
        error_notes: SdlErrorNotes,
    },
}

impl SdlTokenKind {
    /// Returns the keyword token kind for `text`, if `text` is one of the
    /// reserved SDL keywords.
    pub fn keyword(text: &str) -> Option<Self> {
        Some(match text {
            "directive" => Self::Directive,
            "enum" => Self::Enum,
            "extend" => Self::Extend,
            "implements" => Self::Implements,
            "input" => Self::Input,
            "interface" => Self::Interface,
            "on" => Self::On,
            "repeatable" => Self::Repeatable,
            "scalar" => Self::Scalar,
            "schema" => Self::Schema,
            "type" => Self::Type,
            "union" => Self::Union,
            _ => return None,
        })
    }

    /// Builds an `IntValue` from raw digits with an optional leading sign,
    /// printing it the way an arbitrary-precision integer would be printed:
    /// a leading `+` is dropped, leading zeros are stripped, and negative
    /// zero prints as `0`.
    pub fn int_value(raw: &str) -> Self {
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let digits = digits.trim_start_matches('0');
        let text = if digits.is_empty() {
            "0".to_string()
        } else if negative {
            format!("-{digits}")
        } else {
            digits.to_string()
        };
        Self::IntValue(text)
    }

    /// Returns the keyword or name text when this token can stand where a
    /// name is expected. SDL keywords are not reserved in name positions
    /// (e.g. a field called `type`).
    pub fn as_name(&self) -> Option<&str> {
        Some(match self {
            Self::Name(name) => name.as_str(),
            Self::Directive => "directive",
            Self::Enum => "enum",
            Self::Extend => "extend",
            Self::Implements => "implements",
            Self::Input => "input",
            Self::Interface => "interface",
            Self::On => "on",
            Self::Repeatable => "repeatable",
            Self::Scalar => "scalar",
            Self::Schema => "schema",
            Self::Type => "type",
            Self::Union => "union",
            _ => return None,
        })
    }

    /// Returns the text of a description-bearing token (string, block string,
    /// or line comment).
    pub fn as_description(&self) -> Option<&str> {
        match self {
            Self::StringValue(text) | Self::BlockString(text) | Self::LineComment(text) => {
                Some(text.as_str())
            },
            _ => None,
        }
    }

    /// Returns the literal text of a value token usable as a default value
    /// or directive argument value (string, number, or name).
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::StringValue(text)
            | Self::BlockString(text)
            | Self::IntValue(text)
            | Self::FloatValue(text) => Some(text.as_str()),
            other => other.as_name(),
        }
    }

    /// Returns the display text of this token, as used in "found `...`"
    /// parts of syntax errors.
    pub fn display(&self) -> String {
        let text = match self {
            Self::Ampersand => "&",
            Self::At => "@",
            Self::Bang => "!",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::Dollar => "$",
            Self::Dot => ".",
            Self::Ellipsis => "...",
            Self::Equals => "=",
            Self::Minus => "-",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::Pipe => "|",
            Self::Plus => "+",
            Self::Slash => "/",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
            Self::Star => "*",
            Self::IntValue(text)
            | Self::FloatValue(text)
            | Self::StringValue(text)
            | Self::BlockString(text)
            | Self::LineComment(text) => text.as_str(),
            Self::Eof => "end of input",
            Self::Error { message, .. } => message.as_str(),
            keyword_or_name => return keyword_or_name.as_name().unwrap_or_default().to_string(),
        };
        text.to_string()
    }
}
