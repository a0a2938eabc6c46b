use crate::ast::DefinitionCategory;

/// The coarse class of an [`SdlError`](crate::SdlError).
///
/// Every failure in the pipeline is fatal; the class only tells callers which
/// stage gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdlErrorClass {
    Lexical,
    Syntax,
    Conflict,
}

/// Categorizes pipeline errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `message` and `notes` of the
/// owning [`SdlError`](crate::SdlError).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SdlErrorKind {
    #[error("lexical error: {0}")]
    Lexical(LexicalErrorKind),

    #[error("syntax error: {0}")]
    Syntax(SyntaxErrorKind),

    #[error("merge conflict: {0}")]
    Conflict(ConflictKind),
}

impl SdlErrorKind {
    pub fn class(&self) -> SdlErrorClass {
        match self {
            Self::Lexical(_) => SdlErrorClass::Lexical,
            Self::Syntax(_) => SdlErrorClass::Syntax,
            Self::Conflict(_) => SdlErrorClass::Conflict,
        }
    }
}

/// Lexer failures. These surface from the token source as `Error` tokens and
/// abort parsing as soon as the parser reaches them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalErrorKind {
    /// A `"` string reached a line break or the end of input before its
    /// closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// A `"""` block string reached the end of input before its closing
    /// `"""`.
    #[error("unterminated block string")]
    UnterminatedBlockString,

    /// A number or identifier was immediately followed by a character that
    /// may not follow a value (e.g. `1a`, `Foo%`).
    ///
    /// # Example
    /// ```text
    /// scalar Foo$
    ///           ^ invalid token after `Foo`
    /// ```
    #[error("invalid token after `{after}`")]
    InvalidTokenAdjacency {
        /// Text of the token that was just completed.
        after: String,
        /// The offending character.
        found: char,
    },

    /// A character that starts no token at all.
    #[error("unexpected character `{found}`")]
    UnexpectedCharacter {
        found: char,
    },
}

/// Parser failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g., `["`:`", "`{`"]`).
        expected: Vec<String>,
        /// Display text of what was found.
        found: String,
    },

    /// The source ended before a complete definition was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// A `schema { ... }` block contained a key other than `query`,
    /// `mutation` or `subscription`.
    #[error("unknown schema key: `{key}`")]
    UnknownSchemaKey {
        key: String,
    },

    /// A `schema { ... }` block assigned the same key twice.
    #[error("duplicate schema key: `{key}`")]
    DuplicateSchemaKey {
        key: String,
    },

    /// List literals nested deeper than the parser's recursion limit.
    #[error("list literal nested deeper than {max_depth} levels")]
    NestingTooDeep {
        max_depth: usize,
    },
}

/// Merge failures. Each one involves definitions from (potentially)
/// different files; the owning error carries both spans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictKind {
    /// Two same-named definitions in one category are not structurally
    /// equal once descriptions, comments and spans are ignored.
    #[error("duplicated {category} `{name}`")]
    DuplicateDefinition {
        category: DefinitionCategory,
        name: String,
    },

    /// Two schema blocks name different root types for one operation.
    #[error("conflicting {operation} root type: `{first}` vs `{second}`")]
    RootOperationMismatch {
        /// `query`, `mutation` or `subscription`.
        operation: String,
        first: String,
        second: String,
    },

    /// An `extend type` fragment has no non-extension base of the same name
    /// in any source.
    #[error("extension of undefined type `{name}`")]
    ExtensionWithoutBase {
        name: String,
    },
}
