use crate::token::SdlTokenKind;
use crate::SourceSpan;

/// An SDL token with location (span) information.
///
/// Comments are real tokens here (not trivia): the parser decides whether a
/// comment is a leading description or a trailing comment of the definition
/// it sits next to.
#[derive(Clone, Debug, PartialEq)]
pub struct SdlToken {
    /// The kind of token (including Error for lexer errors).
    pub kind: SdlTokenKind,

    /// The source location span of this token.
    pub span: SourceSpan,
}

impl SdlToken {
    pub fn new(kind: SdlTokenKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }
}
