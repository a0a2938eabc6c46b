use crate::SdlErrorNoteKind;
use crate::SourceSpan;
use smallvec::SmallVec;

/// Extra context attached to an [`SdlError`](crate::SdlError): where a
/// string or brace was opened, where a conflicting definition lives, or how
/// to fix the problem.
#[derive(Debug, Clone, PartialEq)]
pub struct SdlErrorNote {
    pub kind: SdlErrorNoteKind,
    pub message: String,

    /// A second location shown with its own snippet when it is in the same
    /// file as the error.
    pub span: Option<SourceSpan>,
}

impl SdlErrorNote {
    pub fn general_with_span(message: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            kind: SdlErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: SdlErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}

/// Errors rarely carry more than two notes.
pub type SdlErrorNotes = SmallVec<[SdlErrorNote; 2]>;
