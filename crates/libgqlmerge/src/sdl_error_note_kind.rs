/// How a note is labelled when an error is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdlErrorNoteKind {
    /// Rendered as `= note: ...`.
    General,

    /// A suggested fix, rendered as `= help: ...`.
    Help,
}
