use crate::SdlErrorClass;
use crate::SdlErrorKind;
use crate::SdlErrorNote;
use crate::SdlErrorNoteKind;
use crate::SdlErrorNotes;
use crate::SourceSpan;

/// A fatal lexing, parsing or merge error with location information and
/// contextual notes.
///
/// Every stage of the pipeline fails fast: the first `SdlError` aborts the
/// whole merge and no partial output is produced.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct SdlError {
    /// Categorized error kind for programmatic handling.
    kind: SdlErrorKind,

    /// Human-readable primary error message.
    ///
    /// For merge conflicts this already embeds both locations, e.g.
    /// `Duplicated Type: A(a.graphql:1:6) and (b.graphql:1:6)`.
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - Lexical errors: the offending token/character
    /// - Syntax errors: the unexpected token
    /// - Conflicts: the later of the two conflicting definitions
    span: SourceSpan,

    /// The other definition involved in a merge conflict.
    related_span: Option<SourceSpan>,

    notes: SdlErrorNotes,
}

impl SdlError {
    /// Creates a new error with no notes and no related span.
    pub fn new(
        kind: SdlErrorKind,
        message: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            related_span: None,
            notes: SdlErrorNotes::new(),
        }
    }

    /// Creates a new error with notes.
    pub fn with_notes(
        kind: SdlErrorKind,
        message: impl Into<String>,
        span: SourceSpan,
        notes: SdlErrorNotes,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            related_span: None,
            notes,
        }
    }

    /// Creates a merge-conflict error citing two locations.
    ///
    /// `span` is where the conflict was detected and `related_span` is the
    /// earlier definition it collided with. A note pointing at the earlier
    /// definition is attached automatically.
    pub fn conflict(
        kind: crate::ConflictKind,
        message: impl Into<String>,
        span: SourceSpan,
        related_span: SourceSpan,
    ) -> Self {
        let mut notes = SdlErrorNotes::new();
        notes.push(SdlErrorNote::general_with_span(
            format!("previously defined at {related_span}"),
            related_span.clone(),
        ));
        Self {
            kind: SdlErrorKind::Conflict(kind),
            message: message.into(),
            span,
            related_span: Some(related_span),
            notes,
        }
    }

    /// Creates a merge-conflict error that involves a single definition.
    pub fn conflict_without_related(
        kind: crate::ConflictKind,
        message: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self::new(SdlErrorKind::Conflict(kind), message, span)
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &SourceSpan {
        &self.span
    }

    /// Returns the second location of a merge conflict, if any.
    pub fn related_span(&self) -> Option<&SourceSpan> {
        self.related_span.as_ref()
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &SdlErrorKind {
        &self.kind
    }

    pub fn class(&self) -> SdlErrorClass {
        self.kind.class()
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &SdlErrorNotes {
        &self.notes
    }

    /// Appends a suggested fix.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(SdlErrorNote::help(message));
    }

    /// Formats this error as a single-line summary.
    ///
    /// Lexical and syntax errors are prefixed with their location:
    /// ```text
    /// schema.graphql:5:12: Expected `:`, found `String`
    /// ```
    /// Conflict messages already cite both locations and are returned as-is:
    /// ```text
    /// Duplicated Type: A(a.graphql:1:6) and (b.graphql:1:6)
    /// ```
    pub fn format_oneline(&self) -> String {
        match self.kind.class() {
            SdlErrorClass::Conflict => self.message.clone(),
            SdlErrorClass::Lexical | SdlErrorClass::Syntax => {
                format!("{}: {}", self.span, self.message)
            },
        }
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: Expected `:`, found `String`
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    |
    ///    = help: ...
    /// ```
    ///
    /// `source` is the text of the file named by [`span()`](Self::span). If
    /// `None`, snippets are omitted but locations are still shown. Note
    /// snippets are only rendered for notes that point into that same file.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}\n", self.span));

        if let Some(src) = source
            && let Some(snippet) = format_source_snippet(src, &self.span)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                SdlErrorNoteKind::General => "note",
                SdlErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && note_span.file_name == self.span.file_name
                && let Some(snippet) = format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }
}

/// Returns the 0-based line `line_num` of `source`. `\n`, `\r\n` and a
/// lone `\r` each end a line, matching how the lexer counts lines.
fn source_line(source: &str, line_num: usize) -> Option<&str> {
    let mut rest = source;
    for _ in 0..line_num {
        let break_at = rest.find(['\n', '\r'])?;
        let break_len = if rest[break_at..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[break_at + break_len..];
    }
    let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Formats the source snippet with a caret underline for the primary span.
fn format_source_snippet(source: &str, span: &SourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let display_line_num = line_num + 1;
    let line_num_width = display_line_num.to_string().len().max(2);

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{display_line_num:>line_num_width$} | {line_content}\n"
    ));

    let col_start = span.start_inclusive.col_utf8();
    let col_end = if span.end_exclusive.line() == span.start_inclusive.line() {
        span.end_exclusive.col_utf8()
    } else {
        line_content.chars().count()
    };
    let underline_len = if col_end > col_start {
        col_end - col_start
    } else {
        1
    };

    output.push_str(&format!(
        "{:>width$} | {:>padding$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        padding = col_start
    ));

    Some(output)
}

/// Formats a one-line snippet for a note's span.
fn format_note_snippet(source: &str, span: &SourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let display_line_num = line_num + 1;
    let line_num_width = display_line_num.to_string().len().max(2);

    let mut output = String::new();
    output.push_str(&format!(
        "     {display_line_num:>line_num_width$} | {line_content}\n"
    ));
    output.push_str(&format!(
        "     {:>width$} | {:>padding$}-\n",
        "",
        "",
        width = line_num_width,
        padding = span.start_inclusive.col_utf8()
    ));

    Some(output)
}
