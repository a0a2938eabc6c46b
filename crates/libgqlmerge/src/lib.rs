//! A library for merging modular GraphQL SDL files into one schema.
//!
//! The pipeline is: text → [`SdlLexer`](token_source::SdlLexer) →
//! [`SdlParser`] → one [`ast::Document`] per file → [`merge()`] →
//! [`SdlSerializer`] → text. Every stage fails fast with an [`SdlError`].
//!
//! ```
//! use libgqlmerge::SdlSource;
//!
//! let merged = libgqlmerge::merge_sources(
//!     vec![
//!         SdlSource::new("a.graphql", "type A { id: ID! }"),
//!         SdlSource::new("b.graphql", "extend type A { name: String! }"),
//!     ],
//!     "  ",
//! ).unwrap();
//! assert_eq!(merged, "type A {\n  id: ID!\n  name: String!\n}\n");
//! ```

pub mod ast;
pub mod merge;
mod sdl_error;
mod sdl_error_kind;
mod sdl_error_note;
mod sdl_error_note_kind;
mod sdl_parser;
mod sdl_serializer;
mod sdl_source;
mod sdl_token_stream;
mod source_position;
mod source_span;
pub mod token;
pub mod token_source;

pub use merge::merge;
pub use sdl_error::SdlError;
pub use sdl_error_kind::ConflictKind;
pub use sdl_error_kind::LexicalErrorKind;
pub use sdl_error_kind::SdlErrorClass;
pub use sdl_error_kind::SdlErrorKind;
pub use sdl_error_kind::SyntaxErrorKind;
pub use sdl_error_note::SdlErrorNote;
pub use sdl_error_note::SdlErrorNotes;
pub use sdl_error_note_kind::SdlErrorNoteKind;
pub use sdl_parser::SdlParser;
pub use sdl_serializer::SdlSerializer;
pub use sdl_source::SdlSource;
pub use sdl_token_stream::SdlTokenStream;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use source_span::SourceSpan;

use ast::Document;
use rayon::prelude::*;
use std::sync::Arc;
use token_source::SdlLexer;

/// Parses one already-read SDL text.
pub fn parse_str(text: &str, file_name: impl Into<Arc<str>>) -> Result<Document, SdlError> {
    let file_name = file_name.into();
    let document = SdlParser::new(text, file_name.clone()).parse_document()?;
    log::debug!("{file_name}: parsed {} definition(s)", document.definition_count());
    Ok(document)
}

/// Parses SDL from a lazily-produced character stream.
pub fn parse_chars<TChars: Iterator<Item = char>>(
    chars: TChars,
    file_name: impl Into<Arc<str>>,
) -> Result<Document, SdlError> {
    let file_name = file_name.into();
    let lexer = SdlLexer::new(chars, file_name.clone());
    let document = SdlParser::from_token_source(lexer, file_name.clone()).parse_document()?;
    log::debug!("{file_name}: parsed {} definition(s)", document.definition_count());
    Ok(document)
}

/// Parses every source in parallel. Documents come back in input order; the
/// first failure in input order is returned.
pub fn parse_sources(sources: &[SdlSource]) -> Result<Vec<Document>, SdlError> {
    let results: Vec<Result<Document, SdlError>> = sources
        .par_iter()
        .map(|source| parse_str(&source.text, source.file_name.clone()))
        .collect();
    results.into_iter().collect()
}

/// Renders `document` as SDL, indenting one level with `indent_unit`.
pub fn serialize(document: &Document, indent_unit: &str) -> String {
    SdlSerializer::new(indent_unit).serialize(document)
}

/// Parses, merges and serializes `sources` in one go.
pub fn merge_sources(sources: Vec<SdlSource>, indent_unit: &str) -> Result<String, SdlError> {
    let documents = parse_sources(&sources)?;
    let merged = merge(documents)?;
    Ok(serialize(&merged, indent_unit))
}

#[cfg(test)]
mod tests;
