//! Various test utils.

use crate::ast::Document;
use crate::token::SdlToken;
use crate::token::SdlTokenKind;
use crate::token_source::SdlLexer;
use crate::SdlError;
use crate::SdlSource;
use crate::SourcePosition;
use crate::SourceSpan;

/// Creates a mock token with the given kind and a zero-width span at the
/// start of `mock.graphql`.
pub fn mock_token(kind: SdlTokenKind) -> SdlToken {
    let pos = SourcePosition::new(0, 0, 0);
    SdlToken::new(kind, SourceSpan::new("mock.graphql".into(), pos, pos))
}

/// Creates a mock Name token with the given name.
pub fn mock_name_token(name: &str) -> SdlToken {
    mock_token(SdlTokenKind::Name(name.to_string()))
}

/// Creates a mock Eof token.
pub fn mock_eof_token() -> SdlToken {
    mock_token(SdlTokenKind::Eof)
}

/// A mock token source that produces tokens from a Vec.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<SdlToken>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<SdlToken>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = SdlToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Lexes `source` and returns every token kind, `Eof` included.
pub fn lex_kinds(source: &str) -> Vec<SdlTokenKind> {
    SdlLexer::from_text(source, "test.graphql")
        .map(|token| token.kind)
        .collect()
}

/// Lexes `source` and returns the first token.
pub fn lex_first(source: &str) -> SdlToken {
    SdlLexer::from_text(source, "test.graphql")
        .next()
        .expect("a lexer always yields at least Eof")
}

/// Parses `source` as `test.graphql`.
pub fn parse(source: &str) -> Result<Document, SdlError> {
    crate::parse_str(source, "test.graphql")
}

/// Parses `source`, panicking with the diagnostic on failure.
pub fn parse_ok(source: &str) -> Document {
    match parse(source) {
        Ok(doc) => doc,
        Err(err) => panic!("parse failed:\n{}", err.format_detailed(Some(source))),
    }
}

/// Parses `source`, expecting failure.
pub fn parse_err(source: &str) -> SdlError {
    match parse(source) {
        Ok(doc) => panic!("expected a parse error, got {doc:#?}"),
        Err(err) => err,
    }
}

/// Builds named sources `(file_name, text)`.
pub fn sources(files: &[(&str, &str)]) -> Vec<SdlSource> {
    files
        .iter()
        .map(|(file_name, text)| SdlSource::new(*file_name, *text))
        .collect()
}

/// Parses and merges `files` into one document.
pub fn merge_files(files: &[(&str, &str)]) -> Result<Document, SdlError> {
    let documents = crate::parse_sources(&sources(files))?;
    crate::merge(documents)
}

/// Parses, merges and serializes `files` with a four-space indent.
pub fn merge_to_sdl(files: &[(&str, &str)]) -> Result<String, SdlError> {
    crate::merge_sources(sources(files), "    ")
}
