//! Tests for `SdlTokenStream` lookahead and consumption.

use crate::tests::utils::mock_eof_token;
use crate::tests::utils::mock_name_token;
use crate::tests::utils::MockTokenSource;
use crate::token::SdlTokenKind;
use crate::token_source::SdlLexer;
use crate::SdlTokenStream;

/// `peek()` does not advance; `consume()` does.
#[test]
fn peek_then_consume() {
    let source = MockTokenSource::new(vec![
        mock_name_token("a"),
        mock_name_token("b"),
        mock_eof_token(),
    ]);
    let mut stream = SdlTokenStream::new(source);

    assert_eq!(
        stream.peek().map(|t| t.kind.clone()),
        Some(SdlTokenKind::Name("a".to_string())),
    );
    assert_eq!(
        stream.peek().map(|t| t.kind.clone()),
        Some(SdlTokenKind::Name("a".to_string())),
    );
    assert_eq!(
        stream.consume().map(|t| t.kind),
        Some(SdlTokenKind::Name("a".to_string())),
    );
    assert_eq!(
        stream.consume().map(|t| t.kind),
        Some(SdlTokenKind::Name("b".to_string())),
    );
    assert_eq!(stream.consume().map(|t| t.kind), Some(SdlTokenKind::Eof));
}

/// The source is only pulled from when a token is actually needed.
#[test]
fn pulls_tokens_lazily() {
    let mut lexer_stream = SdlTokenStream::new(SdlLexer::from_text("type A", "t.graphql"));
    assert_eq!(
        lexer_stream.consume().map(|t| t.kind),
        Some(SdlTokenKind::Type),
    );
    assert_eq!(
        lexer_stream.peek().map(|t| t.kind.clone()),
        Some(SdlTokenKind::Name("A".to_string())),
    );
    assert_eq!(
        lexer_stream.consume().map(|t| t.kind),
        Some(SdlTokenKind::Name("A".to_string())),
    );
    assert_eq!(lexer_stream.consume().map(|t| t.kind), Some(SdlTokenKind::Eof));
}

/// Peeking and consuming past the end return `None`.
#[test]
fn past_end() {
    let mut stream = SdlTokenStream::new(MockTokenSource::new(vec![mock_eof_token()]));
    assert!(stream.consume().is_some());
    assert!(stream.peek().is_none());
    assert!(stream.consume().is_none());
}
