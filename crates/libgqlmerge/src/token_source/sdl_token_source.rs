use crate::token::SdlToken;

/// Marker trait for [`SdlToken`] lexers (iterators that generate
/// [`SdlToken`]).
///
/// Implementors define an [`Iterator`] that produces tokens one at a time.
/// All lookahead, buffering, and peeking is handled by
/// [`SdlTokenStream`](crate::SdlTokenStream).
///
/// Lexers are responsible for:
/// - Skipping whitespace
/// - Emitting comments as [`SdlTokenKind::LineComment`](crate::token::SdlTokenKind::LineComment)
///   tokens
/// - Emitting [`SdlTokenKind::Error`](crate::token::SdlTokenKind::Error) for lexer errors
/// - Emitting a final [`SdlTokenKind::Eof`](crate::token::SdlTokenKind::Eof) token
pub trait SdlTokenSource: Iterator<Item = SdlToken> {}

impl<T> SdlTokenSource for T where T: Iterator<Item = SdlToken> {}
