//! One-token lookahead over the [`SdlToken`]s of some [`SdlTokenSource`].

use crate::token::SdlToken;
use crate::token_source::SdlTokenSource;

/// Pulls tokens from a source on demand, holding at most one token that has
/// been peeked but not yet consumed.
///
/// SDL never needs more than one token of lookahead: every construct is
/// decided by its leading keyword or punctuator.
pub struct SdlTokenStream<TTokenSource: SdlTokenSource> {
    token_source: TTokenSource,
    peeked: Option<SdlToken>,
}

impl<TTokenSource: SdlTokenSource> SdlTokenStream<TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            peeked: None,
        }
    }

    /// The next token, without consuming it. `None` once the source is
    /// exhausted.
    pub fn peek(&mut self) -> Option<&SdlToken> {
        if self.peeked.is_none() {
            self.peeked = self.token_source.next();
        }
        self.peeked.as_ref()
    }

    /// Takes the next token, whether or not it was peeked first.
    pub fn consume(&mut self) -> Option<SdlToken> {
        self.peeked.take().or_else(|| self.token_source.next())
    }
}
