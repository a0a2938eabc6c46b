//! Token sources: iterators that turn SDL text into [`SdlToken`](crate::token::SdlToken)s.

mod sdl_lexer;
mod sdl_token_source;

pub use sdl_lexer::SdlLexer;
pub use sdl_token_source::SdlTokenSource;
