//! This module provides the core token types produced by SDL token sources
//! and consumed by the parser.

mod sdl_token;
mod sdl_token_kind;

pub use sdl_token::SdlToken;
pub use sdl_token_kind::SdlTokenKind;
