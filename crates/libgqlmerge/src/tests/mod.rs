mod lexer_tests;
mod sdl_error_tests;
mod serializer_tests;
mod token_stream_tests;
mod utils;
