//! Output formats for token sequences
//!
//! - Source text, the inverse of lexing (renderer)
//! - A one-token-per-line listing used by snapshot tests and debugging (token_dump)

pub mod renderer;
pub mod token_dump;

pub use renderer::render;
pub use token_dump::dump;
