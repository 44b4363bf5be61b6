//! Whitespace fixers

pub mod no_trailing_whitespace;

pub use no_trailing_whitespace::NoTrailingWhitespaceFixer;
