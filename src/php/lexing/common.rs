//! Common lexer module
//!
//! Errors and the mapper interface shared by the lexing stages.

use crate::php::token::Token;
use std::fmt;

/// Errors that can occur during lexing
///
/// Text never fails to lex: unrecognized spans become unknown tokens. The only failure is
/// input that is not text at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Byte input that is not valid UTF-8
    InvalidEncoding { valid_up_to: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidEncoding { valid_up_to } => {
                write!(f, "Input is not valid UTF-8 (valid up to byte {})", valid_up_to)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// A transformation over a lexed token vector.
///
/// Mappers run after base tokenization and again after every flushed changeset, so they
/// must recompute their result from the tokens alone: running a mapper on its own output
/// changes nothing.
pub trait TokenMapper {
    fn map(&mut self, tokens: Vec<Token>) -> Vec<Token>;
}
