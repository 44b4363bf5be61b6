//! Lexer
//!
//!     This module orchestrates the complete tokenization of PHP source. Base tokenization
//!     produces raw tokens with their byte ranges, then the lexing pipeline runs its
//!     classification mappers one by one, each receiving a token vector and returning one.
//!
//! Losslessness
//!
//!     Tokenization is a total function over text. Spans the logos lexer cannot match become
//!     [TokenKind::Unknown] tokens instead of errors, and the mode driver fills any gap, so
//!     that rendering a freshly lexed sequence always returns the input unchanged. It is
//!     critical that this be left as is: fixers rely on untouched tokens rendering to the
//!     exact bytes they were lexed from.
//!
//! The Lexing Pipeline
//!
//!     The pipeline consists of:
//!         1. Base tokenization. See [base_tokenization](base_tokenization). Inline HTML,
//!            open and close tags are handled by the mode driver, code by logos.
//!
//!         2. Cast classification. See
//!            [cast_classification](transformations::cast_classification).
//!
//!         3. Keyword classification. See
//!            [keyword_classification](transformations::keyword_classification).
//!
//!     Stages 2 and 3 also run after every flushed changeset, see [classify].
//!
//! [TokenKind::Unknown]: crate::php::token::TokenKind::Unknown

pub mod base_tokenization;
pub mod common;
pub mod pipeline;
pub mod transformations;

pub use common::{LexError, TokenMapper};
pub use pipeline::LexingPipeline;

use crate::php::token::Token;
use crate::php::tokens::Tokens;

/// Lex source text into a classified token sequence.
pub fn tokenize(source: &str) -> Tokens {
    Tokens::from_classified(classify(base_tokenization::tokenize(source)))
}

/// Lex raw bytes. Fails only when the bytes are not UTF-8.
pub fn tokenize_bytes(source: &[u8]) -> Result<Tokens, LexError> {
    let text = std::str::from_utf8(source).map_err(|e| LexError::InvalidEncoding {
        valid_up_to: e.valid_up_to(),
    })?;
    Ok(tokenize(text))
}

/// Run the classification stages over a token vector.
pub fn classify(tokens: Vec<Token>) -> Vec<Token> {
    LexingPipeline::standard().run(tokens)
}
