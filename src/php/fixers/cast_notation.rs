//! Cast notation fixers
//!
//! Rules that normalize how type casts are written. They all work on
//! [TokenKind::CastType](crate::php::token::TokenKind::CastType) tokens, which the lexer
//! only produces for a word between `(` and `)` with nothing but spaces or tabs around it.

pub mod cast_spaces;
pub mod lowercase_cast;
pub mod no_short_bool_cast;
pub mod short_scalar_cast;

pub use cast_spaces::CastSpacesFixer;
pub use lowercase_cast::LowercaseCastFixer;
pub use no_short_bool_cast::NoShortBoolCastFixer;
pub use short_scalar_cast::{CastAlias, ShortScalarCastFixer, CAST_ALIASES};

use crate::php::pipeline::HostVersion;
use crate::php::token::TokenKind;
use crate::php::tokens::Tokens;

/// Cast spellings the language dropped, with the version that dropped them. On such a host
/// the parenthesized word is no longer a cast and the cast fixers leave it alone.
const REMOVED_CASTS: &[(&str, HostVersion)] = &[
    ("real", HostVersion::PHP_8_0),
    ("unset", HostVersion::PHP_8_0),
];

/// Whether `word` is still a cast on `host`.
pub fn is_cast_available(word: &str, host: HostVersion) -> bool {
    !REMOVED_CASTS
        .iter()
        .any(|(removed, since)| word.eq_ignore_ascii_case(removed) && host >= *since)
}

/// Index of the `)` closing the cast whose type token sits at `index`.
fn closing_paren(tokens: &Tokens, index: usize) -> Option<usize> {
    let mut close = index + 1;
    if tokens.get(close).ok()?.is_inline_whitespace() {
        close += 1;
    }
    match tokens.get(close) {
        Ok(token) if token.kind() == TokenKind::CloseParen => Some(close),
        _ => None,
    }
}
