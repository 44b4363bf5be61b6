//! Token dump
//!
//! One line per token: the kind, then the text quoted and escaped. Whitespace is visible
//! in the output, which makes the listing suitable for snapshot tests.

use crate::php::token::Token;

pub fn dump(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:?} {:?}", t.kind(), t.text()))
        .collect::<Vec<_>>()
        .join("\n")
}
