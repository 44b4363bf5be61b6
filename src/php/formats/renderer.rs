//! Renderer
//!
//! Serializes tokens back to source text. Rendering is plain concatenation: whatever
//! layout the tokens carry is the layout of the output, so a sequence no fixer touched
//! renders to exactly the bytes it was lexed from.

use crate::php::token::Token;

pub fn render(tokens: &[Token]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.text().len()).sum());
    for token in tokens {
        result.push_str(token.text());
    }
    result
}
