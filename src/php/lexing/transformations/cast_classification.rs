//! Cast classification
//!
//!     PHP recognizes a cast as `(`, spaces or tabs, a cast type, spaces or tabs, `)`.
//!     Line breaks are not allowed inside the parentheses. The word in that position is
//!     retagged as [TokenKind::CastType]; every other word is reset to an identifier so
//!     that keyword classification can run on a clean slate.
//!
//!     Every historical cast spelling is recognized here, deprecated ones included. Whether a
//!     given spelling is still valid for the host is a fixer decision, not a lexing one.

use crate::php::lexing::common::TokenMapper;
use crate::php::token::keywords::is_cast_type;
use crate::php::token::{Token, TokenKind};

pub struct CastClassificationMapper;

impl TokenMapper for CastClassificationMapper {
    fn map(&mut self, mut tokens: Vec<Token>) -> Vec<Token> {
        for index in 0..tokens.len() {
            if !tokens[index].kind().is_word() {
                continue;
            }
            let kind = if is_cast_type(tokens[index].text()) && in_cast_position(&tokens, index) {
                TokenKind::CastType
            } else {
                TokenKind::Identifier
            };
            tokens[index].set_kind(kind);
        }
        tokens
    }
}

fn in_cast_position(tokens: &[Token], index: usize) -> bool {
    let mut before = index.checked_sub(1);
    if let Some(prev) = before {
        if tokens[prev].is_inline_whitespace() {
            before = prev.checked_sub(1);
        }
    }
    let opens = before.is_some_and(|prev| tokens[prev].kind() == TokenKind::OpenParen);

    let mut after = index + 1;
    if tokens.get(after).is_some_and(Token::is_inline_whitespace) {
        after += 1;
    }
    let closes = tokens
        .get(after)
        .is_some_and(|next| next.kind() == TokenKind::CloseParen);

    opens && closes
}
