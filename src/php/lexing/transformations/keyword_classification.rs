//! Keyword classification
//!
//!     Reserved words become [TokenKind::Keyword], case-insensitively. A reserved word used as
//!     a member or method name (after `->`, `?->`, `::`, `function` or `const`) stays an
//!     identifier, as it does for PHP itself.
//!
//!     `enum` is a soft keyword. It is a keyword only where it opens a declaration
//!     (`enum Name {` or `enum Name: string {`); anywhere else it is a name.

use crate::php::lexing::common::TokenMapper;
use crate::php::token::keywords::is_reserved;
use crate::php::token::{Token, TokenKind};

pub struct KeywordClassificationMapper;

impl TokenMapper for KeywordClassificationMapper {
    fn map(&mut self, mut tokens: Vec<Token>) -> Vec<Token> {
        let mut previous: Option<usize> = None;
        for index in 0..tokens.len() {
            let token = &tokens[index];
            if token.is_trivia() {
                continue;
            }
            if matches!(token.kind(), TokenKind::Identifier | TokenKind::Keyword) {
                let keyword = is_reserved(token.text()) || opens_enum(&tokens, index);
                let kind = if keyword && !names_a_member(&tokens, previous) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                tokens[index].set_kind(kind);
            }
            previous = Some(index);
        }
        tokens
    }
}

fn opens_enum(tokens: &[Token], index: usize) -> bool {
    if !tokens[index].text().eq_ignore_ascii_case("enum") {
        return false;
    }
    let mut following = tokens[index + 1..].iter().filter(|t| !t.is_trivia());
    let names = following
        .next()
        .is_some_and(|t| matches!(t.kind(), TokenKind::Identifier | TokenKind::Keyword));
    names
        && following
            .next()
            .is_some_and(|t| t.kind() == TokenKind::OpenBrace || t.is(TokenKind::Operator, ":"))
}

fn names_a_member(tokens: &[Token], previous: Option<usize>) -> bool {
    let Some(prev) = previous.map(|i| &tokens[i]) else {
        return false;
    };
    match prev.kind() {
        TokenKind::Operator => matches!(prev.text(), "->" | "?->" | "::"),
        TokenKind::Keyword | TokenKind::Identifier => {
            prev.text().eq_ignore_ascii_case("function") || prev.text().eq_ignore_ascii_case("const")
        }
        _ => false,
    }
}
