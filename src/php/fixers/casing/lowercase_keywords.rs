//! Lowercase keywords
//!
//! Reserved words are written in lowercase: `ECHO` becomes `echo`. Words used as names
//! are skipped: member and constant names (already identifiers after classification),
//! segments of a qualified name such as `Foo\List`, and named arguments.

use crate::php::fixers::{FixContext, Fixer};
use crate::php::token::TokenKind;
use crate::php::tokens::{Changeset, IndexError, Tokens};

pub struct LowercaseKeywordsFixer;

impl Fixer for LowercaseKeywordsFixer {
    fn name(&self) -> &'static str {
        "lowercase_keywords"
    }

    fn description(&self) -> &'static str {
        "PHP keywords must be in lower case."
    }

    fn is_candidate(&self, tokens: &Tokens) -> bool {
        tokens.has_kind(TokenKind::Keyword)
    }

    fn fix(&self, tokens: &Tokens, _ctx: &mut FixContext<'_>) -> Result<Changeset, IndexError> {
        let mut changeset = Changeset::new();
        for index in tokens.find_kinds(&[TokenKind::Keyword]) {
            let token = tokens.get(index)?;
            let lower = token.text().to_ascii_lowercase();
            if lower == token.text() || is_qualified(tokens, index) || is_named_argument(tokens, index)
            {
                continue;
            }
            changeset.replace(index, token.with_text(lower));
        }
        Ok(changeset)
    }
}

fn is_qualified(tokens: &Tokens, index: usize) -> bool {
    let separator = |i: usize| {
        tokens
            .get(i)
            .is_ok_and(|t| t.kind() == TokenKind::NsSeparator)
    };
    index.checked_sub(1).is_some_and(separator) || separator(index + 1)
}

fn is_named_argument(tokens: &Tokens, index: usize) -> bool {
    let colon = tokens
        .next_meaningful(index)
        .and_then(|i| tokens.get(i).ok())
        .is_some_and(|t| t.is(TokenKind::Operator, ":"));
    let in_arguments = tokens
        .prev_meaningful(index)
        .and_then(|i| tokens.get(i).ok())
        .is_some_and(|t| matches!(t.kind(), TokenKind::OpenParen | TokenKind::Comma));
    colon && in_arguments
}
