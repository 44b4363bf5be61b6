//! Cast spaces
//!
//! Controls the whitespace between a cast and the expression it applies to. With
//! `space = "single"` there is exactly one space after the closing parenthesis, with
//! `space = "none"` there is none. Whitespace that spans a line break is left alone.

use crate::php::fixers::cast_notation::{closing_paren, is_cast_available};
use crate::php::fixers::{FixContext, Fixer, OptionDefault, OptionSpec};
use crate::php::token::{Token, TokenKind};
use crate::php::tokens::{Changeset, IndexError, Tokens};

const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "space",
    description: "Spacing to apply between cast and variable.",
    default: OptionDefault::Str("single"),
    allowed: &["single", "none"],
}];

pub struct CastSpacesFixer;

impl Fixer for CastSpacesFixer {
    fn name(&self) -> &'static str {
        "cast_spaces"
    }

    fn description(&self) -> &'static str {
        "A single space or none should be between cast and variable."
    }

    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn is_candidate(&self, tokens: &Tokens) -> bool {
        tokens.has_kind(TokenKind::CastType)
    }

    fn fix(&self, tokens: &Tokens, ctx: &mut FixContext<'_>) -> Result<Changeset, IndexError> {
        let single = ctx.options().str("space") != Some("none");
        let mut changeset = Changeset::new();

        for index in tokens.find_kinds(&[TokenKind::CastType]) {
            if !is_cast_available(tokens.get(index)?.text(), ctx.host_version()) {
                continue;
            }
            let Some(close) = closing_paren(tokens, index) else {
                continue;
            };
            let after = close + 1;
            let Ok(next) = tokens.get(after) else {
                continue;
            };

            if next.is_whitespace() {
                if next.contains_newline() {
                    continue;
                }
                if !single {
                    changeset.remove(after..after + 1);
                } else if next.text() != " " {
                    changeset.replace(after, next.with_text(" "));
                }
            } else if single && !matches!(next.kind(), TokenKind::CloseTag | TokenKind::InlineHtml)
            {
                changeset.insert(after, vec![Token::new(TokenKind::Whitespace, " ")]);
            }
        }
        Ok(changeset)
    }
}
