//! Lowercase cast
//!
//! Cast types are written in lowercase: `(INT)` becomes `(int)`. Spellings the host no
//! longer treats as casts are left as they are, since they now name a constant.

use crate::php::fixers::cast_notation::is_cast_available;
use crate::php::fixers::{FixContext, Fixer};
use crate::php::token::TokenKind;
use crate::php::tokens::{Changeset, IndexError, Tokens};

pub struct LowercaseCastFixer;

impl Fixer for LowercaseCastFixer {
    fn name(&self) -> &'static str {
        "lowercase_cast"
    }

    fn description(&self) -> &'static str {
        "Cast should be written in lower case."
    }

    fn priority(&self) -> i32 {
        15
    }

    fn is_candidate(&self, tokens: &Tokens) -> bool {
        tokens.has_kind(TokenKind::CastType)
    }

    fn fix(&self, tokens: &Tokens, ctx: &mut FixContext<'_>) -> Result<Changeset, IndexError> {
        let mut changeset = Changeset::new();
        for index in tokens.find_kinds(&[TokenKind::CastType]) {
            let token = tokens.get(index)?;
            let lower = token.text().to_ascii_lowercase();
            if lower != token.text() && is_cast_available(&lower, ctx.host_version()) {
                changeset.replace(index, token.with_text(lower));
            }
        }
        Ok(changeset)
    }
}
