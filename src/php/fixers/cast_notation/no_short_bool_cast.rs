//! No short bool cast
//!
//! Double negation used as a boolean cast is written as an explicit cast: `!!$a` becomes
//! `(bool)$a`. Negations separated only by whitespace count as adjacent. Runs of `!` are
//! paired from the operand outwards, so an odd leading `!` stays a negation:
//! `!!!$a` becomes `!(bool)$a`.

use crate::php::fixers::{FixContext, Fixer};
use crate::php::token::{Token, TokenKind};
use crate::php::tokens::{Changeset, IndexError, Tokens};

pub struct NoShortBoolCastFixer;

fn is_not(token: &Token) -> bool {
    token.is(TokenKind::Operator, "!")
}

fn bool_cast() -> Vec<Token> {
    vec![
        Token::new(TokenKind::OpenParen, "("),
        Token::new(TokenKind::CastType, "bool"),
        Token::new(TokenKind::CloseParen, ")"),
    ]
}

impl Fixer for NoShortBoolCastFixer {
    fn name(&self) -> &'static str {
        "no_short_bool_cast"
    }

    fn description(&self) -> &'static str {
        "Short cast `bool` using double exclamation mark should not be used."
    }

    fn priority(&self) -> i32 {
        20
    }

    fn is_candidate(&self, tokens: &Tokens) -> bool {
        tokens.iter().filter(|t| is_not(t)).nth(1).is_some()
    }

    fn fix(&self, tokens: &Tokens, _ctx: &mut FixContext<'_>) -> Result<Changeset, IndexError> {
        let mut changeset = Changeset::new();
        let mut index = tokens.len();
        while index > 0 {
            index -= 1;
            if !is_not(tokens.get(index)?) {
                continue;
            }
            let Some(previous) = tokens.prev_non_whitespace(index) else {
                continue;
            };
            if is_not(tokens.get(previous)?) {
                changeset.replace_range(previous..index + 1, bool_cast());
                index = previous;
            }
        }
        Ok(changeset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::php::testing::{assert_fix, assert_unchanged};

    #[test]
    fn test_double_negation() {
        assert_fix(&NoShortBoolCastFixer, "<?php $a = !!$b;", "<?php $a = (bool)$b;");
        assert_fix(&NoShortBoolCastFixer, "<?php $a = ! ! $b;", "<?php $a = (bool) $b;");
    }

    #[test]
    fn test_odd_runs_keep_leading_negation() {
        assert_fix(&NoShortBoolCastFixer, "<?php $a = !!!$b;", "<?php $a = !(bool)$b;");
        assert_fix(
            &NoShortBoolCastFixer,
            "<?php $a = !!!!$b;",
            "<?php $a = (bool)(bool)$b;",
        );
    }

    #[test]
    fn test_single_negation_untouched() {
        assert_unchanged(&NoShortBoolCastFixer, "<?php $a = !$b; $c = $d != !$e;");
        assert_unchanged(&NoShortBoolCastFixer, "<?php $a = ! /* no */ !$b;");
        assert_unchanged(&NoShortBoolCastFixer, "<?php $s = '!!';");
    }
}
