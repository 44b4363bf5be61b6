//! Short scalar cast
//!
//!     Rewrites the long spellings of scalar casts to their canonical short form:
//!     `(boolean)` to `(bool)`, `(integer)` to `(int)`, `(double)` to `(float)` and
//!     `(binary)` to `(string)`. Only the type word changes; the parentheses and any
//!     whitespace inside them are kept byte for byte.
//!
//!     `(real)` is also rewritten to `(float)` while the host still accepts it, with a
//!     deprecation advisory. From 8.0.0 on `(real)` is not a cast anymore and the fixer
//!     does not touch it.

use crate::php::fixers::{FixContext, Fixer};
use crate::php::pipeline::HostVersion;
use crate::php::token::TokenKind;
use crate::php::tokens::{Changeset, IndexError, Tokens};

/// A non-canonical cast spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastAlias {
    pub alias: &'static str,
    pub canonical: &'static str,
    /// First host version that no longer parses the alias as a cast
    pub removed_in: Option<HostVersion>,
}

impl CastAlias {
    pub fn is_accepted_by(&self, host: HostVersion) -> bool {
        self.removed_in.map_or(true, |removed| host < removed)
    }

    pub fn is_deprecated(&self) -> bool {
        self.removed_in.is_some()
    }
}

pub const CAST_ALIASES: &[CastAlias] = &[
    CastAlias {
        alias: "boolean",
        canonical: "bool",
        removed_in: None,
    },
    CastAlias {
        alias: "integer",
        canonical: "int",
        removed_in: None,
    },
    CastAlias {
        alias: "double",
        canonical: "float",
        removed_in: None,
    },
    CastAlias {
        alias: "binary",
        canonical: "string",
        removed_in: None,
    },
    CastAlias {
        alias: "real",
        canonical: "float",
        removed_in: Some(HostVersion::PHP_8_0),
    },
];

fn lookup(word: &str) -> Option<&'static CastAlias> {
    CAST_ALIASES
        .iter()
        .find(|entry| word.eq_ignore_ascii_case(entry.alias))
}

pub struct ShortScalarCastFixer;

impl Fixer for ShortScalarCastFixer {
    fn name(&self) -> &'static str {
        "short_scalar_cast"
    }

    fn description(&self) -> &'static str {
        "Cast `(boolean)` and `(integer)` should be written as `(bool)` and `(int)`, `(double)` and `(real)` as `(float)`, `(binary)` as `(string)`."
    }

    fn priority(&self) -> i32 {
        10
    }

    fn is_candidate(&self, tokens: &Tokens) -> bool {
        tokens.has_kind(TokenKind::CastType)
    }

    fn fix(&self, tokens: &Tokens, ctx: &mut FixContext<'_>) -> Result<Changeset, IndexError> {
        let mut changeset = Changeset::new();
        for index in tokens.find_kinds(&[TokenKind::CastType]) {
            let token = tokens.get(index)?;
            let Some(alias) = lookup(token.text()) else {
                continue;
            };
            if !alias.is_accepted_by(ctx.host_version()) {
                tracing::trace!(alias = alias.alias, "cast alias not valid on host, skipping");
                continue;
            }
            if alias.is_deprecated() {
                ctx.deprecated(
                    format!(
                        "The ({}) cast is deprecated, use ({}) instead",
                        alias.alias, alias.canonical
                    ),
                    token.span().start,
                );
            }
            changeset.replace(index, token.with_text(alias.canonical));
        }
        Ok(changeset)
    }
}
