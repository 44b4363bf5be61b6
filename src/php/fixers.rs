//! Fixers
//!
//!     A fixer implements one rewrite concern. It looks at a token sequence, decides whether
//!     it has anything to do ([Fixer::is_candidate]) and, if so, returns the edits it wants
//!     as a [Changeset]. Fixers never mutate the sequence themselves; the runner applies
//!     the changeset once `fix` returns.
//!
//! Contract
//!
//!     - Idempotent: fixing a fixer's own output produces an empty changeset.
//!     - Conservative: tokens outside the documented pattern are never edited, whitespace
//!       and comments included.
//!     - Stateless: fixers are shared read-only across threads. Everything that varies per
//!       run (host version, options, advisories) comes in through [FixContext].
//!
//! Catalog
//!
//!     cast_notation: no_short_bool_cast, lowercase_cast, short_scalar_cast, cast_spaces
//!     casing: lowercase_keywords
//!     whitespace: no_trailing_whitespace

pub mod casing;
pub mod cast_notation;
pub mod options;
pub mod whitespace;

pub use options::{OptionDefault, OptionError, OptionSpec, OptionValue, RuleOptions};

use crate::php::pipeline::{Advisory, AdvisoryKind, HostVersion};
use crate::php::tokens::{Changeset, IndexError, Tokens};
use std::sync::Arc;

/// A single rewrite rule
pub trait Fixer: Send + Sync {
    /// Unique snake_case name used in configuration
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Higher priorities run first within a pass.
    fn priority(&self) -> i32 {
        0
    }

    fn options(&self) -> &'static [OptionSpec] {
        &[]
    }

    /// Cheap pre-filter. A fixer that is not a candidate is not run for the pass.
    fn is_candidate(&self, tokens: &Tokens) -> bool;

    fn fix(&self, tokens: &Tokens, ctx: &mut FixContext<'_>) -> Result<Changeset, IndexError>;
}

/// Per-invocation view of the run a fixer is part of
pub struct FixContext<'a> {
    rule: &'static str,
    host_version: HostVersion,
    options: &'a RuleOptions,
    advisories: &'a mut Vec<Advisory>,
}

impl<'a> FixContext<'a> {
    pub fn new(
        rule: &'static str,
        host_version: HostVersion,
        options: &'a RuleOptions,
        advisories: &'a mut Vec<Advisory>,
    ) -> Self {
        Self {
            rule,
            host_version,
            options,
            advisories,
        }
    }

    pub fn host_version(&self) -> HostVersion {
        self.host_version
    }

    pub fn options(&self) -> &RuleOptions {
        self.options
    }

    /// Report a deprecated form the fixer accepted and rewrote.
    pub fn deprecated(&mut self, message: impl Into<String>, offset: usize) {
        let message = message.into();
        tracing::warn!(rule = self.rule, offset, host = %self.host_version, "{}", message);
        self.advisories.push(Advisory {
            kind: AdvisoryKind::Deprecated,
            rule: self.rule.to_string(),
            message,
            offset,
        });
    }
}

/// The fixers available to a run, in declaration order
///
/// Declaration order is the tie-break between fixers of equal priority.
#[derive(Clone, Default)]
pub struct FixerRegistry {
    fixers: Vec<Arc<dyn Fixer>>,
}

impl FixerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in catalog.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(cast_notation::NoShortBoolCastFixer);
        registry.register(cast_notation::LowercaseCastFixer);
        registry.register(cast_notation::ShortScalarCastFixer);
        registry.register(cast_notation::CastSpacesFixer);
        registry.register(casing::LowercaseKeywordsFixer);
        registry.register(whitespace::NoTrailingWhitespaceFixer);
        registry
    }

    /// Add a fixer. A fixer with the same name is replaced in place.
    pub fn register<F: Fixer + 'static>(&mut self, fixer: F) {
        let fixer: Arc<dyn Fixer> = Arc::new(fixer);
        match self.position(fixer.name()) {
            Some(index) => self.fixers[index] = fixer,
            None => self.fixers.push(fixer),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Fixer>> {
        self.entry(name).map(|(_, fixer)| fixer)
    }

    /// Declaration index and fixer, found in one lookup.
    pub fn entry(&self, name: &str) -> Option<(usize, Arc<dyn Fixer>)> {
        let index = self.position(name)?;
        Some((index, Arc::clone(&self.fixers[index])))
    }

    /// Declaration index of a fixer.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fixers.iter().position(|f| f.name() == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.fixers.iter().map(|f| f.name()).collect()
    }

    /// Name and description of every fixer.
    pub fn list_all(&self) -> Vec<(&'static str, &'static str)> {
        self.fixers
            .iter()
            .map(|f| (f.name(), f.description()))
            .collect()
    }
}

impl std::fmt::Debug for FixerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
