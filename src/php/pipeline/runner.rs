//! Runner
//!
//!     A [Runner] is built once from a registry and a run configuration, then reused for any
//!     number of sources, from any number of threads. Building resolves everything that can
//!     be wrong with the configuration: unknown rule names, bad options, a zero pass bound.
//!
//! The pass loop
//!
//!     Each pass runs every enabled fixer, highest priority first, equal priorities in
//!     registry declaration order. A fixer runs only if it is a candidate for the sequence
//!     as it is at that moment, and its changeset is applied before the next fixer looks.
//!     After the pass the rendered text is compared with the text before it: no change
//!     means a fixed point was reached. If the text still changed on the last allowed pass
//!     the run fails with [FixError::NonConvergence], carrying the partial result.

use crate::php::fixers::{FixContext, Fixer, FixerRegistry, RuleOptions};
use crate::php::lexing;
use crate::php::pipeline::config::RunConfig;
use crate::php::pipeline::error::FixError;
use crate::php::pipeline::host_version::HostVersion;
use crate::php::pipeline::report::{Advisory, FixReport};
use crate::php::tokens::Tokens;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, trace, warn};

struct ConfiguredFixer {
    fixer: Arc<dyn Fixer>,
    options: RuleOptions,
}

/// Ephemeral state of one run
#[derive(Debug, Default)]
struct RunContext {
    passes: usize,
    applied: Vec<String>,
    advisories: Vec<Advisory>,
}

impl RunContext {
    fn record(&mut self, name: &str) {
        if !self.applied.iter().any(|applied| applied == name) {
            self.applied.push(name.to_string());
        }
    }
}

/// The enabled fixers of a run configuration, resolved and ordered
pub struct Runner {
    fixers: Vec<ConfiguredFixer>,
    host_version: HostVersion,
    max_passes: usize,
}

impl Runner {
    pub fn build(registry: &FixerRegistry, config: &RunConfig) -> Result<Self, FixError> {
        if config.max_passes == 0 {
            return Err(FixError::InvalidMaxPasses(config.max_passes));
        }

        let mut fixers = Vec::with_capacity(config.rules.len());
        for (name, overrides) in &config.rules {
            let (position, fixer) = registry
                .entry(name)
                .ok_or_else(|| FixError::UnknownRule(name.clone()))?;
            let options = RuleOptions::resolve(fixer.options(), overrides).map_err(|e| {
                FixError::InvalidOption {
                    rule: name.clone(),
                    option: e.option,
                    message: e.message,
                }
            })?;
            fixers.push((position, ConfiguredFixer { fixer, options }));
        }
        fixers.sort_by_key(|(position, configured)| {
            (Reverse(configured.fixer.priority()), *position)
        });

        let runner = Self {
            fixers: fixers.into_iter().map(|(_, configured)| configured).collect(),
            host_version: config.host_version,
            max_passes: config.max_passes,
        };
        debug!(
            fixers = ?runner.fixer_names(),
            host = %runner.host_version,
            max_passes = runner.max_passes,
            "runner built"
        );
        Ok(runner)
    }

    /// Enabled fixers in the order they run.
    pub fn fixer_names(&self) -> Vec<&'static str> {
        self.fixers.iter().map(|c| c.fixer.name()).collect()
    }

    pub fn host_version(&self) -> HostVersion {
        self.host_version
    }

    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    pub fn run(&self, source: &str) -> Result<FixReport, FixError> {
        let mut tokens = lexing::tokenize(source);
        self.fix_tokens(&mut tokens)
    }

    /// Like [Runner::run] for byte input, failing on invalid UTF-8.
    pub fn run_bytes(&self, source: &[u8]) -> Result<FixReport, FixError> {
        let mut tokens = lexing::tokenize_bytes(source)?;
        self.fix_tokens(&mut tokens)
    }

    /// Run the pass loop on an existing sequence, leaving it at the fixed point.
    pub fn fix_tokens(&self, tokens: &mut Tokens) -> Result<FixReport, FixError> {
        let original = tokens.render();
        let mut ctx = RunContext::default();
        let mut before = original.clone();

        loop {
            ctx.passes += 1;
            debug!(pass = ctx.passes, "starting pass");
            self.run_pass(tokens, &mut ctx)?;

            let after = tokens.render();
            if after == before {
                break;
            }
            if ctx.passes >= self.max_passes {
                warn!(
                    passes = ctx.passes,
                    applied = ?ctx.applied,
                    "no fixed point reached"
                );
                return Err(FixError::NonConvergence {
                    passes: ctx.passes,
                    applied: ctx.applied,
                    partial: after,
                });
            }
            before = after;
        }

        debug!(passes = ctx.passes, applied = ?ctx.applied, "fixed point reached");
        Ok(FixReport {
            changed: before != original,
            output: before,
            applied: ctx.applied,
            advisories: ctx.advisories,
            passes: ctx.passes,
        })
    }

    fn run_pass(&self, tokens: &mut Tokens, ctx: &mut RunContext) -> Result<(), FixError> {
        for configured in &self.fixers {
            let fixer = configured.fixer.as_ref();
            if !fixer.is_candidate(tokens) {
                trace!(fixer = fixer.name(), "not a candidate");
                continue;
            }
            let mut fix_ctx = FixContext::new(
                fixer.name(),
                self.host_version,
                &configured.options,
                &mut ctx.advisories,
            );
            let changeset = fixer.fix(tokens, &mut fix_ctx)?;
            if changeset.is_empty() {
                continue;
            }
            let outcome = tokens.apply(changeset)?;
            debug!(
                fixer = fixer.name(),
                applied = outcome.applied,
                deferred = outcome.deferred,
                "changeset applied"
            );
            ctx.record(fixer.name());
        }
        Ok(())
    }
}

/// Apply a single fixer once, outside of any runner.
///
/// `options` are overrides checked against the fixer's schema. Returns the advisories the
/// fixer raised.
pub fn apply_fixer(
    tokens: &mut Tokens,
    fixer: &dyn Fixer,
    options: &RuleOptions,
    host_version: HostVersion,
) -> Result<Vec<Advisory>, FixError> {
    let options = RuleOptions::resolve(fixer.options(), options).map_err(|e| {
        FixError::InvalidOption {
            rule: fixer.name().to_string(),
            option: e.option,
            message: e.message,
        }
    })?;
    let mut advisories = Vec::new();
    if fixer.is_candidate(tokens) {
        let mut ctx = FixContext::new(fixer.name(), host_version, &options, &mut advisories);
        let changeset = fixer.fix(tokens, &mut ctx)?;
        tokens.apply(changeset)?;
    }
    Ok(advisories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::php::fixers::cast_notation::ShortScalarCastFixer;
    use crate::php::token::TokenKind;
    use crate::php::tokens::{Changeset, IndexError};

    /// Swaps `$a` and `$b` forever.
    struct Swap;

    impl Fixer for Swap {
        fn name(&self) -> &'static str {
            "swap"
        }

        fn description(&self) -> &'static str {
            "Swaps two variables"
        }

        fn is_candidate(&self, tokens: &Tokens) -> bool {
            tokens.has_kind(TokenKind::Variable)
        }

        fn fix(&self, tokens: &Tokens, _: &mut FixContext<'_>) -> Result<Changeset, IndexError> {
            let mut changeset = Changeset::new();
            for index in tokens.find_kinds(&[TokenKind::Variable]) {
                let token = tokens.get(index)?;
                match token.text() {
                    "$a" => changeset.replace(index, token.with_text("$b")),
                    "$b" => changeset.replace(index, token.with_text("$a")),
                    _ => {}
                }
            }
            Ok(changeset)
        }
    }

    /// Points one past the end of the sequence.
    struct OutOfRange;

    impl Fixer for OutOfRange {
        fn name(&self) -> &'static str {
            "out_of_range"
        }

        fn description(&self) -> &'static str {
            "Edits past the end"
        }

        fn is_candidate(&self, _: &Tokens) -> bool {
            true
        }

        fn fix(&self, tokens: &Tokens, _: &mut FixContext<'_>) -> Result<Changeset, IndexError> {
            let mut changeset = Changeset::new();
            changeset.remove(tokens.len()..tokens.len() + 1);
            Ok(changeset)
        }
    }

    fn defaults() -> FixerRegistry {
        FixerRegistry::with_defaults()
    }

    #[test]
    fn test_orders_by_priority_then_declaration() {
        let runner = Runner::build(&defaults(), &RunConfig::all(&defaults())).expect("valid");
        assert_eq!(
            runner.fixer_names(),
            vec![
                "no_short_bool_cast",
                "lowercase_cast",
                "short_scalar_cast",
                "cast_spaces",
                "lowercase_keywords",
                "no_trailing_whitespace",
            ]
        );
    }

    #[test]
    fn test_unknown_rule() {
        let config = RunConfig::new().with_rule("no_such_rule");
        assert_eq!(
            Runner::build(&defaults(), &config).err(),
            Some(FixError::UnknownRule("no_such_rule".to_string()))
        );
    }

    #[test]
    fn test_invalid_option() {
        let config = RunConfig::new()
            .with_rule_options("cast_spaces", RuleOptions::new().with("space", "double"));
        let error = Runner::build(&defaults(), &config).err();
        assert!(matches!(
            error,
            Some(FixError::InvalidOption { ref rule, ref option, .. })
                if rule == "cast_spaces" && option == "space"
        ));
    }

    #[test]
    fn test_zero_max_passes() {
        let config = RunConfig::new().with_max_passes(0);
        assert_eq!(
            Runner::build(&defaults(), &config).err(),
            Some(FixError::InvalidMaxPasses(0))
        );
    }

    #[test]
    fn test_no_rules_is_identity() {
        let runner = Runner::build(&defaults(), &RunConfig::new()).expect("valid");
        let report = runner.run("<?php echo ( boolean  )$a;").expect("converges");
        assert_eq!(report.output, "<?php echo ( boolean  )$a;");
        assert!(!report.changed);
        assert!(report.applied.is_empty());
        assert_eq!(report.passes, 1);
    }

    #[test]
    fn test_rules_feed_each_other_within_a_pass() {
        let runner = Runner::build(&defaults(), &RunConfig::all(&defaults())).expect("valid");
        let report = runner.run("<?php $x = (BOOLEAN)$y;").expect("converges");
        assert_eq!(report.output, "<?php $x = (bool) $y;");
        assert_eq!(
            report.applied,
            vec!["lowercase_cast", "short_scalar_cast", "cast_spaces"]
        );
        assert_eq!(report.passes, 2);
        assert!(report.changed);
    }

    #[test]
    fn test_non_convergence_is_reported() {
        let mut registry = defaults();
        registry.register(Swap);
        let config = RunConfig::new().with_rule("swap").with_max_passes(3);
        let runner = Runner::build(&registry, &config).expect("valid");
        match runner.run("<?php $a;") {
            Err(FixError::NonConvergence {
                passes,
                applied,
                partial,
            }) => {
                assert_eq!(passes, 3);
                assert_eq!(applied, vec!["swap"]);
                assert_eq!(partial, "<?php $b;");
            }
            other => panic!("expected non-convergence, got {:?}", other),
        }
    }

    #[test]
    fn test_index_errors_propagate() {
        let mut registry = defaults();
        registry.register(OutOfRange);
        let config = RunConfig::new().with_rule("out_of_range");
        let runner = Runner::build(&registry, &config).expect("valid");
        assert!(matches!(
            runner.run("<?php $a;"),
            Err(FixError::Index(IndexError { index: 4, len: 3 }))
        ));
    }

    #[test]
    fn test_run_bytes_rejects_invalid_utf8() {
        let runner = Runner::build(&defaults(), &RunConfig::all(&defaults())).expect("valid");
        assert!(matches!(runner.run_bytes(b"<?php \xfe"), Err(FixError::Lex(_))));
    }

    #[test]
    fn test_apply_fixer_single_application() {
        let mut tokens = lexing::tokenize("<?php $a = (double) $b;");
        let advisories = apply_fixer(
            &mut tokens,
            &ShortScalarCastFixer,
            &RuleOptions::new(),
            HostVersion::PHP_8_0,
        )
        .expect("applies");
        assert!(advisories.is_empty());
        assert_eq!(tokens.render(), "<?php $a = (float) $b;");
    }

    #[test]
    fn test_apply_fixer_rejects_unknown_option() {
        let mut tokens = lexing::tokenize("<?php (integer) $a;");
        let result = apply_fixer(
            &mut tokens,
            &ShortScalarCastFixer,
            &RuleOptions::new().with("strict", true),
            HostVersion::PHP_8_0,
        );
        assert!(matches!(result, Err(FixError::InvalidOption { .. })));
        assert_eq!(tokens.render(), "<?php (integer) $a;");
    }
}
