//! Run configuration
//!
//! Which fixers run, with which option overrides, against which host version. A
//! [RunConfig] is plain data; [Runner](crate::php::pipeline::Runner) validates it against a
//! registry when it is built.

use crate::php::fixers::{FixerRegistry, RuleOptions};
use crate::php::pipeline::host_version::HostVersion;
use std::collections::BTreeMap;

pub const DEFAULT_MAX_PASSES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Enabled fixers by name, with their option overrides
    pub rules: BTreeMap<String, RuleOptions>,
    pub host_version: HostVersion,
    pub max_passes: usize,
}

impl RunConfig {
    /// No fixers enabled.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
            host_version: HostVersion::default(),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Every fixer of the registry, with default options.
    pub fn all(registry: &FixerRegistry) -> Self {
        registry
            .names()
            .into_iter()
            .fold(Self::new(), |config, name| config.with_rule(name))
    }

    pub fn with_rule(self, name: impl Into<String>) -> Self {
        self.with_rule_options(name, RuleOptions::new())
    }

    pub fn with_rule_options(mut self, name: impl Into<String>, options: RuleOptions) -> Self {
        self.rules.insert(name.into(), options);
        self
    }

    pub fn without_rule(mut self, name: &str) -> Self {
        self.rules.remove(name);
        self
    }

    pub fn with_host_version(mut self, host_version: HostVersion) -> Self {
        self.host_version = host_version;
        self
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = RunConfig::new()
            .with_rule("short_scalar_cast")
            .with_rule_options("cast_spaces", RuleOptions::new().with("space", "none"))
            .with_host_version(HostVersion::PHP_7_4)
            .with_max_passes(3);
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules["cast_spaces"].str("space"), Some("none"));
        assert_eq!(config.host_version, HostVersion::PHP_7_4);
        assert_eq!(config.max_passes, 3);
    }

    #[test]
    fn test_all_enables_every_registered_fixer() {
        let registry = FixerRegistry::with_defaults();
        let config = RunConfig::all(&registry).without_rule("cast_spaces");
        assert_eq!(config.rules.len(), registry.names().len() - 1);
        assert!(!config.rules.contains_key("cast_spaces"));
    }
}
