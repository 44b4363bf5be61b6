//! Shared configuration loader for phpfix.
//!
//! `defaults/phpfix.default.toml` is embedded into the crate so that the documented
//! defaults and the runtime behavior stay in sync. Callers layer their own files on top
//! of those defaults via [`Loader`] before deserializing into [`FixerConfig`], then turn
//! that into the engine's [`RunConfig`] with [`FixerConfig::to_run_config`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use phpfix::php::fixers::RuleOptions;
use phpfix::php::pipeline::{FixError, HostVersion, RunConfig};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/phpfix.default.toml");

/// Top-level configuration consumed by phpfix callers.
#[derive(Debug, Clone, Deserialize)]
pub struct FixerConfig {
    pub runner: RunnerConfig,
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    /// Kept as text; parsed by [`FixerConfig::to_run_config`].
    pub host_version: String,
    pub max_passes: usize,
}

/// How one rule is configured: switched on or off, or on with option overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RuleSetting {
    Enabled(bool),
    Options(RuleOptions),
}

impl FixerConfig {
    /// Convert into the engine's run configuration.
    ///
    /// Rule names and options are not checked here; building a runner does that against
    /// the registry in use.
    pub fn to_run_config(&self) -> Result<RunConfig, FixError> {
        let host_version: HostVersion = self.runner.host_version.parse()?;
        let config = self.rules.iter().fold(
            RunConfig::new()
                .with_host_version(host_version)
                .with_max_passes(self.runner.max_passes),
            |config, (name, setting)| match setting {
                RuleSetting::Enabled(true) => config.with_rule(name.as_str()),
                RuleSetting::Enabled(false) => config,
                RuleSetting::Options(options) => {
                    config.with_rule_options(name.as_str(), options.clone())
                }
            },
        );
        Ok(config)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `runner.host_version`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<FixerConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FixerConfig, ConfigError> {
    Loader::new().build()
}
