//! Rule options
//!
//! Each fixer declares its options as a static schema of [OptionSpec]. User overrides
//! arrive as loosely typed [OptionValue]s and are checked against the schema once, when
//! the runner is built; fixers then read fully resolved [RuleOptions].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single option value as it appears in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl OptionValue {
    fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "boolean",
            OptionValue::Int(_) => "integer",
            OptionValue::Str(_) => "string",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(value) => write!(f, "{}", value),
            OptionValue::Int(value) => write!(f, "{}", value),
            OptionValue::Str(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

/// Default value of an option, usable in a `const` schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl OptionDefault {
    pub fn to_value(self) -> OptionValue {
        match self {
            OptionDefault::Bool(value) => OptionValue::Bool(value),
            OptionDefault::Int(value) => OptionValue::Int(value),
            OptionDefault::Str(value) => OptionValue::Str(value.to_string()),
        }
    }
}

/// Schema entry for one option of a fixer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub default: OptionDefault,
    /// Accepted string values. Empty means any value of the default's type.
    pub allowed: &'static [&'static str],
}

impl OptionSpec {
    fn check(&self, value: &OptionValue) -> Result<(), String> {
        let expected = self.default.to_value();
        if std::mem::discriminant(&expected) != std::mem::discriminant(value) {
            return Err(format!(
                "expected a {}, got {}",
                expected.type_name(),
                value
            ));
        }
        if let OptionValue::Str(text) = value {
            if !self.allowed.is_empty() && !self.allowed.contains(&text.as_str()) {
                return Err(format!(
                    "expected one of {}, got {}",
                    self.allowed.join(", "),
                    value
                ));
            }
        }
        Ok(())
    }
}

/// An override that does not fit a fixer's schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionError {
    pub option: String,
    pub message: String,
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid option '{}': {}", self.option, self.message)
    }
}

impl std::error::Error for OptionError {}

/// Named option values for one fixer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleOptions {
    values: BTreeMap<String, OptionValue>,
}

impl RuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(OptionValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(OptionValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(OptionValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Fill in schema defaults under the given overrides, rejecting overrides the schema
    /// does not describe.
    pub fn resolve(schema: &[OptionSpec], overrides: &RuleOptions) -> Result<Self, OptionError> {
        let mut resolved = RuleOptions::new();
        for spec in schema {
            resolved.set(spec.name, spec.default.to_value());
        }
        for (name, value) in overrides.iter() {
            let spec = schema
                .iter()
                .find(|spec| spec.name == name)
                .ok_or_else(|| OptionError {
                    option: name.to_string(),
                    message: "unknown option".to_string(),
                })?;
            spec.check(value).map_err(|message| OptionError {
                option: name.to_string(),
                message,
            })?;
            resolved.set(name, value.clone());
        }
        Ok(resolved)
    }
}
