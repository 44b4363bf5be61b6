//! Run results
//!
//! A successful run returns a [FixReport]: the rewritten text, which fixers changed it and
//! any advisories raised on the way. Advisories never fail a run.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// The input used a form the host still accepts but has deprecated
    Deprecated,
}

/// A non-fatal diagnostic raised by a fixer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub rule: String,
    pub message: String,
    /// Byte offset in the text the fixer saw when it raised the advisory
    pub offset: usize,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {}, {})", self.message, self.offset, self.rule)
    }
}

/// Outcome of running the enabled fixers over one source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixReport {
    pub output: String,
    /// Fixers that changed the text, in the order they first did so
    pub applied: Vec<String>,
    pub advisories: Vec<Advisory>,
    pub passes: usize,
    pub changed: bool,
}

impl FixReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
