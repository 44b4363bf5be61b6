//! Batch driver
//!
//! Runs one shared [Runner] over many sources on the rayon thread pool. Each source gets
//! its own independent run; nothing but the read-only runner is shared between them, and
//! outcomes come back in input order.

use crate::php::pipeline::{FixError, FixReport, Runner};
use rayon::prelude::*;

/// A named source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    pub name: String,
    pub source: String,
}

impl SourceInput {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    pub result: Result<FixReport, FixError>,
}

pub fn fix_all(runner: &Runner, inputs: &[SourceInput]) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = inputs
        .par_iter()
        .map(|input| {
            let result = runner.run(&input.source);
            if let Err(error) = &result {
                tracing::warn!(source = %input.name, %error, "source not fixed");
            }
            BatchOutcome {
                name: input.name.clone(),
                result,
            }
        })
        .collect();
    tracing::debug!(sources = outcomes.len(), "batch finished");
    outcomes
}
