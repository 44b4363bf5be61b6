//! Pipeline errors

use crate::php::lexing::LexError;
use crate::php::pipeline::host_version::ParseHostVersionError;
use crate::php::tokens::IndexError;
use std::fmt;

/// Errors that stop a run or prevent a runner from being built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixError {
    UnknownRule(String),
    InvalidOption {
        rule: String,
        option: String,
        message: String,
    },
    InvalidHostVersion(String),
    InvalidMaxPasses(usize),
    /// A fixer addressed a token outside the sequence
    Index(IndexError),
    /// The text still changed on the last allowed pass
    NonConvergence {
        passes: usize,
        applied: Vec<String>,
        /// Text after the last pass, not a fixed point
        partial: String,
    },
    Lex(LexError),
}

impl fmt::Display for FixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixError::UnknownRule(name) => write!(f, "Unknown rule '{}'", name),
            FixError::InvalidOption {
                rule,
                option,
                message,
            } => write!(f, "Invalid option '{}' for rule '{}': {}", option, rule, message),
            FixError::InvalidHostVersion(text) => write!(f, "Invalid host version '{}'", text),
            FixError::InvalidMaxPasses(passes) => {
                write!(f, "max_passes must be at least 1, got {}", passes)
            }
            FixError::Index(error) => write!(f, "{}", error),
            FixError::NonConvergence {
                passes, applied, ..
            } => write!(
                f,
                "No fixed point after {} passes (rules that fired: {})",
                passes,
                applied.join(", ")
            ),
            FixError::Lex(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for FixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixError::Index(error) => Some(error),
            FixError::Lex(error) => Some(error),
            _ => None,
        }
    }
}

impl From<IndexError> for FixError {
    fn from(error: IndexError) -> Self {
        FixError::Index(error)
    }
}

impl From<LexError> for FixError {
    fn from(error: LexError) -> Self {
        FixError::Lex(error)
    }
}

impl From<ParseHostVersionError> for FixError {
    fn from(error: ParseHostVersionError) -> Self {
        FixError::InvalidHostVersion(error.0)
    }
}
