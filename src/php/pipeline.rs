//! Fixer pipeline
//!
//!     The runner takes source text through the whole engine: lex once, run the enabled
//!     fixers in priority order pass after pass, and render when a pass no longer changes
//!     the text.
//!
//!     - [config]: what a run enables ([RunConfig])
//!     - [host_version]: the runtime version fixers gate on ([HostVersion])
//!     - [runner]: the pass loop ([Runner], [apply_fixer])
//!     - [report]: what a run returns ([FixReport], [Advisory])
//!     - [error]: what stops a run ([FixError])

pub mod config;
pub mod error;
pub mod host_version;
pub mod report;
pub mod runner;

pub use config::{RunConfig, DEFAULT_MAX_PASSES};
pub use error::FixError;
pub use host_version::{HostVersion, ParseHostVersionError};
pub use report::{Advisory, AdvisoryKind, FixReport};
pub use runner::{apply_fixer, Runner};
