//! # phpfix
//!
//! A token-based rewriting engine for PHP source.
//!
//! File Layout
//!
//!     Everything lives under [php](php). The lexer turns source text into a [Tokens]
//!     sequence, fixers return changesets against that sequence, and the pipeline runner
//!     flushes those changesets pass after pass until the rendered text stops changing.
//!
//!     src/php
//!       ├── token       Token kinds and keyword tables
//!       ├── lexing      logos tokenization + classification mappers
//!       ├── tokens      The mutable sequence and changeset reconciliation
//!       ├── fixers      The Fixer trait, registry and rule catalog
//!       ├── pipeline    Host version, run configuration, runner and reports
//!       ├── formats     Rendering back to text
//!       └── batch       Parallel driver over many sources
//!
//! For the fixer test harness see the [testing module](php::testing).
//!
//! [Tokens]: php::tokens::Tokens

pub mod php;

pub use php::fixers::{Fixer, FixerRegistry};
pub use php::lexing::tokenize;
pub use php::pipeline::{FixError, FixReport, HostVersion, RunConfig, Runner};
pub use php::tokens::Tokens;
