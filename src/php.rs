//! Main module for phpfix library functionality

pub mod batch;
pub mod fixers;
pub mod formats;
pub mod lexing;
pub mod pipeline;
pub mod testing;
pub mod token;
pub mod tokens;
