//! Casing fixers

pub mod lowercase_keywords;

pub use lowercase_keywords::LowercaseKeywordsFixer;
