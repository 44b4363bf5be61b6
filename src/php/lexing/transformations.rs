//! Classification transformations run after base tokenization

pub mod cast_classification;
pub mod keyword_classification;

pub use cast_classification::CastClassificationMapper;
pub use keyword_classification::KeywordClassificationMapper;
