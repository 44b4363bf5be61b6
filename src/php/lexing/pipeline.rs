//! Lexing transformation pipeline
//!
//! Chains `TokenMapper` implementations over the output of base tokenization. The pipeline
//! is intentionally focused on lexing concerns only; running fixers lives in the
//! `php::pipeline` module.

use crate::php::lexing::common::TokenMapper;
use crate::php::lexing::transformations::{CastClassificationMapper, KeywordClassificationMapper};
use crate::php::token::Token;

/// A pipeline that chains TokenMapper transformations together for the lexing stage.
pub struct LexingPipeline {
    transformations: Vec<Box<dyn TokenMapper>>,
}

impl LexingPipeline {
    /// Create a new empty lexing pipeline.
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// The classification stages every token sequence goes through.
    ///
    /// Cast classification runs first: it decides which words are cast types and resets
    /// every other word to an identifier, which keyword classification then refines.
    pub fn standard() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_transformation(CastClassificationMapper);
        pipeline.add_transformation(KeywordClassificationMapper);
        pipeline
    }

    /// Add a transformation to the pipeline.
    ///
    /// Transformations are executed in the order they are added.
    pub fn add_transformation<T: TokenMapper + 'static>(&mut self, mapper: T) {
        self.transformations.push(Box::new(mapper));
    }

    /// Number of transformations registered in the pipeline.
    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }

    pub fn run(&mut self, mut tokens: Vec<Token>) -> Vec<Token> {
        for transformation in &mut self.transformations {
            tokens = transformation.map(tokens);
        }
        tokens
    }
}

impl Default for LexingPipeline {
    fn default() -> Self {
        Self::new()
    }
}
