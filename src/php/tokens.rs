//! Token sequence
//!
//!     [Tokens] owns the tokens of one source text. Fixers only read it; every change goes
//!     through a [Changeset] that the sequence applies after the fixer returns, so indices
//!     a fixer observed stay valid for its whole pass.
//!
//! Normalization
//!
//!     After every flush the sequence is brought back to the shape a fresh lex of its
//!     rendering would have: adjacent whitespace tokens are merged, empty tokens dropped,
//!     words reclassified and byte ranges recomputed. Rules can therefore always reason
//!     about the sequence as if it had just been lexed.

pub mod changeset;

pub use changeset::{ApplyOutcome, Changeset, Edit};

use crate::php::formats::renderer;
use crate::php::lexing;
use crate::php::token::{Token, TokenKind};
use std::fmt;
use std::ops::Range;

/// A token position outside the current bounds of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token index {} out of range for sequence of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexError {}

/// An ordered, index-addressable token sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
}

impl Tokens {
    /// Wrap tokens that come straight out of the lexer. They are already merged and
    /// classified; only the byte ranges are refreshed.
    pub(crate) fn from_classified(tokens: Vec<Token>) -> Self {
        let mut tokens = Self { tokens };
        tokens.reindex();
        tokens
    }

    /// Build a sequence from arbitrary tokens, normalizing them the way a flush does.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut tokens = Self { tokens };
        tokens.normalize();
        tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Token, IndexError> {
        self.tokens.get(index).ok_or(IndexError {
            index,
            len: self.tokens.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn render(&self) -> String {
        renderer::render(&self.tokens)
    }

    /// Substitute `range` with `replacement` in one step.
    pub fn replace_range(
        &mut self,
        range: Range<usize>,
        replacement: Vec<Token>,
    ) -> Result<(), IndexError> {
        let mut changeset = Changeset::new();
        changeset.replace_range(range, replacement);
        self.apply(changeset).map(|_| ())
    }

    /// Apply a fixer's changeset.
    ///
    /// Every edit is validated first; nothing is applied if any range is out of bounds.
    pub fn apply(&mut self, changeset: Changeset) -> Result<ApplyOutcome, IndexError> {
        let (edits, deferred) = changeset.reconcile(self.tokens.len())?;
        let applied = edits.len();
        if applied == 0 {
            return Ok(ApplyOutcome { applied, deferred });
        }

        for edit in edits.into_iter().rev() {
            let range = edit.range();
            self.tokens.splice(range, edit.replacement().iter().cloned());
        }
        self.normalize();

        Ok(ApplyOutcome { applied, deferred })
    }

    /// Index of the next token after `index` that is not whitespace.
    pub fn next_non_whitespace(&self, index: usize) -> Option<usize> {
        self.next_matching(index, |t| !t.is_whitespace())
    }

    /// Index of the previous token before `index` that is not whitespace.
    pub fn prev_non_whitespace(&self, index: usize) -> Option<usize> {
        self.prev_matching(index, |t| !t.is_whitespace())
    }

    /// Like [Tokens::next_non_whitespace], also skipping comments.
    pub fn next_meaningful(&self, index: usize) -> Option<usize> {
        self.next_matching(index, |t| !t.is_trivia())
    }

    /// Like [Tokens::prev_non_whitespace], also skipping comments.
    pub fn prev_meaningful(&self, index: usize) -> Option<usize> {
        self.prev_matching(index, |t| !t.is_trivia())
    }

    pub fn has_kind(&self, kind: TokenKind) -> bool {
        self.tokens.iter().any(|t| t.kind() == kind)
    }

    /// Indices of all tokens of any of the given kinds, in order.
    pub fn find_kinds(&self, kinds: &[TokenKind]) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| kinds.contains(&t.kind()))
            .map(|(i, _)| i)
            .collect()
    }

    fn next_matching(&self, index: usize, predicate: impl Fn(&Token) -> bool) -> Option<usize> {
        let start = index.checked_add(1)?;
        (start..self.tokens.len()).find(|&i| predicate(&self.tokens[i]))
    }

    fn prev_matching(&self, index: usize, predicate: impl Fn(&Token) -> bool) -> Option<usize> {
        let end = index.min(self.tokens.len());
        (0..end).rev().find(|&i| predicate(&self.tokens[i]))
    }

    fn normalize(&mut self) {
        let mut merged: Vec<Token> = Vec::with_capacity(self.tokens.len());
        for token in self.tokens.drain(..) {
            if token.text().is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.is_whitespace() && token.is_whitespace() => {
                    last.push_text(token.text());
                }
                _ => merged.push(token),
            }
        }
        self.tokens = lexing::classify(merged);
        self.reindex();
    }

    fn reindex(&mut self) {
        let mut offset = 0;
        for token in &mut self.tokens {
            let end = offset + token.text().len();
            token.set_span(offset..end);
            offset = end;
        }
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
