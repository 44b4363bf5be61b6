//! Changesets
//!
//!     Fixers never mutate a sequence while reading it. They collect edits against the
//!     indices they observed and hand the whole changeset back; the sequence applies it in
//!     one go once the fixer returns. This keeps indices stable for the entire duration of a
//!     fixer's pass.
//!
//! Reconciliation
//!
//!     Edits are sorted by position (stable, so insertions at the same index keep the order
//!     they were added in). An edit identical to the previously kept one is dropped. An edit
//!     overlapping a previously kept one is deferred: it is not applied now, and the fixer
//!     will find the same spot again on the next pass if it still applies. Kept edits are
//!     applied back to front so that earlier indices stay valid while later ones change.

use crate::php::token::Token;
use crate::php::tokens::IndexError;
use std::ops::Range;

/// Replace the tokens in `range` with `replacement`.
///
/// An empty range is an insertion, an empty replacement a removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    range: Range<usize>,
    replacement: Vec<Token>,
}

impl Edit {
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn replacement(&self) -> &[Token] {
        &self.replacement
    }
}

/// The edits one fixer produced during one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changeset {
    edits: Vec<Edit>,
}

/// What happened when a changeset was applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub applied: usize,
    pub deferred: usize,
}

impl Changeset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a single token.
    pub fn replace(&mut self, index: usize, token: Token) {
        self.replace_range(index..index + 1, vec![token]);
    }

    pub fn replace_range(&mut self, range: Range<usize>, replacement: Vec<Token>) {
        self.edits.push(Edit { range, replacement });
    }

    /// Insert tokens before `index`. `index == len` appends.
    pub fn insert(&mut self, index: usize, tokens: Vec<Token>) {
        self.replace_range(index..index, tokens);
    }

    pub fn remove(&mut self, range: Range<usize>) {
        self.replace_range(range, Vec::new());
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Validate the edits against a sequence of `len` tokens and split them into the
    /// ones to apply (sorted by position) and the number deferred.
    pub(crate) fn reconcile(self, len: usize) -> Result<(Vec<Edit>, usize), IndexError> {
        for edit in &self.edits {
            if edit.range.start > edit.range.end || edit.range.end > len {
                return Err(IndexError {
                    index: edit.range.end.max(edit.range.start),
                    len,
                });
            }
        }

        let mut edits = self.edits;
        edits.sort_by_key(|edit| (edit.range.start, edit.range.end));

        let mut kept: Vec<Edit> = Vec::with_capacity(edits.len());
        let mut deferred = 0;
        for edit in edits {
            if let Some(last) = kept.last() {
                if *last == edit {
                    continue;
                }
                if edit.range.start < last.range.end {
                    tracing::trace!(
                        range = ?edit.range,
                        kept = ?last.range,
                        "deferring overlapping edit"
                    );
                    deferred += 1;
                    continue;
                }
            }
            kept.push(edit);
        }

        Ok((kept, deferred))
    }
}
