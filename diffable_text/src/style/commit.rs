// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Field, Proposal, Snapshot};

/// An accepted value and the snapshot that displays it. Decoding `snapshot` gives back
/// `value`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Commit<V> {
    pub value: V,
    pub snapshot: Snapshot,
}

impl<V> Commit<V> {
    #[must_use]
    pub fn new(value: V, snapshot: Snapshot) -> Self { Self { value, snapshot } }

    /// Transforms the value, keeping the snapshot.
    #[must_use]
    pub fn map<T>(self, f: impl FnOnce(V) -> T) -> Commit<T> {
        Commit {
            value: f(self.value),
            snapshot: self.snapshot,
        }
    }
}

/// The result of a merged edit: the [`Commit`] plus the field with the relocated
/// selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Merge<V> {
    pub commit: Commit<V>,
    pub field: Field,
}

impl<V> Merge<V> {
    /// Relocates the caret from right after the inserted text onto `commit.snapshot`.
    #[must_use]
    pub fn reconciled(proposal: &Proposal, commit: Commit<V>) -> Self {
        let field = proposal.merged_field().reconciled(commit.snapshot.clone());
        Self { commit, field }
    }

    #[must_use]
    pub fn map<T>(self, f: impl FnOnce(V) -> T) -> Merge<T> {
        Merge {
            commit: self.commit.map(f),
            field: self.field,
        }
    }
}
