// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{Commit, EditResult, Merge, Proposal};

/// A style turns values into displayed text and edits of that text back into values.
///
/// Implementations are [`crate::NumberStyle`], [`crate::PatternStyle`], and
/// [`crate::OptionalStyle`]. Hosts usually drive a style through
/// [`crate::EditSession`].
pub trait DiffableTextStyle {
    type Value: Clone + PartialEq + Debug;

    /// The displayed text for `value`.
    fn format(&self, value: &Self::Value) -> String;

    /// The commit for `value` without any prior edit, eg: when a field is first shown.
    fn interpret(&self, value: &Self::Value) -> Commit<Self::Value>;

    /// Decodes and validates the merged text of `proposal`, and formats the result.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::EditError`] when the edit is rejected.
    fn resolve(&self, proposal: &Proposal) -> EditResult<Commit<Self::Value>>;

    /// [`Self::resolve`] followed by caret reconciliation. Override this to recognize
    /// commands that don't go through decoding.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::EditError`] when the edit is rejected.
    fn merge(&self, proposal: &Proposal) -> EditResult<Merge<Self::Value>> {
        let commit = self.resolve(proposal)?;
        Ok(Merge::reconciled(proposal, commit))
    }
}
