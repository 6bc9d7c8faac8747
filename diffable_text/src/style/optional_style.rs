// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Commit, DiffableTextStyle, EditResult, Field, Merge, Proposal, Snapshot};

/// Wraps a style so that a field can be empty. Empty text (nothing that counts toward a
/// value) is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionalStyle<S> {
    style: S,
}

impl<S: DiffableTextStyle> OptionalStyle<S> {
    #[must_use]
    pub fn new(style: S) -> Self { Self { style } }

    #[must_use]
    pub fn style(&self) -> &S { &self.style }

    fn is_empty(proposal: &Proposal) -> bool {
        proposal.merged().iter().all(|it| it.is_virtual())
    }
}

impl<S: DiffableTextStyle> DiffableTextStyle for OptionalStyle<S> {
    type Value = Option<S::Value>;

    fn format(&self, value: &Self::Value) -> String {
        match value {
            Some(value) => self.style.format(value),
            None => String::new(),
        }
    }

    fn interpret(&self, value: &Self::Value) -> Commit<Self::Value> {
        match value {
            Some(value) => self.style.interpret(value).map(Some),
            None => Commit::new(None, Snapshot::new()),
        }
    }

    fn resolve(&self, proposal: &Proposal) -> EditResult<Commit<Self::Value>> {
        if Self::is_empty(proposal) {
            return Ok(Commit::new(None, Snapshot::new()));
        }
        Ok(self.style.resolve(proposal)?.map(Some))
    }

    /// Delegates to the wrapped style's merge, so that its commands still work.
    fn merge(&self, proposal: &Proposal) -> EditResult<Merge<Self::Value>> {
        if Self::is_empty(proposal) {
            return Ok(Merge {
                commit: Commit::new(None, Snapshot::new()),
                field: Field::default(),
            });
        }
        Ok(self.style.merge(proposal)?.map(Some))
    }
}

mod convert {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<S: DiffableTextStyle> From<S> for OptionalStyle<S> {
        fn from(style: S) -> Self { Self::new(style) }
    }
}
