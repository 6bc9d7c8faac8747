// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{Field, Snapshot, SnapshotIndex, Symbol};

/// A requested edit: replace `range` of the `base` snapshot with `replacement`.
///
/// `selection` is the selection in `base` at the time of the edit. It tells a backspace
/// (caret at the end of the range) apart from a forward delete (caret at the start).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proposal {
    base: Snapshot,
    selection: Range<SnapshotIndex>,
    range: Range<SnapshotIndex>,
    replacement: Snapshot,
}

impl Proposal {
    /// The range is clamped to `base`. A deletion that only covers formatting is widened
    /// to the nearest content symbol, otherwise deleting a grouping separator would be a
    /// no-op that the reformat immediately undoes.
    #[must_use]
    pub fn new(
        base: Snapshot,
        selection: Range<SnapshotIndex>,
        range: Range<SnapshotIndex>,
        replacement: &str,
    ) -> Self {
        let count = base.count();
        let end = range.end.min(count);
        let range = range.start.min(end)..end;
        let replacement: Snapshot = replacement.chars().map(Symbol::content).collect();
        let range = if replacement.is_empty() {
            widen_passthrough_deletion(&base, &selection, range)
        } else {
            range
        };
        Self {
            base,
            selection,
            range,
            replacement,
        }
    }

    #[must_use]
    pub fn base(&self) -> &Snapshot { &self.base }

    #[must_use]
    pub fn selection(&self) -> Range<SnapshotIndex> { self.selection.clone() }

    #[must_use]
    pub fn range(&self) -> Range<SnapshotIndex> { self.range.clone() }

    #[must_use]
    pub fn replacement(&self) -> &Snapshot { &self.replacement }

    /// The field before the edit.
    #[must_use]
    pub fn base_field(&self) -> Field { Field::new(self.base.clone(), self.selection()) }

    /// `base` with `range` replaced.
    #[must_use]
    pub fn merged(&self) -> Snapshot {
        let mut it = self.base.clone();
        it.replace_subrange(self.range(), self.replacement.iter().copied());
        it
    }

    /// The merged snapshot with the caret right after the replacement. This is the
    /// "old" side that a reformatted snapshot is reconciled against.
    #[must_use]
    pub fn merged_field(&self) -> Field {
        let caret = self.range.start + self.replacement.count();
        Field::new(self.merged(), caret..caret)
    }
}

fn widen_passthrough_deletion(
    base: &Snapshot,
    selection: &Range<SnapshotIndex>,
    range: Range<SnapshotIndex>,
) -> Range<SnapshotIndex> {
    let symbols = &base.symbols()[range.clone()];
    let only_passthrough = !symbols.is_empty()
        && symbols
            .iter()
            .all(|it| it.attribute.is_passthrough() && !it.is_content());
    if !only_passthrough || !selection.is_empty() {
        return range;
    }

    let caret = selection.start;
    if caret == range.end {
        // Backspace.
        match base.symbols()[..range.start].iter().rposition(Symbol::is_content) {
            Some(index) => index..range.end,
            None => range,
        }
    } else if caret == range.start {
        // Forward delete.
        match base.symbols()[range.end..].iter().position(Symbol::is_content) {
            Some(offset) => range.start..range.end + offset + 1,
            None => range,
        }
    } else {
        range
    }
}
