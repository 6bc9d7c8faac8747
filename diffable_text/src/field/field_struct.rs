// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{CaretDirection, Encoding, Position, Proposal, Snapshot, SnapshotIndex,
            reconcile};

/// A [`Snapshot`] paired with a selection. The selection is a pair of snapshot boundary
/// indices, always within `0..=snapshot.count()`, with `start <= end`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Field {
    snapshot: Snapshot,
    selection: Range<SnapshotIndex>,
}

impl Field {
    /// The selection is clamped to the snapshot and normalized. It is not snapped.
    #[must_use]
    pub fn new(snapshot: Snapshot, selection: Range<SnapshotIndex>) -> Self {
        let selection = normalize(selection, snapshot.count());
        Self {
            snapshot,
            selection,
        }
    }

    /// A field with the caret at the last caret stop. This is where a freshly displayed
    /// value puts the caret.
    #[must_use]
    pub fn at_end(snapshot: Snapshot) -> Self {
        let caret = snapshot.caret(snapshot.count(), CaretDirection::Backward);
        Self::new(snapshot, caret..caret)
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot { &self.snapshot }

    #[must_use]
    pub fn selection(&self) -> Range<SnapshotIndex> { self.selection.clone() }

    #[must_use]
    pub fn is_collapsed(&self) -> bool { self.selection.is_empty() }

    #[must_use]
    pub fn into_snapshot(self) -> Snapshot { self.snapshot }

    /// Maps a host range to snapshot indices. Walks the snapshot once. An offset inside
    /// a multi-unit character maps to the start of that character. Offsets past the end
    /// map to the end.
    #[must_use]
    pub fn indices<E: Encoding>(&self, range: Range<Position<E>>) -> Range<SnapshotIndex> {
        let (lower, upper) = if range.start <= range.end {
            (range.start.offset(), range.end.offset())
        } else {
            (range.end.offset(), range.start.offset())
        };

        let mut start = None;
        let mut end = None;
        let mut offset = 0;

        for (index, symbol) in self.snapshot.iter().enumerate() {
            let next = offset + E::width(symbol.character);
            if start.is_none() && lower < next {
                start = Some(index);
            }
            if upper < next {
                end = Some(index);
                break;
            }
            offset = next;
        }

        let count = self.snapshot.count();
        let start = start.unwrap_or(count);
        start..end.unwrap_or(count).max(start)
    }

    /// Maps snapshot indices to a host range.
    #[must_use]
    pub fn positions<E: Encoding>(
        &self,
        range: Range<SnapshotIndex>,
    ) -> Range<Position<E>> {
        let width_until = |index: SnapshotIndex| -> usize {
            self.snapshot.symbols()[..index.min(self.snapshot.count())]
                .iter()
                .map(|it| E::width(it.character))
                .sum()
        };
        Position::new(width_until(range.start))..Position::new(width_until(range.end))
    }

    /// The selection in host units.
    #[must_use]
    pub fn selection_positions<E: Encoding>(&self) -> Range<Position<E>> {
        self.positions(self.selection())
    }

    /// Applies a selection change made by the host (a click, arrow keys). Each bound is
    /// snapped onto a caret stop.
    pub fn select<E: Encoding>(&mut self, range: Range<Position<E>>) {
        let indices = self.indices(range);
        self.selection = snap(&self.snapshot, indices);
    }

    /// Builds the edit request for replacing `range` with `replacement`, while the host
    /// has `selection`. Both are in host units. The host selection is taken as is, it is
    /// not snapped.
    #[must_use]
    pub fn proposal<E: Encoding>(
        &self,
        selection: Range<Position<E>>,
        range: Range<Position<E>>,
        replacement: &str,
    ) -> Proposal {
        Proposal::new(
            self.snapshot.clone(),
            self.indices(selection),
            self.indices(range),
            replacement,
        )
    }

    /// A field for `new_snapshot`, with the selection carried over from this one. See
    /// [`reconcile`].
    #[must_use]
    pub fn reconciled(&self, new_snapshot: Snapshot) -> Self {
        let selection = reconcile(&self.snapshot, self.selection(), &new_snapshot);
        Self {
            snapshot: new_snapshot,
            selection,
        }
    }
}

fn normalize(selection: Range<SnapshotIndex>, count: usize) -> Range<SnapshotIndex> {
    let start = selection.start.min(count);
    let end = selection.end.min(count);
    start.min(end)..start.max(end)
}

/// Snaps a collapsed selection backward. A range snaps its start forward and its end
/// backward, so that it shrinks onto the stops inside it.
pub(crate) fn snap(
    snapshot: &Snapshot,
    selection: Range<SnapshotIndex>,
) -> Range<SnapshotIndex> {
    let selection = normalize(selection, snapshot.count());
    if selection.is_empty() {
        let caret = snapshot.caret(selection.start, CaretDirection::Backward);
        return caret..caret;
    }
    let lower = snapshot.caret(selection.start, CaretDirection::Forward);
    let upper = snapshot.caret(selection.end, CaretDirection::Backward);
    lower.min(upper)..lower.max(upper)
}
