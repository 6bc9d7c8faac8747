// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Snapshot, SnapshotIndex};

/// Which way to look first when snapping a caret onto a stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaretDirection {
    Forward,
    Backward,
}

impl Snapshot {
    /// Boundary `index` is a caret stop when the symbol after it is lookaheadable, or the
    /// symbol before it is lookbehindable or an anchor.
    #[must_use]
    pub fn is_caret_stop(&self, index: SnapshotIndex) -> bool {
        if index > self.count() {
            return false;
        }
        let after = self
            .get(index)
            .is_some_and(|it| it.attribute.is_lookaheadable());
        let before = index
            .checked_sub(1)
            .and_then(|it| self.get(it))
            .is_some_and(|it| {
                it.attribute.is_lookbehindable() || it.attribute.is_anchor()
            });
        after || before
    }

    /// Snaps `index` onto the closest caret stop, searching `preference` first and then
    /// the other way. Anchors are stops, so the search never walks past one. Falls back
    /// to the start (backward) or the end (forward) when there are no stops at all.
    #[must_use]
    pub fn caret(&self, index: SnapshotIndex, preference: CaretDirection) -> SnapshotIndex {
        let index = index.min(self.count());
        if self.is_caret_stop(index) {
            return index;
        }
        match preference {
            CaretDirection::Backward => self
                .look_backward(index)
                .or_else(|| self.look_forward(index))
                .unwrap_or(0),
            CaretDirection::Forward => self
                .look_forward(index)
                .or_else(|| self.look_backward(index))
                .unwrap_or(self.count()),
        }
    }

    fn look_backward(&self, index: SnapshotIndex) -> Option<SnapshotIndex> {
        (0..index).rev().find(|it| self.is_caret_stop(*it))
    }

    fn look_forward(&self, index: SnapshotIndex) -> Option<SnapshotIndex> {
        (index + 1..=self.count()).find(|it| self.is_caret_stop(*it))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Symbol, assert_eq2};

    /// `$1,234` where `$` and `,` are phantom.
    fn currency() -> Snapshot {
        let mut it = Snapshot::new();
        it.append(Symbol::phantom('$'));
        it.append(Symbol::content('1'));
        it.append(Symbol::phantom(','));
        it.append_contents_of("234".chars().map(Symbol::content));
        it
    }

    #[test]
    fn test_caret_stops() {
        let it = currency();
        let stops: Vec<_> = (0..=it.count()).filter(|i| it.is_caret_stop(*i)).collect();
        assert_eq2!(stops, vec![1, 2, 3, 4, 5, 6]);
        assert!(!it.is_caret_stop(7));
    }

    #[test]
    fn test_snap_skips_leading_label() {
        let it = currency();
        assert_eq2!(it.caret(0, CaretDirection::Backward), 1);
        assert_eq2!(it.caret(0, CaretDirection::Forward), 1);
        assert_eq2!(it.caret(99, CaretDirection::Forward), 6);
    }

    #[test]
    fn test_snap_stops_at_anchor() {
        // `+1##` with an anchor after `1`.
        let mut it = Snapshot::new();
        it.append(Symbol::phantom('+'));
        it.append(Symbol::content('1'));
        it.anchor_at_end_index();
        it.append(Symbol::phantom('#'));
        it.append(Symbol::phantom('#'));

        assert_eq2!(it.caret(4, CaretDirection::Backward), 2);
        assert_eq2!(it.caret(4, CaretDirection::Forward), 2);
        assert_eq2!(it.caret(0, CaretDirection::Backward), 1);
    }

    #[test]
    fn test_snap_without_stops() {
        let mut it = Snapshot::new();
        assert_eq2!(it.caret(0, CaretDirection::Forward), 0);

        it.append_contents_of("()".chars().map(Symbol::phantom));
        assert_eq2!(it.caret(1, CaretDirection::Backward), 0);
        assert_eq2!(it.caret(1, CaretDirection::Forward), 2);
    }
}
