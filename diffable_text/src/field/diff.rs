// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caret reconciliation after a full reformat.
//!
//! Every accepted edit regenerates the displayed text from the value, so the new
//! [`Snapshot`] has no positional relationship to the one the user edited. [`reconcile`]
//! recovers one by comparing the two snapshots from the tail inward. Typing usually
//! happens left of or at the caret, so everything to the right of the caret is unchanged
//! content plus reshuffled formatting (grouping separators, currency suffixes), which
//! cancels out before the scan reaches the caret.
//!
//! ```text
//! old (merged) : 1 , 2 3 4 5 |        caret after the typed `5`
//! new          : 1 2 , 3 4 5 |
//!                              ◀── scan from the tail
//! ```
//!
//! Both cursors walk backward. Equal symbols step both. A removable old symbol (phantom
//! formatting that vanished) steps the old cursor. An insertable new symbol (phantom
//! formatting that appeared) steps the new cursor. Anything else is a breakpoint.

use std::ops::Range;

use crate::{CaretDirection, Snapshot, SnapshotIndex, Symbol, call_if_true};

const DEBUG_DIFF: bool = false;

/// Computes the selection in `new` that corresponds to `selection` in `old`.
///
/// The upper bound is found first, then the scan continues from where it stopped to find
/// the lower bound. Bounds are snapped onto caret stops: the upper bound looks backward
/// first, the lower bound forward. A collapsed selection yields one caret, snapped
/// backward. The result is always within `0..=new.count()`.
#[must_use]
pub fn reconcile(
    old: &Snapshot,
    selection: Range<SnapshotIndex>,
    new: &Snapshot,
) -> Range<SnapshotIndex> {
    let lower_target = selection.start.min(selection.end).min(old.count());
    let upper_target = selection.start.max(selection.end).min(old.count());

    let mut cursor = TailCursor {
        old: old.count(),
        new: new.count(),
    };

    cursor.scan_to(old, new, upper_target);
    let upper = cursor.new;

    let selection = if lower_target == upper_target {
        let caret = new.caret(upper, CaretDirection::Backward);
        caret..caret
    } else {
        cursor.scan_to(old, new, lower_target);
        let lower = new.caret(cursor.new, CaretDirection::Forward);
        let upper = new.caret(upper, CaretDirection::Backward);
        lower.min(upper)..lower.max(upper)
    };

    call_if_true!(DEBUG_DIFF, {
        tracing::trace!(
            old = %old,
            new = %new,
            lower_target,
            upper_target,
            ?selection,
            "reconciled selection"
        );
    });

    selection
}

/// The two backward cursors. Each index is the boundary right after the symbol that is
/// compared next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TailCursor {
    old: SnapshotIndex,
    new: SnapshotIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Both,
    Old,
    New,
    Stop,
}

impl TailCursor {
    fn scan_to(&mut self, old: &Snapshot, new: &Snapshot, target: SnapshotIndex) {
        while self.old > target && self.new > 0 {
            match step(&old[self.old - 1], &new[self.new - 1]) {
                Step::Both => {
                    self.old -= 1;
                    self.new -= 1;
                }
                Step::Old => self.old -= 1,
                Step::New => self.new -= 1,
                Step::Stop => break,
            }
        }
    }
}

fn step(old: &Symbol, new: &Symbol) -> Step {
    if old.character == new.character && old.is_virtual() == new.is_virtual() {
        return Step::Both;
    }
    match (old.attribute.is_removable(), new.attribute.is_insertable()) {
        // Two different formatting symbols. Neither side can be explained without
        // guessing, so stop here.
        (true, true) => Step::Stop,
        (true, false) => Step::Old,
        (false, true) => Step::New,
        (false, false) => Step::Stop,
    }
}
