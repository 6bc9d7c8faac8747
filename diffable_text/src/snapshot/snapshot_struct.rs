// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          ops::{Index, Range}};

use crate::{Attribute, Symbol};

/// Index of a boundary or a symbol in a [`Snapshot`]. Boundaries run from `0` to
/// [`Snapshot::count`] inclusive. Symbol `i` sits between boundaries `i` and `i + 1`.
pub type SnapshotIndex = usize;

/// The attributed text buffer that represents the displayed text.
///
/// A snapshot is rebuilt from scratch every time a value is formatted, it is never
/// patched across edit cycles. The caret is relocated by comparing the old snapshot with
/// the new one, see [`crate::reconcile`].
///
/// ```
/// use diffable_text::{Snapshot, Symbol};
///
/// let mut snapshot = Snapshot::default();
/// snapshot.append(Symbol::content('1'));
/// snapshot.append(Symbol::phantom(','));
/// snapshot.append_contents_of("234".chars().map(Symbol::content));
///
/// assert_eq!(snapshot.characters(), "1,234");
/// assert_eq!(snapshot.nonvirtual_characters(), "1234");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Snapshot {
    symbols: Vec<Symbol>,
}

impl Snapshot {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn count(&self) -> usize { self.symbols.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.symbols.is_empty() }

    #[must_use]
    pub fn get(&self, index: SnapshotIndex) -> Option<&Symbol> { self.symbols.get(index) }

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] { &self.symbols }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> { self.symbols.iter() }

    pub fn append(&mut self, symbol: Symbol) { self.symbols.push(symbol); }

    pub fn append_contents_of(&mut self, symbols: impl IntoIterator<Item = Symbol>) {
        self.symbols.extend(symbols);
    }

    /// Appends `symbol` and anchors the boundary after it.
    pub fn anchor_append(&mut self, symbol: Symbol) {
        self.append(symbol);
        self.anchor_at_end_index();
    }

    /// Marks the boundary at `index` as an anchor. The flag lives on the symbol before
    /// the boundary, so anchoring at `0` (or past the end) does nothing.
    pub fn anchor(&mut self, index: SnapshotIndex) {
        if let Some(previous) = index
            .checked_sub(1)
            .and_then(|it| self.symbols.get_mut(it))
        {
            previous.attribute.insert(Attribute::ANCHOR);
        }
    }

    pub fn anchor_at_end_index(&mut self) { self.anchor(self.count()); }

    /// Replaces the symbols in `range` with `symbols`. The range is clamped to the
    /// snapshot.
    pub fn replace_subrange(
        &mut self,
        range: Range<SnapshotIndex>,
        symbols: impl IntoIterator<Item = Symbol>,
    ) {
        let end = range.end.min(self.count());
        let start = range.start.min(end);
        self.symbols.splice(start..end, symbols);
    }

    /// The displayed text.
    #[must_use]
    pub fn characters(&self) -> String { self.symbols.iter().map(|it| it.character).collect() }

    /// The characters that a style decodes, that is everything that is not virtual.
    #[must_use]
    pub fn nonvirtual_characters(&self) -> String {
        self.symbols
            .iter()
            .filter(|it| it.is_nonvirtual())
            .map(|it| it.character)
            .collect()
    }
}

impl Index<SnapshotIndex> for Snapshot {
    type Output = Symbol;

    fn index(&self, index: SnapshotIndex) -> &Self::Output { &self.symbols[index] }
}

impl FromIterator<Symbol> for Snapshot {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl Extend<Symbol> for Snapshot {
    fn extend<T: IntoIterator<Item = Symbol>>(&mut self, iter: T) {
        self.append_contents_of(iter);
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter { self.symbols.iter() }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.characters()) }
}
