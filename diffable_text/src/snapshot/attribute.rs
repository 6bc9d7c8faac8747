// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

bitflags::bitflags! {
    /// How a [`crate::Symbol`] participates in edits and caret placement.
    ///
    /// A symbol is either content (it counts toward the value) or virtual (decoration
    /// such as grouping separators, currency labels, and pattern literals). Never both.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attribute: u8 {
        /// Counts toward the value.
        const CONTENT = 1 << 0;
        /// Decoration. Ignored when decoding.
        const VIRTUAL = 1 << 1;
        /// The diff may treat this symbol as newly inserted.
        const INSERTABLE = 1 << 2;
        /// The diff may treat this symbol as deleted.
        const REMOVABLE = 1 << 3;
        /// Echoes input 1:1. A deletion that only touches passthrough symbols is
        /// widened to the nearest content symbol.
        const PASSTHROUGH = 1 << 4;
        /// The caret may rest on the boundary before this symbol.
        const LOOKAHEADABLE = 1 << 5;
        /// The caret may rest on the boundary after this symbol.
        const LOOKBEHINDABLE = 1 << 6;
        /// The boundary after this symbol is a barrier. It is always a caret stop, and
        /// caret look-around never crosses it.
        const ANCHOR = 1 << 7;

        /// Plain content.
        const TEXT = Self::CONTENT.bits()
            | Self::LOOKAHEADABLE.bits()
            | Self::LOOKBEHINDABLE.bits();

        /// Formatting that appears and disappears as the value changes.
        const PHANTOM = Self::VIRTUAL.bits()
            | Self::INSERTABLE.bits()
            | Self::REMOVABLE.bits()
            | Self::PASSTHROUGH.bits();
    }
}

impl Attribute {
    #[must_use]
    pub fn is_content(self) -> bool { self.contains(Self::CONTENT) }

    #[must_use]
    pub fn is_virtual(self) -> bool { self.contains(Self::VIRTUAL) }

    #[must_use]
    pub fn is_insertable(self) -> bool { self.contains(Self::INSERTABLE) }

    #[must_use]
    pub fn is_removable(self) -> bool { self.contains(Self::REMOVABLE) }

    #[must_use]
    pub fn is_passthrough(self) -> bool { self.contains(Self::PASSTHROUGH) }

    #[must_use]
    pub fn is_lookaheadable(self) -> bool { self.contains(Self::LOOKAHEADABLE) }

    #[must_use]
    pub fn is_lookbehindable(self) -> bool { self.contains(Self::LOOKBEHINDABLE) }

    #[must_use]
    pub fn is_anchor(self) -> bool { self.contains(Self::ANCHOR) }
}
