// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Sign;

/// What a displayed character means to a number. See [`crate::Lexicon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sign(Sign),
    /// A digit value, `0..=9`.
    Digit(u8),
    FractionSeparator,
    GroupingSeparator,
}

impl Glyph {
    /// Digits, signs, and the fraction separator count toward the value. Grouping
    /// separators are formatting.
    #[must_use]
    pub fn is_content(self) -> bool { !matches!(self, Glyph::GroupingSeparator) }
}
