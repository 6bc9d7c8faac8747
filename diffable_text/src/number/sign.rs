// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// The ASCII glyph used in canonical text.
    #[must_use]
    pub fn ascii(self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        for sign in Sign::iter() {
            assert_ne!(sign.toggled(), sign);
            assert_eq!(sign.toggled().toggled(), sign);
        }
        assert_eq!(Sign::default(), Sign::Positive);
        assert_eq!(Sign::Negative.to_string(), "Negative");
    }
}
