// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

/// Enough for the widest lossless integer (`u64`) without spilling to the heap.
pub const DIGITS_INLINE_CAPACITY: usize = 24;

/// Accumulated ASCII decimal digits of one part of a [`crate::Number`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Digits(SmallVec<[u8; DIGITS_INLINE_CAPACITY]>);

impl Digits {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Pushes a digit value `0..=9`. Larger values are ignored.
    pub fn push(&mut self, digit: u8) {
        if digit <= 9 {
            self.0.push(b'0' + digit);
        }
    }

    #[must_use]
    pub fn count(&self) -> usize { self.0.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[must_use]
    pub fn is_zero(&self) -> bool { self.0.iter().all(|it| *it == b'0') }

    #[must_use]
    pub fn as_str(&self) -> &str { std::str::from_utf8(&self.0).unwrap_or_default() }

    /// Digit values, most significant first.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ { self.0.iter().map(|it| it - b'0') }

    /// Number of digits after leading zeros are dropped.
    #[must_use]
    pub fn significant_count(&self) -> usize {
        self.0.iter().skip_while(|it| **it == b'0').count()
    }

    /// The digits without leading zeros.
    #[must_use]
    pub fn trimmed_leading_zeros(&self) -> &str { self.as_str().trim_start_matches('0') }

    /// Parses ASCII digits. Returns `None` for anything else.
    #[must_use]
    pub fn from_ascii(text: &str) -> Option<Self> {
        text.bytes()
            .all(|it| it.is_ascii_digit())
            .then(|| Self(text.bytes().collect()))
    }
}

impl Display for Digits {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_push_and_trim() {
        let mut it = Digits::new();
        for digit in [0, 0, 1, 2, 0, 42] {
            it.push(digit);
        }
        assert_eq2!(it.as_str(), "00120");
        assert_eq2!(it.count(), 5);
        assert_eq2!(it.significant_count(), 3);
        assert_eq2!(it.trimmed_leading_zeros(), "120");
        assert_eq2!(it.values().collect::<Vec<_>>(), vec![0, 0, 1, 2, 0]);
        assert!(!it.is_zero());
    }

    #[test]
    fn test_from_ascii() {
        assert_eq2!(Digits::from_ascii("007").map(|it| it.to_string()), Some("007".into()));
        assert!(Digits::from_ascii("0x7").is_none());
        assert!(Digits::from_ascii("").is_some_and(|it| it.is_zero()));
    }
}
