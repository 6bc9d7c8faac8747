// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The canonical, locale independent decomposition of numeric text.
//!
//! Decoding runs in a single forward pass over the characters that count toward the
//! value, translating each one through a [`Lexicon`]:
//!
//! ```text
//! "-$1,234.5"  ─▶  sign: Negative  integer: "1234"  separator: Fraction  fraction: "5"
//!   │└─ affix, skipped
//!   └── sign, only in front of the digits
//! ```
//!
//! [`Number::canonical`] renders the decomposition as plain ASCII (`-1234.5`), which is
//! what [`crate::NumberValue::from_canonical`] parses and what a
//! [`crate::FormatService`] formats.

use std::fmt::{Display, Formatter};

use crate::{Digits, EditError, EditResult, Glyph, Lexicon, Sign};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Separator {
    #[default]
    None,
    Fraction,
}

/// `(sign, integer digits, separator, fraction digits)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Number {
    pub sign: Sign,
    pub integer: Digits,
    pub separator: Separator,
    pub fraction: Digits,
}

impl Number {
    /// Decodes `characters` through `lexicon`.
    ///
    /// - Affixes (labels, percent signs, spacing) are skipped.
    /// - Grouping separators are skipped in the integer part.
    /// - A sign is only accepted once, in front of the digits.
    ///
    /// # Errors
    ///
    /// Returns a decode [`EditError`] for an unknown character, a misplaced sign, a
    /// second fraction separator, or a fraction separator when `integer_only` is set.
    pub fn decode(
        characters: impl IntoIterator<Item = char>,
        lexicon: &Lexicon,
        integer_only: bool,
    ) -> EditResult<Self> {
        let mut number = Number::default();
        let mut seen_sign = false;
        // A grouping separator after the fraction separator is only fine as trailing
        // spacing, eg: the space in front of a currency label that uses the same glyph.
        let mut grouping_in_fraction = None;

        for character in characters {
            let Some(glyph) = lexicon.glyph(character) else {
                if lexicon.is_affix(character) {
                    continue;
                }
                return Err(EditError::UnrecognizedCharacter { character });
            };

            match glyph {
                Glyph::Sign(sign) => {
                    let after_digits = !number.integer.is_empty()
                        || number.separator == Separator::Fraction;
                    if seen_sign || after_digits {
                        return Err(EditError::MisplacedSign { character });
                    }
                    seen_sign = true;
                    number.sign = sign;
                }
                Glyph::Digit(digit) => {
                    if let Some(character) = grouping_in_fraction {
                        return Err(EditError::UnrecognizedCharacter { character });
                    }
                    match number.separator {
                        Separator::None => number.integer.push(digit),
                        Separator::Fraction => number.fraction.push(digit),
                    }
                }
                Glyph::FractionSeparator => {
                    if integer_only {
                        return Err(EditError::FractionNotAllowed);
                    }
                    if number.separator == Separator::Fraction {
                        return Err(EditError::DuplicateFractionSeparator);
                    }
                    number.separator = Separator::Fraction;
                }
                Glyph::GroupingSeparator => {
                    if number.separator == Separator::Fraction {
                        grouping_in_fraction.get_or_insert(character);
                    }
                }
            }
        }

        Ok(number)
    }

    /// Parses ASCII canonical text, eg: `-1234.5`, `0.25`, `12.`. Returns `None` for
    /// anything else.
    #[must_use]
    pub fn from_canonical(text: &str) -> Option<Self> {
        let (sign, rest) = match text.strip_prefix(Sign::Negative.ascii()) {
            Some(rest) => (Sign::Negative, rest),
            None => (
                Sign::Positive,
                text.strip_prefix(Sign::Positive.ascii()).unwrap_or(text),
            ),
        };
        let (integer, separator, fraction) = match rest.split_once('.') {
            Some((integer, fraction)) => (integer, Separator::Fraction, fraction),
            None => (rest, Separator::None, ""),
        };
        Some(Self {
            sign,
            integer: Digits::from_ascii(integer)?,
            separator,
            fraction: Digits::from_ascii(fraction)?,
        })
    }

    #[must_use]
    pub fn is_zero(&self) -> bool { self.integer.is_zero() && self.fraction.is_zero() }

    /// Integer digits that count toward precision, ie: without leading zeros.
    #[must_use]
    pub fn integer_count(&self) -> usize { self.integer.significant_count() }

    #[must_use]
    pub fn fraction_count(&self) -> usize { self.fraction.count() }

    /// ASCII text for parsing and formatting. Zero never has a sign. An empty integer
    /// part is `0`. An empty fraction is dropped along with its separator. Typed
    /// trailing fraction zeros are kept.
    #[must_use]
    pub fn canonical(&self) -> String {
        let mut it = String::new();
        if self.sign == Sign::Negative && !self.is_zero() {
            it.push(self.sign.ascii());
        }
        match self.integer.trimmed_leading_zeros() {
            "" => it.push('0'),
            integer => it.push_str(integer),
        }
        if !self.fraction.is_empty() {
            it.push('.');
            it.push_str(self.fraction.as_str());
        }
        it
    }

    /// Moves the decimal point `places` to the right (or to the left when negative).
    /// Digits are moved exactly, nothing is rounded.
    #[must_use]
    pub fn shifted(&self, places: isize) -> Self {
        let mut digits: Vec<u8> = self.integer.values().chain(self.fraction.values()).collect();
        let count = self.integer.count();
        let distance = places.unsigned_abs();

        let point = if places >= 0 {
            count + distance
        } else if distance > count {
            digits.splice(0..0, std::iter::repeat_n(0, distance - count));
            0
        } else {
            count - distance
        };
        if point > digits.len() {
            digits.resize(point, 0);
        }

        let mut integer = Digits::new();
        let mut fraction = Digits::new();
        for (index, digit) in digits.into_iter().enumerate() {
            if index < point {
                integer.push(digit);
            } else {
                fraction.push(digit);
            }
        }

        // Drop what the shift made insignificant, so the result reads like typed text.
        let integer = Digits::from_ascii(integer.trimmed_leading_zeros()).unwrap_or_default();
        let fraction =
            Digits::from_ascii(fraction.as_str().trim_end_matches('0')).unwrap_or_default();

        Self {
            sign: self.sign,
            separator: if fraction.is_empty() {
                Separator::None
            } else {
                Separator::Fraction
            },
            integer,
            fraction,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}
