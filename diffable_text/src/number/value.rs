// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Numeric value types that a [`crate::NumberStyle`] can edit.
//!
//! Every type declares a lossless domain: the range of values, and the number of
//! digits, that survive a trip through canonical text without changing. Integers are
//! exact over their whole range. Floats are limited to the digits their mantissa holds
//! exactly, eg: 15 for `f64`.

use std::fmt::{Debug, Display};

/// A value type with a canonical ASCII text form, eg: `-1234.5`.
pub trait NumberValue: Copy + PartialOrd + Debug + Display + Send + Sync + 'static {
    const ZERO: Self;
    /// Smallest value of the lossless domain.
    const LOSSLESS_MIN: Self;
    /// Largest value of the lossless domain.
    const LOSSLESS_MAX: Self;
    const INTEGER_DIGITS: usize;
    const FRACTION_DIGITS: usize;
    /// Integer plus fraction digits, at most.
    const SIGNIFICANT_DIGITS: usize;
    const IS_INTEGER: bool;
    const IS_UNSIGNED: bool;

    /// Parses canonical text. Returns `None` when the text is malformed or the value
    /// doesn't fit.
    fn from_canonical(text: &str) -> Option<Self>;

    /// Canonical text with at most `max_fraction` fraction digits, and without trailing
    /// fraction zeros. Zero is `0`, never `-0`.
    fn to_canonical(self, max_fraction: usize) -> String;
}

/// Marker for the float value types. Percent styles require one, since a percentage of
/// an integer type would only hold multiples of 100%.
pub trait FloatingPointValue: NumberValue {}

macro_rules! impl_integer_value {
    ($($type:ty => $digits:expr, $unsigned:expr);* $(;)?) => {
        $(
            impl NumberValue for $type {
                const ZERO: Self = 0;
                const LOSSLESS_MIN: Self = <$type>::MIN;
                const LOSSLESS_MAX: Self = <$type>::MAX;
                const INTEGER_DIGITS: usize = $digits;
                const FRACTION_DIGITS: usize = 0;
                const SIGNIFICANT_DIGITS: usize = $digits;
                const IS_INTEGER: bool = true;
                const IS_UNSIGNED: bool = $unsigned;

                fn from_canonical(text: &str) -> Option<Self> {
                    let text = text.strip_suffix('.').unwrap_or(text);
                    // `-0` is fine even for unsigned types.
                    match text.strip_prefix('-') {
                        Some(rest) if rest.bytes().all(|it| it == b'0') && !rest.is_empty() => {
                            Some(0)
                        }
                        _ => text.parse().ok(),
                    }
                }

                fn to_canonical(self, _max_fraction: usize) -> String { self.to_string() }
            }
        )*
    };
}

macro_rules! impl_float_value {
    ($($type:ty => $digits:expr, $limit:expr);* $(;)?) => {
        $(
            impl NumberValue for $type {
                const ZERO: Self = 0.0;
                const LOSSLESS_MIN: Self = -$limit;
                const LOSSLESS_MAX: Self = $limit;
                const INTEGER_DIGITS: usize = $digits;
                const FRACTION_DIGITS: usize = $digits;
                const SIGNIFICANT_DIGITS: usize = $digits;
                const IS_INTEGER: bool = false;
                const IS_UNSIGNED: bool = false;

                fn from_canonical(text: &str) -> Option<Self> {
                    let value: Self = text.parse().ok()?;
                    value.is_finite().then_some(value)
                }

                fn to_canonical(self, max_fraction: usize) -> String {
                    if !self.is_finite() {
                        return "0".to_string();
                    }
                    let integer_digits = self.abs().trunc().to_string().len();
                    let fraction = max_fraction
                        .min(Self::SIGNIFICANT_DIGITS.saturating_sub(integer_digits));
                    trim_canonical(format!("{:.*}", fraction, self))
                }
            }

            impl FloatingPointValue for $type {}
        )*
    };
}

impl_integer_value! {
    i8 => 3, false;
    i16 => 5, false;
    i32 => 10, false;
    i64 => 19, false;
    u8 => 3, true;
    u16 => 5, true;
    u32 => 10, true;
    u64 => 20, true;
}

impl_float_value! {
    f32 => 7, 9_999_999.0;
    f64 => 15, 999_999_999_999_999.0;
}

/// Drops trailing fraction zeros (and a bare separator) and the sign of zero.
fn trim_canonical(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text.strip_prefix('-').is_some_and(|rest| rest.bytes().all(|it| it == b'0')) {
        text.remove(0);
    }
    text
}
