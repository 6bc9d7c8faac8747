// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{marker::PhantomData,
          ops::{Bound, RangeBounds, RangeInclusive}};

use crate::{EditError, EditResult, NumberValue};

/// How many integer and fraction digits a [`crate::NumberStyle`] shows and accepts.
///
/// The lower bounds pad formatted values with zeros. The upper bounds stop typing once
/// reached. Both ranges are clamped into what `V` holds without loss: integer digits into
/// `1..=V::INTEGER_DIGITS`, fraction digits into `0..=V::FRACTION_DIGITS`.
///
/// ```
/// use diffable_text::Precision;
///
/// let it = Precision::<f64>::digits(1..=3, 2..=2);
/// assert_eq!(it.integer_digits(), 1..=3);
/// assert!(it.editable_validation(4, 0).is_err());
/// ```
pub struct Precision<V> {
    integer: RangeInclusive<usize>,
    fraction: RangeInclusive<usize>,
    _value: PhantomData<fn() -> V>,
}

impl<V: NumberValue> Precision<V> {
    /// Everything `V` holds. Fraction digits aren't padded.
    #[must_use]
    pub fn standard() -> Self {
        Self::digits(1..=V::INTEGER_DIGITS, 0..=V::FRACTION_DIGITS)
    }

    #[must_use]
    pub fn digits(
        integer: impl RangeBounds<usize>,
        fraction: impl RangeBounds<usize>,
    ) -> Self {
        Self {
            integer: clamped(&integer, 1, V::INTEGER_DIGITS),
            fraction: clamped(&fraction, 0, V::FRACTION_DIGITS),
            _value: PhantomData,
        }
    }

    /// Limits integer digits, with the standard fraction digits.
    #[must_use]
    pub fn integer(integer: impl RangeBounds<usize>) -> Self {
        Self::digits(integer, 0..=V::FRACTION_DIGITS)
    }

    /// Limits fraction digits, with the standard integer digits.
    #[must_use]
    pub fn fraction(fraction: impl RangeBounds<usize>) -> Self {
        Self::digits(1..=V::INTEGER_DIGITS, fraction)
    }

    #[must_use]
    pub fn integer_digits(&self) -> RangeInclusive<usize> { self.integer.clone() }

    #[must_use]
    pub fn fraction_digits(&self) -> RangeInclusive<usize> { self.fraction.clone() }

    /// Checks digit counts of text being edited. Only upper bounds apply, a field that is
    /// being typed into is allowed to be short.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::TooManyIntegerDigits`], [`EditError::TooManyFractionDigits`],
    /// or [`EditError::ExceedsCapacity`] when the total exceeds `V::SIGNIFICANT_DIGITS`.
    pub fn editable_validation(
        &self,
        integer_count: usize,
        fraction_count: usize,
    ) -> EditResult<()> {
        let integer_max = *self.integer.end();
        if integer_count > integer_max {
            return Err(EditError::TooManyIntegerDigits {
                count: integer_count,
                max: integer_max,
            });
        }
        let fraction_max = *self.fraction.end();
        if fraction_count > fraction_max {
            return Err(EditError::TooManyFractionDigits {
                count: fraction_count,
                max: fraction_max,
            });
        }
        let count = integer_count + fraction_count;
        if count > V::SIGNIFICANT_DIGITS {
            return Err(EditError::ExceedsCapacity {
                count,
                max: V::SIGNIFICANT_DIGITS,
            });
        }
        Ok(())
    }
}

/// `range` as an inclusive range within `floor..=ceiling`. An empty range collapses
/// onto its start.
fn clamped(
    range: &impl RangeBounds<usize>,
    floor: usize,
    ceiling: usize,
) -> RangeInclusive<usize> {
    let start = match range.start_bound() {
        Bound::Included(it) => *it,
        Bound::Excluded(it) => it.saturating_add(1),
        Bound::Unbounded => floor,
    }
    .clamp(floor, ceiling);
    let end = match range.end_bound() {
        Bound::Included(it) => *it,
        Bound::Excluded(it) => it.saturating_sub(1),
        Bound::Unbounded => ceiling,
    }
    .clamp(start, ceiling);
    start..=end
}

impl<V: NumberValue> Default for Precision<V> {
    fn default() -> Self { Self::standard() }
}

// Manual impls, so that `V` doesn't need to implement these traits.
impl<V> Clone for Precision<V> {
    fn clone(&self) -> Self {
        Self {
            integer: self.integer.clone(),
            fraction: self.fraction.clone(),
            _value: PhantomData,
        }
    }
}

impl<V> PartialEq for Precision<V> {
    fn eq(&self, other: &Self) -> bool {
        self.integer == other.integer && self.fraction == other.fraction
    }
}

impl<V> Eq for Precision<V> {}

impl<V> std::fmt::Debug for Precision<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Precision")
            .field("integer", &self.integer)
            .field("fraction", &self.fraction)
            .finish()
    }
}
