// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering,
          ops::{RangeFrom, RangeFull, RangeInclusive, RangeToInclusive}};

use crate::{EditError, EditResult, NumberValue, Sign};

/// The values a [`crate::NumberStyle`] accepts. Both ends are inclusive and lie in the
/// value type's lossless domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<V> {
    min: V,
    max: V,
}

/// Ranges that convert into [`Bounds`]. Open ends default to the lossless limits of
/// `V`.
pub trait IntoBounds<V: NumberValue> {
    fn into_bounds(self) -> Bounds<V>;
}

impl<V: NumberValue> Default for Bounds<V> {
    fn default() -> Self { Self::none() }
}

impl<V: NumberValue> Bounds<V> {
    /// `min` and `max` are clamped into the lossless domain, and swapped when out of
    /// order.
    #[must_use]
    pub fn new(min: V, max: V) -> Self {
        let (min, max) = (clamp_lossless(min), clamp_lossless(max));
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// ```
    /// use diffable_text::Bounds;
    ///
    /// assert_eq!(Bounds::<i32>::values(5..=9).max(), 9);
    /// assert_eq!(Bounds::<i32>::values(5..).max(), i32::MAX);
    /// assert_eq!(Bounds::<u8>::values(..).min(), 0);
    /// ```
    #[must_use]
    pub fn values(range: impl IntoBounds<V>) -> Self { range.into_bounds() }

    /// The whole lossless domain.
    #[must_use]
    pub fn none() -> Self {
        Self {
            min: V::LOSSLESS_MIN,
            max: V::LOSSLESS_MAX,
        }
    }

    #[must_use]
    pub fn min(&self) -> V { self.min }

    #[must_use]
    pub fn max(&self) -> V { self.max }

    #[must_use]
    pub fn contains(&self, value: V) -> bool { self.min <= value && value <= self.max }

    /// The closest value within bounds. `NaN` is treated as zero.
    #[must_use]
    pub fn clamp(&self, value: V) -> V {
        let value = clamp_lossless(value);
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// # Errors
    ///
    /// Returns [`EditError::OutOfBounds`] when `value` is not within bounds.
    pub fn validate(&self, value: V) -> EditResult<V> {
        if self.contains(value) {
            return Ok(value);
        }
        Err(EditError::OutOfBounds {
            value: value.to_canonical(V::FRACTION_DIGITS),
            min: self.min.to_canonical(V::FRACTION_DIGITS),
            max: self.max.to_canonical(V::FRACTION_DIGITS),
        })
    }

    /// The sign a value can have. Non-negative bounds force positive, non-positive
    /// bounds force negative.
    #[must_use]
    pub fn autocorrect(&self, sign: Sign) -> Sign {
        if self.min >= V::ZERO {
            Sign::Positive
        } else if self.max <= V::ZERO {
            Sign::Negative
        } else {
            sign
        }
    }
}

fn clamp_lossless<V: NumberValue>(value: V) -> V {
    match (
        value.partial_cmp(&V::LOSSLESS_MIN),
        value.partial_cmp(&V::LOSSLESS_MAX),
    ) {
        (None, _) | (_, None) => V::ZERO,
        (Some(Ordering::Less), _) => V::LOSSLESS_MIN,
        (_, Some(Ordering::Greater)) => V::LOSSLESS_MAX,
        _ => value,
    }
}

mod convert {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<V: NumberValue> IntoBounds<V> for Bounds<V> {
        fn into_bounds(self) -> Bounds<V> { self }
    }

    impl<V: NumberValue> IntoBounds<V> for RangeInclusive<V> {
        fn into_bounds(self) -> Bounds<V> {
            let (min, max) = self.into_inner();
            Bounds::new(min, max)
        }
    }

    impl<V: NumberValue> IntoBounds<V> for RangeFrom<V> {
        fn into_bounds(self) -> Bounds<V> { Bounds::new(self.start, V::LOSSLESS_MAX) }
    }

    impl<V: NumberValue> IntoBounds<V> for RangeToInclusive<V> {
        fn into_bounds(self) -> Bounds<V> { Bounds::new(V::LOSSLESS_MIN, self.end) }
    }

    impl<V: NumberValue> IntoBounds<V> for RangeFull {
        fn into_bounds(self) -> Bounds<V> { Bounds::none() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_validate() {
        let it = Bounds::<i64>::values(5..=9);
        assert_eq2!(it.validate(7), Ok(7));
        assert_eq2!(
            it.validate(12),
            Err(EditError::OutOfBounds {
                value: "12".into(),
                min: "5".into(),
                max: "9".into(),
            })
        );
        assert_eq2!(it.clamp(12), 9);
        assert_eq2!(it.clamp(-3), 5);
    }

    #[test]
    fn test_clamped_into_lossless_domain() {
        let it = Bounds::<f64>::values(-1e300..=1e300);
        assert_eq2!(it.min(), f64::LOSSLESS_MIN);
        assert_eq2!(it.max(), f64::LOSSLESS_MAX);
        assert_eq2!(it.clamp(f64::NAN), 0.0);

        let it = Bounds::<i32>::values(9..=5);
        assert_eq2!((it.min(), it.max()), (5, 9));
    }

    #[test]
    fn test_partial_ranges() {
        assert_eq2!(Bounds::<i8>::values(..=0), Bounds::new(i8::MIN, 0));
        assert_eq2!(Bounds::<i8>::values(-1..), Bounds::new(-1, i8::MAX));
        assert_eq2!(Bounds::<i8>::values(..), Bounds::none());
        assert_eq2!(Bounds::<i8>::default(), Bounds::none());
    }

    #[test]
    fn test_autocorrect() {
        assert_eq2!(Bounds::<i32>::values(0..).autocorrect(Sign::Negative), Sign::Positive);
        assert_eq2!(Bounds::<i32>::values(..=-1).autocorrect(Sign::Positive), Sign::Negative);
        assert_eq2!(Bounds::<i32>::none().autocorrect(Sign::Negative), Sign::Negative);
        assert_eq2!(Bounds::<u32>::none().autocorrect(Sign::Negative), Sign::Positive);
    }
}
