// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Offsets in the host surface's native unit.
//!
//! Hosts count text differently: UTF-16 code units (most GUI toolkits and the web), UTF-8
//! bytes (terminals, Rust strings), or characters. A [`Position`] is tagged with its
//! [`Encoding`] at the type level so that offsets of different units can't be mixed up.
//! [`crate::Field::indices`] and [`crate::Field::positions`] convert between positions
//! and snapshot indices.

use std::{fmt::{Debug, Display, Formatter, Result},
          hash::Hash,
          marker::PhantomData,
          ops::Range};

/// A unit that the host surface measures text in.
pub trait Encoding:
    Copy + Eq + Ord + Hash + Debug + Default + Send + Sync + 'static
{
    /// Number of units that `character` occupies.
    fn width(character: char) -> usize;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Character;

impl Encoding for Utf16 {
    fn width(character: char) -> usize { character.len_utf16() }
}

impl Encoding for Utf8 {
    fn width(character: char) -> usize { character.len_utf8() }
}

impl Encoding for Character {
    fn width(_: char) -> usize { 1 }
}

/// An offset measured in `E` units.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position<E: Encoding> {
    offset: usize,
    _encoding: PhantomData<E>,
}

/// Creates a new [`Position`].
#[must_use]
pub fn position<E: Encoding>(offset: usize) -> Position<E> { Position::new(offset) }

impl<E: Encoding> Position<E> {
    #[must_use]
    pub fn new(offset: usize) -> Self {
        Self {
            offset,
            _encoding: PhantomData,
        }
    }

    #[must_use]
    pub fn offset(&self) -> usize { self.offset }

    /// Total width of `text` in `E` units.
    #[must_use]
    pub fn end_of(text: &str) -> Self { Self::new(text.chars().map(E::width).sum()) }
}

impl<E: Encoding> Debug for Position<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Position<{:?}>({})", E::default(), self.offset)
    }
}

impl<E: Encoding> Display for Position<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.offset) }
}

mod convert {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<E: Encoding> From<usize> for Position<E> {
        fn from(offset: usize) -> Self { Self::new(offset) }
    }

    impl<E: Encoding> From<Position<E>> for usize {
        fn from(it: Position<E>) -> Self { it.offset }
    }
}

/// Converts a host range into a range of [`Position`]s.
#[must_use]
pub fn positions_of<E: Encoding>(range: Range<usize>) -> Range<Position<E>> {
    position(range.start)..position(range.end)
}

/// Converts a range of [`Position`]s back into plain offsets.
#[must_use]
pub fn offsets_of<E: Encoding>(range: Range<Position<E>>) -> Range<usize> {
    range.start.offset()..range.end.offset()
}
