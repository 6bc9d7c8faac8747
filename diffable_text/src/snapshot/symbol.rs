// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::Attribute;

/// One displayed character plus its [`Attribute`] set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub character: char,
    pub attribute: Attribute,
}

impl Symbol {
    #[must_use]
    pub fn new(character: char, attribute: Attribute) -> Self {
        Self {
            character,
            attribute,
        }
    }

    /// A symbol that counts toward the value. See [`Attribute::TEXT`].
    #[must_use]
    pub fn content(character: char) -> Self { Self::new(character, Attribute::TEXT) }

    /// A formatting symbol. See [`Attribute::PHANTOM`].
    #[must_use]
    pub fn phantom(character: char) -> Self { Self::new(character, Attribute::PHANTOM) }

    #[must_use]
    pub fn is_content(&self) -> bool { self.attribute.is_content() }

    #[must_use]
    pub fn is_virtual(&self) -> bool { self.attribute.is_virtual() }

    #[must_use]
    pub fn is_nonvirtual(&self) -> bool { !self.attribute.is_virtual() }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.character) }
}
