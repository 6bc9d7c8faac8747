// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The seam to a platform's locale aware number formatting.
//!
//! The engine never formats localized numbers itself. It hands canonical ASCII text
//! (`-1234.5`) plus a [`FormatRequest`] to a [`FormatService`], and learns each locale's
//! glyphs from [`FormatService::number_symbols`] and
//! [`FormatService::currency_symbols`]. [`crate::BuiltinFormatService`] is a table
//! driven implementation for a fixed set of locales.

use std::{fmt::Debug, ops::RangeInclusive};

use strum_macros::{Display, EnumIter};

/// Glyphs of a locale's number system.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NumberSymbols {
    /// The locale's digits, `0` to `9`.
    pub digits: [char; 10],
    pub fraction: char,
    pub grouping: Option<char>,
    pub minus: char,
    pub plus: char,
}

/// How a currency is displayed in a locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurrencySymbols {
    pub symbol: String,
    pub fraction_digits: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Decimal,
    /// ISO 4217 code, eg: `USD`.
    Currency(String),
    Percent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SignDisplay {
    /// Only negative values have a sign. Zero never has one.
    #[default]
    Automatic,
    /// Every value has a sign. Zero is positive.
    Always,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SeparatorDisplay {
    /// The fraction separator is shown when there are fraction digits.
    #[default]
    Automatic,
    /// The fraction separator is always shown.
    Always,
}

/// Everything a [`FormatService`] needs to render one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatRequest<'a> {
    pub locale: &'a str,
    pub kind: &'a FormatKind,
    /// The integer part is padded with zeros up to this many digits.
    pub integer_digits_min: usize,
    /// The fraction is padded up to the start and rounded down to the end.
    pub fraction_digits: RangeInclusive<usize>,
    pub grouping: bool,
    pub sign_display: SignDisplay,
    pub separator_display: SeparatorDisplay,
}

/// A platform's number formatting service.
///
/// Implementations must be deterministic: the same canonical text and request always
/// produce the same output. A locale listed by [`FormatService::available_locales`] must
/// have [`FormatService::number_symbols`].
pub trait FormatService: Debug + Send + Sync {
    fn available_locales(&self) -> Vec<String>;

    fn number_symbols(&self, locale: &str) -> Option<NumberSymbols>;

    /// `code` is a well formed ISO 4217 code.
    fn currency_symbols(&self, locale: &str, code: &str) -> Option<CurrencySymbols>;

    /// Renders canonical ASCII text, eg: `-1234.5`. Like most platform formatters, zero
    /// is never rendered with a minus sign.
    fn format(&self, canonical: &str, request: &FormatRequest<'_>) -> String;
}
