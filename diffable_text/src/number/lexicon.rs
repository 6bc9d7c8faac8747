// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per locale glyph translation.
//!
//! A [`Lexicon`] knows which characters are digits, signs, and separators in one locale,
//! in both directions. It also knows which other characters show up around numbers
//! (currency labels, percent signs, spacing). Those are affixes: decoding skips them
//! instead of rejecting the edit. Lexicons are built from a [`FormatService`] by asking
//! for the locale's symbols and formatting a few sample values, so they are cached, see
//! [`crate::LexiconCache`].
//!
//! ASCII digits, `-`, `+`, and `.` are accepted as aliases so that a Latin keyboard can
//! type into any locale. An alias is only added when it doesn't collide with a real glyph
//! of the locale, eg: `.` is grouping in `de_DE`, so it is not a fraction alias there.

use std::borrow::Cow;

use miette::Diagnostic;
use rustc_hash::{FxHashMap, FxHashSet};
use strum::IntoEnumIterator;

use crate::{FormatKind, FormatRequest, FormatService, Glyph, NumberSymbols,
            SeparatorDisplay, Sign, SignDisplay};

/// Canonical texts formatted to find a locale's affixes.
const AFFIX_SAMPLES: [&str; 3] = ["-1234567.89", "1234567.89", "0"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum LexiconError {
    #[error("Locale {locale:?} is not available")]
    #[diagnostic(
        code(diffable_text::lexicon::unknown_locale),
        help("Use one of the format service's available locales")
    )]
    UnknownLocale { locale: String },

    #[error("Currency code {code:?} is malformed")]
    #[diagnostic(
        code(diffable_text::lexicon::malformed_currency_code),
        help("Currency codes are three uppercase ASCII letters, eg: USD")
    )]
    MalformedCurrencyCode { code: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    locale: String,
    currency_code: Option<String>,
    currency_fraction_digits: Option<usize>,
    symbols: NumberSymbols,
    label: Option<String>,
    glyphs: FxHashMap<char, Glyph>,
    affixes: FxHashSet<char>,
}

impl Lexicon {
    /// Lexicon for plain numbers and percentages.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::UnknownLocale`] if `service` doesn't know `locale`.
    pub fn standard(service: &dyn FormatService, locale: &str) -> Result<Self, LexiconError> {
        let symbols = number_symbols(service, locale)?;
        let glyphs = glyph_table(&symbols);
        let affixes = collect_affixes(
            service,
            locale,
            &[FormatKind::Decimal, FormatKind::Percent],
            &glyphs,
        );
        Ok(Self {
            locale: locale.to_string(),
            currency_code: None,
            currency_fraction_digits: None,
            symbols,
            label: None,
            glyphs,
            affixes,
        })
    }

    /// Lexicon for amounts of currency `code` (ISO 4217, eg: `USD`).
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::MalformedCurrencyCode`] unless `code` is three uppercase
    /// ASCII letters, and [`LexiconError::UnknownLocale`] if `service` doesn't know
    /// `locale`.
    pub fn currency(
        service: &dyn FormatService,
        locale: &str,
        code: &str,
    ) -> Result<Self, LexiconError> {
        if !is_well_formed_currency_code(code) {
            return Err(LexiconError::MalformedCurrencyCode {
                code: code.to_string(),
            });
        }
        let symbols = number_symbols(service, locale)?;
        let currency = service.currency_symbols(locale, code).ok_or_else(|| {
            LexiconError::UnknownLocale {
                locale: locale.to_string(),
            }
        })?;
        let glyphs = glyph_table(&symbols);
        let affixes = collect_affixes(
            service,
            locale,
            &[FormatKind::Currency(code.to_string())],
            &glyphs,
        );
        Ok(Self {
            locale: locale.to_string(),
            currency_code: Some(code.to_string()),
            currency_fraction_digits: Some(currency.fraction_digits),
            symbols,
            label: Some(currency.symbol).filter(|it| !it.is_empty()),
            glyphs,
            affixes,
        })
    }

    #[must_use]
    pub fn locale(&self) -> &str { &self.locale }

    #[must_use]
    pub fn currency_code(&self) -> Option<&str> { self.currency_code.as_deref() }

    #[must_use]
    pub fn currency_fraction_digits(&self) -> Option<usize> { self.currency_fraction_digits }

    #[must_use]
    pub fn symbols(&self) -> &NumberSymbols { &self.symbols }

    /// The currency symbol, if this is a currency lexicon.
    #[must_use]
    pub fn label(&self) -> Option<&str> { self.label.as_deref() }

    /// What `character` means, including ASCII aliases.
    #[must_use]
    pub fn glyph(&self, character: char) -> Option<Glyph> {
        self.glyphs.get(&character).copied()
    }

    #[must_use]
    pub fn is_affix(&self, character: char) -> bool { self.affixes.contains(&character) }

    /// The locale's character for `glyph`. `None` for grouping in a locale without
    /// grouping, or a digit value above 9.
    #[must_use]
    pub fn character(&self, glyph: Glyph) -> Option<char> {
        match glyph {
            Glyph::Sign(Sign::Positive) => Some(self.symbols.plus),
            Glyph::Sign(Sign::Negative) => Some(self.symbols.minus),
            Glyph::Digit(digit) => self.symbols.digits.get(usize::from(digit)).copied(),
            Glyph::FractionSeparator => Some(self.symbols.fraction),
            Glyph::GroupingSeparator => self.symbols.grouping,
        }
    }

    /// `text` without occurrences of the currency label. A label may contain glyph
    /// characters, eg: the `.` in `B/.`, which must not be decoded as part of the number.
    #[must_use]
    pub fn strip_label<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.label() {
            Some(label) if text.contains(label) => Cow::Owned(text.replace(label, "")),
            _ => Cow::Borrowed(text),
        }
    }

    /// The range of character indices (not bytes) of the first label occurrence in
    /// `text`.
    #[must_use]
    pub fn label_range(&self, text: &str) -> Option<std::ops::Range<usize>> {
        let label = self.label()?;
        let byte_index = text.find(label)?;
        let start = text[..byte_index].chars().count();
        Some(start..start + label.chars().count())
    }
}

#[must_use]
pub fn is_well_formed_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|it| it.is_ascii_uppercase())
}

fn number_symbols(
    service: &dyn FormatService,
    locale: &str,
) -> Result<NumberSymbols, LexiconError> {
    service
        .number_symbols(locale)
        .ok_or_else(|| LexiconError::UnknownLocale {
            locale: locale.to_string(),
        })
}

fn glyph_table(symbols: &NumberSymbols) -> FxHashMap<char, Glyph> {
    let mut it = FxHashMap::default();

    for (value, character) in (0u8..).zip(symbols.digits) {
        it.insert(character, Glyph::Digit(value));
    }
    it.insert(symbols.fraction, Glyph::FractionSeparator);
    if let Some(grouping) = symbols.grouping {
        it.insert(grouping, Glyph::GroupingSeparator);
    }
    it.insert(symbols.minus, Glyph::Sign(Sign::Negative));
    it.insert(symbols.plus, Glyph::Sign(Sign::Positive));

    // ASCII aliases.
    for (value, character) in (0u8..).zip('0'..='9') {
        it.entry(character).or_insert(Glyph::Digit(value));
    }
    it.entry('-').or_insert(Glyph::Sign(Sign::Negative));
    it.entry('+').or_insert(Glyph::Sign(Sign::Positive));
    it.entry('.').or_insert(Glyph::FractionSeparator);

    it
}

fn collect_affixes(
    service: &dyn FormatService,
    locale: &str,
    kinds: &[FormatKind],
    glyphs: &FxHashMap<char, Glyph>,
) -> FxHashSet<char> {
    let mut it = FxHashSet::default();
    for kind in kinds {
        for sign_display in SignDisplay::iter() {
            for sample in AFFIX_SAMPLES {
                let request = FormatRequest {
                    locale,
                    kind,
                    integer_digits_min: 1,
                    fraction_digits: 0..=2,
                    grouping: true,
                    sign_display,
                    separator_display: SeparatorDisplay::Always,
                };
                it.extend(
                    service
                        .format(sample, &request)
                        .chars()
                        .filter(|character| !glyphs.contains_key(character)),
                );
            }
        }
    }
    it
}
