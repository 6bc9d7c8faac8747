// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Numbers, currency amounts, and percentages.
//!
//! A [`NumberStyle`] has two ways of rendering a value:
//!
//! - **Display**, used by [`DiffableTextStyle::format`] and
//!   [`DiffableTextStyle::interpret`]: the value is clamped to the bounds, and the
//!   fraction is padded to the precision's lower bound, eg: `$12.50`.
//! - **Editing**, used for every accepted edit: exactly the typed fraction digits are
//!   shown, and a typed trailing fraction separator is kept, so that `12.` can become
//!   `12.5` on the next keystroke.
//!
//! ```text
//! proposal ──▶ decode ──▶ autocorrect sign ──▶ precision ──▶ parse ──▶ bounds
//!                                                                        │
//!               Merge ◀── reconcile ◀── snapshot ◀── FormatService ◀─────╯
//! ```
//!
//! Typing a lone sign glyph is a command rather than input, see
//! [`NumberStyle::merge`](DiffableTextStyle::merge).

use std::{ops::RangeInclusive, sync::Arc};

use crate::{Bounds, Commit, DEFAULT_CURRENCY_FRACTION_DIGITS, DiffableTextStyle,
            EditError, EditResult, FloatingPointValue, FormatKind, FormatRequest,
            FormatService, Glyph, IntoBounds, Lexicon, LexiconCache, LexiconError, Merge,
            Number, NumberValue, Precision, Proposal, Separator, SeparatorDisplay, Sign,
            SignDisplay, Snapshot, Symbol, call_if_true};

const DEBUG_NUMBER_STYLE: bool = false;

/// Digits between a percentage and its value, eg: `12.5%` is `0.125`.
const PERCENT_SHIFT: isize = 2;

/// Formats and edits values of type `V` in one locale.
///
/// ```
/// use std::sync::Arc;
/// use diffable_text::{BuiltinFormatService, DiffableTextStyle, LexiconCache,
///                     NumberStyle, Precision};
///
/// let cache = LexiconCache::default();
/// let style = NumberStyle::<f64>::number(&cache, Arc::new(BuiltinFormatService), "de_DE")
///     .unwrap()
///     .bounds(0.0..=1_000_000.0)
///     .precision(Precision::fraction(2..=2));
/// assert_eq!(style.format(&1234.5), "1.234,50");
/// assert_eq!(style.format(&-7.0), "0,00");
/// ```
#[derive(Clone, Debug)]
pub struct NumberStyle<V> {
    kind: FormatKind,
    lexicon: Arc<Lexicon>,
    service: Arc<dyn FormatService>,
    bounds: Bounds<V>,
    precision: Precision<V>,
    grouping: bool,
    sign_display: SignDisplay,
    separator_display: SeparatorDisplay,
}

impl<V: NumberValue> NumberStyle<V> {
    /// # Errors
    ///
    /// Returns [`LexiconError::UnknownLocale`] if `service` doesn't know `locale`.
    pub fn number(
        cache: &LexiconCache,
        service: Arc<dyn FormatService>,
        locale: &str,
    ) -> Result<Self, LexiconError> {
        let lexicon = cache.standard(service.as_ref(), locale)?;
        Ok(Self::with_lexicon(FormatKind::Decimal, lexicon, service))
    }

    /// Amounts of currency `code`. The fraction digits default to the currency's, eg: 2
    /// for `USD` and 0 for `JPY`.
    ///
    /// # Errors
    ///
    /// Returns a [`LexiconError`] for an unknown locale or a malformed code.
    pub fn currency(
        cache: &LexiconCache,
        service: Arc<dyn FormatService>,
        locale: &str,
        code: &str,
    ) -> Result<Self, LexiconError> {
        let lexicon = cache.currency(service.as_ref(), locale, code)?;
        let digits = lexicon
            .currency_fraction_digits()
            .unwrap_or(DEFAULT_CURRENCY_FRACTION_DIGITS);
        Ok(
            Self::with_lexicon(FormatKind::Currency(code.to_string()), lexicon, service)
                .precision(Precision::fraction(digits..=digits)),
        )
    }

    fn with_lexicon(
        kind: FormatKind,
        lexicon: Arc<Lexicon>,
        service: Arc<dyn FormatService>,
    ) -> Self {
        Self {
            kind,
            lexicon,
            service,
            bounds: Bounds::none(),
            precision: Precision::standard(),
            grouping: true,
            sign_display: SignDisplay::default(),
            separator_display: SeparatorDisplay::default(),
        }
    }

    #[must_use]
    pub fn bounds(mut self, bounds: impl IntoBounds<V>) -> Self {
        self.bounds = bounds.into_bounds();
        self
    }

    #[must_use]
    pub fn precision(mut self, precision: Precision<V>) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    #[must_use]
    pub fn sign_display(mut self, sign_display: SignDisplay) -> Self {
        self.sign_display = sign_display;
        self
    }

    #[must_use]
    pub fn separator_display(mut self, separator_display: SeparatorDisplay) -> Self {
        self.separator_display = separator_display;
        self
    }

    #[must_use]
    pub fn kind(&self) -> &FormatKind { &self.kind }

    #[must_use]
    pub fn locale(&self) -> &str { self.lexicon.locale() }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon { &self.lexicon }

    #[must_use]
    pub fn get_bounds(&self) -> Bounds<V> { self.bounds }

    #[must_use]
    pub fn get_precision(&self) -> &Precision<V> { &self.precision }

    #[must_use]
    pub fn get_grouping(&self) -> bool { self.grouping }

    #[must_use]
    pub fn get_sign_display(&self) -> SignDisplay { self.sign_display }

    #[must_use]
    pub fn get_separator_display(&self) -> SeparatorDisplay { self.separator_display }

    fn shift(&self) -> isize {
        match self.kind {
            FormatKind::Percent => PERCENT_SHIFT,
            _ => 0,
        }
    }

    /// The displayed number for `value`, eg: `12.5` for `0.125` as a percentage. The
    /// fraction is rounded to the precision's upper bound.
    fn number_of(&self, value: V) -> Number {
        let max_fraction = self
            .precision
            .fraction_digits()
            .end()
            .saturating_add(self.shift().unsigned_abs());
        Number::from_canonical(&value.to_canonical(max_fraction))
            .unwrap_or_default()
            .shifted(self.shift())
    }

    /// # Errors
    ///
    /// Returns [`EditError::Unrepresentable`] when `number` doesn't fit into `V`.
    fn value_of(&self, number: &Number) -> EditResult<V> {
        let canonical = number.shifted(-self.shift()).canonical();
        match V::from_canonical(&canonical) {
            Some(value) => Ok(value),
            None => Err(EditError::Unrepresentable { canonical }),
        }
    }

    fn decode(&self, snapshot: &Snapshot) -> EditResult<Number> {
        let characters = snapshot.nonvirtual_characters();
        let characters = self.lexicon.strip_label(&characters);
        let mut number = Number::decode(characters.chars(), &self.lexicon, V::IS_INTEGER)?;
        number.sign = self.bounds.autocorrect(number.sign);
        Ok(number)
    }

    fn request(
        &self,
        integer_digits_min: usize,
        fraction_digits: RangeInclusive<usize>,
        sign_display: SignDisplay,
        separator_display: SeparatorDisplay,
    ) -> FormatRequest<'_> {
        FormatRequest {
            locale: self.lexicon.locale(),
            kind: &self.kind,
            integer_digits_min,
            fraction_digits,
            grouping: self.grouping,
            sign_display,
            separator_display,
        }
    }

    fn display_text(&self, number: &Number) -> String {
        let request = self.request(
            *self.precision.integer_digits().start(),
            self.precision.fraction_digits(),
            self.sign_display,
            self.separator_display,
        );
        self.service.format(&number.canonical(), &request)
    }

    /// Renders exactly what was typed. Formatters never show a sign on zero, so a
    /// negative zero asks for an explicit sign and swaps the positive glyph.
    fn editing_text(&self, number: &Number) -> String {
        let fraction = number.fraction_count();
        let separator_display = match number.separator {
            Separator::Fraction => SeparatorDisplay::Always,
            Separator::None => self.separator_display,
        };
        let negative_zero = number.sign == Sign::Negative && number.is_zero();
        let sign_display = if negative_zero {
            SignDisplay::Always
        } else {
            self.sign_display
        };
        let request = self.request(1, fraction..=fraction, sign_display, separator_display);
        let text = self.service.format(&number.canonical(), &request);

        if !negative_zero {
            return text;
        }
        let symbols = self.lexicon.symbols();
        text.replacen(symbols.plus, &symbols.minus.to_string(), 1)
    }

    /// Digits, signs, and the fraction separator are content. Everything else, including
    /// glyph-like characters inside the currency label, is phantom.
    fn snapshot(&self, text: &str) -> Snapshot {
        let label = self.lexicon.label_range(text);
        text.chars()
            .enumerate()
            .map(|(index, character)| {
                let in_label = label.as_ref().is_some_and(|it| it.contains(&index));
                match self.lexicon.glyph(character) {
                    Some(glyph) if glyph.is_content() && !in_label => {
                        Symbol::content(character)
                    }
                    _ => Symbol::phantom(character),
                }
            })
            .collect()
    }

    /// A replacement of exactly one sign glyph.
    fn sign_command(&self, proposal: &Proposal) -> Option<Sign> {
        match proposal.replacement().symbols() {
            [symbol] => match self.lexicon.glyph(symbol.character) {
                Some(Glyph::Sign(sign)) => Some(sign),
                _ => None,
            },
            _ => None,
        }
    }

    /// The negative glyph toggles the sign of the current value, the positive glyph makes
    /// it positive. The result is clamped to the bounds, so this never fails.
    fn apply_sign_command(&self, proposal: &Proposal, sign: Sign) -> Merge<V> {
        let mut number = self.decode(proposal.base()).unwrap_or_default();
        number.sign = self.bounds.autocorrect(match sign {
            Sign::Negative => number.sign.toggled(),
            Sign::Positive => Sign::Positive,
        });

        let value = self.value_of(&number).unwrap_or(V::ZERO);
        let (value, number) = if self.bounds.contains(value) {
            (value, number)
        } else {
            let value = self.bounds.clamp(value);
            (value, self.number_of(value))
        };

        call_if_true!(DEBUG_NUMBER_STYLE, {
            tracing::debug!(message = "sign command", ?sign, %number, ?value);
        });

        let commit = Commit::new(value, self.snapshot(&self.editing_text(&number)));
        let field = proposal.base_field().reconciled(commit.snapshot.clone());
        Merge { commit, field }
    }
}

impl<V: FloatingPointValue> NumberStyle<V> {
    /// Percentages, eg: `12.5%` for `0.125`. Digits are shifted exactly, without
    /// floating point multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::UnknownLocale`] if `service` doesn't know `locale`.
    pub fn percent(
        cache: &LexiconCache,
        service: Arc<dyn FormatService>,
        locale: &str,
    ) -> Result<Self, LexiconError> {
        let lexicon = cache.standard(service.as_ref(), locale)?;
        Ok(Self::with_lexicon(FormatKind::Percent, lexicon, service))
    }
}

impl<V: NumberValue> DiffableTextStyle for NumberStyle<V> {
    type Value = V;

    fn format(&self, value: &V) -> String {
        self.display_text(&self.number_of(self.bounds.clamp(*value)))
    }

    fn interpret(&self, value: &V) -> Commit<V> {
        let value = self.bounds.clamp(*value);
        let number = self.number_of(value);
        let text = self.display_text(&number);
        // The text shows the rounded value, so that is what gets committed.
        let value = self.value_of(&number).map_or(value, |it| self.bounds.clamp(it));
        Commit::new(value, self.snapshot(&text))
    }

    fn resolve(&self, proposal: &Proposal) -> EditResult<Commit<V>> {
        let number = self.decode(&proposal.merged())?;
        self.precision
            .editable_validation(number.integer_count(), number.fraction_count())?;
        let value = self.bounds.validate(self.value_of(&number)?)?;
        let text = self.editing_text(&number);

        call_if_true!(DEBUG_NUMBER_STYLE, {
            tracing::trace!(message = "resolved", %number, ?value, %text);
        });

        Ok(Commit::new(value, self.snapshot(&text)))
    }

    /// Recognizes sign commands before decoding, see [`NumberStyle`].
    fn merge(&self, proposal: &Proposal) -> EditResult<Merge<V>> {
        if let Some(sign) = self.sign_command(proposal) {
            return Ok(self.apply_sign_command(proposal, sign));
        }
        let commit = self.resolve(proposal)?;
        Ok(Merge::reconciled(proposal, commit))
    }
}
