// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`BuiltinFormatService`] and the locale tables behind it.
//!
//! Each locale describes its glyphs and where the sign, the number, and the label go in
//! percent and currency text. Currencies have a default symbol and fraction digit count,
//! plus a few per locale symbol overrides. A well formed currency code that isn't in the
//! table uses the code itself as its label.

use crate::{CurrencySymbols, FormatKind, FormatRequest, FormatService, Number,
            NumberSymbols, SeparatorDisplay, Sign, SignDisplay};

/// One piece of a percent or currency layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Sign,
    Number,
    /// The currency symbol.
    Label,
    Text(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleData {
    pub identifier: &'static str,
    pub digits: [char; 10],
    pub fraction: char,
    pub grouping: Option<char>,
    pub minus: char,
    pub plus: char,
    pub percent: &'static [Part],
    pub currency: &'static [Part],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyData {
    pub code: &'static str,
    pub symbol: &'static str,
    pub fraction_digits: usize,
}

/// Fraction digits of a currency that isn't in [`CURRENCIES`].
pub const DEFAULT_CURRENCY_FRACTION_DIGITS: usize = 2;

const LATIN: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const ARABIC_INDIC: [char; 10] = [
    '\u{660}', '\u{661}', '\u{662}', '\u{663}', '\u{664}', '\u{665}', '\u{666}', '\u{667}',
    '\u{668}', '\u{669}',
];
const EXTENDED_ARABIC_INDIC: [char; 10] = [
    '\u{6f0}', '\u{6f1}', '\u{6f2}', '\u{6f3}', '\u{6f4}', '\u{6f5}', '\u{6f6}', '\u{6f7}',
    '\u{6f8}', '\u{6f9}',
];
const DEVANAGARI: [char; 10] = [
    '\u{966}', '\u{967}', '\u{968}', '\u{969}', '\u{96a}', '\u{96b}', '\u{96c}', '\u{96d}',
    '\u{96e}', '\u{96f}',
];

const NBSP: &str = "\u{a0}";
const PERCENT: &[Part] = &[Part::Sign, Part::Number, Part::Text("%")];
const PERCENT_NBSP: &[Part] = &[Part::Sign, Part::Number, Part::Text("\u{a0}%")];
const PERCENT_ARABIC: &[Part] = &[Part::Sign, Part::Number, Part::Text("\u{66a}")];
const LABEL_FIRST: &[Part] = &[Part::Sign, Part::Label, Part::Number];
const LABEL_LAST: &[Part] = &[Part::Sign, Part::Number, Part::Text(NBSP), Part::Label];
const LABEL_BEFORE_SIGN: &[Part] =
    &[Part::Label, Part::Text(NBSP), Part::Sign, Part::Number];

pub const LOCALES: &[LocaleData] = &[
    LocaleData {
        identifier: "en_US",
        digits: LATIN,
        fraction: '.',
        grouping: Some(','),
        minus: '-',
        plus: '+',
        percent: PERCENT,
        currency: LABEL_FIRST,
    },
    LocaleData {
        identifier: "en_GB",
        digits: LATIN,
        fraction: '.',
        grouping: Some(','),
        minus: '-',
        plus: '+',
        percent: PERCENT,
        currency: LABEL_FIRST,
    },
    LocaleData {
        identifier: "de_DE",
        digits: LATIN,
        fraction: ',',
        grouping: Some('.'),
        minus: '-',
        plus: '+',
        percent: PERCENT_NBSP,
        currency: LABEL_LAST,
    },
    LocaleData {
        identifier: "de_CH",
        digits: LATIN,
        fraction: '.',
        grouping: Some('\u{2019}'),
        minus: '-',
        plus: '+',
        percent: PERCENT,
        currency: LABEL_BEFORE_SIGN,
    },
    LocaleData {
        identifier: "fr_FR",
        digits: LATIN,
        fraction: ',',
        grouping: Some('\u{202f}'),
        minus: '-',
        plus: '+',
        percent: &[Part::Sign, Part::Number, Part::Text("\u{202f}%")],
        currency: LABEL_LAST,
    },
    LocaleData {
        identifier: "sv_SE",
        digits: LATIN,
        fraction: ',',
        grouping: Some('\u{a0}'),
        minus: '\u{2212}',
        plus: '+',
        percent: PERCENT_NBSP,
        currency: LABEL_LAST,
    },
    LocaleData {
        identifier: "ja_JP",
        digits: LATIN,
        fraction: '.',
        grouping: Some(','),
        minus: '-',
        plus: '+',
        percent: PERCENT,
        currency: LABEL_FIRST,
    },
    LocaleData {
        identifier: "ar_EG",
        digits: ARABIC_INDIC,
        fraction: '\u{66b}',
        grouping: Some('\u{66c}'),
        minus: '-',
        plus: '+',
        percent: PERCENT_ARABIC,
        currency: LABEL_LAST,
    },
    LocaleData {
        identifier: "fa_IR",
        digits: EXTENDED_ARABIC_INDIC,
        fraction: '\u{66b}',
        grouping: Some('\u{66c}'),
        minus: '\u{2212}',
        plus: '+',
        percent: PERCENT_ARABIC,
        currency: LABEL_BEFORE_SIGN,
    },
    LocaleData {
        identifier: "mr_IN",
        digits: DEVANAGARI,
        fraction: '.',
        grouping: Some(','),
        minus: '-',
        plus: '+',
        percent: PERCENT,
        currency: LABEL_FIRST,
    },
    LocaleData {
        identifier: "rhg-Rohg_MM",
        digits: LATIN,
        fraction: '.',
        grouping: Some(','),
        minus: '-',
        plus: '+',
        percent: PERCENT,
        currency: &[Part::Sign, Part::Label, Part::Text(" "), Part::Number],
    },
];

pub const CURRENCIES: &[CurrencyData] = &[
    CurrencyData { code: "USD", symbol: "$", fraction_digits: 2 },
    CurrencyData { code: "EUR", symbol: "\u{20ac}", fraction_digits: 2 },
    CurrencyData { code: "GBP", symbol: "\u{a3}", fraction_digits: 2 },
    CurrencyData { code: "JPY", symbol: "\u{a5}", fraction_digits: 0 },
    CurrencyData { code: "PAB", symbol: "B/.", fraction_digits: 2 },
    CurrencyData { code: "SEK", symbol: "kr", fraction_digits: 2 },
    CurrencyData { code: "CHF", symbol: "CHF", fraction_digits: 2 },
    CurrencyData { code: "EGP", symbol: "\u{62c}.\u{645}.\u{200f}", fraction_digits: 2 },
    CurrencyData { code: "IRR", symbol: "\u{631}\u{6cc}\u{627}\u{644}", fraction_digits: 0 },
    CurrencyData { code: "INR", symbol: "\u{20b9}", fraction_digits: 2 },
];

/// `(locale, code, symbol)`.
pub const CURRENCY_SYMBOL_OVERRIDES: &[(&str, &str, &str)] = &[
    ("en_GB", "USD", "US$"),
    ("ja_JP", "JPY", "\u{ffe5}"),
];

#[must_use]
pub fn locale_data(identifier: &str) -> Option<&'static LocaleData> {
    LOCALES.iter().find(|it| it.identifier == identifier)
}

/// Table driven [`FormatService`] for [`LOCALES`].
///
/// ```
/// use diffable_text::{BuiltinFormatService, FormatKind, FormatRequest, FormatService,
///                     SeparatorDisplay, SignDisplay};
///
/// let kind = FormatKind::Currency("EUR".into());
/// let request = FormatRequest {
///     locale: "de_DE",
///     kind: &kind,
///     integer_digits_min: 1,
///     fraction_digits: 2..=2,
///     grouping: true,
///     sign_display: SignDisplay::Automatic,
///     separator_display: SeparatorDisplay::Automatic,
/// };
/// assert_eq!(BuiltinFormatService.format("-1234.5", &request), "-1.234,50\u{a0}€");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BuiltinFormatService;

impl FormatService for BuiltinFormatService {
    fn available_locales(&self) -> Vec<String> {
        LOCALES.iter().map(|it| it.identifier.to_string()).collect()
    }

    fn number_symbols(&self, locale: &str) -> Option<NumberSymbols> {
        let it = locale_data(locale)?;
        Some(NumberSymbols {
            digits: it.digits,
            fraction: it.fraction,
            grouping: it.grouping,
            minus: it.minus,
            plus: it.plus,
        })
    }

    fn currency_symbols(&self, locale: &str, code: &str) -> Option<CurrencySymbols> {
        let locale = locale_data(locale)?;
        let data = CURRENCIES.iter().find(|it| it.code == code);
        let symbol = CURRENCY_SYMBOL_OVERRIDES
            .iter()
            .find(|(l, c, _)| *l == locale.identifier && *c == code)
            .map(|(_, _, symbol)| *symbol)
            .or(data.map(|it| it.symbol))
            .unwrap_or(code);
        Some(CurrencySymbols {
            symbol: symbol.to_string(),
            fraction_digits: data.map_or(DEFAULT_CURRENCY_FRACTION_DIGITS, |it| {
                it.fraction_digits
            }),
        })
    }

    fn format(&self, canonical: &str, request: &FormatRequest<'_>) -> String {
        let (Some(locale), Some(number)) =
            (locale_data(request.locale), Number::from_canonical(canonical))
        else {
            return canonical.to_string();
        };

        let (mut integer, mut fraction) = round_half_up(
            number.integer.values().collect(),
            number.fraction.values().collect(),
            *request.fraction_digits.end(),
        );
        let fraction_min = *request.fraction_digits.start();
        while fraction.len() > fraction_min && fraction.last() == Some(&0) {
            fraction.pop();
        }
        if fraction.len() < fraction_min {
            fraction.resize(fraction_min, 0);
        }
        let leading_zeros = integer.iter().take_while(|it| **it == 0).count();
        integer.drain(..leading_zeros);
        if integer.len() < request.integer_digits_min {
            let padding = request.integer_digits_min - integer.len();
            integer.splice(0..0, std::iter::repeat_n(0, padding));
        }

        let is_zero = integer.iter().chain(fraction.iter()).all(|it| *it == 0);
        let sign = match (number.sign, request.sign_display) {
            (Sign::Negative, _) if !is_zero => Some(locale.minus),
            (_, SignDisplay::Always) => Some(locale.plus),
            _ => None,
        };

        let body = render_body(locale, request, &integer, &fraction);

        let parts: &[Part] = match request.kind {
            FormatKind::Decimal => &[Part::Sign, Part::Number],
            FormatKind::Percent => locale.percent,
            FormatKind::Currency(_) => locale.currency,
        };
        let label = match request.kind {
            FormatKind::Currency(code) => self
                .currency_symbols(request.locale, code)
                .map(|it| it.symbol)
                .unwrap_or_default(),
            _ => String::new(),
        };

        let mut acc = String::new();
        for part in parts {
            match part {
                Part::Sign => acc.extend(sign),
                Part::Number => acc.push_str(&body),
                Part::Label => acc.push_str(&label),
                Part::Text(text) => acc.push_str(text),
            }
        }
        acc
    }
}

fn render_body(
    locale: &LocaleData,
    request: &FormatRequest<'_>,
    integer: &[u8],
    fraction: &[u8],
) -> String {
    let digit = |it: &u8| locale.digits[usize::from(*it)];
    let mut acc = String::new();

    for (index, value) in integer.iter().enumerate() {
        let remaining = integer.len() - index;
        if index > 0
            && remaining.is_multiple_of(3)
            && request.grouping
            && let Some(grouping) = locale.grouping
        {
            acc.push(grouping);
        }
        acc.push(digit(value));
    }

    let show_separator = !fraction.is_empty()
        || request.separator_display == SeparatorDisplay::Always;
    if show_separator {
        acc.push(locale.fraction);
    }
    acc.extend(fraction.iter().map(digit));
    acc
}

/// Rounds the fraction to at most `max` digits. A carry can add an integer digit.
fn round_half_up(integer: Vec<u8>, fraction: Vec<u8>, max: usize) -> (Vec<u8>, Vec<u8>) {
    if fraction.len() <= max {
        return (integer, fraction);
    }
    let round_up = fraction[max] >= 5;
    let integer_count = integer.len();
    let mut digits: Vec<u8> = integer.into_iter().chain(fraction.into_iter().take(max)).collect();

    let mut carry = round_up;
    for digit in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            carry = false;
        }
    }

    let integer_count = if carry {
        digits.insert(0, 1);
        integer_count + 1
    } else {
        integer_count
    };
    let fraction = digits.split_off(integer_count);
    (digits, fraction)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn request<'a>(locale: &'a str, kind: &'a FormatKind) -> FormatRequest<'a> {
        FormatRequest {
            locale,
            kind,
            integer_digits_min: 1,
            fraction_digits: 0..=2,
            grouping: true,
            sign_display: SignDisplay::Automatic,
            separator_display: SeparatorDisplay::Automatic,
        }
    }

    #[test_case("en_US", "-1234567.89", "-1,234,567.89")]
    #[test_case("de_DE", "1234567.89", "1.234.567,89")]
    #[test_case("de_CH", "1234.5", "1\u{2019}234.5")]
    #[test_case("fr_FR", "-1234.5", "-1\u{202f}234,5")]
    #[test_case("sv_SE", "-1234", "\u{2212}1\u{a0}234")]
    #[test_case("ar_EG", "1234.5", "\u{661}\u{66c}\u{662}\u{663}\u{664}\u{66b}\u{665}")]
    #[test_case("mr_IN", "12", "\u{967}\u{968}")]
    #[test_case("xx_XX", "12", "12" ; "unknown locale echoes")]
    fn test_decimal(locale: &str, canonical: &str, expected: &str) {
        let kind = FormatKind::Decimal;
        assert_eq2!(BuiltinFormatService.format(canonical, &request(locale, &kind)), expected);
    }

    #[test_case("rhg-Rohg_MM", "PAB", "-1234567.89", "-B/. 1,234,567.89")]
    #[test_case("en_US", "USD", "-5", "-$5")]
    #[test_case("en_GB", "USD", "5", "US$5")]
    #[test_case("ja_JP", "JPY", "1000", "\u{ffe5}1,000")]
    #[test_case("de_CH", "CHF", "-5", "CHF\u{a0}-5")]
    #[test_case("en_US", "XTS", "5", "XTS5" ; "unknown code is its own label")]
    fn test_currency(locale: &str, code: &str, canonical: &str, expected: &str) {
        let kind = FormatKind::Currency(code.to_string());
        assert_eq2!(BuiltinFormatService.format(canonical, &request(locale, &kind)), expected);
    }

    #[test]
    fn test_percent() {
        let kind = FormatKind::Percent;
        assert_eq2!(BuiltinFormatService.format("12.5", &request("en_US", &kind)), "12.5%");
        assert_eq2!(
            BuiltinFormatService.format("12.5", &request("de_DE", &kind)),
            "12,5\u{a0}%"
        );
    }

    #[test]
    fn test_zero_sign() {
        let kind = FormatKind::Decimal;
        let mut it = request("en_US", &kind);
        assert_eq2!(BuiltinFormatService.format("-0.001", &it), "0");
        it.sign_display = SignDisplay::Always;
        assert_eq2!(BuiltinFormatService.format("0", &it), "+0");
        assert_eq2!(BuiltinFormatService.format("-0.001", &it), "+0");
        assert_eq2!(BuiltinFormatService.format("3", &it), "+3");
    }

    #[test]
    fn test_padding_and_separator() {
        let kind = FormatKind::Decimal;
        let mut it = request("en_US", &kind);
        it.fraction_digits = 2..=2;
        it.integer_digits_min = 3;
        assert_eq2!(BuiltinFormatService.format("0012.5", &it), "012.50");

        it.fraction_digits = 0..=0;
        it.integer_digits_min = 1;
        it.separator_display = SeparatorDisplay::Always;
        assert_eq2!(BuiltinFormatService.format("12", &it), "12.");
        it.grouping = false;
        assert_eq2!(BuiltinFormatService.format("1234", &it), "1234.");
    }

    #[test_case(&[1], &[2, 4, 9], 2, &[1], &[2, 5])]
    #[test_case(&[9, 9], &[9, 5], 1, &[1, 0, 0], &[0])]
    #[test_case(&[0], &[4], 0, &[0], &[])]
    #[test_case(&[7], &[1], 3, &[7], &[1])]
    fn test_round_half_up(
        integer: &[u8],
        fraction: &[u8],
        max: usize,
        expected_integer: &[u8],
        expected_fraction: &[u8],
    ) {
        let (integer, fraction) = round_half_up(integer.to_vec(), fraction.to_vec(), max);
        assert_eq2!(integer, expected_integer.to_vec());
        assert_eq2!(fraction, expected_fraction.to_vec());
    }

    #[test]
    fn test_symbols() {
        assert_eq2!(BuiltinFormatService.available_locales().len(), LOCALES.len());
        assert!(BuiltinFormatService.number_symbols("xx_XX").is_none());
        assert_eq2!(
            BuiltinFormatService.currency_symbols("ja_JP", "JPY"),
            Some(CurrencySymbols {
                symbol: "\u{ffe5}".into(),
                fraction_digits: 0,
            })
        );
    }
}
