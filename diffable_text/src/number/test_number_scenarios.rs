// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end number editing across the built-in locales, plus the properties every
//! style shares.

use std::sync::Arc;

use crate::{BuiltinFormatService, Character, Commit, DiffableTextStyle, EditError,
            EditResult, EditSession, FormatService, LexiconCache, Merge, NumberStyle,
            PatternStyle, Precision, Proposal, Utf8, Utf16, assert_eq2};

const CURRENCY_CODE: &str = "EUR";

fn service() -> Arc<dyn FormatService> { Arc::new(BuiltinFormatService) }

fn locales() -> Vec<String> { BuiltinFormatService.available_locales() }

/// Replaces the whole displayed text of `value` with itself.
fn self_replacement<S: DiffableTextStyle>(
    style: &S,
    value: &S::Value,
) -> (Commit<S::Value>, EditResult<Merge<S::Value>>) {
    let commit = style.interpret(value);
    let count = commit.snapshot.count();
    let proposal = Proposal::new(
        commit.snapshot.clone(),
        count..count,
        0..count,
        &commit.snapshot.characters(),
    );
    let merge = style.merge(&proposal);
    (commit, merge)
}

#[test]
fn test_round_trip_in_every_locale() {
    let cache = LexiconCache::new(locales().len() * 3);
    for locale in locales() {
        let number = NumberStyle::<f64>::number(&cache, service(), &locale).unwrap();
        let currency =
            NumberStyle::<f64>::currency(&cache, service(), &locale, CURRENCY_CODE).unwrap();
        let percent = NumberStyle::<f64>::percent(&cache, service(), &locale).unwrap();

        for value in [0.0, 42.0, 0.25, 1234.5, -1234567.89] {
            for style in [&number, &currency] {
                let (commit, merge) = self_replacement(style, &value);
                let merge = merge.unwrap_or_else(|error| {
                    let text = commit.snapshot.characters();
                    panic!("{locale} {:?} {text:?}: {error}", style.kind())
                });
                assert_eq2!(merge.commit.value, value);
            }
        }

        for value in [0.0, 0.125, -0.5, 12.345] {
            let (_, merge) = self_replacement(&percent, &value);
            assert_eq2!(merge.unwrap().commit.value, value);
        }
    }
}

#[test]
fn test_self_replacement_is_idempotent() {
    let cache = LexiconCache::default();
    for locale in ["en_US", "de_CH", "sv_SE", "fa_IR", "rhg-Rohg_MM"] {
        let style =
            NumberStyle::<f64>::currency(&cache, service(), locale, CURRENCY_CODE).unwrap();
        for value in [12.5, -9876.54] {
            let (commit, merge) = self_replacement(&style, &value);
            assert_eq2!(merge.unwrap().commit, commit);
        }
    }
}

#[test]
fn test_pattern_self_replacement_is_idempotent() {
    let phone =
        PatternStyle::new("+### (###) ##-##-##").placeholder('#', |it| it.is_ascii_digit());
    for style in [phone.clone(), phone.hidden(true)] {
        for value in ["", "12300045", "123000456789"] {
            let (commit, merge) = self_replacement(&style, &value.to_string());
            assert_eq2!(merge.unwrap().commit, commit);
        }
    }
}

#[test]
fn test_sign_toggle_is_an_involution() {
    let style = NumberStyle::<f64>::number(&LexiconCache::default(), service(), "en_US")
        .unwrap();
    for value in [1234.5, -5.0, 0.0] {
        let mut session = EditSession::new(style.clone(), value);
        let original = session.text();

        let caret = session.selection::<Character>();
        session.edit::<Character>(caret, "-").unwrap();
        assert_eq2!(*session.value(), -value);

        let caret = session.selection::<Character>();
        session.edit::<Character>(caret, "-").unwrap();
        assert_eq2!(*session.value(), value);
        assert_eq2!(session.text(), original);
    }
}

#[test]
fn test_negative_zero_display() {
    let style =
        NumberStyle::<f64>::currency(&LexiconCache::default(), service(), "de_CH", "CHF")
            .unwrap();
    let mut session = EditSession::new(style, 0.0);
    assert_eq2!(session.text(), "CHF\u{a0}0.00");

    let caret = session.selection::<Utf16>();
    let update = session.edit::<Utf16>(caret, "-").unwrap();
    assert_eq2!(update.text, "CHF\u{a0}-0.00");
    assert_eq2!(*session.value(), 0.0);

    let update = session.edit::<Utf16>(update.selection, "-").unwrap();
    assert_eq2!(update.text, "CHF\u{a0}0.00");
}

#[test]
fn test_bounds_reject_out_of_range_value() {
    let style = NumberStyle::<i64>::number(&LexiconCache::default(), service(), "en_US")
        .unwrap()
        .bounds(5..=9);
    let mut session = EditSession::new(style, 7);

    let result = session.edit::<Utf16>(0..1, "12");
    assert_eq2!(
        result,
        Err(EditError::OutOfBounds {
            value: "12".into(),
            min: "5".into(),
            max: "9".into(),
        })
    );
    assert_eq2!(*session.value(), 7);
    assert_eq2!(session.text(), "7");

    assert_eq2!(session.edit::<Utf16>(0..1, "8").map(|it| it.text), Ok("8".to_string()));
}

#[test]
fn test_precision_rejects_fourth_integer_digit() {
    let style = NumberStyle::<i64>::number(&LexiconCache::default(), service(), "en_US")
        .unwrap()
        .precision(Precision::integer(1..=3));
    let mut session = EditSession::new(style, 999);

    assert_eq2!(
        session.edit::<Utf16>(0..0, "1"),
        Err(EditError::TooManyIntegerDigits { count: 4, max: 3 })
    );
    assert_eq2!(session.text(), "999");
}

#[test]
fn test_typing_digits_with_grouping() {
    let style = NumberStyle::<i64>::number(&LexiconCache::default(), service(), "en_US")
        .unwrap();
    let mut session = EditSession::new(style, 0);
    session.edit::<Utf16>(0..1, "1").unwrap();

    for digit in "234567890".chars() {
        let end = session.text().encode_utf16().count();
        let update = session.edit::<Utf16>(end..end, &digit.to_string()).unwrap();
        let new_end = update.text.encode_utf16().count();
        assert_eq2!(update.selection, new_end..new_end);
    }

    let text = session.text();
    assert_eq2!(text, "1,234,567,890");
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    assert_eq2!(digits, "1234567890");
    assert_eq2!(*session.value(), 1_234_567_890);
}

#[test]
fn test_typing_in_the_middle_keeps_the_caret() {
    let style = NumberStyle::<i64>::number(&LexiconCache::default(), service(), "en_US")
        .unwrap();
    let mut session = EditSession::new(style, 1234);

    // Between `2` and `3` of `1,234`.
    let update = session.edit::<Utf16>(3..3, "9").unwrap();
    assert_eq2!(update.text, "12,934");
    assert_eq2!(update.selection, 4..4);
}

#[test]
fn test_currency_label_with_fraction_glyph() {
    let style = NumberStyle::<f64>::currency(
        &LexiconCache::default(),
        service(),
        "rhg-Rohg_MM",
        "PAB",
    )
    .unwrap();
    assert_eq2!(style.format(&-1_234_567.89), "-B/. 1,234,567.89");

    let (commit, merge) = self_replacement(&style, &-1_234_567.89);
    assert_eq2!(commit.value, -1_234_567.89);
    assert_eq2!(merge.unwrap().commit.value, -1_234_567.89);

    // Typing after the label, in front of the digits.
    let mut session = EditSession::new(style, -1_234_567.89);
    let update = session.edit::<Utf16>(5..5, "9").unwrap();
    assert_eq2!(update.text, "-B/. 91,234,567.89");
    assert_eq2!(update.selection, 6..6);
}

#[test]
fn test_percent_editing() {
    let style = NumberStyle::<f64>::percent(&LexiconCache::default(), service(), "en_US")
        .unwrap();
    let mut session = EditSession::new(style, 0.5);
    assert_eq2!(session.text(), "50%");

    let update = session.edit::<Utf16>(2..2, ".").unwrap();
    assert_eq2!(update.text, "50.%");
    assert_eq2!(update.selection, 3..3);

    let update = session.edit::<Utf16>(3..3, "5").unwrap();
    assert_eq2!(update.text, "50.5%");
    assert_eq2!(*session.value(), 0.505);
}

#[test]
fn test_caret_positions_are_in_host_units() {
    let style = NumberStyle::<i64>::number(&LexiconCache::default(), service(), "ar_EG")
        .unwrap();
    let mut session = EditSession::new(style, 12);
    assert_eq2!(session.text(), "\u{661}\u{662}");
    assert_eq2!(session.selection::<Utf16>(), 2..2);
    assert_eq2!(session.selection::<Utf8>(), 4..4);

    // ASCII digits are accepted in every locale.
    let update = session.edit::<Utf8>(4..4, "3").unwrap();
    assert_eq2!(update.text, "\u{661}\u{662}\u{663}");
    assert_eq2!(update.selection, 6..6);
}
