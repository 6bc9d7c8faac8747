// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use serial_test::serial;

use crate::{BuiltinFormatService, EditSession, FormatService, LexiconCache, NumberStyle,
            OptionalStyle, TracingConfig, Utf8, Utf16, assert_eq2,
            try_initialize_logging_thread_local};

fn service() -> Arc<dyn FormatService> { Arc::new(BuiltinFormatService) }

fn integers(locale: &str) -> NumberStyle<i64> {
    NumberStyle::<i64>::number(&LexiconCache::default(), service(), locale).unwrap()
}

fn dollars() -> NumberStyle<f64> {
    NumberStyle::<f64>::currency(&LexiconCache::default(), service(), "en_US", "USD")
        .unwrap()
}

#[test]
fn test_rejection_keeps_state() {
    let mut session = EditSession::new(dollars(), 12.5);
    assert_eq2!(session.text(), "$12.50");
    assert_eq2!(session.selection::<Utf16>(), 6..6);

    assert!(session.edit::<Utf16>(0..0, "x").is_err());
    assert_eq2!(session.text(), "$12.50");
    assert_eq2!(session.selection::<Utf16>(), 6..6);
    assert_eq2!(*session.value(), 12.5);
}

#[test]
fn test_select_snaps_off_the_label() {
    let style = NumberStyle::<i64>::currency(
        &LexiconCache::default(),
        service(),
        "en_US",
        "USD",
    )
    .unwrap();
    let mut session = EditSession::new(style, 1234);
    assert_eq2!(session.text(), "$1,234");

    assert_eq2!(session.select::<Utf16>(0..0), 1..1);
    assert_eq2!(session.select::<Utf16>(0..6), 1..6);
}

#[test]
fn test_backspace_over_grouping_separator() {
    let mut session = EditSession::new(integers("en_US"), 1234);
    session.select::<Utf16>(2..2);

    let update = session.edit::<Utf16>(1..2, "").unwrap();
    assert_eq2!(update.text, "234");
    assert_eq2!(update.selection, 0..0);
    assert_eq2!(*session.value(), 234);
}

#[test]
fn test_forward_delete() {
    let mut session = EditSession::new(integers("en_US"), 1234);
    session.select::<Utf16>(1..1);

    let update = session.edit::<Utf16>(1..2, "").unwrap();
    assert_eq2!(update.text, "134");
    assert_eq2!(update.selection, 1..1);
}

#[test]
fn test_backspace_without_select() {
    let mut session = EditSession::new(integers("en_US"), 1234);
    assert_eq2!(session.selection::<Utf16>(), 5..5);

    // The host moved its caret after `,` without telling the session.
    let update = session.edit::<Utf16>(1..2, "").unwrap();
    assert_eq2!(update.text, "234");
    assert_eq2!(update.selection, 0..0);
    assert_eq2!(*session.value(), 234);
}

#[test]
fn test_forward_delete_with_host_selection() {
    let mut session = EditSession::new(integers("en_US"), 1234);

    let update = session
        .edit_with_selection::<Utf16>(1..1, 1..2, "")
        .unwrap();
    assert_eq2!(update.text, "134");
    assert_eq2!(update.selection, 1..1);
}

#[test]
fn test_sign_typed_mid_text_keeps_the_caret() {
    let mut session = EditSession::new(integers("en_US"), 1234);

    // Between `1,` and `234`.
    let update = session.edit::<Utf16>(2..2, "-").unwrap();
    assert_eq2!(update.text, "-1,234");
    assert_eq2!(update.selection, 3..3);
    assert_eq2!(*session.value(), -1234);
}

#[test]
fn test_set_value_moves_caret_to_end() {
    let mut session = EditSession::new(integers("en_US"), 1234);
    session.select::<Utf16>(0..0);

    session.set_value(98765);
    assert_eq2!(session.text(), "98,765");
    assert_eq2!(session.selection::<Utf16>(), 6..6);
    assert_eq2!(*session.value(), 98765);
}

#[test]
fn test_utf8_offsets() {
    let style =
        NumberStyle::<f64>::currency(&LexiconCache::default(), service(), "en_US", "EUR")
            .unwrap();
    let mut session = EditSession::new(style, 12.5);
    assert_eq2!(session.text(), "€12.50");
    // `€` takes three bytes.
    assert_eq2!(session.selection::<Utf8>(), 8..8);

    let update = session.edit::<Utf8>(3..3, "9").unwrap();
    assert_eq2!(update.text, "€912.50");
    assert_eq2!(update.selection, 4..4);
}

#[test]
fn test_optional_number() {
    let mut session = EditSession::new(OptionalStyle::new(integers("en_US")), Some(12));
    assert_eq2!(session.text(), "12");

    let update = session.edit::<Utf16>(0..2, "").unwrap();
    assert_eq2!(update.text, "");
    assert_eq2!(session.value(), &None);

    let update = session.edit::<Utf16>(0..0, "5").unwrap();
    assert_eq2!(update.text, "5");
    assert_eq2!(session.value(), &Some(5));
}

#[test]
#[serial]
fn test_rejected_edit_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir
        .path()
        .join("edit_session.log")
        .to_str()
        .unwrap()
        .to_string();
    let guard =
        try_initialize_logging_thread_local(TracingConfig::new_file(Some(file_path.clone())))
            .unwrap();

    let mut session = EditSession::new(integers("en_US"), 7);
    assert!(session.edit::<Utf16>(0..0, "x").is_err());
    drop(guard);

    let output = std::fs::read_to_string(&file_path).unwrap();
    assert!(output.contains("edit rejected"));
}
