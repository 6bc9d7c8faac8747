// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixed shape text, eg: phone numbers, card numbers, dates.
//!
//! A pattern mixes placeholder characters with literals. Each placeholder has a
//! predicate that decides which characters may fill it:
//!
//! ```text
//! pattern : + # # #   ( # # # )   # # - # # - # #
//! value   :   1 2 3     0 0 0     4 5
//! display : + 1 2 3   ( 0 0 0 )   4 5 - # # - # #
//!                                    ▲
//!                                    └ anchor, the caret can't move past it
//! ```
//!
//! Literals and unfilled placeholders are phantom symbols. The value is the content alone,
//! eg: `12300045`.

use std::fmt::Debug;

use rustc_hash::FxHashMap;

use crate::{Commit, DiffableTextStyle, EditError, EditResult, Proposal, Snapshot, Symbol};

/// Decides which characters fit a placeholder.
pub type PlaceholderPredicate = fn(char) -> bool;

/// ```
/// use diffable_text::{DiffableTextStyle, PatternStyle};
///
/// let style = PatternStyle::new("+### (###) ##-##-##")
///     .placeholder('#', |it| it.is_ascii_digit());
/// assert_eq!(style.format(&"12300045".into()), "+123 (000) 45-##-##");
/// assert_eq!(style.clone().hidden(true).format(&"12300045".into()), "+123 (000) 45");
/// ```
#[derive(Clone, Debug)]
pub struct PatternStyle {
    pattern: String,
    placeholders: FxHashMap<char, PlaceholderPredicate>,
    hidden: bool,
}

impl PatternStyle {
    /// A pattern without placeholders is all literals, add them with
    /// [`Self::placeholder`].
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            placeholders: FxHashMap::default(),
            hidden: false,
        }
    }

    /// Every occurrence of `character` in the pattern is a placeholder that accepts what
    /// `predicate` accepts.
    #[must_use]
    pub fn placeholder(mut self, character: char, predicate: PlaceholderPredicate) -> Self {
        self.placeholders.insert(character, predicate);
        self
    }

    /// Hides the pattern after the last filled placeholder.
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    #[must_use]
    pub fn pattern(&self) -> &str { &self.pattern }

    #[must_use]
    pub fn is_hidden(&self) -> bool { self.hidden }

    /// How many characters the value can have.
    #[must_use]
    pub fn capacity(&self) -> usize { self.placeholders_in_order().count() }

    fn placeholders_in_order(&self) -> impl Iterator<Item = char> + '_ {
        self.pattern
            .chars()
            .filter(|it| self.placeholders.contains_key(it))
    }

    /// Fills placeholders with `value`. Characters past the capacity are dropped.
    fn snapshot(&self, value: &str) -> Snapshot {
        let mut snapshot = Snapshot::with_capacity(self.pattern.len());
        // Literals are only shown once a placeholder after them is filled.
        let mut literals: Vec<Symbol> = vec![];
        let mut contents = value.chars();
        let mut pattern = self.pattern.chars();

        while let Some(character) = pattern.next() {
            if !self.placeholders.contains_key(&character) {
                literals.push(Symbol::phantom(character));
                continue;
            }

            if let Some(content) = contents.next() {
                snapshot.append_contents_of(literals.drain(..));
                snapshot.append(Symbol::content(content));
                continue;
            }

            // The first unfilled placeholder.
            if self.hidden {
                if snapshot.is_empty() {
                    snapshot.append_contents_of(literals.drain(..));
                }
                snapshot.anchor_at_end_index();
            } else {
                snapshot.append_contents_of(literals.drain(..));
                snapshot.anchor_at_end_index();
                snapshot.append(Symbol::phantom(character));
                snapshot.append_contents_of(pattern.map(Symbol::phantom));
            }
            return snapshot;
        }

        snapshot.append_contents_of(literals);
        snapshot
    }

    /// Reads the value out of edited text. Characters of the pattern itself (literals, or
    /// a placeholder character such as `#`) are skipped unless they fill the next
    /// placeholder, so that pasting formatted text, or retyping a literal, keeps working.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::PlaceholderMismatch`] for a character that doesn't fit its
    /// placeholder, or [`EditError::PatternOverflow`] once every placeholder is filled.
    fn parse(&self, characters: impl IntoIterator<Item = char>) -> EditResult<String> {
        let mut placeholders = self.placeholders_in_order().enumerate().peekable();
        let mut value = String::new();
        let mut overflow = 0;

        for character in characters {
            match placeholders.peek().copied() {
                Some((_, placeholder)) if self.fits(placeholder, character) => {
                    value.push(character);
                    placeholders.next();
                }
                _ if self.pattern.contains(character) => {}
                Some((index, placeholder)) => {
                    return Err(EditError::PlaceholderMismatch {
                        character,
                        placeholder,
                        index,
                    });
                }
                None => overflow += 1,
            }
        }

        if overflow > 0 {
            return Err(EditError::PatternOverflow {
                count: value.chars().count() + overflow,
                capacity: self.capacity(),
            });
        }
        Ok(value)
    }

    fn fits(&self, placeholder: char, character: char) -> bool {
        self.placeholders
            .get(&placeholder)
            .is_some_and(|predicate| predicate(character))
    }
}

impl DiffableTextStyle for PatternStyle {
    type Value = String;

    fn format(&self, value: &String) -> String { self.snapshot(value).characters() }

    fn interpret(&self, value: &String) -> Commit<String> {
        let value: String = value.chars().take(self.capacity()).collect();
        let snapshot = self.snapshot(&value);
        Commit::new(value, snapshot)
    }

    fn resolve(&self, proposal: &Proposal) -> EditResult<Commit<String>> {
        let value = self.parse(proposal.merged().nonvirtual_characters().chars())?;
        let snapshot = self.snapshot(&value);
        Ok(Commit::new(value, snapshot))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{EditSession, OptionalStyle, Utf16, assert_eq2};

    const PHONE: &str = "+### (###) ##-##-##";

    fn phone() -> PatternStyle {
        PatternStyle::new(PHONE).placeholder('#', |it| it.is_ascii_digit())
    }

    #[test_case("12300045", "+123 (000) 45-##-##" ; "partially filled")]
    #[test_case("123000456789", "+123 (000) 45-67-89" ; "completely filled")]
    #[test_case("", "+### (###) ##-##-##" ; "empty")]
    #[test_case("1234567890123", "+123 (456) 78-90-12" ; "overflow is dropped")]
    fn test_format(value: &str, expected: &str) {
        assert_eq2!(phone().format(&value.to_string()), expected);
    }

    #[test_case("12300045", "+123 (000) 45")]
    #[test_case("", "+")]
    #[test_case("123", "+123")]
    fn test_format_hidden(value: &str, expected: &str) {
        assert_eq2!(phone().hidden(true).format(&value.to_string()), expected);
    }

    #[test]
    fn test_snapshot_attributes() {
        let snapshot = phone().interpret(&"12300045".into()).snapshot;
        let content: String = snapshot
            .iter()
            .filter(|it| it.is_content())
            .map(|it| it.character)
            .collect();
        assert_eq2!(content, "12300045");
        // The anchor sits after the last filled placeholder.
        assert!(snapshot[12].attribute.is_anchor());
        assert_eq2!(snapshot.iter().filter(|it| it.attribute.is_anchor()).count(), 1);
    }

    #[test]
    fn test_interpret_truncates_value() {
        let commit = phone().interpret(&"1234567890123".into());
        assert_eq2!(commit.value, "123456789012");
        assert_eq2!(phone().capacity(), 12);
    }

    #[test]
    fn test_typing() {
        let mut session = EditSession::new(phone(), "12300045".to_string());
        assert_eq2!(session.text(), "+123 (000) 45-##-##");
        // The caret snaps back onto the anchor.
        assert_eq2!(session.selection::<Utf16>(), 13..13);

        let update = session.edit::<Utf16>(13..13, "6").unwrap();
        assert_eq2!(update.text, "+123 (000) 45-6#-##");
        assert_eq2!(update.selection, 15..15);
        assert_eq2!(session.value(), "123000456");

        let update = session.edit::<Utf16>(15..15, "789").unwrap();
        assert_eq2!(update.text, "+123 (000) 45-67-89");
        assert_eq2!(update.selection, 19..19);
        assert_eq2!(session.value(), "123000456789");
    }

    #[test]
    fn test_rejections() {
        let mut session = EditSession::new(phone(), "12300045".to_string());
        assert_eq2!(
            session.edit::<Utf16>(13..13, "x"),
            Err(EditError::PlaceholderMismatch {
                character: 'x',
                placeholder: '#',
                index: 8,
            })
        );
        assert_eq2!(
            session.edit::<Utf16>(13..13, "12345"),
            Err(EditError::PatternOverflow {
                count: 13,
                capacity: 12,
            })
        );
        assert_eq2!(session.text(), "+123 (000) 45-##-##");
        assert_eq2!(session.value(), "12300045");
    }

    #[test]
    fn test_mixed_placeholders() {
        let style = PatternStyle::new("AA-00")
            .placeholder('A', |it| it.is_ascii_uppercase())
            .placeholder('0', |it| it.is_ascii_digit());
        assert_eq2!(style.format(&"XY1".into()), "XY-10");
        assert_eq2!(style.parse("XY-1".chars()), Ok("XY1".to_string()));
        assert_eq2!(
            style.parse("X1".chars()),
            Err(EditError::PlaceholderMismatch {
                character: '1',
                placeholder: 'A',
                index: 1,
            })
        );
    }

    #[test]
    fn test_optional() {
        let mut session = EditSession::new(OptionalStyle::new(phone()), Some("1".to_string()));
        assert_eq2!(session.text(), "+1## (###) ##-##-##");

        // Deleting the only digit empties the field.
        let update = session.edit::<Utf16>(1..2, "").unwrap();
        assert_eq2!(update.text, "");
        assert_eq2!(session.value(), &None);
    }

    #[test]
    fn test_retyping_a_literal_keeps_the_value() {
        let mut session = EditSession::new(phone(), "12300045".to_string());
        let update = session.edit::<Utf16>(4..5, " ").unwrap();
        assert_eq2!(update.text, "+123 (000) 45-##-##");
        assert_eq2!(session.value(), "12300045");
    }

    #[test]
    fn test_paste_formatted_text() {
        let mut session = EditSession::new(OptionalStyle::new(phone()), None);
        assert_eq2!(session.text(), "");

        let update = session.edit::<Utf16>(0..0, "+123 (000) 45").unwrap();
        assert_eq2!(update.text, "+123 (000) 45-##-##");
        assert_eq2!(update.selection, 13..13);
        assert_eq2!(session.value(), &Some("12300045".to_string()));
    }
}
