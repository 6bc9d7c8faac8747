// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{Commit, DiffableTextStyle, EditResult, Encoding, Field, call_if_true,
            offsets_of, positions_of};

const DEBUG_EDIT_SESSION: bool = false;

/// What the host writes back after an accepted edit. The selection is in the host's
/// unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Update {
    pub text: String,
    pub selection: Range<usize>,
}

/// The host boundary. Owns a style, the current [`Commit`], and the current [`Field`].
///
/// ```
/// use std::sync::Arc;
/// use diffable_text::{BuiltinFormatService, EditSession, LexiconCache, NumberStyle,
///                     Utf16};
///
/// let cache = LexiconCache::default();
/// let style = NumberStyle::<f64>::currency(
///     &cache, Arc::new(BuiltinFormatService), "en_US", "USD").unwrap();
/// let mut session = EditSession::new(style, 12.5);
/// assert_eq!(session.text(), "$12.50");
///
/// // A rejected edit leaves everything as it was.
/// assert!(session.edit::<Utf16>(0..0, "x").is_err());
/// assert_eq!(session.text(), "$12.50");
/// ```
#[derive(Debug)]
pub struct EditSession<S: DiffableTextStyle> {
    style: S,
    commit: Commit<S::Value>,
    field: Field,
}

impl<S: DiffableTextStyle> EditSession<S> {
    /// Shows `value` with the caret at the end.
    pub fn new(style: S, value: S::Value) -> Self {
        let commit = style.interpret(&value);
        let field = Field::at_end(commit.snapshot.clone());
        Self {
            style,
            commit,
            field,
        }
    }

    #[must_use]
    pub fn style(&self) -> &S { &self.style }

    #[must_use]
    pub fn value(&self) -> &S::Value { &self.commit.value }

    #[must_use]
    pub fn commit(&self) -> &Commit<S::Value> { &self.commit }

    #[must_use]
    pub fn field(&self) -> &Field { &self.field }

    #[must_use]
    pub fn text(&self) -> String { self.field.snapshot().characters() }

    /// The selection in `E` units.
    #[must_use]
    pub fn selection<E: Encoding>(&self) -> Range<usize> {
        offsets_of(self.field.selection_positions::<E>())
    }

    /// Applies a selection change made by the host, and returns the snapped selection.
    pub fn select<E: Encoding>(&mut self, range: Range<usize>) -> Range<usize> {
        self.field.select::<E>(positions_of(range));
        self.selection::<E>()
    }

    /// Replaces `range` (in `E` units) with `replacement`.
    ///
    /// The host's selection is the stored one when it agrees with `range` (equal to it,
    /// or a caret at either end of it). Otherwise the host moved the caret without
    /// calling [`Self::select`], and the caret is taken to be at the end of `range`, as
    /// it is for typing and backspace. Use [`Self::edit_with_selection`] when the host
    /// reports its selection along with the edit.
    ///
    /// # Errors
    ///
    /// Returns the style's [`crate::EditError`] when the edit is rejected. The session is
    /// left unchanged in that case.
    pub fn edit<E: Encoding>(
        &mut self,
        range: Range<usize>,
        replacement: &str,
    ) -> EditResult<Update> {
        let stored = self.selection::<E>();
        let caret_at_either_end =
            stored.is_empty() && (stored.start == range.start || stored.start == range.end);
        let selection = if stored == range || caret_at_either_end {
            stored
        } else {
            range.end..range.end
        };
        self.edit_with_selection::<E>(selection, range, replacement)
    }

    /// Replaces `range` with `replacement` while the host has `selection`, both in `E`
    /// units. The selection tells a backspace (caret at the end of `range`) apart from a
    /// forward delete (caret at the start).
    ///
    /// # Errors
    ///
    /// Returns the style's [`crate::EditError`] when the edit is rejected. The session is
    /// left unchanged in that case.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn edit_with_selection<E: Encoding>(
        &mut self,
        selection: Range<usize>,
        range: Range<usize>,
        replacement: &str,
    ) -> EditResult<Update> {
        let proposal = self.field.proposal::<E>(
            positions_of(selection),
            positions_of(range),
            replacement,
        );

        let merge = match self.style.merge(&proposal) {
            Ok(merge) => merge,
            Err(error) => {
                tracing::debug!(
                    message = "edit rejected",
                    text = %self.field.snapshot(),
                    ?error
                );
                return Err(error);
            }
        };

        self.commit = merge.commit;
        self.field = merge.field;

        let update = Update {
            text: self.text(),
            selection: self.selection::<E>(),
        };

        call_if_true!(DEBUG_EDIT_SESSION, {
            tracing::trace!(message = "edit accepted", ?update, value = ?self.commit.value);
        });

        Ok(update)
    }

    /// Replaces the value from outside of an edit, eg: when the app model changes. The
    /// caret moves to the end.
    pub fn set_value(&mut self, value: S::Value) {
        self.commit = self.style.interpret(&value);
        self.field = Field::at_end(self.commit.snapshot.clone());
    }
}
