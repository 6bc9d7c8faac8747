// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Result of a single edit. An error rejects the edit. The caller keeps its previous
/// [`crate::Commit`] and [`crate::Field`], nothing is partially applied.
pub type EditResult<T> = Result<T, EditError>;

/// Why an edit was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum EditError {
    /// The text contains a character that the active lexicon doesn't know.
    #[error("Unrecognized character {character:?}")]
    #[diagnostic(
        code(diffable_text::edit::unrecognized_character),
        help("Only digits, signs, and separators of the field's locale can be typed")
    )]
    UnrecognizedCharacter { character: char },

    /// A sign that is not in front of the digits, or a second sign.
    #[error("Misplaced sign {character:?}")]
    #[diagnostic(code(diffable_text::edit::misplaced_sign))]
    MisplacedSign { character: char },

    #[error("The number already has a fraction separator")]
    #[diagnostic(code(diffable_text::edit::duplicate_fraction_separator))]
    DuplicateFractionSeparator,

    #[error("Integer values can't have a fraction")]
    #[diagnostic(code(diffable_text::edit::fraction_not_allowed))]
    FractionNotAllowed,

    #[error("Too many integer digits: {count} (at most {max})")]
    #[diagnostic(code(diffable_text::edit::too_many_integer_digits))]
    TooManyIntegerDigits { count: usize, max: usize },

    #[error("Too many fraction digits: {count} (at most {max})")]
    #[diagnostic(code(diffable_text::edit::too_many_fraction_digits))]
    TooManyFractionDigits { count: usize, max: usize },

    /// More significant digits than the value type represents without loss.
    #[error("Too many digits: {count} (the value type holds at most {max})")]
    #[diagnostic(code(diffable_text::edit::exceeds_capacity))]
    ExceedsCapacity { count: usize, max: usize },

    #[error("Value {value} is outside of {min}...{max}")]
    #[diagnostic(
        code(diffable_text::edit::out_of_bounds),
        help("Adjust the field's bounds if this value should be accepted")
    )]
    OutOfBounds {
        value: String,
        min: String,
        max: String,
    },

    /// The decoded text can't be parsed into the value type.
    #[error("{canonical:?} can't be represented by the value type")]
    #[diagnostic(code(diffable_text::edit::unrepresentable))]
    Unrepresentable { canonical: String },

    #[error("Too many characters for the pattern: {count} (at most {capacity})")]
    #[diagnostic(code(diffable_text::edit::pattern_overflow))]
    PatternOverflow { count: usize, capacity: usize },

    #[error("{character:?} doesn't fit placeholder {placeholder:?} at index {index}")]
    #[diagnostic(code(diffable_text::edit::placeholder_mismatch))]
    PlaceholderMismatch {
        character: char,
        placeholder: char,
        index: usize,
    },
}
