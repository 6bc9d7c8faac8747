// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `diffable_text`
//!
//! A formatting engine for editable text fields. Give it a value and a style, and it
//! renders displayed text. Give it a user edit to that displayed text, and it derives a
//! new valid value, new displayed text, and a caret position that stays where the user
//! expects it to be, even though the whole text was regenerated rather than patched.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [Architecture](#architecture)
//! - [Edit cycle](#edit-cycle)
//! - [Example](#example)
//! - [Logging](#logging)
//! <!-- /TOC -->
//!
//! # Architecture
//!
//! ```text
//! ╭──────────────╮   ╭───────────────╮   ╭──────────────────────────╮
//! │ snapshot     │──▶│ field         │──▶│ style                    │
//! │ Symbol       │   │ Position<E>   │   │ DiffableTextStyle        │
//! │ Attribute    │   │ Field, caret  │   │ Commit, Merge            │
//! │ Snapshot     │   │ diff          │   │ OptionalStyle            │
//! ╰──────────────╯   │ Proposal      │   │ EditSession (host edge)  │
//!                    ╰───────────────╯   ╰────────────┬─────────────╯
//!                                                     │
//!                        ╭────────────────────────────┴──────╮
//!                        │ number                  pattern   │
//!                        │ Lexicon, LexiconCache   Pattern-  │
//!                        │ FormatService           Style     │
//!                        │ Number, Bounds,                   │
//!                        │ Precision, NumberStyle            │
//!                        ╰───────────────────────────────────╯
//! ```
//!
//! - [`Snapshot`] is the attributed text buffer. Each [`Symbol`] carries an
//!   [`Attribute`] set that says whether it counts toward the value, whether the diff may
//!   treat it as inserted or removed, and whether the caret may rest beside it.
//! - [`Field`] pairs a snapshot with a selection, and maps host offsets (UTF-16, UTF-8,
//!   characters) to snapshot indices.
//! - [`reconcile`] relocates the selection after reformatting by comparing the old and
//!   new snapshots from the tail inward.
//! - [`NumberStyle`] decodes keystrokes into a canonical [`Number`] through a per locale
//!   [`Lexicon`], validates it with [`Bounds`] and [`Precision`], and renders it back
//!   through a [`FormatService`].
//! - [`PatternStyle`] fills placeholders of a pattern such as `+### (###) ##-##-##`.
//!
//! # Edit cycle
//!
//! 1. The host reports an edit: a replacement range (in its own offset unit) and the
//!    replacement characters.
//! 2. The [`Field`] converts the range to snapshot indices, and a [`Proposal`] merges the
//!    replacement into the current snapshot.
//! 3. The style decodes and validates the merged text. A failure rejects the edit and
//!    leaves the previous state untouched.
//! 4. The style formats the accepted value into a fresh snapshot, and [`reconcile`]
//!    derives the new selection.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use diffable_text::{BuiltinFormatService, EditSession, LexiconCache, NumberStyle,
//!                     Utf16};
//!
//! let cache = LexiconCache::default();
//! let service = Arc::new(BuiltinFormatService);
//! let style = NumberStyle::<i64>::number(&cache, service, "en_US").unwrap();
//!
//! let mut session = EditSession::new(style, 1234);
//! assert_eq!(session.text(), "1,234");
//!
//! // Type "5" at the end of the text.
//! let update = session.edit::<Utf16>(5..5, "5").unwrap();
//! assert_eq!(update.text, "12,345");
//! assert_eq!(update.selection, 6..6);
//! assert_eq!(*session.value(), 12_345);
//! ```
//!
//! # Logging
//!
//! The engine emits [`tracing`] events. Use [`try_initialize_logging_global`] with a
//! [`TracingConfig`] to route them to stdout, stderr, or a file.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod common;
pub mod field;
pub mod log;
pub mod number;
pub mod pattern;
pub mod snapshot;
pub mod style;

// Re-export.
pub use common::*;
pub use field::*;
pub use log::*;
pub use number::*;
pub use pattern::*;
pub use snapshot::*;
pub use style::*;
