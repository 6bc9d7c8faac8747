// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod bounds;
pub mod components;
pub mod digits;
pub mod format_service;
pub mod glyph;
pub mod lexicon;
pub mod lexicon_cache;
pub mod locale_data;
pub mod number_style;
pub mod precision;
pub mod sign;
pub mod value;

// Tests.
#[cfg(test)]
mod test_number_scenarios;

// Re-export.
pub use bounds::*;
pub use components::*;
pub use digits::*;
pub use format_service::*;
pub use glyph::*;
pub use lexicon::*;
pub use lexicon_cache::*;
pub use locale_data::*;
pub use number_style::*;
pub use precision::*;
pub use sign::*;
pub use value::*;
