// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod caret;
pub mod diff;
pub mod field_struct;
pub mod position;
pub mod proposal;

// Re-export.
pub use caret::*;
pub use diff::*;
pub use field_struct::*;
pub use position::*;
pub use proposal::*;
