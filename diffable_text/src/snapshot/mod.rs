// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod attribute;
pub mod snapshot_struct;
pub mod symbol;

// Re-export.
pub use attribute::*;
pub use snapshot_struct::*;
pub use symbol::*;
