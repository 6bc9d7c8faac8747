// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decl_macros;
pub mod lru_cache;

// Re-export.
pub use decl_macros::*;
pub use lru_cache::*;
