// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod commit;
pub mod edit_error;
pub mod edit_session;
pub mod optional_style;
pub mod style_trait;

// Tests.
#[cfg(test)]
mod test_edit_session;

// Re-export.
pub use commit::*;
pub use edit_error::*;
pub use edit_session::*;
pub use optional_style::*;
pub use style_trait::*;
