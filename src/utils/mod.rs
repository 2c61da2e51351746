//! Utility modules for DOM access and display formatting.
//!
//! Provides:
//! - [`dom`] - Window, title and URL hash helpers
//! - [`format`] - File size formatting

pub mod dom;
pub mod format;
