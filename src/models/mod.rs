//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AppRoute`] - Hash-based navigation
//! - [`TextVariant`], [`InputSize`], [`IconSize`] - Visual variants

mod route;
mod variants;

pub use route::AppRoute;
pub use variants::{IconSize, InputSize, TextVariant};
