//! Core logic for file fields, independent of rendering.
//!
//! - [`SelectedFile`] - Name/size metadata of a picked file
//! - [`Constraints`], [`ValidationResult`] - Extension and size rules
//! - [`FileFieldController`], [`FormHost`] - Writes accepted files to a form
//! - [`FileRejection`], [`ConfigError`] - Error types

pub mod controller;
pub mod error;
mod file;
mod validation;

pub use controller::{FieldState, FileFieldController, FormHost, SetValueOptions};
pub use error::{ConfigError, FileRejection};
pub use file::{extension_of, SelectedFile};
pub use validation::{evaluate, Constraints, ValidationResult};
