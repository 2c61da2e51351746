//! Error types for the application.
//!
//! - [`FileRejection`] - Why a candidate file was refused by a file field
//! - [`ConfigError`] - Problems with the embedded upload configuration

use thiserror::Error;

/// A user-input validation failure for a file field.
///
/// The `Display` output is the message shown next to the picker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    /// Extension is not in the allowlist.
    #[error("file type not allowed")]
    InvalidExtension,
    /// File is larger than the configured limit.
    #[error("file exceeds size limit of {limit_mb}MB")]
    TooLarge {
        /// Configured limit, already formatted in megabytes.
        limit_mb: String,
    },
}

/// Upload configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid upload config: {0}")]
    Parse(String),
    /// No allowed extensions were listed.
    #[error("upload config lists no allowed extensions")]
    NoExtensions,
    /// The size limit was zero.
    #[error("upload size limit must be greater than zero")]
    ZeroLimit,
}
