//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Upload constraints are loaded at compile time using `include_str!` and
//! parsed from TOML on startup.

use serde::Deserialize;

use crate::core::{ConfigError, Constraints};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as the document title.
pub const APP_NAME: &str = "galeria";

// =============================================================================
// Upload Configuration
// =============================================================================

/// Bytes in one megabyte, as used for upload limits.
pub const BYTES_PER_MB: u64 = 1_048_576;

/// Name of the photo field in the upload form.
pub const PHOTO_FIELD: &str = "photo";

/// Embedded upload constraints.
pub const UPLOAD_CONFIG: &str = include_str!("../assets/config/upload.toml");

/// Fallback values used when the embedded config is invalid.
pub mod upload_defaults {
    /// Extensions accepted by default.
    pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];
    /// Default size limit in megabytes.
    pub const MAX_SIZE_MB: u64 = 5;
}

/// Upload constraints as written in `upload.toml`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UploadSettings {
    /// Allowed extensions, with or without a leading dot.
    pub allowed_extensions: Vec<String>,
    /// Size limit in megabytes.
    pub max_size_mb: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            allowed_extensions: upload_defaults::ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_size_mb: upload_defaults::MAX_SIZE_MB,
        }
    }
}

impl UploadSettings {
    /// Parse and check a TOML document.
    ///
    /// The extension list is checked after normalization, so entries like
    /// `"."` count as empty.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let settings: Self =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.message().to_string()))?;
        settings.constraints()?;
        Ok(settings)
    }

    /// Convert into field constraints (`max_size_mb` × [`BYTES_PER_MB`]).
    pub fn constraints(&self) -> Result<Constraints, ConfigError> {
        Constraints::from_megabytes(&self.allowed_extensions, self.max_size_mb)
    }
}

/// Get the upload settings for the application.
///
/// Falls back to [`UploadSettings::default`] when the embedded document is
/// invalid, logging the reason to the console.
pub fn upload_settings() -> UploadSettings {
    match UploadSettings::from_toml(UPLOAD_CONFIG) {
        Ok(settings) => settings,
        Err(_err) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("{}; using defaults", _err).into());
            UploadSettings::default()
        }
    }
}

/// Get the constraints for the photo field.
pub fn photo_constraints() -> Constraints {
    upload_settings()
        .constraints()
        .or_else(|_| UploadSettings::default().constraints())
        .expect("Default upload settings must be valid")
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Viewport query under which the drop-zone shows touch copy.
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
