//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{LuImage as FileImage, LuTrash as Remove, LuUpload as UploadFile};
}

mod bootstrap {
    pub use icondata::{
        BsFileEarmarkImage as FileImage, BsTrash as Remove, BsUpload as UploadFile,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(UPLOAD_FILE, UploadFile);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(REMOVE, Remove);
