//! Route pages.
//!
//! - [`PageHome`] - Layout with the home heading and an outlet
//! - [`PagePhotoDetails`] - Details for one photo

mod home;
mod photo_details;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

pub use home::{NotFound, PageHome, UploadForm};
pub use photo_details::PagePhotoDetails;
