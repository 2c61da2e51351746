//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`pages`] - Route pages (home layout, photo details)
//! - [`input_single_file`] - Styled single-file upload input
//! - [`Text`], [`SvgIcon`] - Text and icon primitives
//! - [`icons`] - Centralized icon definitions (change theme here)

mod icon;
pub mod icons;
pub mod input_single_file;
pub mod pages;
pub mod router;
mod text;

pub use icon::SvgIcon;
pub use input_single_file::InputSingleFile;
pub use router::AppRouter;
pub use text::Text;
