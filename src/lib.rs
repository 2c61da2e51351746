//! galeria: photo upload front-end built with Leptos.
//!
//! - [`core`] - File field validation and the form host contract
//! - [`components`] - Pages, primitives, and the single-file input
//! - [`app`] - Root component, application context, form state

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{App, AppContext, FormState};
