//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route is derived from `#/path`
//! - **PageHome is the layout**: it stays mounted and the route picks its outlet
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::pages::{NotFound, PageHome, PagePhotoDetails, UploadForm};
use crate::models::AppRoute;

/// Main application router.
///
/// - `#/` → Home with the upload form
/// - `#/fotos/{id}` → Photo details inside the home layout
/// - anything else → Not found notice inside the home layout
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <PageHome>
            {move || match route.get() {
                AppRoute::Home => view! { <UploadForm /> }.into_any(),
                AppRoute::PhotoDetails { id } => view! { <PagePhotoDetails id=id /> }.into_any(),
                AppRoute::NotFound { path } => view! { <NotFound path=path /> }.into_any(),
            }}
        </PageHome>
    }
}
