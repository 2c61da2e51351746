//! Root application module.
//!
//! Contains the main App component, AppContext definition, FormState,
//! and application-level setup logic following Leptos conventions.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::{photo_constraints, APP_NAME, PHOTO_FIELD};
use crate::core::{Constraints, FormHost, SelectedFile, SetValueOptions};
use crate::utils::dom;

/// Message produced when a required field has no value.
pub const REQUIRED_MESSAGE: &str = "field required";

// ============================================================================
// FormState
// ============================================================================

/// Form field values and field errors managed with Leptos signals.
///
/// Implements [`FormHost`], so file inputs read and write their field
/// through it. Field errors (currently only "required") are produced here
/// and merely displayed by the inputs.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct FormState {
    /// Stored file per field name.
    values: RwSignal<HashMap<String, SelectedFile>>,
    /// Current error per field name.
    errors: RwSignal<HashMap<String, String>>,
    /// Fields that must hold a value.
    required: RwSignal<HashSet<String>>,
}

impl FormState {
    /// Creates an empty form with no values, errors, or rules.
    pub fn new() -> Self {
        Self {
            values: RwSignal::new(HashMap::new()),
            errors: RwSignal::new(HashMap::new()),
            required: RwSignal::new(HashSet::new()),
        }
    }

    /// Marks `field` as required.
    pub fn require(&self, field: &str) {
        self.required.update(|r| {
            r.insert(field.to_string());
        });
    }

    /// Current error for `field`, if any. Tracked.
    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.with(|e| e.get(field).cloned())
    }

    /// Runs the rules for one field, updating its error. Returns `true` if valid.
    pub fn validate_field(&self, field: &str) -> bool {
        let missing = self.required.with_untracked(|r| r.contains(field))
            && self.values.with_untracked(|v| !v.contains_key(field));

        self.errors.update(|e| {
            if missing {
                e.insert(field.to_string(), REQUIRED_MESSAGE.to_string());
            } else {
                e.remove(field);
            }
        });
        !missing
    }

    /// Runs the rules for every registered field. Returns `true` if all pass.
    pub fn validate_all(&self) -> bool {
        let fields: Vec<String> = self
            .required
            .with_untracked(|r| r.iter().cloned().collect());
        fields
            .iter()
            .fold(true, |ok, field| self.validate_field(field) && ok)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormHost for FormState {
    fn get_value(&self, field: &str) -> Option<SelectedFile> {
        self.values.with(|v| v.get(field).cloned())
    }

    fn set_value(&self, field: &str, value: Option<SelectedFile>, options: SetValueOptions) {
        self.values.update(|v| match value {
            Some(file) => {
                v.insert(field.to_string(), file);
            }
            None => {
                v.remove(field);
            }
        });
        if options.validate {
            self.validate_field(field);
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Upload form state.
    pub form: FormState,

    /// Constraints for the photo field. A signal so they can change while
    /// a file is stored; the input re-checks the file when they do.
    pub photo_constraints: RwSignal<Constraints>,
}

impl AppContext {
    /// Creates a new application context.
    ///
    /// The photo field is registered as required and its constraints come
    /// from the embedded upload config.
    pub fn new() -> Self {
        let form = FormState::new();
        form.require(PHOTO_FIELD);
        Self {
            form,
            photo_constraints: RwSignal::new(photo_constraints()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    dom::set_title(APP_NAME);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0f0f10;
                    color: #e6e6e6;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #f87171; margin-bottom: 1rem;">
                            "Algo deu errado"
                        </h1>
                        <ul style="
                            text-align: left;
                            color: #f87171;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = dom::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Recarregar"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
