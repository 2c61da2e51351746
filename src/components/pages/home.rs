//! Home page layout and the upload form shown in its outlet.

use leptos::{ev, prelude::*};

use super::css;
use crate::app::AppContext;
use crate::components::{InputSingleFile, Text};
use crate::config::PHOTO_FIELD;
use crate::core::FormHost;
use crate::models::{AppRoute, TextVariant};


/// Home layout: heading, rule, then whatever the current route renders.
#[component]
pub fn PageHome(children: Children) -> impl IntoView {
    view! {
        <main class=css::page>
            <Text>"Página Inicial!"</Text>
            <hr class=css::rule />
            {children()}
        </main>
    }
}

/// Upload form with a single required photo field.
///
/// Submitting runs the form's validation and, when it passes, logs the
/// selected file. Nothing is sent anywhere.
#[component]
pub fn UploadForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let form = ctx.form;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !form.validate_all() {
            return;
        }
        if let Some(_file) = form.get_value(PHOTO_FIELD) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(
                &format!(
                    "{}: ready to upload {} ({} bytes)",
                    PHOTO_FIELD,
                    _file.name(),
                    _file.size_bytes()
                )
                .into(),
            );
        }
    };

    let error = Signal::derive(move || form.error(PHOTO_FIELD));

    view! {
        <form class=css::form on:submit=on_submit novalidate=true>
            <Text variant=TextVariant::LabelMedium>"Foto"</Text>
            <InputSingleFile
                form=form
                name=PHOTO_FIELD
                id=PHOTO_FIELD
                constraints=ctx.photo_constraints
                error=error
                required=true
            />
            <button type="submit" class=css::submit>"Enviar"</button>
        </form>
        <nav class=css::links>
            {(1..=3)
                .map(|n| {
                    let route = AppRoute::PhotoDetails {
                        id: n.to_string(),
                    };
                    view! { <a href=route.to_hash()>{format!("Foto {}", n)}</a> }
                })
                .collect_view()}
        </nav>
    }
}

/// Shown in the home outlet for unknown routes.
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <Text variant=TextVariant::HeadingSmall>"Página não encontrada"</Text>
        <Text variant=TextVariant::LabelSmall>{format!("/{}", path)}</Text>
        <button type="button" class=css::submit on:click=move |_| AppRoute::Home.push()>
            "Voltar"
        </button>
    }
}
