//! Single-file upload input.
//!
//! Renders a drop-zone with a transparent native `<input type="file">` on top
//! while the field is empty, and a summary row with a remove action once a
//! valid file is stored. Every decision goes through [`FileFieldController`];
//! the component never keeps its own copy of the field value.

use leptos::{ev, prelude::*};
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::components::icons as ic;
use crate::components::{SvgIcon, Text};
use crate::config::NARROW_VIEWPORT_QUERY;
use crate::core::{Constraints, FileFieldController, FileRejection, FormHost, SelectedFile};
use crate::models::{IconSize, InputSize, TextVariant};
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/input_single_file/input_single_file.module.css");

fn dropzone_class(size: InputSize) -> String {
    let size_class = match size {
        InputSize::Md => css::dropzoneMd,
    };
    format!("{} {}", css::dropzone, size_class)
}

/// Styled single-file input bound to one field of a form host.
///
/// * `form` - Host that owns the field value
/// * `name` - Field name, also passed to the native input
/// * `constraints` - Allowed extensions and size limit; may change over time
/// * `error` - Field error produced by the host (e.g. "field required")
#[component]
pub fn InputSingleFile<H>(
    form: H,
    #[prop(into)] name: String,
    #[prop(into)] constraints: Signal<Constraints>,
    #[prop(optional)] size: InputSize,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView
where
    H: FormHost + Copy + Send + Sync + 'static,
{
    let field = StoredValue::new(name);
    let rejection = RwSignal::new(None::<FileRejection>);
    let is_narrow = use_media_query(NARROW_VIEWPORT_QUERY.to_string());
    let is_disabled = Signal::derive(move || disabled.get().unwrap_or(false));

    let controller = move || FileFieldController::new(form, field.get_value(), constraints.get());
    let controller_untracked =
        move || FileFieldController::new(form, field.get_value(), constraints.get_untracked());

    // Stored file that passes the current constraints
    let current = Memo::new(move |_| controller().current());

    // Constraints can change after a file was stored; drop it if it no longer fits
    Effect::new(move |_| {
        if let Some(reason) = controller().revalidate() {
            log_rejection(&field.get_value(), &reason);
            rejection.set(Some(reason));
        }
    });

    let on_change = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let candidate = SelectedFile::new(file.name(), file.size() as u64);

        match controller_untracked().select(candidate) {
            Ok(()) => {
                log_accepted(&field.get_value(), &file.name());
                rejection.set(None);
            }
            Err(reason) => {
                log_rejection(&field.get_value(), &reason);
                rejection.set(Some(reason));
            }
        }

        // Allow picking the same file again
        input.set_value("");
    };

    let on_remove = Callback::new(move |_: ()| {
        controller_untracked().clear();
        rejection.set(None);
        log_removed(&field.get_value());
    });

    let picker = move || {
        view! {
            <div class=css::picker>
                <input
                    type="file"
                    class=css::nativeInput
                    id=id.clone()
                    name=field.get_value()
                    accept=move || constraints.with(Constraints::accept_attr)
                    required=required
                    disabled=move || is_disabled.get()
                    on:change=on_change
                />
                <div class=dropzone_class(size)>
                    <SvgIcon
                        icon=ic::UPLOAD_FILE
                        size=IconSize::from(size)
                        class=css::dropzoneIcon
                    />
                    <Text variant=TextVariant::LabelMedium class=css::dropzoneText>
                        {move || {
                            if is_narrow.get() {
                                view! { "Toque para selecionar um arquivo" }.into_any()
                            } else {
                                view! { "Arraste o arquivo aqui" <br /> "ou clique para selecionar" }
                                    .into_any()
                            }
                        }}
                    </Text>
                </div>
            </div>
        }
    };

    // Message from the last failed selection, shown only alongside the picker
    let rejection_message = move || {
        if current.with(Option::is_some) {
            return None;
        }
        rejection.get().map(|reason| {
            view! {
                <Text variant=TextVariant::LabelSmall class=css::message>
                    {reason.to_string()}
                </Text>
            }
        })
    };

    let error_message = move || {
        error.get().map(|message| {
            view! {
                <Text variant=TextVariant::LabelSmall class=css::message>
                    {message}
                </Text>
            }
        })
    };

    view! {
        <div class=css::root>
            <Show when=move || current.with(Option::is_some) fallback=picker>
                {move || {
                    current
                        .get()
                        .map(|file| {
                            view! {
                                <FileSummary file=file on_remove=on_remove disabled=is_disabled />
                            }
                        })
                }}
            </Show>
            <div class=css::messages role="alert">
                {rejection_message}
                {error_message}
            </div>
        </div>
    }
}

/// Summary row for a stored file.
#[component]
fn FileSummary(
    file: SelectedFile,
    on_remove: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let name = file.name().to_string();
    let title = format!("Remover {}", name);
    let size = format_size(file.size_bytes());

    view! {
        <div class=css::summary>
            <SvgIcon icon=ic::FILE_IMAGE size=IconSize::Sm class=css::summaryIcon />
            <Text variant=TextVariant::LabelMedium class=css::summaryName>
                {name}
            </Text>
            <Text variant=TextVariant::LabelSmall class=css::summarySize>
                {size}
            </Text>
            <button
                type="button"
                class=css::removeButton
                title=title
                disabled=move || disabled.get()
                on:click=move |_| on_remove.run(())
            >
                <SvgIcon icon=ic::REMOVE size=IconSize::Sm />
                "Remover"
            </button>
        </div>
    }
}

// =============================================================================
// Console logging
// =============================================================================

fn log_accepted(_field: &str, _name: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("{}: accepted {}", _field, _name).into());
}

fn log_removed(_field: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("{}: file removed", _field).into());
}

fn log_rejection(_field: &str, _reason: &FileRejection) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("{}: {}", _field, _reason).into());
}
