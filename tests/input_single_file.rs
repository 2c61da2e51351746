//! Browser tests for the single-file input.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use galeria::FormState;
use galeria::components::InputSingleFile;
use galeria::core::{Constraints, FormHost, SelectedFile, SetValueOptions};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn images() -> Constraints {
    Constraints::new(["png", "jpg"], 5_242_880).unwrap()
}

fn mount_input(form: FormState, constraints: RwSignal<Constraints>) -> web_sys::HtmlElement {
    let document = document();
    let root = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    document.body().unwrap().append_child(&root).unwrap();

    mount_to(root.clone(), move || {
        view! { <InputSingleFile form=form name="photo" constraints=constraints /> }
    })
    .forget();
    root
}

fn file_input(root: &web_sys::HtmlElement) -> web_sys::HtmlInputElement {
    root.query_selector("input[type=file]")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlInputElement>()
}

/// Build a zero-filled file of `size` bytes.
fn blank_file(name: &str, size: u32) -> web_sys::File {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::new_with_length(size));
    web_sys::File::new_with_u8_array_sequence(&parts, name).unwrap()
}

/// Put `files` into the native input and fire a bubbling `change` event,
/// the way the browser does after the picker dialog closes.
async fn pick(input: &web_sys::HtmlInputElement, files: &[web_sys::File]) {
    let transfer = web_sys::DataTransfer::new().unwrap();
    for file in files {
        transfer.items().add_with_file(file).unwrap();
    }
    input.set_files(transfer.files().as_ref());

    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("change", &init).unwrap();
    input.dispatch_event(&event).unwrap();
    leptos::task::tick().await;
}

fn has_picker(root: &web_sys::HtmlElement) -> bool {
    root.query_selector("input[type=file]").unwrap().is_some()
}

fn text(root: &web_sys::HtmlElement) -> String {
    root.text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
fn empty_field_shows_picker() {
    let root = mount_input(FormState::new(), RwSignal::new(images()));

    assert!(has_picker(&root));
    let input = file_input(&root);
    assert_eq!(input.name(), "photo");
    assert_eq!(input.accept(), ".jpg,.png");
}

#[wasm_bindgen_test]
async fn remove_restores_picker() {
    let form = FormState::new();
    form.set_value(
        "photo",
        Some(SelectedFile::new("photo.PNG", 1000)),
        SetValueOptions::default(),
    );
    let root = mount_input(form, RwSignal::new(images()));

    assert!(!has_picker(&root));
    assert!(text(&root).contains("photo.PNG"));

    root.query_selector("button")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
    leptos::task::tick().await;

    assert_eq!(form.get_value("photo"), None);
    assert!(has_picker(&root));
    assert!(!text(&root).contains("photo.PNG"));
}

#[wasm_bindgen_test]
async fn narrowed_constraints_drop_stored_file() {
    let form = FormState::new();
    form.set_value(
        "photo",
        Some(SelectedFile::new("photo.png", 3 * 1_048_576)),
        SetValueOptions::default(),
    );
    let constraints = RwSignal::new(images());
    let root = mount_input(form, constraints);
    assert!(!has_picker(&root));

    constraints.set(Constraints::from_megabytes(["png"], 2).unwrap());
    leptos::task::tick().await;

    assert_eq!(form.get_value("photo"), None);
    assert!(has_picker(&root));
    assert!(text(&root).contains("file exceeds size limit of 2MB"));
}

#[wasm_bindgen_test]
async fn picking_allowed_file_shows_summary() {
    let form = FormState::new();
    let root = mount_input(form, RwSignal::new(images()));

    pick(&file_input(&root), &[blank_file("photo.PNG", 1000)]).await;

    let stored = form.get_value("photo").unwrap();
    assert_eq!(stored.name(), "photo.PNG");
    assert_eq!(stored.size_bytes(), 1000);
    assert!(!has_picker(&root));
    assert!(text(&root).contains("photo.PNG"));
    let remove = root.query_selector("button").unwrap().unwrap();
    assert_eq!(remove.get_attribute("title").as_deref(), Some("Remover photo.PNG"));
}

#[wasm_bindgen_test]
async fn picking_wrong_type_shows_message() {
    let form = FormState::new();
    let root = mount_input(form, RwSignal::new(images()));
    let input = file_input(&root);

    pick(&input, &[blank_file("doc.pdf", 1000)]).await;

    assert_eq!(form.get_value("photo"), None);
    assert!(has_picker(&root));
    assert!(text(&root).contains("file type not allowed"));
    // Input is reset so the same file can be picked again
    assert_eq!(input.files().map(|f| f.length()), Some(0));
}

#[wasm_bindgen_test]
async fn picking_oversized_file_shows_limit() {
    let form = FormState::new();
    let root = mount_input(form, RwSignal::new(images()));

    pick(&file_input(&root), &[blank_file("big.jpg", 6_000_000)]).await;

    assert_eq!(form.get_value("photo"), None);
    assert!(has_picker(&root));
    assert!(text(&root).contains("file exceeds size limit of 5MB"));
}

#[wasm_bindgen_test]
async fn valid_pick_clears_previous_message() {
    let form = FormState::new();
    let root = mount_input(form, RwSignal::new(images()));

    pick(&file_input(&root), &[blank_file("doc.pdf", 1000)]).await;
    assert!(text(&root).contains("file type not allowed"));

    pick(&file_input(&root), &[blank_file("photo.jpg", 1000)]).await;
    assert!(form.get_value("photo").is_some());
    assert!(!text(&root).contains("file type not allowed"));
}

#[wasm_bindgen_test]
async fn cancelled_pick_is_ignored() {
    let form = FormState::new();
    let root = mount_input(form, RwSignal::new(images()));

    pick(&file_input(&root), &[]).await;

    assert_eq!(form.get_value("photo"), None);
    assert!(has_picker(&root));
    assert!(!text(&root).contains("not allowed"));
    assert!(!text(&root).contains("exceeds"));
}
