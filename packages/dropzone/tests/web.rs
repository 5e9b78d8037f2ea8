#![cfg(target_arch = "wasm32")]

use std::{cell::Cell, rc::Rc};

use dropzone::{web, Config, DragEventKind, Error, WidgetState};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::{prelude::Closure, JsCast};
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::{
    DataTransfer, Document, DragEvent, DragEventInit, Event, EventInit, File, FilePropertyBag,
    HtmlElement, HtmlImageElement, HtmlInputElement,
};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const MARKUP: &str = r#"
    <div id="drop-area">Drop an image here, or click to browse</div>
    <input type="file" id="fileElem" accept="image/*" style="display: none">
    <button id="upload-button">Upload</button>
    <div id="preview-area" style="display: none">
        <p id="file-info"></p>
        <img id="preview-image" alt="preview">
    </div>
"#;

// The 8-byte PNG signature is enough for the reader to tag the data url
const PNG_BYTES: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(markup: &str) {
    document().body().unwrap().set_inner_html(markup);
}

fn element<T: JsCast>(id: &str) -> T {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<T>()
        .unwrap()
}

fn png_file(name: &str, len: usize) -> File {
    let mut bytes = PNG_BYTES.to_vec();
    bytes.resize(len.max(PNG_BYTES.len()), 0);

    let options = FilePropertyBag::new();
    options.set_type("image/png");
    let parts = Array::of1(&Uint8Array::from(bytes.as_slice()));
    File::new_with_u8_array_sequence_and_options(&parts, name, &options).unwrap()
}

fn transfer(files: &[File]) -> DataTransfer {
    let transfer = DataTransfer::new().unwrap();
    for file in files {
        transfer.items().add_with_file(file).unwrap();
    }
    transfer
}

fn drag_event(kind: &str, transfer: Option<&DataTransfer>) -> DragEvent {
    let init = DragEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_data_transfer(transfer);
    DragEvent::new_with_event_init_dict(kind, &init).unwrap()
}

fn display(id: &str) -> String {
    element::<HtmlElement>(id)
        .style()
        .get_property_value("display")
        .unwrap()
}

async fn wait_for_thumbnail() -> String {
    let image = element::<HtmlImageElement>("preview-image");
    for _ in 0..100 {
        if !image.src().is_empty() {
            return image.src();
        }
        TimeoutFuture::new(10).await;
    }
    panic!("thumbnail was never set");
}

#[wasm_bindgen_test]
fn missing_elements_are_reported() {
    mount("<div id='drop-area'></div>");

    let err = web::initialize(Config::new()).err().unwrap();
    assert!(matches!(err, Error::MissingElement { id } if id == "fileElem"));
}

#[wasm_bindgen_test]
fn wrongly_typed_elements_are_reported() {
    mount(&MARKUP.replace(r#"<img id="preview-image" alt="preview">"#, r#"<div id="preview-image"></div>"#));

    let err = web::initialize(Config::new()).err().unwrap();
    assert!(matches!(err, Error::WrongElementType { id, .. } if id == "preview-image"));
}

#[wasm_bindgen_test]
fn drag_events_toggle_hover_and_are_cancelled() {
    mount(MARKUP);
    let _zone = web::initialize(Config::new()).unwrap();
    let drop_area = element::<HtmlElement>("drop-area");

    let enter = drag_event("dragenter", None);
    drop_area.dispatch_event(&enter).unwrap();
    assert!(enter.default_prevented());
    assert!(drop_area.class_list().contains("hover"));

    drop_area.dispatch_event(&drag_event("dragover", None)).unwrap();
    assert!(drop_area.class_list().contains("hover"));

    drop_area.dispatch_event(&drag_event("dragleave", None)).unwrap();
    assert!(!drop_area.class_list().contains("hover"));
}

#[wasm_bindgen_test]
fn every_drag_event_is_cancelled_and_contained() {
    mount(&format!("<div id='wrapper'>{MARKUP}</div>"));
    let _zone = web::initialize(Config::new()).unwrap();

    let bubbled = Rc::new(Cell::new(0));
    let watcher = Closure::<dyn FnMut(Event)>::new({
        let bubbled = bubbled.clone();
        move |_: Event| bubbled.set(bubbled.get() + 1)
    });
    let wrapper = element::<HtmlElement>("wrapper");
    for kind in DragEventKind::ALL {
        wrapper
            .add_event_listener_with_callback(kind.event_name(), watcher.as_ref().unchecked_ref())
            .unwrap();
    }

    let drop_area = element::<HtmlElement>("drop-area");
    for kind in DragEventKind::ALL {
        let event = drag_event(kind.event_name(), None);
        drop_area.dispatch_event(&event).unwrap();
        assert!(event.default_prevented(), "{} was not cancelled", kind.event_name());
    }
    assert_eq!(bubbled.get(), 0);

    for kind in DragEventKind::ALL {
        wrapper
            .remove_event_listener_with_callback(kind.event_name(), watcher.as_ref().unchecked_ref())
            .unwrap();
    }
}

#[wasm_bindgen_test]
fn every_body_drag_is_cancelled_and_contained() {
    mount(MARKUP);
    let _zone = web::initialize(Config::new()).unwrap();

    let bubbled = Rc::new(Cell::new(0));
    let watcher = Closure::<dyn FnMut(Event)>::new({
        let bubbled = bubbled.clone();
        move |_: Event| bubbled.set(bubbled.get() + 1)
    });
    let root = document().document_element().unwrap();
    for kind in DragEventKind::ALL {
        root.add_event_listener_with_callback(kind.event_name(), watcher.as_ref().unchecked_ref())
            .unwrap();
    }

    let body = document().body().unwrap();
    for kind in DragEventKind::ALL {
        let event = drag_event(kind.event_name(), None);
        body.dispatch_event(&event).unwrap();
        assert!(event.default_prevented(), "{} was not cancelled", kind.event_name());
    }
    assert_eq!(bubbled.get(), 0);

    for kind in DragEventKind::ALL {
        root.remove_event_listener_with_callback(kind.event_name(), watcher.as_ref().unchecked_ref())
            .unwrap();
    }
}

#[wasm_bindgen_test]
fn empty_drop_keeps_prompting() {
    mount(MARKUP);
    let zone = web::initialize(Config::new()).unwrap();
    let drop_area = element::<HtmlElement>("drop-area");

    drop_area.dispatch_event(&drag_event("drop", None)).unwrap();
    drop_area
        .dispatch_event(&drag_event("drop", Some(&transfer(&[]))))
        .unwrap();

    assert_eq!(zone.zone().state(), WidgetState::Prompting);
    assert_eq!(display("drop-area"), "");
    assert_eq!(display("preview-area"), "none");
}

#[wasm_bindgen_test]
async fn dropping_a_png_renders_the_preview() {
    mount(MARKUP);
    let zone = web::initialize(Config::new()).unwrap();
    let drop_area = element::<HtmlElement>("drop-area");

    // a leftover source from an earlier selection is blanked by the new one
    element::<HtmlImageElement>("preview-image").set_src("data:image/gif;base64,R0lGODlhAQABAAAAACw=");

    let files = transfer(&[png_file("cat.png", 2050), png_file("other.png", 10)]);
    drop_area
        .dispatch_event(&drag_event("drop", Some(&files)))
        .unwrap();

    assert_eq!(zone.zone().state(), WidgetState::Previewing);
    assert_eq!(display("drop-area"), "none");
    assert_eq!(display("preview-area"), "block");
    assert_eq!(
        element::<HtmlElement>("file-info").text_content().as_deref(),
        Some("File: cat.png, Size: 2 KB")
    );

    // the hidden input now holds the dropped files
    let input = element::<HtmlInputElement>("fileElem");
    assert_eq!(input.files().map(|files| files.length()), Some(2));

    assert!(!element::<HtmlImageElement>("preview-image").has_attribute("src"));

    let src = wait_for_thumbnail().await;
    assert!(src.starts_with("data:image/png;base64,"), "{src}");
}

#[wasm_bindgen_test]
async fn picking_a_file_renders_the_preview() {
    mount(MARKUP);
    let zone = web::initialize(Config::new()).unwrap();
    let input = element::<HtmlInputElement>("fileElem");

    input.set_files(transfer(&[png_file("dog.png", 1_048_576)]).files().as_ref());
    let init = EventInit::new();
    init.set_bubbles(true);
    input
        .dispatch_event(&Event::new_with_event_init_dict("change", &init).unwrap())
        .unwrap();

    assert_eq!(zone.zone().state(), WidgetState::Previewing);
    assert_eq!(
        element::<HtmlElement>("file-info").text_content().as_deref(),
        Some("File: dog.png, Size: 1024 KB")
    );
    assert!(wait_for_thumbnail().await.starts_with("data:image/png;base64,"));
}

#[wasm_bindgen_test]
fn clicking_the_drop_area_opens_the_picker_once() {
    mount(MARKUP);
    let _zone = web::initialize(Config::new()).unwrap();

    let clicks = Rc::new(Cell::new(0));
    let counter = Closure::<dyn FnMut(Event)>::new({
        let clicks = clicks.clone();
        move |event: Event| {
            // keep the native dialog from opening during the test
            event.prevent_default();
            clicks.set(clicks.get() + 1);
        }
    });
    let input = element::<HtmlInputElement>("fileElem");
    input
        .add_event_listener_with_callback("click", counter.as_ref().unchecked_ref())
        .unwrap();

    element::<HtmlElement>("drop-area").click();
    assert_eq!(clicks.get(), 1);

    input
        .remove_event_listener_with_callback("click", counter.as_ref().unchecked_ref())
        .unwrap();
}

#[wasm_bindgen_test]
fn dropping_the_handle_unbinds_listeners() {
    mount(MARKUP);
    let zone = web::initialize(Config::new()).unwrap();
    drop(zone);

    let drop_area = element::<HtmlElement>("drop-area");
    let enter = drag_event("dragenter", None);
    drop_area.dispatch_event(&enter).unwrap();

    assert!(!enter.default_prevented());
    assert!(!drop_area.class_list().contains("hover"));
}
