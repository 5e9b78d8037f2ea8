//! Mount a drop zone onto a live page with web-sys.
//!
//! [`initialize`] looks up the widget's elements by id, builds a [`DropZone`] over a [`WebView`] and registers
//! the listeners:
//!
//! - `dragenter`, `dragover`, `dragleave` and `drop` on both the drop area and `<body>` have their default handling
//!   cancelled and stop propagating, so the browser never opens the dropped file itself.
//! - on the drop area, the same events toggle the hover class, and `drop` acquires the dropped files.
//! - `click` on the drop area opens the file picker.
//! - `change` on the file input previews the newly picked file.
//!
//! File reads run on the browser's event loop through [`wasm_bindgen_futures::spawn_local`].

use std::rc::Rc;

use tracing::{info, trace, warn};
use web_sys::{Event, EventTarget};

use crate::{Config, DragEventKind, DropZone, Error, PendingPreview, Result};

mod dom;
mod file;
mod listener;

pub use dom::WebView;
pub use file::{WebFile, WebFileList};

use listener::EventListener;

/// A drop zone bound to the page.
///
/// Dropping the handle removes every listener it registered. Call [`WebDropZone::forget`] to keep the widget
/// alive for the rest of the page's life.
pub struct WebDropZone {
    zone: Rc<DropZone<WebView>>,
    _listeners: Vec<EventListener>,
}

impl WebDropZone {
    /// The controller behind the widget.
    pub fn zone(&self) -> &DropZone<WebView> {
        &self.zone
    }

    /// Leak the listeners so the widget stays bound after the handle goes out of scope.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Bind a drop zone to the elements named in `config`.
///
/// Calling this twice for the same elements registers every listener twice.
pub fn initialize(config: Config) -> Result<WebDropZone> {
    let document = dom::document()?;
    let body = document.body().ok_or(Error::NoBody)?;
    let view = WebView::from_document(&document, &config)?;

    let zone = Rc::new(DropZone::new(view));
    let drop_area: EventTarget = zone.view().drop_area().clone().into();
    let file_input: EventTarget = zone.view().file_input().clone().into();
    let body: EventTarget = body.into();

    let mut listeners = Vec::with_capacity(DragEventKind::ALL.len() * 2 + 2);

    for kind in DragEventKind::ALL {
        listeners.push(EventListener::new(&body, kind.event_name(), |event| {
            suppress_default(&event)
        })?);

        let zone = zone.clone();
        listeners.push(EventListener::new(
            &drop_area,
            kind.event_name(),
            move |event| {
                suppress_default(&event);
                handle_drag(&zone, kind, &event);
            },
        )?);
    }

    listeners.push(EventListener::new(&drop_area, "click", {
        let zone = zone.clone();
        move |_| {
            if let Err(err) = zone.on_click() {
                warn!("failed to open the file picker: {err}");
            }
        }
    })?);

    listeners.push(EventListener::new(&file_input, "change", {
        let zone = zone.clone();
        move |_| {
            let files = zone.view().file_input_files();
            match zone.on_file_input_change(&files) {
                Ok(Some(pending)) => spawn_thumbnail(&zone, pending),
                Ok(None) => {}
                Err(err) => warn!("failed to preview the picked file: {err}"),
            }
        }
    })?);

    info!(
        drop_area = %config.drop_area_id,
        file_input = %config.file_input_id,
        "drop zone initialized"
    );

    Ok(WebDropZone {
        zone,
        _listeners: listeners,
    })
}

fn suppress_default(event: &Event) {
    trace!(event = %event.type_(), "suppressing default drag handling");
    event.prevent_default();
    event.stop_propagation();
}

fn handle_drag(zone: &Rc<DropZone<WebView>>, kind: DragEventKind, event: &Event) {
    if let Err(err) = zone.on_drag(kind) {
        warn!("failed to update the hover highlight: {err}");
    }

    if kind != DragEventKind::Drop {
        return;
    }

    let files = WebFileList::from_drag_event(event);
    match zone.acquire_files(&files) {
        Ok(Some(pending)) => spawn_thumbnail(zone, pending),
        Ok(None) => {}
        Err(err) => warn!("failed to preview the dropped file: {err}"),
    }
}

fn spawn_thumbnail(zone: &Rc<DropZone<WebView>>, pending: PendingPreview<WebFile>) {
    let zone = zone.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = zone.load_thumbnail(pending).await {
            warn!("failed to show the thumbnail: {err}");
        }
    });
}
