use std::cell::{Cell, RefCell};

use tracing::{debug, warn};

use crate::{
    DragEventKind, DropZoneView, FileCollection, PreviewFile, Result, SelectedFile,
    SelectionCounter, SelectionToken, WidgetState,
};

/// The file type a view's collections hold.
pub type FileOf<V> = <<V as DropZoneView>::Files as FileCollection>::File;

/// A preview whose thumbnail has not been loaded yet.
///
/// Returned by every acquisition path. Hand it to [`DropZone::load_thumbnail`] to read the file and fill in the
/// thumbnail.
#[must_use = "the thumbnail is only loaded once the pending preview is passed to `load_thumbnail`"]
#[derive(Debug)]
pub struct PendingPreview<F> {
    token: SelectionToken,
    file: F,
}

impl<F> PendingPreview<F> {
    /// The selection this preview belongs to.
    pub fn token(&self) -> SelectionToken {
        self.token
    }

    /// The file being previewed.
    pub fn file(&self) -> &F {
        &self.file
    }
}

/// The drop zone controller.
///
/// Turns drag, click, and input events into a single "file acquired" path and keeps track of the widget state.
/// It never touches the DOM itself; every visible change goes through its [`DropZoneView`].
///
/// The controller is built for the single-threaded browser event loop: state lives in cells and handlers take
/// `&self`, so it is usually shared as an `Rc<DropZone<_>>` between listeners.
pub struct DropZone<V: DropZoneView> {
    view: V,
    state: Cell<WidgetState>,
    selected: RefCell<Option<SelectedFile>>,
    selections: SelectionCounter,
}

impl<V: DropZoneView> DropZone<V> {
    /// Create a controller in the [`WidgetState::Prompting`] state.
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: Cell::new(WidgetState::Prompting),
            selected: RefCell::new(None),
            selections: SelectionCounter::new(),
        }
    }

    /// The view this controller drives.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The current widget state.
    pub fn state(&self) -> WidgetState {
        self.state.get()
    }

    /// The file currently being previewed, if any.
    pub fn selected(&self) -> Option<SelectedFile> {
        self.selected.borrow().clone()
    }

    /// Update the hover highlight for a drag event.
    pub fn on_drag(&self, kind: DragEventKind) -> Result<()> {
        debug!(event = kind.event_name(), "drag event on drop area");
        self.view.set_hovered(kind.highlights())
    }

    /// Acquire the files carried by a drop.
    ///
    /// An empty collection is ignored. Otherwise the file input is synced to the dropped files and the first one
    /// is previewed; the rest are ignored.
    pub fn acquire_files(&self, files: &V::Files) -> Result<Option<PendingPreview<FileOf<V>>>> {
        let Some(first) = files.first() else {
            debug!("ignoring drop without files");
            return Ok(None);
        };

        if files.len() > 1 {
            debug!(ignored = files.len() - 1, "only the first dropped file is previewed");
        }

        self.view.sync_file_input(files)?;
        self.render_preview(first).map(Some)
    }

    /// Open the file browser in response to a click on the drop area.
    pub fn on_click(&self) -> Result<()> {
        debug!("drop area clicked, opening file picker");
        self.view.open_file_picker()
    }

    /// Preview the first file after the file input's selection changed.
    ///
    /// The input already holds these files, so unlike [`DropZone::acquire_files`] nothing is synced back.
    pub fn on_file_input_change(
        &self,
        files: &V::Files,
    ) -> Result<Option<PendingPreview<FileOf<V>>>> {
        match files.first() {
            Some(first) => self.render_preview(first).map(Some),
            None => {
                debug!("file input changed to an empty selection");
                Ok(None)
            }
        }
    }

    /// Switch to the preview for `file`.
    ///
    /// Hides the prompt, writes the metadata label, blanks the previous thumbnail and shows the preview container
    /// in one synchronous pass. The thumbnail is filled in later by [`DropZone::load_thumbnail`].
    pub fn render_preview(&self, file: FileOf<V>) -> Result<PendingPreview<FileOf<V>>> {
        let metadata = file.metadata();
        let token = self.selections.next();

        debug!(
            name = %metadata.name,
            size = metadata.size_bytes,
            selection = token.get(),
            "previewing file"
        );

        if self.state().is_previewing() {
            debug!("replacing the previous preview");
        }

        self.view.set_prompt_visible(false)?;
        self.view.set_file_info(&metadata.info_label())?;
        self.view.clear_thumbnail()?;
        self.view.set_preview_visible(true)?;

        self.selected.replace(Some(metadata));
        self.state.set(WidgetState::Previewing);

        Ok(PendingPreview { token, file })
    }

    /// Read the pending file and assign the result to the thumbnail.
    ///
    /// Returns `Ok(true)` if the thumbnail was updated. A failed read leaves the thumbnail blank, and a read that
    /// finishes after a newer selection was made is discarded; both return `Ok(false)`.
    pub async fn load_thumbnail(&self, pending: PendingPreview<FileOf<V>>) -> Result<bool> {
        let PendingPreview { token, file } = pending;

        let url = match file.read_data_url().await {
            Ok(url) => url,
            Err(err) => {
                warn!(name = %file.name(), "could not read file for preview: {err}");
                return Ok(false);
            }
        };

        if !self.selections.is_current(token) {
            debug!(
                selection = token.get(),
                "discarding thumbnail of a superseded selection"
            );
            return Ok(false);
        }

        debug!(
            mime = crate::data_url_mime(&url).unwrap_or("unknown"),
            "thumbnail loaded"
        );
        self.view.set_thumbnail_src(&url)?;
        Ok(true)
    }
}
