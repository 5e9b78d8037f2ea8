use crate::{FileCollection, Result};

/// The drag events the drop area listens to.
///
/// All four have their default browser handling suppressed, both on the drop area and on the page body, so a
/// file dropped next to the widget doesn't navigate away from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    /// `dragenter`
    Enter,
    /// `dragover`
    Over,
    /// `dragleave`
    Leave,
    /// `drop`
    Drop,
}

impl DragEventKind {
    /// Every drag event, in registration order.
    pub const ALL: [DragEventKind; 4] = [
        DragEventKind::Enter,
        DragEventKind::Over,
        DragEventKind::Leave,
        DragEventKind::Drop,
    ];

    /// The DOM event name.
    pub fn event_name(self) -> &'static str {
        match self {
            DragEventKind::Enter => "dragenter",
            DragEventKind::Over => "dragover",
            DragEventKind::Leave => "dragleave",
            DragEventKind::Drop => "drop",
        }
    }

    /// Whether the drop area should be highlighted after this event.
    pub fn highlights(self) -> bool {
        matches!(self, DragEventKind::Enter | DragEventKind::Over)
    }
}

/// The DOM collaborators of a drop zone.
///
/// The [`DropZone`](crate::DropZone) controller decides what should change; a view applies it. The web
/// implementation lives in [`web::WebView`](crate::web::WebView).
pub trait DropZoneView {
    /// The file collection carried by drops and by the file input.
    type Files: FileCollection;

    /// Toggle the hover highlight on the drop area.
    fn set_hovered(&self, hovered: bool) -> Result<()>;

    /// Show or hide the drop prompt.
    fn set_prompt_visible(&self, visible: bool) -> Result<()>;

    /// Show or hide the preview container.
    fn set_preview_visible(&self, visible: bool) -> Result<()>;

    /// Replace the text of the metadata label.
    fn set_file_info(&self, text: &str) -> Result<()>;

    /// Point the thumbnail at a new source.
    fn set_thumbnail_src(&self, src: &str) -> Result<()>;

    /// Remove the thumbnail's source, leaving the image blank.
    fn clear_thumbnail(&self) -> Result<()>;

    /// Open the native file browser of the hidden input.
    fn open_file_picker(&self) -> Result<()>;

    /// Make the hidden input hold `files`, so a later read of the input sees what was dropped.
    fn sync_file_input(&self, files: &Self::Files) -> Result<()>;
}
