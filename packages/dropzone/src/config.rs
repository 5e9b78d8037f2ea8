/// The id of the element that accepts drops and doubles as the click-to-browse surface.
pub const DEFAULT_DROP_AREA_ID: &str = "drop-area";
/// The id of the hidden `<input type="file">`.
pub const DEFAULT_FILE_INPUT_ID: &str = "fileElem";
/// The id of the upload button. It is looked up but never wired to a handler.
pub const DEFAULT_UPLOAD_BUTTON_ID: &str = "upload-button";
/// The id of the container shown once a file is selected.
pub const DEFAULT_PREVIEW_AREA_ID: &str = "preview-area";
/// The id of the element receiving the `File: .., Size: .. KB` text.
pub const DEFAULT_FILE_INFO_ID: &str = "file-info";
/// The id of the `<img>` receiving the data URL.
pub const DEFAULT_PREVIEW_IMAGE_ID: &str = "preview-image";
/// The class toggled on the drop area while something is dragged over it.
pub const DEFAULT_HOVER_CLASS: &str = "hover";

/// Configuration for mounting a drop zone onto an existing page.
///
/// Every element is found by id. The defaults match the stock markup, so most pages only need
/// [`Config::new`].
///
/// # Example
///
/// ```rust
/// use dropzone::Config;
///
/// let config = Config::new()
///     .with_drop_area_id("dropper")
///     .with_hover_class("is-dragging");
///
/// assert_eq!(config.drop_area_id(), "dropper");
/// assert_eq!(config.file_input_id(), "fileElem");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) drop_area_id: String,
    pub(crate) file_input_id: String,
    pub(crate) upload_button_id: String,
    pub(crate) preview_area_id: String,
    pub(crate) file_info_id: String,
    pub(crate) preview_image_id: String,
    pub(crate) hover_class: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drop_area_id: DEFAULT_DROP_AREA_ID.to_string(),
            file_input_id: DEFAULT_FILE_INPUT_ID.to_string(),
            upload_button_id: DEFAULT_UPLOAD_BUTTON_ID.to_string(),
            preview_area_id: DEFAULT_PREVIEW_AREA_ID.to_string(),
            file_info_id: DEFAULT_FILE_INFO_ID.to_string(),
            preview_image_id: DEFAULT_PREVIEW_IMAGE_ID.to_string(),
            hover_class: DEFAULT_HOVER_CLASS.to_string(),
        }
    }
}

impl Config {
    /// Create a new config with the default element ids and hover class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id of the drop target.
    pub fn with_drop_area_id(mut self, id: impl Into<String>) -> Self {
        self.drop_area_id = id.into();
        self
    }

    /// Set the id of the hidden file input.
    pub fn with_file_input_id(mut self, id: impl Into<String>) -> Self {
        self.file_input_id = id.into();
        self
    }

    /// Set the id of the upload button.
    pub fn with_upload_button_id(mut self, id: impl Into<String>) -> Self {
        self.upload_button_id = id.into();
        self
    }

    /// Set the id of the preview container.
    pub fn with_preview_area_id(mut self, id: impl Into<String>) -> Self {
        self.preview_area_id = id.into();
        self
    }

    /// Set the id of the metadata label.
    pub fn with_file_info_id(mut self, id: impl Into<String>) -> Self {
        self.file_info_id = id.into();
        self
    }

    /// Set the id of the thumbnail image.
    pub fn with_preview_image_id(mut self, id: impl Into<String>) -> Self {
        self.preview_image_id = id.into();
        self
    }

    /// Set the class added to the drop area during a drag.
    pub fn with_hover_class(mut self, class: impl Into<String>) -> Self {
        self.hover_class = class.into();
        self
    }

    /// The id of the drop target.
    pub fn drop_area_id(&self) -> &str {
        &self.drop_area_id
    }

    /// The id of the hidden file input.
    pub fn file_input_id(&self) -> &str {
        &self.file_input_id
    }

    /// The id of the upload button.
    pub fn upload_button_id(&self) -> &str {
        &self.upload_button_id
    }

    /// The id of the preview container.
    pub fn preview_area_id(&self) -> &str {
        &self.preview_area_id
    }

    /// The id of the metadata label.
    pub fn file_info_id(&self) -> &str {
        &self.file_info_id
    }

    /// The id of the thumbnail image.
    pub fn preview_image_id(&self) -> &str {
        &self.preview_image_id
    }

    /// The class added to the drop area during a drag.
    pub fn hover_class(&self) -> &str {
        &self.hover_class
    }
}
