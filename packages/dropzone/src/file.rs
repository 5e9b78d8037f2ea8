use crate::format;

/// The metadata of the file currently being previewed.
///
/// A new selection replaces it wholesale. Contents are never stored here; they are read on demand through
/// [`PreviewFile::read_data_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// The file name as reported by the browser, without any path.
    pub name: String,
    /// The size of the file in bytes.
    pub size_bytes: u64,
    /// The MIME type reported by the browser, if it reported one.
    pub mime_type: Option<String>,
}

impl SelectedFile {
    /// Create the metadata for a file with no known MIME type.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: None,
        }
    }

    /// Attach a MIME type. Browsers report unknown types as the empty string, which maps to `None`.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        self.mime_type = (!mime_type.is_empty()).then_some(mime_type);
        self
    }

    /// The size rounded to whole kilobytes.
    pub fn size_kb(&self) -> u64 {
        format::size_in_kb(self.size_bytes)
    }

    /// The text written into the metadata label.
    pub fn info_label(&self) -> String {
        format::file_info(&self.name, self.size_bytes)
    }
}

/// An error produced while reading a file's contents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// The reader reported an error, usually because the file is gone or unreadable.
    #[error("failed to read file: {0}")]
    Failed(String),

    /// The read was aborted before it produced a result.
    #[error("file read was aborted")]
    Aborted,

    /// The reader finished but its result was not a string.
    #[error("file reader did not produce a data url")]
    NotText,
}

/// A single file that can be previewed.
#[async_trait::async_trait(?Send)]
pub trait PreviewFile {
    /// The file name, without any path.
    fn name(&self) -> String;

    /// The size of the file in bytes.
    fn size(&self) -> u64;

    /// The MIME type, if known.
    fn mime_type(&self) -> Option<String> {
        None
    }

    /// Read the whole file as a `data:<mime>;base64,<payload>` URL.
    async fn read_data_url(&self) -> Result<String, ReadError>;

    /// Snapshot the metadata of this file.
    fn metadata(&self) -> SelectedFile {
        let file = SelectedFile::new(self.name(), self.size());
        match self.mime_type() {
            Some(mime_type) => file.with_mime_type(mime_type),
            None => file,
        }
    }
}

/// An ordered collection of files, like the `FileList` carried by a drop or a file input.
pub trait FileCollection {
    /// The file type stored in the collection.
    type File: PreviewFile;

    /// The number of files in the collection.
    fn len(&self) -> usize;

    /// Get the file at `index`.
    fn get(&self, index: usize) -> Option<Self::File>;

    /// Whether the collection holds no files.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first file. Any others are ignored by the widget.
    fn first(&self) -> Option<Self::File> {
        self.get(0)
    }
}

impl<F: PreviewFile + Clone> FileCollection for Vec<F> {
    type File = F;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<F> {
        self.as_slice().get(index).cloned()
    }
}

/// Extract the media type from a data URL.
///
/// ```rust
/// use dropzone::data_url_mime;
///
/// assert_eq!(data_url_mime("data:image/png;base64,iVBORw0KGgo="), Some("image/png"));
/// assert_eq!(data_url_mime("data:,hello"), None);
/// assert_eq!(data_url_mime("https://example.com/cat.png"), None);
/// ```
pub fn data_url_mime(url: &str) -> Option<&str> {
    let (header, _payload) = url.strip_prefix("data:")?.split_once(',')?;
    header.split(';').next().filter(|mime| !mime.is_empty())
}
