use std::{cell::RefCell, rc::Rc};

use futures_channel::oneshot;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{DragEvent, Event, File, FileList, FileReader};

use crate::{FileCollection, PreviewFile, ReadError};

/// A [`web_sys::File`] that can be previewed.
#[derive(Debug, Clone)]
pub struct WebFile(File);

impl WebFile {
    /// Wrap a browser file.
    pub fn new(file: File) -> Self {
        Self(file)
    }

    /// The underlying browser file.
    pub fn as_file(&self) -> &File {
        &self.0
    }
}

fn read_error(value: JsValue) -> ReadError {
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => ReadError::Failed(String::from(error.message())),
        None => ReadError::Failed(format!("{value:?}")),
    }
}

type ReadSender = Rc<RefCell<Option<oneshot::Sender<Result<JsValue, ReadError>>>>>;

fn send(sender: &ReadSender, result: Result<JsValue, ReadError>) {
    if let Some(sender) = sender.borrow_mut().take() {
        let _ = sender.send(result);
    }
}

#[async_trait::async_trait(?Send)]
impl PreviewFile for WebFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    fn mime_type(&self) -> Option<String> {
        let mime_type = self.0.type_();
        (!mime_type.is_empty()).then_some(mime_type)
    }

    async fn read_data_url(&self) -> Result<String, ReadError> {
        // Each read gets its own reader, so overlapping selections never share callbacks
        let reader = FileReader::new().map_err(read_error)?;
        let (tx, rx) = oneshot::channel();
        let tx: ReadSender = Rc::new(RefCell::new(Some(tx)));

        let on_load: Closure<dyn FnMut()> = Closure::new({
            let reader = reader.clone();
            let tx = tx.clone();
            move || send(&tx, reader.result().map_err(read_error))
        });
        let on_error: Closure<dyn FnMut()> = Closure::new({
            let reader = reader.clone();
            let tx = tx.clone();
            move || {
                let message = reader
                    .error()
                    .map(|error| error.message())
                    .unwrap_or_else(|| "unknown error".to_string());
                send(&tx, Err(ReadError::Failed(message)))
            }
        });
        let on_abort: Closure<dyn FnMut()> = Closure::new({
            let tx = tx.clone();
            move || send(&tx, Err(ReadError::Aborted))
        });

        reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
        reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        reader.set_onabort(Some(on_abort.as_ref().unchecked_ref()));
        reader.read_as_data_url(&self.0).map_err(read_error)?;

        let result = rx.await.unwrap_or(Err(ReadError::Aborted));

        reader.set_onload(None);
        reader.set_onerror(None);
        reader.set_onabort(None);

        result?.as_string().ok_or(ReadError::NotText)
    }
}

/// The files carried by a drop or held by a file input.
///
/// A drop without a data transfer, or an input without a file list, is an empty collection.
#[derive(Debug, Clone, Default)]
pub struct WebFileList(Option<FileList>);

impl WebFileList {
    /// Wrap a browser file list.
    pub fn new(files: Option<FileList>) -> Self {
        Self(files)
    }

    /// The files carried by a `drop` event.
    pub fn from_drag_event(event: &Event) -> Self {
        let files = event
            .dyn_ref::<DragEvent>()
            .and_then(|event| event.data_transfer())
            .and_then(|transfer| transfer.files());
        Self(files)
    }

    /// The underlying browser file list.
    pub fn as_file_list(&self) -> Option<&FileList> {
        self.0.as_ref()
    }
}

impl FileCollection for WebFileList {
    type File = WebFile;

    fn len(&self) -> usize {
        self.0.as_ref().map_or(0, |files| files.length() as usize)
    }

    fn get(&self, index: usize) -> Option<WebFile> {
        let index = u32::try_from(index).ok()?;
        self.0.as_ref()?.item(index).map(WebFile::new)
    }
}
