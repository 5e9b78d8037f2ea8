#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod config;
mod error;
mod file;
mod format;
mod state;
mod view;
mod zone;

#[cfg(feature = "web")]
pub mod web;

pub use config::Config;
pub use error::{Error, Result};
pub use file::{data_url_mime, FileCollection, PreviewFile, ReadError, SelectedFile};
pub use format::{file_info, size_in_kb};
pub use state::{SelectionCounter, SelectionToken, WidgetState};
pub use view::{DragEventKind, DropZoneView};
pub use zone::{DropZone, FileOf, PendingPreview};
