/// A specialized result for mounting and driving a drop zone.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while binding the widget to the page or writing to the DOM.
///
/// An empty drop, a non-image file, or a failed read are not errors: they leave the widget untouched or the
/// thumbnail blank.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There is no global `window`, usually because the code is not running in a browser.
    #[error("no global `window` exists")]
    NoWindow,

    /// The window has no document attached.
    #[error("the window has no document")]
    NoDocument,

    /// The document has no `<body>` to suppress default drag handling on.
    #[error("the document has no body")]
    NoBody,

    /// A required element is not in the document.
    #[error("no element with id `{id}` exists in the document")]
    MissingElement {
        /// The id that was looked up.
        id: String,
    },

    /// The element exists but is not the kind the widget needs.
    #[error("element `{id}` is not an {expected}")]
    WrongElementType {
        /// The id that was looked up.
        id: String,
        /// The interface the element was expected to implement.
        expected: &'static str,
    },

    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Js(String),
}

#[cfg(feature = "web")]
impl Error {
    pub(crate) fn from_js(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        match value.dyn_ref::<js_sys::Error>() {
            Some(error) => Error::Js(String::from(error.message())),
            None => Error::Js(format!("{value:?}")),
        }
    }
}
