use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement};

use super::WebFileList;
use crate::{Config, DropZoneView, Error, Result};

pub(crate) fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(Error::NoWindow)?
        .document()
        .ok_or(Error::NoDocument)
}

fn element_by_id<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement { id: id.to_string() })?
        .dyn_into::<T>()
        .map_err(|_| Error::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

fn set_display(element: &HtmlElement, value: &str) -> Result<()> {
    element
        .style()
        .set_property("display", value)
        .map_err(Error::from_js)
}

/// The real DOM elements a drop zone drives.
pub struct WebView {
    drop_area: HtmlElement,
    file_input: HtmlInputElement,
    upload_button: Option<Element>,
    preview_area: HtmlElement,
    file_info: Element,
    preview_image: HtmlImageElement,
    hover_class: String,
}

impl WebView {
    /// Collect the widget's elements from an already-resolved set of DOM nodes.
    pub fn new(
        drop_area: HtmlElement,
        file_input: HtmlInputElement,
        upload_button: Option<Element>,
        preview_area: HtmlElement,
        file_info: Element,
        preview_image: HtmlImageElement,
        hover_class: impl Into<String>,
    ) -> Self {
        Self {
            drop_area,
            file_input,
            upload_button,
            preview_area,
            file_info,
            preview_image,
            hover_class: hover_class.into(),
        }
    }

    /// Look up every element named in `config`.
    ///
    /// The upload button is optional: it is never wired to anything, so a page without one is fine.
    pub fn from_document(document: &Document, config: &Config) -> Result<Self> {
        let upload_button = document.get_element_by_id(&config.upload_button_id);
        if upload_button.is_none() {
            tracing::debug!(id = %config.upload_button_id, "no upload button on the page");
        }

        Ok(Self::new(
            element_by_id(document, &config.drop_area_id, "HtmlElement")?,
            element_by_id(document, &config.file_input_id, "HtmlInputElement")?,
            upload_button,
            element_by_id(document, &config.preview_area_id, "HtmlElement")?,
            element_by_id(document, &config.file_info_id, "Element")?,
            element_by_id(document, &config.preview_image_id, "HtmlImageElement")?,
            config.hover_class.clone(),
        ))
    }

    /// The drop target.
    pub fn drop_area(&self) -> &HtmlElement {
        &self.drop_area
    }

    /// The hidden file input.
    pub fn file_input(&self) -> &HtmlInputElement {
        &self.file_input
    }

    /// The upload button. It has no handler attached.
    pub fn upload_button(&self) -> Option<&Element> {
        self.upload_button.as_ref()
    }

    /// The preview container.
    pub fn preview_area(&self) -> &HtmlElement {
        &self.preview_area
    }

    /// The metadata label.
    pub fn file_info(&self) -> &Element {
        &self.file_info
    }

    /// The thumbnail image.
    pub fn preview_image(&self) -> &HtmlImageElement {
        &self.preview_image
    }

    /// The files currently held by the file input.
    pub fn file_input_files(&self) -> WebFileList {
        WebFileList::new(self.file_input.files())
    }
}

impl DropZoneView for WebView {
    type Files = WebFileList;

    fn set_hovered(&self, hovered: bool) -> Result<()> {
        let classes = self.drop_area.class_list();
        match hovered {
            true => classes.add_1(&self.hover_class),
            false => classes.remove_1(&self.hover_class),
        }
        .map_err(Error::from_js)
    }

    fn set_prompt_visible(&self, visible: bool) -> Result<()> {
        // an empty value falls back to whatever the stylesheet says
        set_display(&self.drop_area, if visible { "" } else { "none" })
    }

    fn set_preview_visible(&self, visible: bool) -> Result<()> {
        set_display(&self.preview_area, if visible { "block" } else { "none" })
    }

    fn set_file_info(&self, text: &str) -> Result<()> {
        self.file_info.set_text_content(Some(text));
        Ok(())
    }

    fn set_thumbnail_src(&self, src: &str) -> Result<()> {
        self.preview_image.set_src(src);
        Ok(())
    }

    fn clear_thumbnail(&self) -> Result<()> {
        self.preview_image
            .remove_attribute("src")
            .map_err(Error::from_js)
    }

    fn open_file_picker(&self) -> Result<()> {
        self.file_input.click();
        Ok(())
    }

    fn sync_file_input(&self, files: &WebFileList) -> Result<()> {
        if let Some(files) = files.as_file_list() {
            self.file_input.set_files(Some(files));
        }
        Ok(())
    }
}
