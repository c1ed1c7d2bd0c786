//! Small DOM lookup helpers

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::{PageError, PageResult};

pub fn window() -> PageResult<Window> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> PageResult<Document> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// Required element by id
pub fn element(document: &Document, id: &str) -> PageResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::missing(id))
}

/// Every element matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> PageResult<Vec<Element>> {
    let list = document.query_selector_all(selector).map_err(PageError::js)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Show or hide an element through its inline `display` style
pub fn set_displayed(element: &Element, displayed: bool) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let value = if displayed { "block" } else { "none" };
        let _ = el.style().set_property("display", value);
    }
}

/// Add or remove `class` on `element`
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Set or clear an attribute; `None` writes an empty value
pub fn set_attr(element: &Element, name: &str, value: Option<&str>) {
    let _ = element.set_attribute(name, value.unwrap_or(""));
}
