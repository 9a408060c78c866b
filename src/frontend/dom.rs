//! Small web-sys helpers shared by the component modules.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, NodeList, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document on window"))
}

/// Iterate a `NodeList` as elements, skipping non-element nodes.
pub fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length()).filter_map(|i| list.get(i).and_then(|node| node.dyn_into::<Element>().ok()))
}

/// Attach a click handler for the page lifetime. The closure is leaked
/// on purpose; these listeners are never detached.
pub fn on_click(
    target: &EventTarget,
    handler: impl FnMut(MouseEvent) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Set an inline style property, ignoring elements without a style
/// declaration (non-HTML elements).
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Read an inline style property; empty string when unset.
pub fn get_style(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value(property).ok())
        .unwrap_or_default()
}
