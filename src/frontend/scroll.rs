//! Scroll-driven effects: navbar chrome, reading progress, parallax.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element};

use crate::enhance::scroll::{nav_is_scrolled, parallax_offset, progress_percent, NAV_SCROLLED_CLASSES};

use super::dom;

const PROGRESS_BAR_ID: &str = "scroll-progress";
const PROGRESS_BAR_CLASS: &str =
    "fixed top-0 left-0 h-1 bg-gradient-to-r from-blue-500 to-green-500 z-50 transition-all duration-100 shadow-lg";

pub fn setup(document: &Document) -> Result<(), JsValue> {
    let window = dom::window()?;
    let nav = document.query_selector("nav")?;
    let parallax_layers: Vec<Element> =
        dom::elements(&document.query_selector_all("[data-parallax]")?).collect();
    let progress_bar = ensure_progress_bar(document)?;
    let root = document.document_element();

    let win = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let scroll_top = win.scroll_y().unwrap_or(0.0);

        if let Some(nav) = nav.as_ref() {
            apply_nav_state(nav, scroll_top);
        }

        if let (Some(bar), Some(root)) = (progress_bar.as_ref(), root.as_ref()) {
            let viewport = win
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let percent = progress_percent(scroll_top, f64::from(root.scroll_height()), viewport);
            dom::set_style(bar, "width", &format!("{percent}%"));
        }

        let offset = parallax_offset(scroll_top);
        for layer in &parallax_layers {
            dom::set_style(layer, "transform", &format!("translateY({offset}px)"));
        }
    }) as Box<dyn FnMut()>);

    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    Ok(())
}

fn apply_nav_state(nav: &Element, scroll_top: f64) {
    let classes = nav.class_list();
    for class in NAV_SCROLLED_CLASSES {
        if nav_is_scrolled(scroll_top) {
            let _ = classes.add_1(class);
        } else {
            let _ = classes.remove_1(class);
        }
    }
}

/// The progress bar is injected rather than expected in markup; pages
/// without a body (degenerate documents) simply go without one.
fn ensure_progress_bar(document: &Document) -> Result<Option<Element>, JsValue> {
    if let Some(existing) = document.get_element_by_id(PROGRESS_BAR_ID) {
        return Ok(Some(existing));
    }
    let Some(body) = document.body() else {
        return Ok(None);
    };

    let bar = document.create_element("div")?;
    bar.set_id(PROGRESS_BAR_ID);
    bar.set_class_name(PROGRESS_BAR_CLASS);
    dom::set_style(&bar, "width", "0%");
    body.append_child(&bar)?;
    Ok(Some(bar))
}
