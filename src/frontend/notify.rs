//! Transient corner banners. Each banner is independent; overlapping
//! banners are an accepted limitation, not coordinated.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{console, Document};

use crate::enhance::notify::{banner_class, banner_html, Severity, DISPLAY_MS, EXIT_MS};

use super::dom;

pub fn show(document: &Document, message: &str, severity: Severity) {
    if let Err(err) = create_banner(document, message, severity) {
        console::error_2(&JsValue::from_str("notification failed"), &err);
    }
}

fn create_banner(document: &Document, message: &str, severity: Severity) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    let banner = document.create_element("div")?;
    banner.set_class_name(&banner_class(severity));
    banner.set_inner_html(&banner_html(message, severity));
    body.append_child(&banner)?;

    Timeout::new(DISPLAY_MS, move || {
        dom::set_style(&banner, "transform", "translateX(100%)");
        Timeout::new(EXIT_MS, move || banner.remove()).forget();
    })
    .forget();

    Ok(())
}
