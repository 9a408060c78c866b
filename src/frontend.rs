//! Browser wiring for the static site.
//!
//! Each submodule enhances one part of the page and silently no-ops
//! when its DOM target is absent, so the same bundle serves the
//! portfolio index and the article pages. The composition root owns
//! the long-lived handles instead of hanging them off `window`.

mod article;
mod dom;
mod form;
mod nav;
mod notify;
mod reveal;
mod scroll;
mod typewriter;

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::console;

/// Page-level owner of everything that outlives the bootstrap call.
/// Dropping it cancels the typewriter loop.
pub struct SiteApp {
    #[allow(dead_code)]
    typewriter: Option<typewriter::TypewriterHandle>,
}

thread_local! {
    // Keeps the app alive for the page lifetime; replacing it tears the
    // previous instance down.
    static APP: RefCell<Option<SiteApp>> = const { RefCell::new(None) };
}

pub fn run() {
    match mount() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(err) => console::error_2(&JsValue::from_str("folio bootstrap failed"), &err),
    }
}

fn mount() -> Result<SiteApp, JsValue> {
    let document = dom::document()?;

    nav::setup(&document)?;
    scroll::setup(&document)?;
    reveal::setup(&document)?;
    article::setup(&document)?;
    form::setup(&document)?;
    let typewriter = typewriter::start(&document)?;

    console::log_1(&JsValue::from_str("folio enhancements initialized"));

    Ok(SiteApp { typewriter })
}
