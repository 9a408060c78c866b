//! Drives the typewriter state machine against the `#typewriter`
//! element with real timers.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::enhance::typewriter::{parse_phrase_list, Typewriter, BASE_DELAY_MS};

const TARGET_ID: &str = "typewriter";

/// Stops the typing loop when asked, or when dropped, so the timer
/// chain cannot outlive its owner.
pub struct TypewriterHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TypewriterHandle {
    pub fn stop(&self) {
        self.cancelled.set(true);
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start(document: &Document) -> Result<Option<TypewriterHandle>, JsValue> {
    let Some(target) = document.get_element_by_id(TARGET_ID) else {
        return Ok(None);
    };

    // Malformed or missing data-texts falls through to the machine's
    // built-in phrase list.
    let phrases = target
        .get_attribute("data-texts")
        .as_deref()
        .and_then(parse_phrase_list)
        .unwrap_or_default();
    let mut machine = Typewriter::new(phrases, BASE_DELAY_MS);

    let cancelled = Rc::new(Cell::new(false));
    let flag = Rc::clone(&cancelled);
    spawn_local(async move {
        loop {
            if flag.get() {
                break;
            }
            let step = machine.tick();
            target.set_text_content(Some(&step.text));
            TimeoutFuture::new(step.delay_ms).await;
        }
    });

    Ok(Some(TypewriterHandle { cancelled }))
}
