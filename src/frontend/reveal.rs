//! IntersectionObserver adapters for one-shot reveals.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList,
};

use crate::enhance::reveal::{
    card_entry_transition, RevealKind, CARD_REVEAL_CLASS, CARD_ROOT_MARGIN, REVEAL_THRESHOLD,
    SKILL_BAR_FILL_DELAY_MS, SKILL_BAR_THRESHOLD,
};

use super::dom;

pub fn setup(document: &Document) -> Result<(), JsValue> {
    prepare_cards(document)?;
    observe_marked_elements(document)?;
    observe_cards(document)?;
    observe_skill_bars(document)?;
    Ok(())
}

/// Cards start hidden and offset, each with a staggered transition, so
/// the reveal class animates them in sequence.
fn prepare_cards(document: &Document) -> Result<(), JsValue> {
    for (index, card) in dom::elements(&document.query_selector_all(".card-hover")?).enumerate() {
        dom::set_style(&card, "opacity", "0");
        dom::set_style(&card, "transform", "translateY(30px)");
        dom::set_style(&card, "transition", &card_entry_transition(index));
    }
    Ok(())
}

/// Elements tagged `data-animate` snap to their end state on first
/// intersection; the tag is removed so they are never re-processed.
fn observe_marked_elements(document: &Document) -> Result<(), JsValue> {
    let observer = one_shot_observer(
        |target| {
            if let Some(kind) = target
                .get_attribute("data-animate")
                .as_deref()
                .and_then(RevealKind::parse)
            {
                for (property, value) in kind.end_state() {
                    dom::set_style(target, property, value);
                }
            }
            let _ = target.remove_attribute("data-animate");
        },
        REVEAL_THRESHOLD,
        None,
    )?;
    observe_all(&observer, &document.query_selector_all("[data-animate]")?);
    Ok(())
}

fn observe_cards(document: &Document) -> Result<(), JsValue> {
    let observer = one_shot_observer(
        |target| {
            let _ = target.class_list().add_1(CARD_REVEAL_CLASS);
        },
        REVEAL_THRESHOLD,
        Some(CARD_ROOT_MARGIN),
    )?;
    observe_all(
        &observer,
        &document.query_selector_all(".card-hover, .skill-bar-container")?,
    );
    Ok(())
}

/// Skill bars capture their authored width, collapse to zero and fill
/// back after a short delay, producing a directional sweep.
fn observe_skill_bars(document: &Document) -> Result<(), JsValue> {
    let observer = one_shot_observer(
        |target| {
            let target_width = dom::get_style(target, "width");
            dom::set_style(target, "width", "0%");
            let bar = target.clone();
            Timeout::new(SKILL_BAR_FILL_DELAY_MS, move || {
                dom::set_style(&bar, "width", &target_width);
            })
            .forget();
        },
        SKILL_BAR_THRESHOLD,
        None,
    )?;
    observe_all(&observer, &document.query_selector_all(".skill-bar")?);
    Ok(())
}

/// Observer that fires `reveal` once per element and then unobserves
/// it. Batch order within one callback is whatever the browser
/// delivers; nothing here depends on it.
fn one_shot_observer(
    reveal: impl Fn(&web_sys::Element) + 'static,
    threshold: f64,
    root_margin: Option<&str>,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            for entry in entries {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                reveal(&target);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

fn observe_all(observer: &IntersectionObserver, list: &NodeList) {
    for element in dom::elements(list) {
        observer.observe(&element);
    }
}
