//! Mobile menu and smooth anchor scrolling.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::dom;

const MENU_BUTTON_ID: &str = "mobile-menu-button";
const MENU_ID: &str = "mobile-menu";
const ICON_OPEN: &str = "fa-bars";
const ICON_CLOSE: &str = "fa-times";

pub fn setup(document: &Document) -> Result<(), JsValue> {
    setup_mobile_menu(document)?;
    setup_smooth_scrolling(document)?;
    Ok(())
}

fn setup_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let (Some(button), Some(menu)) = (
        document.get_element_by_id(MENU_BUTTON_ID),
        document.get_element_by_id(MENU_ID),
    ) else {
        return Ok(());
    };

    {
        let toggle_button = button.clone();
        let menu = menu.clone();
        dom::on_click(&button, move |event| {
            event.stop_propagation();
            let _ = menu.class_list().toggle("hidden");
            toggle_menu_icon(&toggle_button);
        })?;
    }

    // Clicking anywhere outside the menu or its button closes the menu.
    {
        let button = button.clone();
        let menu = menu.clone();
        dom::on_click(document, move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |node: &Element| node.contains(target.as_ref());
            if !inside(&menu) && !inside(&button) {
                close_menu(&menu, &button);
            }
        })?;
    }

    // So do the menu's own links.
    for link in dom::elements(&menu.query_selector_all("a")?) {
        let button = button.clone();
        let menu = menu.clone();
        dom::on_click(&link, move |_| close_menu(&menu, &button))?;
    }

    Ok(())
}

fn close_menu(menu: &Element, button: &Element) {
    let _ = menu.class_list().add_1("hidden");
    reset_menu_icon(button);
}

fn toggle_menu_icon(button: &Element) {
    let Ok(Some(icon)) = button.query_selector("i") else {
        return;
    };
    let classes = icon.class_list();
    if classes.contains(ICON_OPEN) {
        let _ = classes.remove_1(ICON_OPEN);
        let _ = classes.add_1(ICON_CLOSE);
    } else {
        let _ = classes.remove_1(ICON_CLOSE);
        let _ = classes.add_1(ICON_OPEN);
    }
}

fn reset_menu_icon(button: &Element) {
    if let Ok(Some(icon)) = button.query_selector("i") {
        let _ = icon.class_list().remove_1(ICON_CLOSE);
        let _ = icon.class_list().add_1(ICON_OPEN);
    }
}

/// In-page anchors scroll smoothly instead of jumping, closing the
/// mobile menu first. The href is read at click time so late id edits
/// still resolve.
fn setup_smooth_scrolling(document: &Document) -> Result<(), JsValue> {
    for anchor in dom::elements(&document.query_selector_all("a[href^='#']")?) {
        let document = document.clone();
        let anchor_el = anchor.clone();
        dom::on_click(&anchor, move |event| {
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a section link.
            if href.len() < 2 {
                return;
            }
            let Ok(Some(target)) = document.query_selector(&href) else {
                return;
            };

            event.prevent_default();
            if let (Some(menu), Some(button)) = (
                document.get_element_by_id(MENU_ID),
                document.get_element_by_id(MENU_BUTTON_ID),
            ) {
                close_menu(&menu, &button);
            }

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}
