//! Article page enhancements: reading stats, table of contents, code
//! copy buttons and the print-based PDF export.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{console, Document, Element};

use crate::enhance::article::{
    build_toc, format_read_time, format_word_count, needs_page_break, print_document,
    read_time_minutes, word_count, HeadingInfo, HeadingLevel, COPIED_BUTTON_CLASS,
    COPIED_ICON_HTML, COPY_BUTTON_CLASS, COPY_ICON_HTML, COPY_RESET_DELAY_MS,
    EXPORT_RESTORE_DELAY_MS, PRINT_AUTO_CLOSE_MS, PRINT_STRIP_SELECTOR,
};
use crate::enhance::notify::Severity;

use super::{dom, notify};

const ARTICLE_SELECTOR: &str = ".article-content";
const EXPORT_BUTTON_ID: &str = "download-pdf";
const PRINT_BUTTON_ID: &str = "print-article";
const TOC_CONTAINER_ID: &str = "table-of-contents";
const READ_TIME_ID: &str = "article-read-time";
const WORD_COUNT_ID: &str = "article-word-count";

const EXPORT_BUSY_LABEL: &str = "<i class=\"fas fa-spinner fa-spin mr-2\"></i>Generating PDF...";
const EXPORT_FAILED_MESSAGE: &str =
    "Failed to generate PDF. Please try printing the page instead.";

pub fn setup(document: &Document) -> Result<(), JsValue> {
    setup_reading_stats(document)?;
    setup_table_of_contents(document)?;
    setup_copy_buttons(document)?;
    tag_code_languages(document)?;
    setup_print_button(document)?;
    setup_pdf_export(document)?;
    Ok(())
}

fn setup_reading_stats(document: &Document) -> Result<(), JsValue> {
    let Some(article) = document.query_selector(ARTICLE_SELECTOR)? else {
        return Ok(());
    };
    let words = word_count(&article.text_content().unwrap_or_default());

    if let Some(read_time) = document.get_element_by_id(READ_TIME_ID) {
        read_time.set_text_content(Some(&format_read_time(read_time_minutes(words))));
    }
    if let Some(count) = document.get_element_by_id(WORD_COUNT_ID) {
        count.set_text_content(Some(&format_word_count(words)));
    }
    Ok(())
}

fn setup_table_of_contents(document: &Document) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(TOC_CONTAINER_ID) else {
        return Ok(());
    };

    let selector = format!("{ARTICLE_SELECTOR} h2, {ARTICLE_SELECTOR} h3");
    let headings: Vec<Element> = dom::elements(&document.query_selector_all(&selector)?).collect();
    let infos: Vec<HeadingInfo> = headings
        .iter()
        .filter_map(|heading| {
            let level = HeadingLevel::parse(&heading.tag_name())?;
            let id = Some(heading.id()).filter(|id| !id.is_empty());
            Some((level, id, heading.text_content().unwrap_or_default()))
        })
        .collect();

    let toc = build_toc(&infos);
    if toc.is_empty() {
        return Ok(());
    }

    // Fallback ids have to land on the headings or the links dangle.
    for (heading, entry) in headings.iter().zip(&toc) {
        heading.set_id(&entry.id);
    }
    container.set_inner_html(&crate::enhance::article::render_toc(&toc));
    Ok(())
}

/// Wrap every code block and float a copy button over it. Clipboard
/// denial here is logged but deliberately silent in the UI.
fn setup_copy_buttons(document: &Document) -> Result<(), JsValue> {
    for pre in dom::elements(&document.query_selector_all("pre")?) {
        let wrapper = document.create_element("div")?;
        wrapper.set_class_name("relative group");

        let button = document.create_element("button")?;
        button.set_class_name(COPY_BUTTON_CLASS);
        button.set_inner_html(COPY_ICON_HTML);
        let _ = button.set_attribute("title", "Copy code");

        if let Some(parent) = pre.parent_node() {
            parent.insert_before(&wrapper, Some(&pre))?;
        }
        wrapper.append_child(&pre)?;
        wrapper.append_child(&button)?;

        let pre = pre.clone();
        let copy_button = button.clone();
        dom::on_click(&button, move |_| {
            let code = pre
                .query_selector("code")
                .ok()
                .flatten()
                .unwrap_or_else(|| pre.clone())
                .text_content()
                .unwrap_or_default();
            let copy_button = copy_button.clone();
            spawn_local(async move {
                match copy_to_clipboard(&code).await {
                    Ok(()) => flash_copied(&copy_button),
                    Err(err) => {
                        console::error_2(&JsValue::from_str("failed to copy code"), &err);
                    }
                }
            });
        })?;
    }
    Ok(())
}

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let clipboard = dom::window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

fn flash_copied(button: &Element) {
    button.set_class_name(COPIED_BUTTON_CLASS);
    button.set_inner_html(COPIED_ICON_HTML);
    let button = button.clone();
    Timeout::new(COPY_RESET_DELAY_MS, move || {
        button.set_class_name(COPY_BUTTON_CLASS);
        button.set_inner_html(COPY_ICON_HTML);
    })
    .forget();
}

/// Mirror each block's `language-*` class into `data-language` so the
/// stylesheet can label it.
fn tag_code_languages(document: &Document) -> Result<(), JsValue> {
    for code in dom::elements(&document.query_selector_all("pre code")?) {
        let class_name = code.class_name();
        if let Some(language) = class_name
            .split_whitespace()
            .find_map(|class| class.strip_prefix("language-"))
        {
            let _ = code.set_attribute("data-language", language);
        }
    }
    Ok(())
}

fn setup_print_button(document: &Document) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id(PRINT_BUTTON_ID) else {
        return Ok(());
    };
    dom::on_click(&button, move |_| {
        if let Ok(window) = dom::window() {
            let _ = window.print();
        }
    })?;
    Ok(())
}

/// The export clones the article into a print-styled auxiliary window.
/// Whatever happens, the trigger gets its label back after a fixed
/// delay.
fn setup_pdf_export(document: &Document) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id(EXPORT_BUTTON_ID) else {
        return Ok(());
    };

    let document = document.clone();
    let export_button = button.clone();
    dom::on_click(&button, move |event| {
        event.prevent_default();

        let original_label = export_button.inner_html();
        export_button.set_inner_html(EXPORT_BUSY_LABEL);

        if let Err(err) = export_article(&document) {
            console::error_2(&JsValue::from_str("PDF generation failed"), &err);
            notify::show(&document, EXPORT_FAILED_MESSAGE, Severity::Error);
        }

        let export_button = export_button.clone();
        Timeout::new(EXPORT_RESTORE_DELAY_MS, move || {
            export_button.set_inner_html(&original_label);
        })
        .forget();
    })?;
    Ok(())
}

fn export_article(document: &Document) -> Result<(), JsValue> {
    let article = document
        .query_selector(ARTICLE_SELECTOR)?
        .ok_or_else(|| JsValue::from_str("no article content on this page"))?;

    let clone = article
        .clone_node_with_deep(true)?
        .dyn_into::<Element>()
        .map_err(|_| JsValue::from_str("article clone is not an element"))?;

    for chrome in dom::elements(&clone.query_selector_all(PRINT_STRIP_SELECTOR)?) {
        chrome.remove();
    }

    for (index, section) in dom::elements(&clone.query_selector_all(".section")?).enumerate() {
        if !needs_page_break(index) {
            continue;
        }
        let marker = document.create_element("div")?;
        marker.set_class_name("page-break");
        if let Some(parent) = section.parent_node() {
            parent.insert_before(&marker, Some(&section))?;
        }
    }

    let window = dom::window()?;
    let print_window = window
        .open_with_url_and_target("", "_blank")?
        .ok_or_else(|| JsValue::from_str("popup blocked"))?;
    let print_doc = print_window
        .document()
        .ok_or_else(|| JsValue::from_str("print window has no document"))?;

    let html = print_document(&document.title(), &clone.inner_html());
    if let Some(root) = print_doc.document_element() {
        root.set_inner_html(&html);
    }

    print_window.print()?;
    Timeout::new(PRINT_AUTO_CLOSE_MS, move || {
        let _ = print_window.close();
    })
    .forget();

    Ok(())
}
