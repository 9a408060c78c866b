//! Contact form interception with a stubbed submission call.

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Document, Event, FormData, HtmlButtonElement, HtmlFormElement};

use crate::enhance::notify::Severity;

use super::notify;

const FORM_ID: &str = "contact-form";
const BUSY_LABEL: &str = "<i class=\"fas fa-spinner fa-spin mr-2\"></i>Sending...";
const SUCCESS_MESSAGE: &str = "Message sent successfully!";
const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Matches the stand-in latency of a real submission round trip.
const STUB_LATENCY_MS: u32 = 2_000;

#[derive(Serialize)]
struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

pub fn setup(document: &Document) -> Result<(), JsValue> {
    let Some(form) = document.get_element_by_id(FORM_ID) else {
        return Ok(());
    };
    let form: HtmlFormElement = form
        .dyn_into()
        .map_err(|_| JsValue::from_str("contact-form is not a form element"))?;

    let document = document.clone();
    let handler_form = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let document = document.clone();
        let form = handler_form.clone();
        spawn_local(async move {
            if let Err(err) = handle_submission(&document, &form).await {
                console::error_2(&JsValue::from_str("contact form failed"), &err);
            }
        });
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}

async fn handle_submission(document: &Document, form: &HtmlFormElement) -> Result<(), JsValue> {
    let message = capture_fields(form)?;

    let submit_button = form
        .query_selector("button[type='submit']")?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let original_label = submit_button.as_ref().map(|b| b.inner_html());

    if let Some(button) = submit_button.as_ref() {
        button.set_inner_html(BUSY_LABEL);
        button.set_disabled(true);
    }

    match send_message(&message).await {
        Ok(()) => {
            form.reset();
            notify::show(document, SUCCESS_MESSAGE, Severity::Success);
        }
        Err(err) => {
            console::error_2(&JsValue::from_str("message submission rejected"), &err);
            notify::show(document, FAILURE_MESSAGE, Severity::Error);
        }
    }

    // Whatever the outcome, the control comes back.
    if let (Some(button), Some(label)) = (submit_button.as_ref(), original_label) {
        button.set_inner_html(&label);
        button.set_disabled(false);
    }

    Ok(())
}

fn capture_fields(form: &HtmlFormElement) -> Result<ContactMessage, JsValue> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactMessage {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    })
}

/// Placeholder for a real endpoint call; logs the payload it would
/// have sent after a request-shaped delay.
async fn send_message(message: &ContactMessage) -> Result<(), JsValue> {
    TimeoutFuture::new(STUB_LATENCY_MS).await;
    let payload = serde_json::to_string(message)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    console::log_2(
        &JsValue::from_str("contact payload"),
        &JsValue::from_str(&payload),
    );
    Ok(())
}
