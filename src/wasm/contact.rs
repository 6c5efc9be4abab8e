//! Contact form: hands the message to the email relay and reflects the
//! outcome on the submit button.

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlFormElement};

use super::chrome::Modal;
use super::dom;
use crate::config::{MotionConfig, RelayConfig};
use crate::contact::{ButtonView, ContactMessage, SubmitButton};
use crate::error::FxError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = send)]
    fn relay_send(
        service_id: &str,
        template_id: &str,
        params: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

async fn send(relay: &RelayConfig, message: &ContactMessage) -> Result<(), FxError> {
    let params = js_sys::Object::new();
    for (key, value) in message.fields() {
        js_sys::Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(value))
            .map_err(|e| FxError::from_js(&e))?;
    }
    let promise = relay_send(&relay.service_id, &relay.template_id, &params)
        .map_err(|e| FxError::Relay(format!("{e:?}")))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| FxError::Relay(format!("{e:?}")))
}

fn render(button: &HtmlElement, view: &ButtonView) {
    button.set_inner_text(&view.label);
    let _ = dom::set_style(button, "background-color", view.background.unwrap_or(""));
    let _ = dom::set_style(button, "color", view.color.unwrap_or(""));
    let _ = dom::set_style(button, "opacity", &view.opacity.to_string());
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(view.disabled);
    }
}

fn read_message(document: &Document) -> ContactMessage {
    ContactMessage {
        from_name: dom::field_value(document, "name"),
        from_email: dom::field_value(document, "email"),
        phone: dom::field_value(document, "phone"),
        message: dom::field_value(document, "message"),
        timestamp: js_sys::Date::new_0()
            .to_locale_string("en-US", &JsValue::UNDEFINED)
            .into(),
    }
}

pub fn install(
    document: &Document,
    config: &MotionConfig,
    modal: Option<Rc<Modal>>,
) -> Result<(), JsValue> {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, "contact-form") else {
        return Ok(());
    };
    let Some(button) = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("contact form has no submit button; submissions disabled");
        return Ok(());
    };

    let state = Rc::new(RefCell::new(SubmitButton::new(button.inner_text())));
    let relay = Rc::new(config.relay.clone());
    let document = document.clone();
    let target = form.clone();

    dom::listen(&form, "submit", move |e: web_sys::Event| {
        e.prevent_default();
        let Some(view) = state.borrow_mut().begin() else {
            return;
        };
        render(&button, &view);

        let message = read_message(&document);
        let (state, relay, modal) = (state.clone(), relay.clone(), modal.clone());
        let (button, form) = (button.clone(), target.clone());
        spawn_local(async move {
            let result = send(&relay, &message).await;
            match &result {
                Ok(()) => info!("contact message relayed"),
                Err(err) => error!("email error: {err}"),
            }

            let outcome = state.borrow_mut().finish(&result);
            render(&button, &outcome.view);
            if outcome.reset_form {
                form.reset();
            }

            let close_modal = outcome.close_modal;
            let revert = dom::after(outcome.revert_after_ms, move || {
                if close_modal {
                    if let Some(modal) = &modal {
                        modal.close();
                    }
                }
                let view = state.borrow_mut().revert();
                render(&button, &view);
            });
            if let Err(err) = revert {
                error!("could not schedule button reset: {err:?}");
            }
        });
    })
}
