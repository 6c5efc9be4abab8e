//! Thin helpers over `web-sys` shared by the adapters.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::capability::Capability;
use crate::config::Breakpoints;
use crate::rate::Debounce;

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document.body().ok_or_else(|| JsValue::from_str("no body"))
}

/// First element matching `selector`, if it is an `HtmlElement`.
pub fn query(root: &Document, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(root: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_within(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    el.style().set_property(property, value)
}

pub fn set_body_overflow(document: &Document, value: &str) -> Result<(), JsValue> {
    set_style(&body(document)?, "overflow", value)
}

/// Value of an `<input>` or `<textarea>` by id; empty when absent.
pub fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Attach `handler` for the page's lifetime.
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        handler(event.unchecked_into::<E>())
    }) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`] but registered passive, for scroll.
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: i32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
}

pub fn every(ms: i32, f: impl FnMut() + 'static) -> Result<i32, JsValue> {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let handle = window()?
        .set_interval_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), ms)?;
    closure.forget();
    Ok(handle)
}

pub fn now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

fn dimension(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    match web_sys::window() {
        Some(w) => (dimension(w.inner_width()), dimension(w.inner_height())),
        None => (0.0, 0.0),
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Reads the viewport into a [`Capability`] on demand.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    breakpoints: Breakpoints,
}

impl Viewport {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self { breakpoints }
    }

    pub fn capability(&self) -> Capability {
        let (width, height) = viewport_size();
        Capability::classify(
            width,
            height,
            media_matches("(hover: hover)"),
            media_matches("(pointer: fine)"),
            &self.breakpoints,
        )
    }
}

/// Observe `targets`, calling `handler(target, intersecting)` per entry.
pub fn observe(
    targets: &[HtmlElement],
    root_margin: Option<&str>,
    threshold: Option<f64>,
    mut handler: impl FnMut(&Element, bool, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                handler(&entry.target(), entry.is_intersecting(), &observer);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    if let Some(threshold) = threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}

/// Call `handler` with a fresh [`Capability`] once resizing has been quiet
/// for `delay_ms`.
pub fn on_debounced_resize(
    delay_ms: f64,
    viewport: Viewport,
    handler: impl FnMut(&Capability) + 'static,
) -> Result<(), JsValue> {
    let debounce = Rc::new(RefCell::new(Debounce::new(delay_ms)));
    let handler = Rc::new(RefCell::new(handler));
    listen(&window()?, "resize", move |_: web_sys::Event| {
        let token = debounce.borrow_mut().arm();
        let debounce = debounce.clone();
        let handler = handler.clone();
        let delay = debounce.borrow().delay_ms() as i32;
        let scheduled = after(delay, move || {
            if debounce.borrow().fires(token) {
                let mut handler = handler.borrow_mut();
                (*handler)(&viewport.capability());
            }
        });
        if let Err(err) = scheduled {
            log::warn!("resize timer failed: {err:?}");
        }
    })
}
