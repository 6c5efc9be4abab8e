#![cfg(target_arch = "wasm32")]

use folio_fx::config::Breakpoints;
use folio_fx::effects::reel::ModeChange;
use folio_fx::effects::stack::StackTransform;
use folio_fx::wasm::{dom, scroll, Frames};
use folio_fx::{Capability, MotionConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn element(tag: &str, class: &str) -> web_sys::HtmlElement {
    let document = dom::document().unwrap();
    let el: web_sys::HtmlElement = document.create_element(tag).unwrap().dyn_into().unwrap();
    el.set_class_name(class);
    dom::body(&document).unwrap().append_child(&el).unwrap();
    el
}

/// Resolves on the next animation frame.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        dom::window().unwrap().request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn install_on_bare_page_is_inert() {
    let document = dom::document().unwrap();
    assert!(folio_fx::wasm::install(&document, &MotionConfig::default()).is_ok());
    assert!(dom::query(&document, ".horizontal-track").is_none());
}

#[wasm_bindgen_test]
fn style_writes_land_on_element() {
    let card = element("div", "stack-card");
    let t = StackTransform::from_progress(0.5);
    dom::set_style(&card, "transform", &t.transform_css()).unwrap();
    dom::set_style(&card, "opacity", &t.opacity_css()).unwrap();

    let style = card.style();
    assert_eq!(style.get_property_value("transform").unwrap(), "scale(0.95)");
    assert_eq!(style.get_property_value("opacity").unwrap(), "0.75");
}

#[wasm_bindgen_test]
fn capability_reads_live_viewport() {
    let viewport = dom::Viewport::new(MotionConfig::default().breakpoints);
    let cap = viewport.capability();
    let (width, height) = dom::viewport_size();
    assert_eq!(cap.width, width);
    assert_eq!(cap.height, height);
    assert!(width > 0.0 && height > 0.0);
}

#[wasm_bindgen_test(async)]
async fn query_all_finds_every_match() {
    element("span", "list-item");
    element("span", "list-item");
    let document = dom::document().unwrap();
    assert_eq!(dom::query_all(&document, ".list-item").len(), 2);
    assert!(dom::query(&document, ".no-such-thing").is_none());
}

#[wasm_bindgen_test(async)]
async fn reel_resets_track_and_stops_writing_on_narrow_screens() {
    let document = dom::document().unwrap();
    let section = element("section", "horizontal-scroll-view");
    section.style().set_property("height", "3000px").unwrap();
    let track: web_sys::HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    track.set_class_name("horizontal-track");
    track.style().set_property("width", "4000px").unwrap();
    section.append_child(&track).unwrap();

    let config = MotionConfig::default();
    let frames = Frames::start().unwrap();
    let viewport = dom::Viewport::new(config.breakpoints);
    let reel = scroll::install_reel(&document, &config, &frames, &viewport)
        .unwrap()
        .expect("reel elements present");

    let bp = Breakpoints::default();
    let desktop = Capability::classify(1200.0, 800.0, true, true, &bp);
    let phone = Capability::classify(600.0, 800.0, false, false, &bp);

    reel.relayout(&desktop);
    next_frame().await;
    next_frame().await;
    let written = track.style().get_property_value("transform").unwrap();
    assert!(written.starts_with("translate3d("), "got {written:?}");

    assert_eq!(reel.relayout(&phone), ModeChange::Exited);
    assert_eq!(track.style().get_property_value("transform").unwrap(), "none");

    for _ in 0..3 {
        next_frame().await;
    }
    assert_eq!(track.style().get_property_value("transform").unwrap(), "none");

    section.remove();
}
