//! Scroll-driven effects: hero zoom, stacking cards, the horizontal reel,
//! image parallax and work-item reveal.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use super::dom::{self, Viewport};
use super::frame::Frames;
use crate::capability::Capability;
use crate::chrome::ViewFlag;
use crate::config::MotionConfig;
use crate::effects::hero::HeroParallax;
use crate::effects::image::ImageParallax;
use crate::effects::reel::{self, ModeChange, ReelDriver, ReelGeometry};
use crate::effects::stack::{stack_progress, StackTransform};
use crate::rate::{Gate, Throttle};
use crate::scheduler::TaskId;

pub fn install(
    document: &Document,
    config: &MotionConfig,
    frames: &Frames,
    viewport: &Viewport,
) -> Result<(), JsValue> {
    install_hero(document, config)?;
    install_stack(document, config, frames)?;
    install_reel(document, config, frames, viewport)?;
    install_image_parallax(document, config, frames)?;
    install_reveal(document, config)?;
    Ok(())
}

fn install_hero(document: &Document, config: &MotionConfig) -> Result<(), JsValue> {
    let Some(media) = dom::query(document, ".media-layer") else {
        debug!("hero parallax inert: no .media-layer");
        return Ok(());
    };

    let hero = HeroParallax::new(config);
    let fades = config.hero_fade > 0.0;
    let write = Rc::new(move || {
        let (_, height) = dom::viewport_size();
        if let Some(t) = hero.sample(dom::scroll_y(), height) {
            let _ = dom::set_style(&media, "transform", &t.transform_css());
            if fades {
                let _ = dom::set_style(&media, "opacity", &t.opacity_css());
            }
        }
    });

    let throttle = Rc::new(RefCell::new(Throttle::new(config.scroll_throttle_ms)));
    dom::listen_passive(&dom::window()?, "scroll", move || {
        let gate = throttle.borrow_mut().gate(dom::now());
        match gate {
            Gate::Run => write(),
            Gate::Defer(ms) => {
                let throttle = throttle.clone();
                let write = write.clone();
                let scheduled = dom::after(ms.ceil() as i32, move || {
                    throttle.borrow_mut().trailing_ran(dom::now());
                    write();
                });
                if let Err(err) = scheduled {
                    warn!("hero trailing update not scheduled: {err:?}");
                }
            }
            Gate::Skip => {}
        }
    })
}

fn write_stack(card: &HtmlElement, t: &StackTransform) {
    let _ = dom::set_style(card, "transform", &t.transform_css());
    let _ = dom::set_style(card, "filter", &t.filter_css());
    let _ = dom::set_style(card, "opacity", &t.opacity_css());
}

fn install_stack(document: &Document, config: &MotionConfig, frames: &Frames) -> Result<(), JsValue> {
    let section = dom::query(document, ".stack-engine");
    let cards = dom::query_all(document, ".stack-card");
    let Some(section) = section.filter(|_| !cards.is_empty()) else {
        debug!("stack inert: no .stack-engine with .stack-card children");
        return Ok(());
    };

    let flag = Rc::new(Cell::new(ViewFlag::OutOfView));
    {
        let flag = flag.clone();
        dom::observe(
            &[section],
            Some(config.stack_root_margin.as_str()),
            None,
            move |_, intersecting, _| flag.set(ViewFlag::from_intersecting(intersecting)),
        )?;
    }

    let pin_offset = config.stack_pin_offset;
    frames.register(move |_| {
        if !flag.get().is_in_view() {
            return;
        }
        let (_, height) = dom::viewport_size();
        for pair in cards.windows(2) {
            let next_top = pair[1].get_bounding_client_rect().top();
            let t = StackTransform::from_progress(stack_progress(height, pin_offset, next_top));
            write_stack(&pair[0], &t);
        }
    });
    Ok(())
}

fn measure_reel(section: &HtmlElement, track: &HtmlElement) -> ReelGeometry {
    let (width, height) = dom::viewport_size();
    ReelGeometry {
        section_top: section.offset_top() as f64,
        section_height: section.offset_height() as f64,
        viewport_height: height,
        viewport_width: width,
        track_width: track.scroll_width() as f64,
    }
}

/// The horizontal reel wired to its elements. [`Reel::relayout`] runs on
/// install and after every debounced resize.
pub struct Reel {
    driver: RefCell<ReelDriver>,
    task: Cell<Option<TaskId>>,
    frames: Frames,
    section: HtmlElement,
    track: HtmlElement,
}

impl Reel {
    pub fn new(config: &MotionConfig, frames: &Frames, section: HtmlElement, track: HtmlElement) -> Rc<Self> {
        Rc::new(Self {
            driver: RefCell::new(ReelDriver::new(config)),
            task: Cell::new(None),
            frames: frames.clone(),
            section,
            track,
        })
    }

    /// Re-measure and switch mode for `capability`. Entering registers the
    /// frame task; leaving cancels it and clears the track transform.
    pub fn relayout(self: &Rc<Self>, capability: &Capability) -> ModeChange {
        let limit = measure_reel(&self.section, &self.track).limit();
        let change = self.driver.borrow_mut().relayout(capability, limit);
        match change {
            ModeChange::Entered => {
                let reel = Rc::downgrade(self);
                let id = self.frames.register(move |_| {
                    let Some(reel) = reel.upgrade() else {
                        return;
                    };
                    let geometry = measure_reel(&reel.section, &reel.track);
                    let frame = reel.driver.borrow_mut().frame(dom::scroll_y(), &geometry);
                    if let Some(frame) = frame {
                        let _ = dom::set_style(&reel.track, "transform", &frame.css());
                    }
                });
                self.task.set(Some(id));
            }
            ModeChange::Exited => {
                if let Some(id) = self.task.take() {
                    self.frames.cancel(id);
                }
                let _ = dom::set_style(&self.track, "transform", reel::RESET_CSS);
            }
            ModeChange::Relaid | ModeChange::Unchanged => {}
        }
        change
    }
}

pub fn install_reel(
    document: &Document,
    config: &MotionConfig,
    frames: &Frames,
    viewport: &Viewport,
) -> Result<Option<Rc<Reel>>, JsValue> {
    let (Some(section), Some(track)) = (
        dom::query(document, ".horizontal-scroll-view"),
        dom::query(document, ".horizontal-track"),
    ) else {
        debug!("reel inert: missing .horizontal-scroll-view or .horizontal-track");
        return Ok(None);
    };

    let reel = Reel::new(config, frames, section, track);
    reel.relayout(&viewport.capability());
    {
        let reel = reel.clone();
        dom::on_debounced_resize(config.resize_debounce_ms, *viewport, move |capability| {
            reel.relayout(capability);
        })?;
    }
    Ok(Some(reel))
}

fn install_image_parallax(
    document: &Document,
    config: &MotionConfig,
    frames: &Frames,
) -> Result<(), JsValue> {
    let images = dom::query_all(document, ".card-visual img, .reel-visual img");
    if images.is_empty() {
        debug!("image parallax inert: no card or reel images");
        return Ok(());
    }

    let flags = Rc::new(RefCell::new(vec![ViewFlag::OutOfView; images.len()]));
    {
        let flags = flags.clone();
        let observed = images.clone();
        dom::observe(&images, None, None, move |target, intersecting, _| {
            let index = observed
                .iter()
                .position(|img| AsRef::<Element>::as_ref(img) == target);
            if let Some(i) = index {
                flags.borrow_mut()[i] = ViewFlag::from_intersecting(intersecting);
            }
        })?;
    }

    let parallax = ImageParallax {
        speed: config.image_parallax_speed,
        zoom: config.image_zoom,
    };
    frames.register(move |_| {
        let (_, height) = dom::viewport_size();
        let flags = flags.borrow();
        for (img, flag) in images.iter().zip(flags.iter()) {
            if !flag.is_in_view() {
                continue;
            }
            let Some(container) = img.parent_element() else {
                continue;
            };
            let rect = container.get_bounding_client_rect();
            let y = parallax.translate_y(rect.top(), rect.height(), height);
            let _ = dom::set_style(img, "transform", &parallax.transform_css(y));
        }
    });
    Ok(())
}

fn install_reveal(document: &Document, config: &MotionConfig) -> Result<(), JsValue> {
    let items = dom::query_all(document, ".work-item");
    if items.is_empty() {
        return Ok(());
    }
    dom::observe(
        &items,
        None,
        Some(config.reveal_threshold),
        |target, intersecting, observer| {
            if intersecting {
                let _ = target.class_list().add_1("reveal");
                observer.unobserve(target);
            }
        },
    )?;
    Ok(())
}
