use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use super::dom;
use crate::scheduler::{FrameScheduler, TaskId};

/// Handle to the page's one animation-frame loop.
#[derive(Clone)]
pub struct Frames {
    scheduler: Rc<RefCell<FrameScheduler>>,
}

impl Frames {
    /// Start the loop. It keeps rescheduling itself for the page's lifetime
    /// and dispatches each frame to whatever tasks are registered.
    pub fn start() -> Result<Self, JsValue> {
        let scheduler = Rc::new(RefCell::new(FrameScheduler::new()));

        // The frame callback needs a handle to itself to re-arm; it is parked
        // in a shared slot that is filled right after construction.
        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        let sched = scheduler.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            // Tasks run with the scheduler released so they may cancel or
            // register tasks themselves.
            let mut tasks = sched.borrow_mut().begin_frame();
            for (_, task) in tasks.iter_mut() {
                task(timestamp);
            }
            sched.borrow_mut().end_frame(tasks);

            // schedule next
            if let (Ok(window), Some(cb)) = (dom::window(), f.borrow().as_ref()) {
                if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    log::error!("frame loop stopped: {err:?}");
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = g.borrow().as_ref() {
            dom::window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
        }

        Ok(Self { scheduler })
    }

    pub fn register(&self, task: impl FnMut(f64) + 'static) -> TaskId {
        self.scheduler.borrow_mut().register(task)
    }

    pub fn cancel(&self, id: TaskId) {
        self.scheduler.borrow_mut().cancel(id);
    }
}
