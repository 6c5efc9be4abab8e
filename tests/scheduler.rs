use std::cell::RefCell;
use std::rc::Rc;

use folio_fx::FrameScheduler;

#[test]
fn tick_runs_every_registered_task() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut sched = FrameScheduler::new();
    for name in ["stack", "reel", "parallax"] {
        let log = log.clone();
        sched.register(move |ts| log.borrow_mut().push((name, ts)));
    }

    sched.tick(16.0);
    sched.tick(32.0);
    let log = log.borrow();
    assert_eq!(log.len(), 6);
    assert!(log.contains(&("reel", 32.0)));
}

#[test]
fn cancelled_task_stops_running() {
    let count = Rc::new(RefCell::new(0));
    let mut sched = FrameScheduler::new();
    let id = {
        let count = count.clone();
        sched.register(move |_| *count.borrow_mut() += 1)
    };

    sched.tick(0.0);
    sched.cancel(id);
    sched.cancel(id);
    sched.tick(16.0);
    assert_eq!(*count.borrow(), 1);
    assert!(sched.is_empty());
}

#[test]
fn tasks_can_cancel_and_register_mid_frame() {
    let sched = Rc::new(RefCell::new(FrameScheduler::new()));
    let runs = Rc::new(RefCell::new(Vec::new()));

    let victim = {
        let runs = runs.clone();
        sched.borrow_mut().register(move |_| runs.borrow_mut().push("victim"))
    };
    {
        let sched_inner = sched.clone();
        let runs = runs.clone();
        let mut fired = false;
        sched.borrow_mut().register(move |_| {
            runs.borrow_mut().push("killer");
            if !fired {
                fired = true;
                let mut s = sched_inner.borrow_mut();
                s.cancel(victim);
                let runs = runs.clone();
                s.register(move |_| runs.borrow_mut().push("late"));
            }
        });
    }

    // Drive frames the way the browser loop does: scheduler released while
    // tasks run.
    for ts in [0.0, 16.0] {
        let mut tasks = sched.borrow_mut().begin_frame();
        for (_, task) in tasks.iter_mut() {
            task(ts);
        }
        sched.borrow_mut().end_frame(tasks);
    }

    assert_eq!(
        *runs.borrow(),
        vec!["victim", "killer", "killer", "late"]
    );
    assert_eq!(sched.borrow().len(), 2);
}
