//! A single per-frame dispatcher shared by all effects.
//!
//! The browser side runs one `requestAnimationFrame` loop and forwards each
//! timestamp here. Effects register a callback and keep the returned
//! [`TaskId`]; cancelling it is the only way to stop an effect's loop.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

pub type FrameTask = Box<dyn FnMut(f64)>;

#[derive(Default)]
pub struct FrameScheduler {
    next_id: u64,
    tasks: Vec<(TaskId, FrameTask)>,
    cancelled: HashSet<TaskId>,
    in_frame: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, task: impl FnMut(f64) + 'static) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push((id, Box::new(task)));
        id
    }

    /// Stop running `id`. Safe to call from inside a running frame and for
    /// ids that were already cancelled.
    pub fn cancel(&mut self, id: TaskId) {
        if self.in_frame {
            self.cancelled.insert(id);
        }
        self.tasks.retain(|(task_id, _)| *task_id != id);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Take the registered tasks out so they can run without the scheduler
    /// being borrowed. Must be paired with [`FrameScheduler::end_frame`].
    pub fn begin_frame(&mut self) -> Vec<(TaskId, FrameTask)> {
        self.in_frame = true;
        std::mem::take(&mut self.tasks)
    }

    /// Put the tasks back, dropping any cancelled while the frame ran and
    /// keeping ones registered meanwhile after them.
    pub fn end_frame(&mut self, ran: Vec<(TaskId, FrameTask)>) {
        let registered = std::mem::take(&mut self.tasks);
        self.tasks = ran
            .into_iter()
            .chain(registered)
            .filter(|(id, _)| !self.cancelled.contains(id))
            .collect();
        self.cancelled.clear();
        self.in_frame = false;
    }

    /// Run one frame when no task needs access to the scheduler itself.
    pub fn tick(&mut self, timestamp: f64) {
        let mut tasks = self.begin_frame();
        for (_, task) in tasks.iter_mut() {
            task(timestamp);
        }
        self.end_frame(tasks);
    }
}
