//! Rate limiting for high-frequency browser events.

/// What a throttled handler should do with the event it just received.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Run now.
    Run,
    /// Inside the window: schedule one trailing run after this many ms,
    /// then report it with [`Throttle::trailing_ran`].
    Defer(f64),
    /// Inside the window with a trailing run already pending.
    Skip,
}

/// Lets a handler through at most once per `interval_ms`. Calls inside the
/// window are dropped, but the first dropped call arms a trailing run so the
/// last event of a burst is never lost.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last: Option<f64>,
    trailing: bool,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last: None,
            trailing: false,
        }
    }

    pub fn gate(&mut self, now_ms: f64) -> Gate {
        match self.last {
            Some(last) if now_ms - last < self.interval_ms => {
                if self.trailing {
                    Gate::Skip
                } else {
                    self.trailing = true;
                    Gate::Defer(self.interval_ms - (now_ms - last))
                }
            }
            _ => {
                self.last = Some(now_ms);
                self.trailing = false;
                Gate::Run
            }
        }
    }

    /// The deferred run happened at `now_ms`; it opens a new window.
    pub fn trailing_ran(&mut self, now_ms: f64) {
        self.last = Some(now_ms);
        self.trailing = false;
    }
}

/// Collapses a burst of triggers into one run after a quiet period.
///
/// Each trigger calls [`Debounce::arm`] and schedules a timer for
/// [`Debounce::delay_ms`]; when a timer fires it runs only if its token is
/// still the latest one.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay_ms: f64,
    generation: u64,
}

impl Debounce {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            generation: 0,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn fires(&self, token: u64) -> bool {
        token == self.generation
    }
}
