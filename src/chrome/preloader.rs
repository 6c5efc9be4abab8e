/// Counts page media as it finishes loading (or fails to).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTracker {
    total: usize,
    settled: usize,
}

impl LoadTracker {
    pub fn new(total: usize) -> Self {
        Self { total, settled: 0 }
    }

    /// Record one load or error event and return the new percentage.
    pub fn settle_one(&mut self) -> u32 {
        self.settled = (self.settled + 1).min(self.total);
        self.percent()
    }

    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        ((self.settled as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.settled >= self.total
    }

    pub fn bar_width_css(&self) -> String {
        format!("{}%", self.percent())
    }
}
