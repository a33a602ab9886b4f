use std::time::{Duration, Instant};

// Accepts a raw transition only when at least `threshold` has elapsed since
// the last accepted one. A zero threshold accepts everything.
#[derive(Debug)]
pub struct DebounceFilter {
    threshold: Duration,
    last_accepted: Option<Instant>,
}

impl DebounceFilter {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            last_accepted: None,
        }
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn accept(&mut self, at: Instant) -> bool {
        let accepted = match self.last_accepted {
            None => true,
            Some(prev) => at.saturating_duration_since(prev) >= self.threshold,
        };
        if accepted {
            self.last_accepted = Some(at);
        }
        accepted
    }
}
