use std::collections::VecDeque;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Frames-per-second estimate over the last second of presented frames.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    stamps: VecDeque<Instant>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame presented at `now`.
    pub fn record(&mut self, now: Instant) {
        self.stamps.push_back(now);
        while let Some(&oldest) = self.stamps.front() {
            if now.saturating_duration_since(oldest) > WINDOW {
                self.stamps.pop_front();
            } else {
                break;
            }
        }
    }

    /// Average rate over the recorded window, rounded to whole frames.
    ///
    /// Until a full second has elapsed the rate is extrapolated from the span
    /// covered so far; with fewer than two frames it is 0.
    pub fn fps(&self) -> u32 {
        let (Some(first), Some(last)) = (self.stamps.front(), self.stamps.back()) else {
            return 0;
        };
        let span = last.saturating_duration_since(*first).as_secs_f64();
        if span <= 0.0 {
            return 0;
        }
        ((self.stamps.len() - 1) as f64 / span).round() as u32
    }
}
