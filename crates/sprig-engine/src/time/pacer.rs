use std::time::{Duration, Instant};

/// Schedules frames at a fixed target rate.
///
/// The runtime asks for `next_deadline()` and parks the event loop with
/// `ControlFlow::WaitUntil` until then. A pacer without a target rate never
/// waits; presentation (FIFO vsync) is then the only throttle.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Option<Duration>,
    next: Option<Instant>,
}

impl FramePacer {
    /// `target_fps` of `None` or `Some(0)` disables pacing.
    pub fn new(target_fps: Option<u32>) -> Self {
        let interval = target_fps
            .filter(|fps| *fps > 0)
            .map(|fps| Duration::from_nanos(1_000_000_000 / fps as u64));
        Self { interval, next: None }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Deadline of the next frame, if pacing is enabled and a frame has run.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// True when a frame may run at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        match self.next {
            Some(deadline) => now >= deadline,
            None => true,
        }
    }

    /// Records that a frame started at `now` and schedules the next one.
    ///
    /// Deadlines advance by whole intervals so small wake-up jitter does not
    /// accumulate. After a stall longer than one interval the schedule
    /// restarts from `now` instead of bursting to catch up.
    pub fn frame_started(&mut self, now: Instant) {
        let Some(interval) = self.interval else {
            return;
        };

        let next = match self.next {
            Some(prev) if now.saturating_duration_since(prev) < interval => prev + interval,
            _ => now + interval,
        };
        self.next = Some(next);
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(Some(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_interval() {
        let pacer = FramePacer::new(Some(60));
        let interval = pacer.interval().unwrap();
        assert!((interval.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn zero_or_none_disables_pacing() {
        assert!(FramePacer::new(None).interval().is_none());
        assert!(FramePacer::new(Some(0)).interval().is_none());

        let mut pacer = FramePacer::new(None);
        let t0 = Instant::now();
        pacer.frame_started(t0);
        assert!(pacer.next_deadline().is_none());
        assert!(pacer.is_due(t0));
    }

    #[test]
    fn first_frame_is_due_immediately() {
        let pacer = FramePacer::new(Some(60));
        assert!(pacer.is_due(Instant::now()));
    }

    #[test]
    fn deadline_is_one_interval_after_start() {
        let mut pacer = FramePacer::new(Some(50));
        let t0 = Instant::now();
        pacer.frame_started(t0);
        assert_eq!(pacer.next_deadline(), Some(t0 + Duration::from_millis(20)));
        assert!(!pacer.is_due(t0 + Duration::from_millis(10)));
        assert!(pacer.is_due(t0 + Duration::from_millis(20)));
    }

    #[test]
    fn late_wakeup_keeps_cadence() {
        let mut pacer = FramePacer::new(Some(50));
        let t0 = Instant::now();
        pacer.frame_started(t0);
        // woke 2ms late for the frame due at t0+20ms
        pacer.frame_started(t0 + Duration::from_millis(22));
        assert_eq!(pacer.next_deadline(), Some(t0 + Duration::from_millis(40)));
    }

    #[test]
    fn stall_restarts_schedule() {
        let mut pacer = FramePacer::new(Some(50));
        let t0 = Instant::now();
        pacer.frame_started(t0);
        let late = t0 + Duration::from_millis(500);
        pacer.frame_started(late);
        assert_eq!(pacer.next_deadline(), Some(late + Duration::from_millis(20)));
    }
}
