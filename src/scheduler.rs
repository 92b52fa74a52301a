use tracing::warn;

/// Frame gate: decides whether enough time passed for another frame.
///
/// Polling it costs one comparison; it never waits.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval_ms: u64,
    last_frame_at: Option<u64>,
}

impl FrameScheduler {
    pub fn new(frame_rate: u32) -> Self {
        let mut scheduler = Self {
            interval_ms: 0,
            last_frame_at: None,
        };
        scheduler.set_frame_rate(frame_rate);
        scheduler
    }

    /// Frame rates below 1 are treated as 1
    pub fn set_frame_rate(&mut self, frame_rate: u32) {
        if frame_rate == 0 {
            warn!("frame rate 0 requested, clamping to 1 fps");
        }
        self.interval_ms = 1000 / u64::from(frame_rate.max(1));
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Forget the last frame so the next poll renders
    pub fn reset(&mut self) {
        self.last_frame_at = None;
    }

    /// True (and the frame is booked) when a frame is due at `now`
    pub fn poll(&mut self, now: u64) -> bool {
        let due = match self.last_frame_at {
            Some(last) => now.saturating_sub(last) >= self.interval_ms,
            None => true,
        };
        if due {
            self.last_frame_at = Some(now);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_renders() {
        let mut scheduler = FrameScheduler::new(50);
        assert!(scheduler.poll(0));
        assert!(!scheduler.poll(0));
    }

    #[test]
    fn gate_opens_after_interval() {
        let mut scheduler = FrameScheduler::new(50);
        assert_eq!(scheduler.interval_ms(), 20);
        assert!(scheduler.poll(100));
        assert!(!scheduler.poll(119));
        assert!(scheduler.poll(120));
        assert!(!scheduler.poll(130));
        assert!(scheduler.poll(141));
    }

    #[test]
    fn zero_frame_rate_clamps_to_one() {
        let scheduler = FrameScheduler::new(0);
        assert_eq!(scheduler.interval_ms(), 1000);
    }

    #[test]
    fn reset_forces_next_frame() {
        let mut scheduler = FrameScheduler::new(10);
        assert!(scheduler.poll(0));
        scheduler.reset();
        assert!(scheduler.poll(1));
    }
}
