use std::time::{Duration, Instant};

/// Caps the frame loop to a fixed rate. Deadlines advance from the previous deadline, not
/// from "now", unless the loop fell a whole interval behind.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Duration,
    next_frame: Instant,
}

impl FrameLimiter {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_frame: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when a frame may run at `now`; schedules the following one.
    pub fn ready(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }

        self.next_frame += self.interval;
        if self.next_frame <= now {
            // Too far behind to catch up; don't burst
            self.next_frame = now + self.interval;
        }
        true
    }

    /// When the event loop should wake next.
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }
}
