// src/animation/driver.rs
//
// Deadline-based ticking engine
// the host polls it once per frame, so nothing here ever blocks

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct AnimationDriver {
    active: bool,
    delay: Duration,
    pending: Option<Instant>,
}

impl AnimationDriver {
    pub fn new(delay: Duration) -> Self {
        Self {
            active: false,
            delay,
            pending: None,
        }
    }

    /// Activates the driver and arms an immediate tick. No-op if already active.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.pending = Some(now);
        true
    }

    /// Deactivates the driver. An already armed deadline is left alone;
    /// the tick that consumes it sees the driver inactive and does no work.
    pub fn stop(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        true
    }

    /// Runs `work` if the armed deadline has passed, then re-arms `delay` later while active.
    pub fn tick<T>(&mut self, now: Instant, work: impl FnOnce() -> T) -> Option<T> {
        if !self.is_due(now) {
            return None;
        }
        self.pending = None;

        if !self.active {
            log::trace!("driver inactive, dropping tick");
            return None;
        }

        let output = work();
        self.pending = Some(now + self.delay);
        Some(output)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.pending.is_some_and(|deadline| now >= deadline)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pending(&self) -> Option<Instant> {
        self.pending
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
