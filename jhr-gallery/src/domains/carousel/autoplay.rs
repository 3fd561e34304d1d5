//! Autoplay timer ownership
//!
//! Holds at most one armed timer. Every re-evaluation is stop-then-maybe-start:
//! the current timer is cancelled before a replacement is armed, so two
//! timers can never be live for the same carousel.

use std::time::Duration;

use crate::infra::scheduler::{SharedScheduler, TimerId, TimerMode};

#[derive(Debug)]
pub struct Autoplay {
    interval: Duration,
    timer: Option<TimerId>,
    scheduler: SharedScheduler,
}

impl Autoplay {
    pub fn new(interval: Duration, scheduler: SharedScheduler) -> Self {
        Self {
            interval,
            timer: None,
            scheduler,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn owns(&self, id: TimerId) -> bool {
        self.timer == Some(id)
    }

    /// Tears down the current timer and arms a fresh one when `enabled`.
    pub fn sync(&mut self, enabled: bool) {
        self.stop();
        if enabled {
            let id = self.scheduler.arm(self.interval, TimerMode::Repeating);
            log::trace!("autoplay armed {id}");
            self.timer = Some(id);
        }
    }

    /// Pushes the next tick a full interval away if autoplay is running.
    pub fn restart(&mut self) {
        if self.is_running() {
            self.sync(true);
        }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
            log::trace!("autoplay stopped {id}");
        }
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}
