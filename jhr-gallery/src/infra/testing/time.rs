//! Virtual-time scheduler for deterministic testing
//!
//! Timers only fire when the test advances the clock. Firings are handed to
//! a callback one at a time, in deadline order, with no lock held, so the
//! callback may cancel or arm timers and the change is observed by the rest
//! of the same advance.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::infra::scheduler::{Scheduler, TimerFired, TimerId, TimerMode};

#[derive(Debug, Clone, Copy)]
struct VirtualTimer {
    deadline: Duration,
    period: Duration,
    mode: TimerMode,
}

#[derive(Debug, Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, VirtualTimer>,
    armed_total: usize,
    cancelled_total: usize,
}

/// Scheduler driven by a virtual clock. Clones share the same clock.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Advance the clock, collecting every firing in order.
    pub fn advance(&self, by: Duration) -> Vec<TimerFired> {
        let mut fired = Vec::new();
        self.advance_with(by, |f| fired.push(f));
        fired
    }

    /// Advance the clock, delivering each firing to `on_fire` as it happens.
    pub fn advance_with(&self, by: Duration, mut on_fire: impl FnMut(TimerFired)) {
        let target = self.clock.lock().now + by;
        loop {
            let next = {
                let mut clock = self.clock.lock();
                let due = clock
                    .timers
                    .iter()
                    .filter(|(_, t)| t.deadline <= target)
                    .min_by_key(|(id, t)| (t.deadline, **id))
                    .map(|(id, t)| (*id, *t));
                match due {
                    Some((id, timer)) => {
                        clock.now = timer.deadline;
                        match timer.mode {
                            TimerMode::Repeating => {
                                if let Some(t) = clock.timers.get_mut(&id) {
                                    t.deadline += timer.period;
                                }
                            }
                            TimerMode::Once => {
                                clock.timers.remove(&id);
                            }
                        }
                        Some(TimerFired { id })
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            match next {
                Some(fired) => on_fire(fired),
                None => break,
            }
        }
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.clock.lock().timers.contains_key(&id)
    }

    /// Time until the timer's next firing, if it is armed.
    pub fn remaining(&self, id: TimerId) -> Option<Duration> {
        let clock = self.clock.lock();
        clock
            .timers
            .get(&id)
            .map(|t| t.deadline.saturating_sub(clock.now))
    }

    /// Total number of `arm` calls so far.
    pub fn armed_total(&self) -> usize {
        self.clock.lock().armed_total
    }

    /// Total number of `cancel` calls that removed a live timer.
    pub fn cancelled_total(&self) -> usize {
        self.clock.lock().cancelled_total
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&self, period: Duration, mode: TimerMode) -> TimerId {
        let mut clock = self.clock.lock();
        clock.next_id += 1;
        let id = TimerId::from_raw(clock.next_id);
        let period = period.max(Duration::from_millis(1));
        let deadline = clock.now + period;
        clock.timers.insert(
            id,
            VirtualTimer {
                deadline,
                period,
                mode,
            },
        );
        clock.armed_total += 1;
        id
    }

    fn cancel(&self, id: TimerId) {
        let mut clock = self.clock.lock();
        if clock.timers.remove(&id).is_some() {
            clock.cancelled_total += 1;
        }
    }

    fn live_timers(&self) -> usize {
        self.clock.lock().timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn repeating_timer_fires_on_each_period() {
        let s = ManualScheduler::new();
        let id = s.arm(ms(100), TimerMode::Repeating);
        assert!(s.advance(ms(99)).is_empty());
        assert_eq!(s.advance(ms(1)), vec![TimerFired { id }]);
        assert_eq!(s.advance(ms(250)).len(), 2);
        assert_eq!(s.remaining(id), Some(ms(50)));
    }

    #[test]
    fn one_shot_fires_once_and_disarms() {
        let s = ManualScheduler::new();
        let id = s.arm(ms(200), TimerMode::Once);
        assert_eq!(s.advance(ms(1_000)), vec![TimerFired { id }]);
        assert!(!s.is_live(id));
        assert_eq!(s.live_timers(), 0);
    }

    #[test]
    fn firings_are_ordered_by_deadline() {
        let s = ManualScheduler::new();
        let slow = s.arm(ms(300), TimerMode::Once);
        let fast = s.arm(ms(100), TimerMode::Once);
        let ids: Vec<_> = s.advance(ms(300)).into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![fast, slow]);
        assert_eq!(s.now(), ms(300));
    }

    #[test]
    fn callback_may_cancel_pending_timers() {
        let s = ManualScheduler::new();
        let a = s.arm(ms(100), TimerMode::Repeating);
        let b = s.arm(ms(150), TimerMode::Repeating);
        let mut seen = Vec::new();
        let handle = s.clone();
        s.advance_with(ms(1_000), |f| {
            seen.push(f.id);
            if f.id == a {
                handle.cancel(b);
                handle.cancel(a);
            }
        });
        assert_eq!(seen, vec![a]);
        assert_eq!(s.cancelled_total(), 2);
        assert_eq!(s.live_timers(), 0);
    }
}
