//! Timer scheduling boundary
//!
//! Widgets never sleep or spawn on their own. They ask a [`Scheduler`] to arm
//! a timer and receive a [`TimerId`]; when the timer elapses the host loop is
//! handed a [`TimerFired`] carrying that id and routes it back to the owner as
//! a message. Owners compare the id against the timer they currently hold, so
//! a firing that was already in flight when its timer was cancelled is
//! recognized as stale and dropped.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Identifier of one armed timer. Never reused by a scheduler instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    /// Fires every period until cancelled.
    Repeating,
    /// Fires once after the period, then disarms itself.
    Once,
}

/// Delivered to the host loop when an armed timer elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub id: TimerId,
}

/// Arms and cancels timers on behalf of widgets.
pub trait Scheduler: Send + Sync + fmt::Debug {
    /// Arms a new timer whose first firing is one full `period` away.
    fn arm(&self, period: Duration, mode: TimerMode) -> TimerId;

    /// Cancels a timer. Unknown or already finished ids are ignored.
    fn cancel(&self, id: TimerId);

    /// Number of timers currently armed.
    fn live_timers(&self) -> usize;
}

pub type SharedScheduler = Arc<dyn Scheduler>;

type TaskMap = Arc<Mutex<HashMap<TimerId, JoinHandle<()>>>>;

/// Production scheduler: every timer is a tokio task posting [`TimerFired`]
/// onto an unbounded channel drained by the host's event loop.
pub struct TokioScheduler {
    handle: Handle,
    events: mpsc::UnboundedSender<TimerFired>,
    next_id: AtomicU64,
    tasks: TaskMap,
}

impl fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("live_timers", &self.tasks.lock().len())
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .finish()
    }
}

impl TokioScheduler {
    /// Create a scheduler bound to a runtime handle, returning the receiver
    /// the host loop must drain.
    pub fn new(handle: Handle) -> (Self, mpsc::UnboundedReceiver<TimerFired>) {
        let (events, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            handle,
            events,
            next_id: AtomicU64::new(1),
            tasks: Arc::new(Mutex::new(HashMap::new())),
        };
        (scheduler, rx)
    }

    /// Create a scheduler on the runtime the caller is running in.
    pub fn from_current()
    -> anyhow::Result<(Self, mpsc::UnboundedReceiver<TimerFired>)> {
        let handle = Handle::try_current().map_err(|err| {
            anyhow::anyhow!("TokioScheduler requires a tokio runtime: {err}")
        })?;
        Ok(Self::new(handle))
    }
}

impl Scheduler for TokioScheduler {
    fn arm(&self, period: Duration, mode: TimerMode) -> TimerId {
        let id = TimerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let period = period.max(Duration::from_millis(1));
        let events = self.events.clone();

        // Hold the map while spawning so a short one-shot cannot remove its
        // entry before it has been inserted.
        let mut tasks = self.tasks.lock();
        let task = match mode {
            TimerMode::Repeating => self.handle.spawn(async move {
                let mut interval =
                    tokio::time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;
                    if events.send(TimerFired { id }).is_err() {
                        break;
                    }
                }
            }),
            TimerMode::Once => {
                let registry = Arc::clone(&self.tasks);
                self.handle.spawn(async move {
                    tokio::time::sleep(period).await;
                    let _ = events.send(TimerFired { id });
                    registry.lock().remove(&id);
                })
            }
        };
        tasks.insert(id, task);
        log::trace!("armed {id} ({mode:?}, {period:?})");
        id
    }

    fn cancel(&self, id: TimerId) {
        if let Some(task) = self.tasks.lock().remove(&id) {
            task.abort();
            log::trace!("cancelled {id}");
        }
    }

    fn live_timers(&self) -> usize {
        self.tasks.lock().len()
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.lock().drain() {
            task.abort();
        }
    }
}
