//! Instrumented environment
//!
//! Counts attached listeners per topic and mimics the document's body
//! overflow style so tests can assert that scrolling is suspended and
//! restored exactly once.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::infra::environment::{
    EnvTopic, Environment, ScrollLock, Subscription,
};

#[derive(Debug)]
struct Inner {
    hidden: bool,
    reduced_motion: bool,
    listeners: HashMap<EnvTopic, usize>,
    subscribed_total: usize,
    body_overflow: String,
    scroll_locks: usize,
    scroll_restores: usize,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            hidden: false,
            reduced_motion: false,
            listeners: HashMap::new(),
            subscribed_total: 0,
            body_overflow: "auto".to_owned(),
            scroll_locks: 0,
            scroll_restores: 0,
        }
    }
}

/// Environment that records every listener and scroll-lock operation.
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingEnvironment {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(hidden: bool, reduced_motion: bool) -> Self {
        let env = Self::default();
        {
            let mut inner = env.inner.lock();
            inner.hidden = hidden;
            inner.reduced_motion = reduced_motion;
        }
        env
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.inner.lock().hidden = hidden;
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        self.inner.lock().reduced_motion = reduced;
    }

    /// Listeners currently attached for `topic`.
    pub fn listeners(&self, topic: EnvTopic) -> usize {
        self.inner.lock().listeners.get(&topic).copied().unwrap_or(0)
    }

    /// Listeners currently attached across all topics.
    pub fn total_listeners(&self) -> usize {
        self.inner.lock().listeners.values().sum()
    }

    pub fn subscribed_total(&self) -> usize {
        self.inner.lock().subscribed_total
    }

    pub fn body_overflow(&self) -> String {
        self.inner.lock().body_overflow.clone()
    }

    pub fn is_scroll_locked(&self) -> bool {
        let inner = self.inner.lock();
        inner.scroll_locks > inner.scroll_restores
    }

    pub fn scroll_locks(&self) -> usize {
        self.inner.lock().scroll_locks
    }

    pub fn scroll_restores(&self) -> usize {
        self.inner.lock().scroll_restores
    }
}

impl Environment for RecordingEnvironment {
    fn is_document_hidden(&self) -> bool {
        self.inner.lock().hidden
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.inner.lock().reduced_motion
    }

    fn subscribe(&self, topic: EnvTopic) -> Subscription {
        {
            let mut inner = self.inner.lock();
            *inner.listeners.entry(topic).or_default() += 1;
            inner.subscribed_total += 1;
        }
        let inner = Arc::clone(&self.inner);
        Subscription::new(topic, move || {
            let mut inner = inner.lock();
            if let Some(count) = inner.listeners.get_mut(&topic) {
                *count = count.saturating_sub(1);
            }
        })
    }

    fn lock_scroll(&self) -> ScrollLock {
        let original = {
            let mut inner = self.inner.lock();
            inner.scroll_locks += 1;
            std::mem::replace(&mut inner.body_overflow, "hidden".to_owned())
        };
        let inner = Arc::clone(&self.inner);
        ScrollLock::new(move || {
            let mut inner = inner.lock();
            inner.body_overflow = original;
            inner.scroll_restores += 1;
        })
    }
}
