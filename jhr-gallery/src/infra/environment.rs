//! Host environment boundary
//!
//! The carousel needs a handful of platform facts and services: whether the
//! page is hidden, whether the visitor prefers reduced motion, change
//! notifications for both, keyboard delivery while the fullscreen overlay is
//! open, and a way to suspend background scrolling.
//!
//! Listener attachment is modeled as an RAII [`Subscription`]: the host
//! attaches its listener when `subscribe` is called and detaches it when the
//! guard is dropped. The events themselves reach the widget as ordinary
//! messages through the host loop.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvTopic {
    /// Page visibility changes.
    Visibility,
    /// Reduced-motion preference changes.
    ReducedMotion,
    /// Document-level key presses.
    Keyboard,
}

type Release = Box<dyn FnOnce() + Send + Sync>;

/// An attached environment listener. Dropping it detaches the listener.
pub struct Subscription {
    topic: EnvTopic,
    release: Option<Release>,
}

impl Subscription {
    pub fn new(
        topic: EnvTopic,
        release: impl FnOnce() + Send + Sync + 'static,
    ) -> Self {
        Self {
            topic,
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to detach.
    pub fn detached(topic: EnvTopic) -> Self {
        Self {
            topic,
            release: None,
        }
    }

    pub fn topic(&self) -> EnvTopic {
        self.topic
    }

    /// Detach now instead of at drop.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("topic", &self.topic)
            .field("attached", &self.release.is_some())
            .finish()
    }
}

/// Background scroll suspension. Scrolling is restored exactly once, either
/// by [`ScrollLock::release`] or on drop.
pub struct ScrollLock {
    restore: Option<Release>,
}

impl ScrollLock {
    pub fn new(restore: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            restore: Some(Box::new(restore)),
        }
    }

    /// Restores scrolling. Returns `false` if it was already restored.
    pub fn release(&mut self) -> bool {
        match self.restore.take() {
            Some(restore) => {
                restore();
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self) -> bool {
        self.restore.is_some()
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("held", &self.is_held())
            .finish()
    }
}

/// Platform services the carousel depends on.
pub trait Environment: Send + Sync + fmt::Debug {
    /// Current page visibility.
    fn is_document_hidden(&self) -> bool;

    /// Current reduced-motion preference.
    fn prefers_reduced_motion(&self) -> bool;

    /// Attach a listener for `topic`.
    fn subscribe(&self, topic: EnvTopic) -> Subscription;

    /// Suspend background scrolling until the returned lock is released.
    fn lock_scroll(&self) -> ScrollLock;
}

pub type SharedEnvironment = Arc<dyn Environment>;

/// Environment for hosts without a document: fixed preferences, no listeners
/// to attach, scroll locking only tracked.
#[derive(Debug, Default)]
pub struct HeadlessEnvironment {
    hidden: AtomicBool,
    reduced_motion: AtomicBool,
    scroll_locked: Arc<AtomicBool>,
}

impl HeadlessEnvironment {
    pub fn new(hidden: bool, reduced_motion: bool) -> Self {
        Self {
            hidden: AtomicBool::new(hidden),
            reduced_motion: AtomicBool::new(reduced_motion),
            scroll_locked: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Updates the reported visibility. The host is still responsible for
    /// delivering the matching message to mounted widgets.
    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.store(hidden, Ordering::Relaxed);
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        self.reduced_motion.store(reduced, Ordering::Relaxed);
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked.load(Ordering::Relaxed)
    }
}

impl Environment for HeadlessEnvironment {
    fn is_document_hidden(&self) -> bool {
        self.hidden.load(Ordering::Relaxed)
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion.load(Ordering::Relaxed)
    }

    fn subscribe(&self, topic: EnvTopic) -> Subscription {
        Subscription::detached(topic)
    }

    fn lock_scroll(&self) -> ScrollLock {
        self.scroll_locked.store(true, Ordering::Relaxed);
        log::debug!("background scroll locked");
        let flag = Arc::clone(&self.scroll_locked);
        ScrollLock::new(move || {
            flag.store(false, Ordering::Relaxed);
            log::debug!("background scroll restored");
        })
    }
}
