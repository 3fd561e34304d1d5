//! Fullscreen overlay lifecycle
//!
//! The overlay is a second presentation of the same slide index. While it is
//! open it holds the background scroll lock, a keyboard subscription and its
//! own swipe session; all three are released when the session is dropped.

use super::gesture::GestureSession;
use super::types::OverlayMode;
use crate::infra::environment::{EnvTopic, Environment, ScrollLock, Subscription};

#[derive(Debug)]
pub struct FullscreenSession {
    gesture: GestureSession,
    scroll_lock: ScrollLock,
    keyboard: Subscription,
}

impl FullscreenSession {
    fn acquire(env: &dyn Environment) -> Self {
        Self {
            gesture: GestureSession::new(),
            scroll_lock: env.lock_scroll(),
            keyboard: env.subscribe(EnvTopic::Keyboard),
        }
    }

    pub fn gesture_mut(&mut self) -> &mut GestureSession {
        &mut self.gesture
    }

    pub fn holds_scroll_lock(&self) -> bool {
        self.scroll_lock.is_held()
    }

    fn release(mut self) {
        self.scroll_lock.release();
        self.keyboard.unsubscribe();
    }
}

#[derive(Debug, Default)]
pub enum Overlay {
    #[default]
    Inline,
    Fullscreen(FullscreenSession),
}

impl Overlay {
    pub fn mode(&self) -> OverlayMode {
        match self {
            Overlay::Inline => OverlayMode::Inline,
            Overlay::Fullscreen(_) => OverlayMode::Fullscreen,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Fullscreen(_))
    }

    /// Opens the overlay. Returns `false` when it was already open.
    pub fn open(&mut self, env: &dyn Environment) -> bool {
        if self.is_open() {
            return false;
        }
        *self = Overlay::Fullscreen(FullscreenSession::acquire(env));
        true
    }

    /// Closes the overlay. Returns `false` when it was already closed.
    pub fn close(&mut self) -> bool {
        match std::mem::take(self) {
            Overlay::Fullscreen(session) => {
                session.release();
                true
            }
            Overlay::Inline => false,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut FullscreenSession> {
        match self {
            Overlay::Fullscreen(session) => Some(session),
            Overlay::Inline => None,
        }
    }
}
