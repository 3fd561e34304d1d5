//! Messages accepted by a mounted carousel

use super::types::{ClickTarget, CloseReason, Key, Surface};
use crate::infra::scheduler::TimerId;

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselMessage {
    // Navigation (buttons and dots)
    Next,
    Prev,
    GoToSlide(usize),

    // Swipe gestures
    PointerDown { surface: Surface, x: f32 },
    PointerUp { surface: Surface, x: f32 },
    PointerCancel { surface: Surface },

    // Hover / focus within the widget root
    PointerEnter,
    PointerLeave,
    FocusIn,
    /// `focus_within` is true when focus moved to another element inside
    /// the widget root.
    FocusOut { focus_within: bool },

    // Environment
    VisibilityChanged { hidden: bool },
    ReducedMotionChanged(bool),

    // Fullscreen overlay
    OpenFullscreen,
    CloseFullscreen(CloseReason),
    OverlayClicked(ClickTarget),
    KeyPressed(Key),

    // Autoplay
    TimerFired(TimerId),
}
