//! Swipe recognition for one pointer surface

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next slide.
    Next,
    /// Finger moved right: show the previous slide.
    Prev,
}

/// Start coordinate of an in-progress pointer gesture. Lives only between a
/// pointer-down and the matching pointer-up or pointer-cancel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSession {
    start_x: Option<f32>,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Drops the pending start without producing a swipe.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// Ends the gesture. Travel shorter than `threshold_px` is a tap, and so
    /// is zero travel whatever the threshold; a pointer-up without a
    /// recorded start is ignored.
    pub fn finish(&mut self, end_x: f32, threshold_px: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let dx = end_x - start;
        if !dx.is_finite() || dx == 0.0 || dx.abs() < threshold_px {
            return None;
        }
        if dx < 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Prev)
        }
    }
}
