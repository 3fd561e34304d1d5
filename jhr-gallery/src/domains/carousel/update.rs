//! Carousel message handling
//!
//! Every slide change goes through `SlideIndex::go_to`. Manual navigation
//! restarts a running autoplay timer; any change to a playback signal
//! re-evaluates it.

use super::gesture::{GestureSession, SwipeDirection};
use super::messages::CarouselMessage;
use super::state::{ActiveCarousel, Carousel};
use super::types::{ClickTarget, CloseReason, Key, Surface};
use crate::infra::scheduler::TimerId;

impl Carousel {
    /// Applies one message. Returns `true` when the visible slide changed.
    /// An empty gallery ignores everything.
    pub fn update(&mut self, message: CarouselMessage) -> bool {
        match self {
            Carousel::Empty(empty) => {
                log::trace!("carousel {} is empty; ignoring {message:?}", empty.key);
                false
            }
            Carousel::Active(active) => active.update(message),
        }
    }
}

impl ActiveCarousel {
    pub(super) fn update(&mut self, message: CarouselMessage) -> bool {
        match message {
            CarouselMessage::Next => self.navigate(1),
            CarouselMessage::Prev => self.navigate(-1),
            CarouselMessage::GoToSlide(slide) => {
                let target = i64::try_from(slide).unwrap_or(i64::MAX);
                self.navigate_to(target)
            }

            CarouselMessage::PointerDown { surface, x } => {
                if let Some(gesture) = self.gesture_for(surface) {
                    gesture.begin(x);
                }
                false
            }
            CarouselMessage::PointerUp { surface, x } => {
                let threshold = self.config.swipe_threshold_px;
                let swipe = self
                    .gesture_for(surface)
                    .and_then(|gesture| gesture.finish(x, threshold));
                match swipe {
                    Some(SwipeDirection::Next) => self.navigate(1),
                    Some(SwipeDirection::Prev) => self.navigate(-1),
                    None => false,
                }
            }
            CarouselMessage::PointerCancel { surface } => {
                if let Some(gesture) = self.gesture_for(surface) {
                    gesture.cancel();
                }
                false
            }

            CarouselMessage::PointerEnter | CarouselMessage::FocusIn => {
                self.set_paused(true);
                false
            }
            CarouselMessage::PointerLeave => {
                self.set_paused(false);
                false
            }
            CarouselMessage::FocusOut { focus_within } => {
                if !focus_within {
                    self.set_paused(false);
                }
                false
            }

            CarouselMessage::VisibilityChanged { hidden } => {
                if self.policy.set_tab_hidden(hidden) {
                    self.sync_autoplay();
                }
                false
            }
            CarouselMessage::ReducedMotionChanged(reduce) => {
                if self.policy.set_reduce_motion(reduce) {
                    self.sync_autoplay();
                }
                false
            }

            CarouselMessage::OpenFullscreen => {
                self.open_fullscreen();
                false
            }
            CarouselMessage::CloseFullscreen(reason) => {
                self.close_fullscreen(reason);
                false
            }
            CarouselMessage::OverlayClicked(ClickTarget::Backdrop) => {
                self.close_fullscreen(CloseReason::Backdrop);
                false
            }
            CarouselMessage::OverlayClicked(ClickTarget::Content) => false,
            CarouselMessage::KeyPressed(key) => self.handle_key(key),

            CarouselMessage::TimerFired(id) => self.autoplay_tick(id),
        }
    }

    fn navigate(&mut self, delta: i64) -> bool {
        let target = self.index.current() as i64 + delta;
        self.navigate_to(target)
    }

    /// Manual navigation: move, then give the visitor a full interval on
    /// the new slide.
    fn navigate_to(&mut self, target: i64) -> bool {
        if !self.index.can_advance() {
            return false;
        }
        let changed = self.index.go_to(target);
        self.autoplay.restart();
        changed
    }

    fn autoplay_tick(&mut self, id: TimerId) -> bool {
        if !self.autoplay.owns(id) {
            log::trace!("carousel {} ignoring stale {id}", self.key);
            return false;
        }
        if !self.policy.autoplay_enabled() {
            log::warn!(
                "carousel {} received {id} while autoplay is suppressed",
                self.key
            );
            self.sync_autoplay();
            return false;
        }
        let changed = self.index.next();
        log::trace!(
            "carousel {} autoplay advanced to {}",
            self.key,
            self.index.current()
        );
        changed
    }

    fn handle_key(&mut self, key: Key) -> bool {
        if !self.overlay.is_open() {
            return false;
        }
        match key {
            Key::Escape => {
                self.close_fullscreen(CloseReason::Escape);
                false
            }
            Key::ArrowRight => self.navigate(1),
            Key::ArrowLeft => self.navigate(-1),
            Key::Other => false,
        }
    }

    fn set_paused(&mut self, paused: bool) {
        if self.policy.set_paused(paused) {
            self.sync_autoplay();
        }
    }

    fn open_fullscreen(&mut self) {
        if !self.overlay.open(self.env.as_ref()) {
            return;
        }
        self.inline_gesture.cancel();
        self.policy.set_fullscreen_open(true);
        self.sync_autoplay();
        log::debug!(
            "carousel {} opened fullscreen at slide {}",
            self.key,
            self.index.ordinal()
        );
    }

    fn close_fullscreen(&mut self, reason: CloseReason) {
        if !self.overlay.close() {
            return;
        }
        self.policy.set_fullscreen_open(false);
        self.sync_autoplay();
        log::debug!(
            "carousel {} closed fullscreen ({reason:?}) at slide {}",
            self.key,
            self.index.ordinal()
        );
    }

    fn gesture_for(
        &mut self,
        surface: Surface,
    ) -> Option<&mut GestureSession> {
        match surface {
            Surface::Inline => Some(&mut self.inline_gesture),
            Surface::Fullscreen => {
                self.overlay.session_mut().map(|s| s.gesture_mut())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::carousel::types::{CarouselConfig, CarouselKey, CarouselProps};
    use crate::infra::scheduler::Scheduler;
    use crate::infra::testing::{ManualScheduler, RecordingEnvironment};
    use std::sync::Arc;
    use std::time::Duration;

    struct Harness {
        carousel: Carousel,
        scheduler: ManualScheduler,
        env: RecordingEnvironment,
    }

    impl Harness {
        fn new(n: usize) -> Self {
            let scheduler = ManualScheduler::new();
            let env = RecordingEnvironment::new();
            let images = (0..n).map(|i| format!("{i}.jpg")).collect();
            let carousel = Carousel::mount(
                CarouselProps::new(CarouselKey::new("t"), "Test", images),
                CarouselConfig::default(),
                Arc::new(env.clone()),
                Arc::new(scheduler.clone()),
            );
            Self {
                carousel,
                scheduler,
                env,
            }
        }

        fn advance_ms(&mut self, ms: u64) {
            let carousel = &mut self.carousel;
            self.scheduler.advance_with(Duration::from_millis(ms), |fired| {
                carousel.update(CarouselMessage::TimerFired(fired.id));
            });
        }
    }

    #[test]
    fn swipe_thresholds() {
        let mut h = Harness::new(5);
        h.carousel.update(CarouselMessage::PointerDown { surface: Surface::Inline, x: 300.0 });
        h.carousel.update(CarouselMessage::PointerUp { surface: Surface::Inline, x: 240.0 });
        assert_eq!(h.carousel.index(), 1);

        let mut h = Harness::new(5);
        h.carousel.update(CarouselMessage::PointerDown { surface: Surface::Inline, x: 300.0 });
        h.carousel.update(CarouselMessage::PointerUp { surface: Surface::Inline, x: 360.0 });
        assert_eq!(h.carousel.index(), 4);

        h.carousel.update(CarouselMessage::PointerDown { surface: Surface::Inline, x: 300.0 });
        h.carousel.update(CarouselMessage::PointerUp { surface: Surface::Inline, x: 349.0 });
        assert_eq!(h.carousel.index(), 4);
    }

    #[test]
    fn fullscreen_surface_ignored_while_inline() {
        let mut h = Harness::new(5);
        h.carousel.update(CarouselMessage::PointerDown { surface: Surface::Fullscreen, x: 300.0 });
        h.carousel.update(CarouselMessage::PointerUp { surface: Surface::Fullscreen, x: 100.0 });
        assert_eq!(h.carousel.index(), 0);
    }

    #[test]
    fn manual_navigation_resets_running_timer() {
        let mut h = Harness::new(4);
        h.advance_ms(2_000);
        h.carousel.update(CarouselMessage::Next);
        assert_eq!(h.carousel.index(), 1);
        h.advance_ms(2_000);
        assert_eq!(h.carousel.index(), 1);
        h.advance_ms(1_000);
        assert_eq!(h.carousel.index(), 2);
        assert_eq!(h.scheduler.live_timers(), 1);
    }

    #[test]
    fn keys_only_work_in_fullscreen() {
        let mut h = Harness::new(3);
        assert!(!h.carousel.update(CarouselMessage::KeyPressed(Key::ArrowRight)));
        h.carousel.update(CarouselMessage::OpenFullscreen);
        assert!(h.carousel.update(CarouselMessage::KeyPressed(Key::ArrowRight)));
        assert!(h.carousel.update(CarouselMessage::KeyPressed(Key::ArrowLeft)));
        h.carousel.update(CarouselMessage::KeyPressed(Key::Other));
        assert!(h.carousel.is_fullscreen());
        h.carousel.update(CarouselMessage::KeyPressed(Key::Escape));
        assert!(!h.carousel.is_fullscreen());
        assert_eq!(h.env.body_overflow(), "auto");
    }

    #[test]
    fn escape_closes_single_image_overlay() {
        let mut h = Harness::new(1);
        h.carousel.update(CarouselMessage::OpenFullscreen);
        assert!(h.carousel.is_fullscreen());
        h.carousel.update(CarouselMessage::KeyPressed(Key::ArrowRight));
        assert_eq!(h.carousel.index(), 0);
        h.carousel.update(CarouselMessage::KeyPressed(Key::Escape));
        assert!(!h.carousel.is_fullscreen());
    }

    #[test]
    fn content_click_keeps_overlay_open() {
        let mut h = Harness::new(3);
        h.carousel.update(CarouselMessage::OpenFullscreen);
        h.carousel.update(CarouselMessage::OverlayClicked(ClickTarget::Content));
        assert!(h.carousel.is_fullscreen());
        h.carousel.update(CarouselMessage::OverlayClicked(ClickTarget::Backdrop));
        assert!(!h.carousel.is_fullscreen());
        assert_eq!(h.env.scroll_restores(), 1);
    }

    #[test]
    fn focus_moving_within_root_keeps_pause() {
        let mut h = Harness::new(3);
        h.carousel.update(CarouselMessage::FocusIn);
        assert!(!h.carousel.autoplay_running());
        h.carousel.update(CarouselMessage::FocusOut { focus_within: true });
        assert!(!h.carousel.autoplay_running());
        h.carousel.update(CarouselMessage::FocusOut { focus_within: false });
        assert!(h.carousel.autoplay_running());
    }

    #[test]
    fn stale_timer_never_advances() {
        let mut h = Harness::new(3);
        let first = TimerId::from_raw(1);
        assert!(h.carousel.owns_timer(first));
        h.carousel.update(CarouselMessage::PointerEnter);
        h.carousel.update(CarouselMessage::PointerLeave);
        assert!(!h.carousel.owns_timer(first));
        assert!(!h.carousel.update(CarouselMessage::TimerFired(first)));
        assert_eq!(h.carousel.index(), 0);
    }
}
