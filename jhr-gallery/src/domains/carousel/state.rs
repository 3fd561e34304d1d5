//! Carousel instance state
//!
//! A carousel is either an [`EmptyGallery`] placeholder, which owns nothing,
//! or an [`ActiveCarousel`] that holds its slide index, playback policy,
//! autoplay timer, swipe session, overlay and environment subscriptions.
//! Everything an active carousel acquires is released when it is dropped.

use super::autoplay::Autoplay;
use super::gesture::GestureSession;
use super::index::SlideIndex;
use super::overlay::Overlay;
use super::policy::PlaybackPolicy;
use super::types::{CarouselConfig, CarouselKey, CarouselProps, OverlayMode};
use crate::infra::environment::{EnvTopic, SharedEnvironment, Subscription};
use crate::infra::scheduler::{SharedScheduler, TimerId};

/// Gallery with no images. Renders a placeholder and never schedules,
/// subscribes or tracks gestures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyGallery {
    pub(super) key: CarouselKey,
    pub(super) title: String,
}

#[derive(Debug)]
pub struct ActiveCarousel {
    pub(super) key: CarouselKey,
    pub(super) title: String,
    pub(super) images: Vec<String>,
    pub(super) image_sizes: String,
    pub(super) config: CarouselConfig,
    pub(super) index: SlideIndex,
    pub(super) policy: PlaybackPolicy,
    pub(super) autoplay: Autoplay,
    pub(super) inline_gesture: GestureSession,
    pub(super) overlay: Overlay,
    pub(super) env: SharedEnvironment,
    _visibility: Subscription,
    _reduced_motion: Subscription,
}

impl ActiveCarousel {
    fn mount(
        props: CarouselProps,
        config: CarouselConfig,
        env: SharedEnvironment,
        scheduler: SharedScheduler,
    ) -> Self {
        let CarouselProps {
            id,
            title,
            images,
            image_sizes,
        } = props;

        let index = SlideIndex::new(images.len());
        let policy = PlaybackPolicy::new(
            index.can_advance(),
            env.is_document_hidden(),
            env.prefers_reduced_motion(),
        );
        let visibility = env.subscribe(EnvTopic::Visibility);
        let reduced_motion = env.subscribe(EnvTopic::ReducedMotion);
        let image_sizes =
            image_sizes.unwrap_or_else(|| config.default_image_sizes.clone());

        let mut carousel = Self {
            key: id,
            title,
            images,
            image_sizes,
            autoplay: Autoplay::new(config.autoplay_interval, scheduler),
            config,
            index,
            policy,
            inline_gesture: GestureSession::new(),
            overlay: Overlay::default(),
            env,
            _visibility: visibility,
            _reduced_motion: reduced_motion,
        };
        carousel.sync_autoplay();
        log::debug!(
            "mounted carousel {} with {} slides (autoplay {})",
            carousel.key,
            carousel.index.len(),
            if carousel.autoplay.is_running() { "on" } else { "off" }
        );
        carousel
    }

    /// Stop-then-maybe-start against the current policy.
    pub(super) fn sync_autoplay(&mut self) {
        self.autoplay.sync(self.policy.autoplay_enabled());
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn policy(&self) -> &PlaybackPolicy {
        &self.policy
    }
}

impl Drop for ActiveCarousel {
    fn drop(&mut self) {
        self.autoplay.stop();
        self.overlay.close();
        log::debug!("unmounted carousel {}", self.key);
    }
}

/// One mounted gallery carousel.
#[derive(Debug)]
pub enum Carousel {
    Empty(EmptyGallery),
    Active(Box<ActiveCarousel>),
}

impl Carousel {
    /// Mounts a carousel. The empty-gallery check happens before anything is
    /// acquired.
    pub fn mount(
        props: CarouselProps,
        config: CarouselConfig,
        env: SharedEnvironment,
        scheduler: SharedScheduler,
    ) -> Self {
        if props.images.is_empty() {
            log::debug!("carousel {} has no images; rendering placeholder", props.id);
            return Carousel::Empty(EmptyGallery {
                key: props.id,
                title: props.title,
            });
        }
        Carousel::Active(Box::new(ActiveCarousel::mount(
            props, config, env, scheduler,
        )))
    }

    /// Tears the carousel down now. Equivalent to dropping it.
    pub fn unmount(self) {
        drop(self);
    }

    pub fn key(&self) -> &CarouselKey {
        match self {
            Carousel::Empty(empty) => &empty.key,
            Carousel::Active(active) => &active.key,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Carousel::Empty(empty) => &empty.title,
            Carousel::Active(active) => &active.title,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Carousel::Empty(_))
    }

    pub fn index(&self) -> usize {
        match self {
            Carousel::Empty(_) => 0,
            Carousel::Active(active) => active.index.current(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Carousel::Empty(_) => 0,
            Carousel::Active(active) => active.index.len(),
        }
    }

    pub fn overlay_mode(&self) -> OverlayMode {
        match self {
            Carousel::Empty(_) => OverlayMode::Inline,
            Carousel::Active(active) => active.overlay.mode(),
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.overlay_mode() == OverlayMode::Fullscreen
    }

    pub fn autoplay_running(&self) -> bool {
        match self {
            Carousel::Empty(_) => false,
            Carousel::Active(active) => active.autoplay.is_running(),
        }
    }

    pub fn owns_timer(&self, id: TimerId) -> bool {
        match self {
            Carousel::Empty(_) => false,
            Carousel::Active(active) => active.autoplay.owns(id),
        }
    }

    pub fn policy(&self) -> Option<&PlaybackPolicy> {
        match self {
            Carousel::Empty(_) => None,
            Carousel::Active(active) => Some(active.policy()),
        }
    }

    pub fn as_active(&self) -> Option<&ActiveCarousel> {
        match self {
            Carousel::Empty(_) => None,
            Carousel::Active(active) => Some(active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::scheduler::Scheduler;
    use crate::infra::testing::{ManualScheduler, RecordingEnvironment};
    use std::sync::Arc;

    fn props(n: usize) -> CarouselProps {
        CarouselProps::new(
            CarouselKey::new("c"),
            "Rehavia 2",
            (0..n).map(|i| format!("/pictures/rehavia-2/{}.jpg", i + 1)).collect(),
        )
    }

    #[test]
    fn empty_gallery_acquires_nothing() {
        let env = RecordingEnvironment::new();
        let scheduler = ManualScheduler::new();
        let carousel = Carousel::mount(
            props(0),
            CarouselConfig::default(),
            Arc::new(env.clone()),
            Arc::new(scheduler.clone()),
        );
        assert!(carousel.is_empty());
        assert_eq!(env.subscribed_total(), 0);
        assert_eq!(scheduler.armed_total(), 0);
    }

    #[test]
    fn mount_reads_preferences_and_subscribes() {
        let env = RecordingEnvironment::with_preferences(false, true);
        let scheduler = ManualScheduler::new();
        let carousel = Carousel::mount(
            props(3),
            CarouselConfig::default(),
            Arc::new(env.clone()),
            Arc::new(scheduler.clone()),
        );
        assert!(carousel.policy().unwrap().reduce_motion());
        assert!(!carousel.autoplay_running());
        assert_eq!(env.listeners(EnvTopic::Visibility), 1);
        assert_eq!(env.listeners(EnvTopic::ReducedMotion), 1);
        carousel.unmount();
        assert_eq!(env.total_listeners(), 0);
        assert_eq!(scheduler.live_timers(), 0);
    }

    #[test]
    fn single_image_never_arms_autoplay() {
        let scheduler = ManualScheduler::new();
        let carousel = Carousel::mount(
            props(1),
            CarouselConfig::default(),
            Arc::new(RecordingEnvironment::new()),
            Arc::new(scheduler.clone()),
        );
        assert!(!carousel.autoplay_running());
        assert_eq!(scheduler.armed_total(), 0);
    }

    #[test]
    fn props_sizes_override_default() {
        let carousel = Carousel::mount(
            props(2).with_image_sizes("50vw"),
            CarouselConfig::default(),
            Arc::new(RecordingEnvironment::new()),
            Arc::new(ManualScheduler::new()),
        );
        assert_eq!(carousel.as_active().unwrap().image_sizes, "50vw");
    }
}
