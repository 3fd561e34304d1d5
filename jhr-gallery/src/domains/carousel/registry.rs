//! Registry of every carousel mounted on a page, keyed by [`CarouselKey`]

use std::collections::HashMap;

use super::messages::CarouselMessage;
use super::state::Carousel;
use super::types::{CarouselConfig, CarouselKey, CarouselProps};
use super::view::CarouselView;
use crate::infra::environment::SharedEnvironment;
use crate::infra::scheduler::{SharedScheduler, TimerFired};

#[derive(Debug)]
pub struct CarouselRegistry {
    carousels: HashMap<CarouselKey, Carousel>,
    config: CarouselConfig,
    env: SharedEnvironment,
    scheduler: SharedScheduler,
}

impl CarouselRegistry {
    pub fn new(
        config: CarouselConfig,
        env: SharedEnvironment,
        scheduler: SharedScheduler,
    ) -> Self {
        Self {
            carousels: HashMap::new(),
            config,
            env,
            scheduler,
        }
    }

    /// Mounts a carousel under `props.id`. An instance already mounted under
    /// that id is torn down before the new one acquires anything.
    pub fn mount(&mut self, props: CarouselProps) -> &mut Carousel {
        let key = props.id.clone();
        if let Some(previous) = self.carousels.remove(&key) {
            log::debug!("replacing mounted carousel {key}");
            previous.unmount();
        }
        let carousel = Carousel::mount(
            props,
            self.config.clone(),
            self.env.clone(),
            self.scheduler.clone(),
        );
        self.carousels.entry(key).or_insert(carousel)
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&Carousel> {
        self.carousels.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut Carousel> {
        self.carousels.get_mut(key)
    }

    pub fn view(&self, key: &CarouselKey) -> Option<CarouselView> {
        self.carousels.get(key).map(Carousel::view)
    }

    /// Routes a message. Returns `true` when the target's slide changed.
    pub fn update(&mut self, key: &CarouselKey, message: CarouselMessage) -> bool {
        match self.carousels.get_mut(key) {
            Some(carousel) => carousel.update(message),
            None => {
                log::debug!("dropping {message:?} for unmounted carousel {key}");
                false
            }
        }
    }

    /// Delivers a timer firing to the carousel that owns it. Returns the
    /// owner's key when its slide changed.
    pub fn dispatch_timer(&mut self, fired: TimerFired) -> Option<CarouselKey> {
        let Some((key, carousel)) = self
            .carousels
            .iter_mut()
            .find(|(_, carousel)| carousel.owns_timer(fired.id))
        else {
            log::trace!("no carousel owns {}", fired.id);
            return None;
        };
        carousel
            .update(CarouselMessage::TimerFired(fired.id))
            .then(|| key.clone())
    }

    /// Delivers an environment-wide message (visibility, reduced motion) to
    /// every mounted carousel.
    pub fn broadcast(&mut self, message: CarouselMessage) {
        for carousel in self.carousels.values_mut() {
            carousel.update(message.clone());
        }
    }

    pub fn unmount(&mut self, key: &CarouselKey) -> bool {
        match self.carousels.remove(key) {
            Some(carousel) => {
                carousel.unmount();
                true
            }
            None => false,
        }
    }

    pub fn unmount_all(&mut self) {
        for (_, carousel) in self.carousels.drain() {
            carousel.unmount();
        }
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CarouselKey> {
        self.carousels.keys()
    }
}

impl Drop for CarouselRegistry {
    fn drop(&mut self) {
        self.unmount_all();
    }
}
