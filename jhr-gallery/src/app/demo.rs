//! Scripted carousel session on the tokio scheduler
//!
//! Mounts the gallery of one listing, feeds timer firings and a small
//! script of overlay events through a single event loop, and records every
//! slide change until the session deadline.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use jhr_model::PropertyId;
use tokio::time::{Instant, sleep_until};

use crate::domains::carousel::{
    CarouselConfig, CarouselKey, CarouselMessage, CarouselProps,
    CarouselRegistry, CarouselView, CloseReason,
};
use crate::domains::listings::ListingSource;
use crate::infra::config::GalleryConfig;
use crate::infra::environment::HeadlessEnvironment;
use crate::infra::scheduler::TokioScheduler;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoOptions {
    pub listing: PropertyId,
    pub run_for: Duration,
    /// Open the fullscreen overlay this long after mount.
    pub fullscreen_at: Option<Duration>,
    /// How long the overlay stays open once opened.
    pub fullscreen_for: Duration,
    pub reduced_motion: bool,
}

impl DemoOptions {
    pub fn new(listing: impl Into<PropertyId>, run_for: Duration) -> Self {
        Self {
            listing: listing.into(),
            run_for,
            fullscreen_at: None,
            fullscreen_for: Duration::from_secs(3),
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub key: CarouselKey,
    pub slides: usize,
    /// Slide index after each change, in order.
    pub transitions: Vec<usize>,
    pub final_view: CarouselView,
}

pub async fn run_carousel(
    source: &dyn ListingSource,
    config: &GalleryConfig,
    options: DemoOptions,
) -> anyhow::Result<DemoReport> {
    let property = source
        .get_property(&options.listing)
        .await
        .with_context(|| format!("loading listing {}", options.listing))?;
    let images = source
        .gallery(&property.id)
        .await
        .with_context(|| format!("loading gallery for {}", property.id))?;

    let (scheduler, mut fired_rx) = TokioScheduler::from_current()?;
    let env = Arc::new(HeadlessEnvironment::new(false, options.reduced_motion));
    let mut registry = CarouselRegistry::new(
        CarouselConfig::from_gallery_config(config),
        env,
        Arc::new(scheduler),
    );

    let key = CarouselKey::for_property(&property.id);
    let slides = registry
        .mount(CarouselProps::new(
            key.clone(),
            property.property_name.clone(),
            images,
        ))
        .len();
    log::info!("{key}: mounted {slides} slides for {}", property.property_name);

    let start = Instant::now();
    let deadline = start + options.run_for;
    let mut script = script(&options, start);
    let mut transitions = Vec::new();

    loop {
        let next_scripted = script.first().map(|(at, _)| *at);
        tokio::select! {
            biased;
            _ = sleep_until(deadline) => break,
            Some(fired) = fired_rx.recv() => {
                if registry.dispatch_timer(fired).is_some() {
                    record(&registry, &key, &mut transitions);
                }
            }
            _ = sleep_until(next_scripted.unwrap_or(deadline)), if next_scripted.is_some() => {
                let (_, message) = script.remove(0);
                log::info!("{key}: {message:?}");
                if registry.update(&key, message) {
                    record(&registry, &key, &mut transitions);
                }
            }
        }
    }

    let final_view = registry
        .view(&key)
        .context("carousel unmounted during demo")?;
    registry.unmount_all();

    Ok(DemoReport {
        key,
        slides,
        transitions,
        final_view,
    })
}

fn script(options: &DemoOptions, start: Instant) -> Vec<(Instant, CarouselMessage)> {
    let mut script = Vec::new();
    if let Some(open_at) = options.fullscreen_at {
        script.push((start + open_at, CarouselMessage::OpenFullscreen));
        script.push((
            start + open_at + options.fullscreen_for,
            CarouselMessage::CloseFullscreen(CloseReason::CloseButton),
        ));
    }
    script
}

fn record(registry: &CarouselRegistry, key: &CarouselKey, transitions: &mut Vec<usize>) {
    if let Some(carousel) = registry.get(key) {
        let index = carousel.index();
        log::info!("{key}: slide {} / {}", index + 1, carousel.len());
        transitions.push(index);
    }
}
