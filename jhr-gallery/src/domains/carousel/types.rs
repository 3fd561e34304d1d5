//! Shared types for the carousel module

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use jhr_model::PropertyId;

use crate::infra::config::GalleryConfig;
use crate::infra::constants::carousel::{autoplay, gesture, presentation};

/// Stable identifier of a mounted carousel, also used as its DOM id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarouselKey(Arc<str>);

impl CarouselKey {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Key used by listing detail pages: `property-carousel-<id>`.
    pub fn for_property(id: &PropertyId) -> Self {
        Self::new(format!(
            "{}{}",
            presentation::PROPERTY_CAROUSEL_ID_PREFIX,
            id
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a page supplies when mounting a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselProps {
    pub id: CarouselKey,
    /// Display title used in accessible labels.
    pub title: String,
    /// Ordered image sources. Fixed for the lifetime of the widget.
    pub images: Vec<String>,
    /// Optional responsive sizing hint for inline slides.
    pub image_sizes: Option<String>,
}

impl CarouselProps {
    pub fn new(
        id: CarouselKey,
        title: impl Into<String>,
        images: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            images,
            image_sizes: None,
        }
    }

    pub fn with_image_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.image_sizes = Some(sizes.into());
        self
    }
}

/// Static behavior configuration for a carousel instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub autoplay_interval: Duration,
    pub swipe_threshold_px: f32,
    /// Sizing hint used when the props do not carry one.
    pub default_image_sizes: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval: Duration::from_millis(autoplay::INTERVAL_MS),
            swipe_threshold_px: gesture::SWIPE_THRESHOLD_PX,
            default_image_sizes: presentation::DEFAULT_IMAGE_SIZES.to_owned(),
        }
    }
}

impl CarouselConfig {
    pub fn from_gallery_config(cfg: &GalleryConfig) -> Self {
        Self {
            autoplay_interval: cfg.autoplay_interval(),
            swipe_threshold_px: cfg.swipe_threshold_px,
            default_image_sizes: cfg.image_sizes.clone(),
        }
    }
}

/// Which presentation received a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Inline,
    Fullscreen,
}

/// Keys the carousel reacts to. Everything else maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Where a click inside the fullscreen dialog landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the image.
    Backdrop,
    /// The image frame or one of its controls.
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Escape,
    Backdrop,
    CloseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayMode {
    #[default]
    Inline,
    Fullscreen,
}
