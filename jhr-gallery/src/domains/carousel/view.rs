//! Headless render model
//!
//! [`Carousel::view`] produces a plain snapshot of what a renderer should
//! draw: labels, counters, disabled flags and which slide is visible. The
//! snapshot serializes to camelCase JSON.

use serde::Serialize;

use super::state::{ActiveCarousel, Carousel, EmptyGallery};
use crate::infra::constants::carousel::presentation;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CarouselView {
    Placeholder(PlaceholderView),
    Gallery(GalleryView),
}

impl CarouselView {
    pub fn as_gallery(&self) -> Option<&GalleryView> {
        match self {
            CarouselView::Gallery(gallery) => Some(gallery),
            CarouselView::Placeholder(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderView {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootView {
    pub id: String,
    pub aria_label: String,
    /// 1-based index of the visible slide.
    pub data_index: usize,
    pub direction: TextDirection,
    /// Horizontal translation of the slide track, in percent.
    pub track_offset_percent: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideView {
    pub src: String,
    pub alt: String,
    pub aria_hidden: bool,
    /// Load eagerly instead of lazily.
    pub priority: bool,
    pub sizes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotView {
    pub label: String,
    pub active: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub prev: ButtonView,
    pub next: ButtonView,
    pub dots: Vec<DotView>,
    /// Polite live-region text, `"<n> / <total>"`.
    pub counter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayView {
    pub aria_label: String,
    pub image: SlideView,
    pub close: ButtonView,
    pub navigation: NavigationView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub root: RootView,
    pub slides: Vec<SlideView>,
    pub navigation: NavigationView,
    pub open_fullscreen: ButtonView,
    pub overlay: Option<OverlayView>,
}

impl GalleryView {
    pub fn visible_slide(&self) -> Option<&SlideView> {
        self.slides.iter().find(|slide| !slide.aria_hidden)
    }
}

impl Carousel {
    pub fn view(&self) -> CarouselView {
        match self {
            Carousel::Empty(empty) => CarouselView::Placeholder(placeholder(empty)),
            Carousel::Active(active) => CarouselView::Gallery(gallery(active)),
        }
    }
}

fn placeholder(empty: &EmptyGallery) -> PlaceholderView {
    PlaceholderView {
        id: empty.key.to_string(),
        text: presentation::EMPTY_GALLERY_TEXT.to_owned(),
    }
}

fn gallery(active: &ActiveCarousel) -> GalleryView {
    let current = active.index.current();
    let title = &active.title;

    let slides = active
        .images
        .iter()
        .enumerate()
        .map(|(i, src)| SlideView {
            src: src.clone(),
            alt: format!("{title} photo {}", i + 1),
            aria_hidden: i != current,
            priority: i == 0,
            sizes: active.image_sizes.clone(),
        })
        .collect();

    let overlay = active.overlay.is_open().then(|| OverlayView {
        aria_label: format!("{title} fullscreen gallery"),
        image: SlideView {
            src: active.images.get(current).cloned().unwrap_or_default(),
            alt: format!("{title} fullscreen photo {}", current + 1),
            aria_hidden: false,
            priority: true,
            sizes: presentation::FULLSCREEN_IMAGE_SIZES.to_owned(),
        },
        close: ButtonView {
            label: presentation::CLOSE_FULLSCREEN_LABEL.to_owned(),
            disabled: false,
        },
        navigation: navigation(active),
    });

    GalleryView {
        root: RootView {
            id: active.key.to_string(),
            aria_label: format!("{title} image carousel"),
            data_index: active.index.ordinal(),
            direction: TextDirection::Ltr,
            track_offset_percent: current as f32 * 100.0,
        },
        slides,
        navigation: navigation(active),
        open_fullscreen: ButtonView {
            label: presentation::OPEN_FULLSCREEN_LABEL.to_owned(),
            disabled: false,
        },
        overlay,
    }
}

fn navigation(active: &ActiveCarousel) -> NavigationView {
    let disabled = !active.index.can_advance();
    let current = active.index.current();
    NavigationView {
        prev: ButtonView {
            label: presentation::PREVIOUS_LABEL.to_owned(),
            disabled,
        },
        next: ButtonView {
            label: presentation::NEXT_LABEL.to_owned(),
            disabled,
        },
        dots: (0..active.index.len())
            .map(|i| DotView {
                label: format!("Go to image {}", i + 1),
                active: i == current,
                disabled,
            })
            .collect(),
        counter: format!("{} / {}", active.index.ordinal(), active.index.len()),
    }
}
