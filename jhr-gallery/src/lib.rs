//! JHR gallery library
//!
//! Headless state for the listing pages of the brokerage site: the image
//! carousel mounted once per listing gallery, and the URL-synchronized
//! listing filter panel. Rendering is left to the host; every widget exposes
//! a view snapshot describing what to draw.
//!
//! Notes
//! - Platform services (timers, visibility, reduced-motion preference,
//!   keyboard, scroll locking) are reached through the traits in
//!   [`infra::scheduler`] and [`infra::environment`].
//! - [`infra::testing`] provides deterministic implementations of both for
//!   tests and for hosts that want to script a session.

pub mod app;
pub mod domains;
pub mod infra;

pub use domains::carousel::{
    Carousel, CarouselConfig, CarouselKey, CarouselMessage, CarouselProps,
    CarouselRegistry, CarouselView,
};
pub use domains::listings::{
    FilterMessage, FilterSync, ListingError, ListingSource, NavigationRequest,
    StaticCatalog,
};
pub use infra::config::GalleryConfig;
