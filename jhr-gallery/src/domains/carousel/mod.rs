//! Listing gallery carousel
//!
//! A self-contained state machine per gallery: wrapping slide index,
//! autoplay that yields to hover, focus, hidden tabs, reduced motion and the
//! fullscreen overlay, swipe recognition on both surfaces, and a headless
//! view snapshot. Hosts drive it with [`CarouselMessage`]s and feed timer
//! firings back through [`CarouselRegistry::dispatch_timer`].

pub mod autoplay;
pub mod gesture;
pub mod index;
pub mod messages;
pub mod overlay;
pub mod policy;
pub mod registry;
pub mod state;
pub mod types;
pub mod update;
pub mod view;

pub use messages::CarouselMessage;
pub use registry::CarouselRegistry;
pub use state::Carousel;
pub use types::{
    CarouselConfig, CarouselKey, CarouselProps, ClickTarget, CloseReason, Key,
    OverlayMode, Surface,
};
pub use view::CarouselView;
