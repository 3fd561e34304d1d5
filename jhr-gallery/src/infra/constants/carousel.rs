//! Carousel constants
//!
//! Shared defaults for the listing gallery carousel. Tuning should happen
//! here (or through [`crate::infra::config::GalleryConfig`]) so every gallery
//! on a page behaves the same.

/// Autoplay cadence.
pub mod autoplay {
    /// Interval between automatic advances (ms).
    pub const INTERVAL_MS: u64 = 3_000;
}

/// Pointer gesture recognition.
pub mod gesture {
    /// Minimum horizontal travel (px) for a pointer-up to count as a swipe.
    /// Shorter travel is treated as a tap.
    pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
}

/// Presentation strings and hints shared by the inline and fullscreen views.
pub mod presentation {
    /// Responsive sizing hint for inline slides.
    pub const DEFAULT_IMAGE_SIZES: &str = "(min-width: 768px) 66vw, 100vw";
    /// Sizing hint for the fullscreen image.
    pub const FULLSCREEN_IMAGE_SIZES: &str = "90vw";
    /// Text shown in place of the carousel when a listing has no images.
    pub const EMPTY_GALLERY_TEXT: &str = "No gallery images available.";
    /// Prefix of DOM ids for listing carousels (`property-carousel-<id>`).
    pub const PROPERTY_CAROUSEL_ID_PREFIX: &str = "property-carousel-";
    pub const PREVIOUS_LABEL: &str = "Previous image";
    pub const NEXT_LABEL: &str = "Next image";
    pub const OPEN_FULLSCREEN_LABEL: &str = "Open fullscreen gallery";
    pub const CLOSE_FULLSCREEN_LABEL: &str = "Close fullscreen gallery";
}
