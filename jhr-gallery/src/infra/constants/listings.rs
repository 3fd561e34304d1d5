//! Listing page constants.

/// Filter panel behavior.
pub mod filters {
    /// Quiet period after the last edit before the URL is replaced (ms).
    pub const URL_DEBOUNCE_MS: u64 = 200;
}
