//! Host-side drivers used by the `jhr-gallery` binary.

pub mod demo;
pub mod filters;
pub mod listings;

pub use demo::{DemoOptions, DemoReport, run_carousel};
pub use filters::{FilterReport, run_filter_session};
pub use listings::{ListingRow, format_price, query_listings};
