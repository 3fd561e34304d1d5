//! Listing pages: record source boundary, seeded catalog and the
//! URL-synchronized filter panel.

pub mod catalog;
pub mod filter_sync;
pub mod source;

pub use catalog::StaticCatalog;
pub use filter_sync::{FilterMessage, FilterSync, NavigationRequest};
pub use source::{ListingError, ListingSource};
