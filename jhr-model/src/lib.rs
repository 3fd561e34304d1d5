//! Listing and broker records plus the listing filter model shared by the
//! JHR brokerage crates.
#![allow(missing_docs)]

pub mod broker;
pub mod error;
pub mod filters;
pub mod ids;
pub mod property;
pub mod search;

pub use broker::{Broker, DEFAULT_BROKER_AVATAR, BROKER_PHOTO_BUCKET};
pub use error::{ModelError, Result as ModelResult};
pub use filters::{FilterField, ListingFilters, NEIGHBORHOOD_OPTIONS, SortKey};
pub use ids::{BrokerId, PropertyId};
pub use property::{Property, gallery_paths, sqm_to_sqft};
pub use search::{apply_filters, matches_filters, sort_properties, validate_numbers};
