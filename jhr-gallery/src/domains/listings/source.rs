//! Data-fetch boundary for listing and broker records

use async_trait::async_trait;
use jhr_model::{Broker, BrokerId, ListingFilters, ModelError, Property, PropertyId};

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("property {0} not found")]
    PropertyNotFound(PropertyId),

    #[error("broker {0} not found")]
    BrokerNotFound(BrokerId),

    #[error("invalid listing filters: {0}")]
    InvalidFilters(#[from] ModelError),

    #[error("listing backend error: {0}")]
    Backend(String),
}

/// Read access to the brokerage's listing and broker tables.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Listings matching `filters`, in the order requested by its sort key.
    async fn list_properties(
        &self,
        filters: &ListingFilters,
    ) -> Result<Vec<Property>, ListingError>;

    async fn get_property(&self, id: &PropertyId) -> Result<Property, ListingError>;

    async fn list_brokers(&self) -> Result<Vec<Broker>, ListingError>;

    async fn get_broker(&self, id: &BrokerId) -> Result<Broker, ListingError>;

    async fn properties_by_broker(
        &self,
        broker_id: &BrokerId,
    ) -> Result<Vec<Property>, ListingError>;

    /// Ordered gallery image sources for a listing. Empty when the listing
    /// has no photos.
    async fn gallery(&self, id: &PropertyId) -> Result<Vec<String>, ListingError>;
}
