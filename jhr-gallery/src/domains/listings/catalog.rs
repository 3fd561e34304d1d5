//! In-memory listing source
//!
//! Holds listing rows, broker rows and per-listing galleries. Filtering and
//! sorting use the model's rules; numeric filter values that do not parse
//! are rejected the way the hosted table would reject them.

use std::collections::HashMap;

use async_trait::async_trait;
use jhr_model::{
    Broker, BrokerId, ListingFilters, Property, PropertyId, apply_filters,
    gallery_paths, validate_numbers,
};

use super::source::{ListingError, ListingSource};

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    properties: Vec<Property>,
    brokers: Vec<Broker>,
    galleries: HashMap<PropertyId, Vec<String>>,
}

impl StaticCatalog {
    pub fn new(properties: Vec<Property>, brokers: Vec<Broker>) -> Self {
        Self {
            properties,
            brokers,
            galleries: HashMap::new(),
        }
    }

    /// Builds a catalog from JSON arrays of `units` and `brokers` rows.
    pub fn from_json(units: &str, brokers: &str) -> Result<Self, ListingError> {
        let properties: Vec<Property> = serde_json::from_str(units)
            .map_err(|err| ListingError::Backend(format!("units: {err}")))?;
        let brokers: Vec<Broker> = serde_json::from_str(brokers)
            .map_err(|err| ListingError::Backend(format!("brokers: {err}")))?;
        Ok(Self::new(properties, brokers))
    }

    pub fn with_gallery(mut self, id: impl Into<PropertyId>, images: Vec<String>) -> Self {
        self.galleries.insert(id.into(), images);
        self
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn property_ids(&self) -> impl Iterator<Item = &PropertyId> {
        self.properties.iter().map(|p| &p.id)
    }

    fn with_broker(&self, property: &Property) -> Property {
        let mut property = property.clone();
        if property.broker.is_none() {
            property.broker = self
                .brokers
                .iter()
                .find(|b| b.id == property.broker_id)
                .cloned();
        }
        property
    }

    /// The brokerage's current Jerusalem listings. Listings priced on
    /// request have no `price_nis`.
    pub fn jerusalem() -> Self {
        let brokers = vec![
            broker("sarah-bencherit", "Sarah Bencherit"),
            broker("natanel-moshe-junger", "Natanel Moshe Junger"),
            broker("yaakov-mechlovitz", "Yaakov Mechlovitz"),
        ];

        let rows = [
            Seed {
                id: "katamon-1",
                name: "Exclusive for Sale in Katamon!",
                neighborhood: "Old Katamon",
                street: "Hizkiyahu HaMelech Street 39",
                price_nis: Some(3_450_000),
                beds: 3.0,
                baths: 2.0,
                indoor_sqm: 100.0,
                outdoor_sqm: 0.0,
                broker: "sarah-bencherit",
                slug: "katamon-1",
                photos: 8,
            },
            Seed {
                id: "nachlaot",
                name: "Artist House",
                neighborhood: "Nachlaot",
                street: "",
                price_nis: None,
                beds: 3.0,
                baths: 3.0,
                indoor_sqm: 180.0,
                outdoor_sqm: 0.0,
                broker: "natanel-moshe-junger",
                slug: "nachlaot-1",
                photos: 7,
            },
            Seed {
                id: "nachlaot-2",
                name: "Exclusive for Sale in Nachlaot!",
                neighborhood: "Nachlaot",
                street: "Khakham Shalom St 15",
                price_nis: Some(2_700_000),
                beds: 2.0,
                baths: 2.0,
                indoor_sqm: 42.0,
                outdoor_sqm: 70.0,
                broker: "sarah-bencherit",
                slug: "nachlaot-2",
                photos: 4,
            },
            Seed {
                id: "nachlaot-3",
                name: "Perfect for Airbnb border of Nachlaot and the City Centre!",
                neighborhood: "Nachlaot",
                street: "Mesilat Yesharim St 15",
                price_nis: Some(3_900_000),
                beds: 2.0,
                baths: 1.5,
                indoor_sqm: 87.95,
                outdoor_sqm: 4.55,
                broker: "sarah-bencherit",
                slug: "nachlaot-3",
                photos: 7,
            },
            Seed {
                id: "rehavia-12",
                name: "Metudela 14 • Unit 12",
                neighborhood: "Rehavia",
                street: "14 Metudela Street",
                price_nis: Some(7_390_500),
                beds: 2.5,
                baths: 2.0,
                indoor_sqm: 108.2,
                outdoor_sqm: 11.0,
                broker: "yaakov-mechlovitz",
                slug: "rehavia-1",
                photos: 4,
            },
            Seed {
                id: "rehavia-13",
                name: "Metudela 14 • Unit 13",
                neighborhood: "Rehavia",
                street: "14 Metudela Street",
                price_nis: Some(6_249_750),
                beds: 3.0,
                baths: 2.0,
                indoor_sqm: 92.4,
                outdoor_sqm: 7.5,
                broker: "yaakov-mechlovitz",
                slug: "rehavia-1",
                photos: 4,
            },
            Seed {
                id: "rehavia-14",
                name: "Metudela 14 • Unit 14",
                neighborhood: "Rehavia",
                street: "14 Metudela Street",
                price_nis: Some(4_875_000),
                beds: 1.0,
                baths: 1.0,
                indoor_sqm: 72.5,
                outdoor_sqm: 5.0,
                broker: "yaakov-mechlovitz",
                slug: "rehavia-1",
                photos: 4,
            },
            Seed {
                id: "rehavia-2",
                name: "Haari 4 • Rehavia Duplex",
                neighborhood: "Rehavia",
                street: "Haari 4",
                price_nis: Some(13_000_000),
                beds: 4.0,
                baths: 2.5,
                indoor_sqm: 172.0,
                outdoor_sqm: 0.0,
                broker: "yaakov-mechlovitz",
                slug: "rehavia-2",
                photos: 12,
            },
            Seed {
                id: "romema-1",
                name: "Pninat Chemed • Romema",
                neighborhood: "Romema",
                street: "Pninat Chemed",
                price_nis: Some(16_000_000),
                beds: 5.0,
                baths: 3.5,
                indoor_sqm: 240.0,
                outdoor_sqm: 0.0,
                broker: "yaakov-mechlovitz",
                slug: "romema-1",
                photos: 7,
            },
        ];

        let mut catalog = Self::new(Vec::with_capacity(rows.len()), brokers);
        for seed in rows {
            catalog
                .galleries
                .insert(PropertyId::new(seed.id), gallery_paths(seed.slug, seed.photos));
            catalog.properties.push(seed.into_property());
        }
        catalog
    }
}

struct Seed {
    id: &'static str,
    name: &'static str,
    neighborhood: &'static str,
    street: &'static str,
    price_nis: Option<u64>,
    beds: f32,
    baths: f32,
    indoor_sqm: f32,
    outdoor_sqm: f32,
    broker: &'static str,
    slug: &'static str,
    photos: usize,
}

impl Seed {
    fn into_property(self) -> Property {
        let cover = format!("/pictures/{}/0.jpg", self.slug);
        Property {
            id: PropertyId::new(self.id),
            property_name: self.name.to_owned(),
            neighborhood: self.neighborhood.to_owned(),
            street: self.street.to_owned(),
            city: "Jerusalem".to_owned(),
            price_nis: self.price_nis,
            beds: self.beds,
            baths: self.baths,
            indoor_sqm: self.indoor_sqm,
            outdoor_sqm: self.outdoor_sqm,
            broker_id: BrokerId::new(self.broker),
            broker: None,
            hero_image_url: cover.clone(),
            backdrop_image_url: format!("/pictures/{}/1.jpg", self.slug),
            thumb_image_url: cover,
        }
    }
}

fn broker(id: &str, name: &str) -> Broker {
    Broker {
        id: BrokerId::new(id),
        name: name.to_owned(),
        area: Some("Jerusalem".to_owned()),
        role: Some("Broker".to_owned()),
        ..Default::default()
    }
}

#[async_trait]
impl ListingSource for StaticCatalog {
    async fn list_properties(
        &self,
        filters: &ListingFilters,
    ) -> Result<Vec<Property>, ListingError> {
        validate_numbers(filters)?;
        let matched = apply_filters(&self.properties, filters);
        log::debug!(
            "listing query {:?} matched {} of {}",
            filters.to_query_string(),
            matched.len(),
            self.properties.len()
        );
        Ok(matched.iter().map(|p| self.with_broker(p)).collect())
    }

    async fn get_property(&self, id: &PropertyId) -> Result<Property, ListingError> {
        self.properties
            .iter()
            .find(|p| &p.id == id)
            .map(|p| self.with_broker(p))
            .ok_or_else(|| ListingError::PropertyNotFound(id.clone()))
    }

    async fn list_brokers(&self) -> Result<Vec<Broker>, ListingError> {
        let mut brokers = self.brokers.clone();
        brokers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(brokers)
    }

    async fn get_broker(&self, id: &BrokerId) -> Result<Broker, ListingError> {
        self.brokers
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| ListingError::BrokerNotFound(id.clone()))
    }

    async fn properties_by_broker(
        &self,
        broker_id: &BrokerId,
    ) -> Result<Vec<Property>, ListingError> {
        self.get_broker(broker_id).await?;
        Ok(self
            .properties
            .iter()
            .filter(|p| &p.broker_id == broker_id)
            .map(|p| self.with_broker(p))
            .collect())
    }

    async fn gallery(&self, id: &PropertyId) -> Result<Vec<String>, ListingError> {
        if !self.properties.iter().any(|p| &p.id == id) {
            return Err(ListingError::PropertyNotFound(id.clone()));
        }
        Ok(self.galleries.get(id).cloned().unwrap_or_default())
    }
}
