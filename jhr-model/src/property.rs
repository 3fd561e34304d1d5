use crate::broker::Broker;
use crate::ids::{BrokerId, PropertyId};

const SQFT_PER_SQM: f32 = 10.7639;

/// A listing row from the hosted `units` table.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Property {
    pub id: PropertyId,
    pub property_name: String,
    pub neighborhood: String,
    pub street: String,
    pub city: String,
    /// Asking price in shekels. `None` when the price is on request.
    #[cfg_attr(feature = "serde", serde(default, rename = "priceNIS"))]
    pub price_nis: Option<u64>,
    pub beds: f32,
    pub baths: f32,
    pub indoor_sqm: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub outdoor_sqm: f32,
    #[cfg_attr(feature = "serde", serde(rename = "broker_id"))]
    pub broker_id: BrokerId,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub broker: Option<Broker>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hero_image_url: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub backdrop_image_url: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thumb_image_url: String,
}

impl Property {
    /// Single-line address shown under listing cards.
    pub fn location_line(&self) -> String {
        [
            self.street.as_str(),
            self.neighborhood.as_str(),
            self.city.as_str(),
        ]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" • ")
    }

    /// Indoor plus outdoor area in square metres.
    pub fn total_sqm(&self) -> f32 {
        self.indoor_sqm + self.outdoor_sqm
    }
}

/// Converts square metres to whole square feet, rounding to nearest.
pub fn sqm_to_sqft(sqm: f32) -> u32 {
    (sqm * SQFT_PER_SQM).round().max(0.0) as u32
}

/// Static gallery paths for a listing folder: `/pictures/<slug>/<i>.jpg`.
pub fn gallery_paths(slug: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("/pictures/{slug}/{i}.jpg"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqft_conversion_rounds() {
        assert_eq!(sqm_to_sqft(180.0), 1938);
        assert_eq!(sqm_to_sqft(240.0), 2583);
        assert_eq!(sqm_to_sqft(0.0), 0);
    }

    #[test]
    fn gallery_paths_are_zero_based() {
        assert_eq!(
            gallery_paths("romema-1", 3),
            vec![
                "/pictures/romema-1/0.jpg",
                "/pictures/romema-1/1.jpg",
                "/pictures/romema-1/2.jpg",
            ]
        );
        assert!(gallery_paths("empty", 0).is_empty());
    }

    #[test]
    fn location_line_skips_blank_parts() {
        let p = Property {
            street: "14 Metudela St".into(),
            neighborhood: "Rehavia".into(),
            city: " ".into(),
            ..Default::default()
        };
        assert_eq!(p.location_line(), "14 Metudela St • Rehavia");
    }
}
