//! Listing filter panel state and its URL query-string encoding.
//!
//! The filter panel keeps every scalar field as the raw text the visitor
//! typed so the URL round-trips exactly what was entered. Numeric
//! interpretation happens only when filters are applied (see
//! [`crate::search`]).

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::error::{ModelError, Result};

/// Neighborhoods offered by the filter panel, in display order.
pub const NEIGHBORHOOD_OPTIONS: [&str; 10] = [
    "Rehavia",
    "Talbiya",
    "German Colony",
    "Greek Colony",
    "Ramot",
    "Nachlaot",
    "Romema",
    "Baka",
    "Old Katamon",
    "Arnona",
];

/// Query key used (repeated) for selected neighborhoods.
pub const NEIGHBORHOOD_PARAM: &str = "neighborhood";

/// Sort orders understood by the listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Source order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] =
        [SortKey::Default, SortKey::PriceAsc, SortKey::PriceDesc];

    /// Value written to the `sort` query parameter.
    pub fn param(self) -> &'static str {
        match self {
            SortKey::Default => "",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceAsc => "Price (low)",
            SortKey::PriceDesc => "Price (high)",
        }
    }

    /// Unknown values fall back to source order.
    pub fn from_param_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Ok(SortKey::Default),
            "price_asc" => Ok(SortKey::PriceAsc),
            "price_desc" => Ok(SortKey::PriceDesc),
            other => Err(ModelError::InvalidSortKey(other.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scalar (single-valued) filter fields in query-string order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Query,
    MinPrice,
    MaxPrice,
    MinBeds,
    MaxBeds,
    MinBaths,
    MaxBaths,
    Sort,
}

impl FilterField {
    pub const ALL: [FilterField; 8] = [
        FilterField::Query,
        FilterField::MinPrice,
        FilterField::MaxPrice,
        FilterField::MinBeds,
        FilterField::MaxBeds,
        FilterField::MinBaths,
        FilterField::MaxBaths,
        FilterField::Sort,
    ];

    pub fn param(self) -> &'static str {
        match self {
            FilterField::Query => "q",
            FilterField::MinPrice => "minPrice",
            FilterField::MaxPrice => "maxPrice",
            FilterField::MinBeds => "minBeds",
            FilterField::MaxBeds => "maxBeds",
            FilterField::MinBaths => "minBaths",
            FilterField::MaxBaths => "maxBaths",
            FilterField::Sort => "sort",
        }
    }
}

impl FromStr for FilterField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        FilterField::ALL
            .into_iter()
            .find(|field| field.param() == s)
            .ok_or_else(|| ModelError::UnknownField(s.to_owned()))
    }
}

/// Filter panel state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ListingFilters {
    pub q: String,
    pub min_price: String,
    pub max_price: String,
    pub min_beds: String,
    pub max_beds: String,
    pub min_baths: String,
    pub max_baths: String,
    pub sort: String,
    pub neighborhoods: Vec<String>,
}

impl ListingFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URL query (with or without the leading `?`).
    ///
    /// The first occurrence wins for scalar keys; every non-empty
    /// `neighborhood` value is kept in order.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut filters = Self::default();
        let mut seen = [false; FilterField::ALL.len()];

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key == NEIGHBORHOOD_PARAM {
                if !value.is_empty() {
                    filters.neighborhoods.push(value.into_owned());
                }
                continue;
            }
            let Ok(field) = key.parse::<FilterField>() else {
                continue;
            };
            let slot = field as usize;
            if !seen[slot] {
                seen[slot] = true;
                *filters.field_mut(field) = value.into_owned();
            }
        }

        filters
    }

    /// Re-encodes a raw URL query with the same escaping as
    /// [`to_query_string`](Self::to_query_string), keeping pair order.
    /// `q=old%20katamon` and `?q=old+katamon` both become `q=old+katamon`.
    pub fn canonical_query(raw: &str) -> String {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            serializer.append_pair(&key, &value);
        }
        serializer.finish()
    }

    /// Encodes the state as a form-urlencoded query without the leading `?`.
    ///
    /// Scalars are trimmed and omitted when empty; neighborhoods follow as
    /// repeated pairs.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for field in FilterField::ALL {
            let value = self.field(field).trim();
            if !value.is_empty() {
                serializer.append_pair(field.param(), value);
            }
        }
        for name in &self.neighborhoods {
            serializer.append_pair(NEIGHBORHOOD_PARAM, name);
        }
        serializer.finish()
    }

    pub fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Query => &self.q,
            FilterField::MinPrice => &self.min_price,
            FilterField::MaxPrice => &self.max_price,
            FilterField::MinBeds => &self.min_beds,
            FilterField::MaxBeds => &self.max_beds,
            FilterField::MinBaths => &self.min_baths,
            FilterField::MaxBaths => &self.max_baths,
            FilterField::Sort => &self.sort,
        }
    }

    fn field_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Query => &mut self.q,
            FilterField::MinPrice => &mut self.min_price,
            FilterField::MaxPrice => &mut self.max_price,
            FilterField::MinBeds => &mut self.min_beds,
            FilterField::MaxBeds => &mut self.max_beds,
            FilterField::MinBaths => &mut self.min_baths,
            FilterField::MaxBaths => &mut self.max_baths,
            FilterField::Sort => &mut self.sort,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Adds the neighborhood when absent (appending), removes it otherwise.
    pub fn toggle_neighborhood(&mut self, name: &str) {
        if let Some(pos) = self.neighborhoods.iter().position(|n| n == name) {
            self.neighborhoods.remove(pos);
        } else {
            self.neighborhoods.push(name.to_owned());
        }
    }

    pub fn is_neighborhood_selected(&self, name: &str) -> bool {
        self.neighborhoods.iter().any(|n| n == name)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_string().is_empty()
    }

    /// Summary shown on the collapsed neighborhood picker.
    pub fn neighborhood_summary(&self) -> String {
        match self.neighborhoods.len() {
            0 => "Any".to_owned(),
            1 | 2 => self.neighborhoods.join(", "),
            n => format!("{n} selected"),
        }
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::from_param_lenient(&self.sort)
    }

    /// Number of scalar fields plus neighborhoods that currently constrain
    /// results; sort does not count.
    pub fn active_count(&self) -> usize {
        FilterField::ALL
            .into_iter()
            .filter(|f| *f != FilterField::Sort)
            .filter(|f| !self.field(*f).trim().is_empty())
            .count()
            + self.neighborhoods.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_scalars_and_repeated_neighborhoods() {
        let f = ListingFilters::parse(
            "?q=garden&minPrice=2000000&neighborhood=Rehavia&neighborhood=&neighborhood=Old+Katamon&sort=price_desc",
        );
        assert_eq!(f.q, "garden");
        assert_eq!(f.min_price, "2000000");
        assert_eq!(f.max_price, "");
        assert_eq!(f.sort_key(), SortKey::PriceDesc);
        assert_eq!(f.neighborhoods, vec!["Rehavia", "Old Katamon"]);
    }

    #[test]
    fn first_scalar_occurrence_wins() {
        let f = ListingFilters::parse("q=one&q=two");
        assert_eq!(f.q, "one");
    }

    #[test]
    fn query_string_is_ordered_trimmed_and_sparse() {
        let mut f = ListingFilters::new();
        f.set(FilterField::Sort, "price_asc");
        f.set(FilterField::Query, "  rooftop garden ");
        f.set(FilterField::MaxBeds, "   ");
        f.toggle_neighborhood("German Colony");
        assert_eq!(
            f.to_query_string(),
            "q=rooftop+garden&sort=price_asc&neighborhood=German+Colony"
        );
    }

    #[test]
    fn canonical_query_normalizes_escapes_but_not_order() {
        assert_eq!(ListingFilters::canonical_query("?q=old%20katamon"), "q=old+katamon");
        assert_eq!(ListingFilters::canonical_query("q=old+katamon"), "q=old+katamon");
        assert_eq!(
            ListingFilters::canonical_query("sort=price_asc&q=%D7%91%D7%A7%D7%A2%D7%94"),
            "sort=price_asc&q=%D7%91%D7%A7%D7%A2%D7%94"
        );
        assert_eq!(ListingFilters::canonical_query(""), "");
        assert_eq!(ListingFilters::canonical_query("?"), "");
        let f = ListingFilters::parse("q=old%20katamon&neighborhood=German%20Colony");
        assert_eq!(
            f.to_query_string(),
            ListingFilters::canonical_query("q=old%20katamon&neighborhood=German%20Colony")
        );
    }

    #[test]
    fn empty_state_encodes_to_empty_string() {
        assert_eq!(ListingFilters::new().to_query_string(), "");
        assert!(ListingFilters::new().is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut f = ListingFilters::new();
        f.toggle_neighborhood("Baka");
        f.toggle_neighborhood("Ramot");
        assert_eq!(f.neighborhoods, vec!["Baka", "Ramot"]);
        f.toggle_neighborhood("Baka");
        assert_eq!(f.neighborhoods, vec!["Ramot"]);
        assert!(!f.is_neighborhood_selected("Baka"));
    }

    #[test]
    fn neighborhood_summary_variants() {
        let mut f = ListingFilters::new();
        assert_eq!(f.neighborhood_summary(), "Any");
        f.toggle_neighborhood("Baka");
        assert_eq!(f.neighborhood_summary(), "Baka");
        f.toggle_neighborhood("Ramot");
        assert_eq!(f.neighborhood_summary(), "Baka, Ramot");
        f.toggle_neighborhood("Arnona");
        assert_eq!(f.neighborhood_summary(), "3 selected");
    }

    #[test]
    fn sort_key_parsing() {
        assert_eq!("price_asc".parse::<SortKey>(), Ok(SortKey::PriceAsc));
        assert!(matches!(
            "cheapest".parse::<SortKey>(),
            Err(ModelError::InvalidSortKey(_))
        ));
        assert_eq!(SortKey::from_param_lenient("cheapest"), SortKey::Default);
    }

    #[test]
    fn active_count_ignores_sort() {
        let mut f = ListingFilters::new();
        f.set(FilterField::Sort, "price_asc");
        assert_eq!(f.active_count(), 0);
        f.set(FilterField::MinBeds, "2");
        f.toggle_neighborhood("Talbiya");
        assert_eq!(f.active_count(), 2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut f = ListingFilters::parse("q=x&neighborhood=Baka");
        f.clear();
        assert_eq!(f, ListingFilters::default());
    }
}
