//! Listing query helper for the binary

use std::fmt;

use jhr_model::{ListingFilters, Property, sqm_to_sqft};

use crate::domains::listings::{ListingError, ListingSource};

/// Shekel price with thousands separators.
pub fn format_price(price_nis: Option<u64>) -> String {
    let Some(price_nis) = price_nis else {
        return "Price on request".to_owned();
    };
    let digits = price_nis.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₪');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One line of the listing table.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub id: String,
    pub name: String,
    pub location: String,
    pub price: String,
    pub beds: f32,
    pub baths: f32,
    pub total_sqm: f32,
    pub broker: Option<String>,
}

impl From<&Property> for ListingRow {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.to_string(),
            name: property.property_name.clone(),
            location: property.location_line(),
            price: format_price(property.price_nis),
            beds: property.beds,
            baths: property.baths,
            total_sqm: property.total_sqm(),
            broker: property.broker.as_ref().map(|b| b.name.clone()),
        }
    }
}

impl fmt::Display for ListingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {} | {} | {} | {} bd / {} ba | {} m² ({} ft²)",
            self.id,
            self.name,
            self.location,
            self.price,
            self.beds,
            self.baths,
            self.total_sqm,
            sqm_to_sqft(self.total_sqm),
        )?;
        if let Some(broker) = &self.broker {
            write!(f, " | {broker}")?;
        }
        Ok(())
    }
}

/// Runs a listings-page query string against `source`.
pub async fn query_listings(
    source: &dyn ListingSource,
    query: &str,
) -> Result<Vec<ListingRow>, ListingError> {
    let filters = ListingFilters::parse(query);
    let properties = source.list_properties(&filters).await?;
    Ok(properties.iter().map(ListingRow::from).collect())
}
