//! Applying [`ListingFilters`] to an in-memory list of listings.

use crate::error::{ModelError, Result};
use crate::filters::{FilterField, ListingFilters, SortKey};
use crate::property::Property;

fn parse_bound(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '₪' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
}

/// Rejects numeric fields that are non-blank but not numbers.
pub fn validate_numbers(filters: &ListingFilters) -> Result<()> {
    for field in FilterField::ALL {
        if matches!(field, FilterField::Query | FilterField::Sort) {
            continue;
        }
        let raw = filters.field(field);
        if !raw.trim().is_empty() && parse_bound(raw).is_none() {
            return Err(ModelError::InvalidNumber {
                field: field.param(),
                value: raw.to_owned(),
            });
        }
    }
    Ok(())
}

/// Whether a single listing satisfies every active filter.
///
/// Blank or unparsable numeric bounds are ignored; bounds are inclusive.
/// Listings without a published price never satisfy a price bound.
pub fn matches_filters(property: &Property, filters: &ListingFilters) -> bool {
    let q = filters.q.trim().to_lowercase();
    if !q.is_empty() {
        let haystack = format!(
            "{} {} {} {}",
            property.property_name,
            property.neighborhood,
            property.street,
            property.city
        )
        .to_lowercase();
        if !haystack.contains(&q) {
            return false;
        }
    }

    if !filters.neighborhoods.is_empty()
        && !filters
            .neighborhoods
            .iter()
            .any(|n| n.eq_ignore_ascii_case(&property.neighborhood))
    {
        return false;
    }

    let (min_price, max_price) =
        (parse_bound(&filters.min_price), parse_bound(&filters.max_price));
    let price_ok = match property.price_nis {
        Some(price) => within(price as f64, min_price, max_price),
        None => min_price.is_none() && max_price.is_none(),
    };

    price_ok
        && within(
            property.beds as f64,
            parse_bound(&filters.min_beds),
            parse_bound(&filters.max_beds),
        )
        && within(
            property.baths as f64,
            parse_bound(&filters.min_baths),
            parse_bound(&filters.max_baths),
        )
}

/// Stable sort by price; [`SortKey::Default`] keeps source order.
/// Unpriced listings go last in either direction.
pub fn sort_properties(properties: &mut [Property], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => {
            properties.sort_by_key(|p| (p.price_nis.is_none(), p.price_nis))
        }
        SortKey::PriceDesc => properties.sort_by_key(|p| {
            (p.price_nis.is_none(), std::cmp::Reverse(p.price_nis))
        }),
    }
}

/// Filters then sorts a copy of `properties`.
pub fn apply_filters(
    properties: &[Property],
    filters: &ListingFilters,
) -> Vec<Property> {
    let mut out: Vec<Property> = properties
        .iter()
        .filter(|p| matches_filters(p, filters))
        .cloned()
        .collect();
    sort_properties(&mut out, filters.sort_key());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PropertyId;

    fn listing(id: &str, hood: &str, price: u64, beds: f32, baths: f32) -> Property {
        Property {
            id: PropertyId::new(id),
            property_name: format!("{hood} residence"),
            neighborhood: hood.into(),
            street: "Main St".into(),
            city: "Jerusalem".into(),
            price_nis: Some(price),
            beds,
            baths,
            ..Default::default()
        }
    }

    #[test]
    fn bounds_are_inclusive_and_lenient() {
        let p = listing("a", "Rehavia", 7_390_500, 3.0, 2.0);
        let mut f = ListingFilters::parse("minPrice=7,390,500&maxBeds=3");
        assert!(matches_filters(&p, &f));
        f.min_price = "7390501".into();
        assert!(!matches_filters(&p, &f));
        f.min_price = "lots".into();
        assert!(matches_filters(&p, &f));
    }

    #[test]
    fn neighborhood_membership_is_required_when_selected() {
        let p = listing("a", "Romema", 1, 1.0, 1.0);
        let f = ListingFilters::parse("neighborhood=Rehavia&neighborhood=Romema");
        assert!(matches_filters(&p, &f));
        let f = ListingFilters::parse("neighborhood=Baka");
        assert!(!matches_filters(&p, &f));
    }

    #[test]
    fn text_query_is_case_insensitive() {
        let p = listing("a", "Nachlaot", 1, 1.0, 1.0);
        assert!(matches_filters(&p, &ListingFilters::parse("q=NACHL")));
        assert!(matches_filters(&p, &ListingFilters::parse("q=jerusalem")));
        assert!(!matches_filters(&p, &ListingFilters::parse("q=tel+aviv")));
    }

    #[test]
    fn sort_is_stable_and_defaults_to_source_order() {
        let list = vec![
            listing("a", "Baka", 5, 1.0, 1.0),
            listing("b", "Baka", 3, 1.0, 1.0),
            listing("c", "Baka", 5, 1.0, 1.0),
        ];
        let ids = |v: Vec<Property>| {
            v.into_iter().map(|p| p.id.0).collect::<Vec<_>>()
        };
        assert_eq!(ids(apply_filters(&list, &ListingFilters::new())), ["a", "b", "c"]);
        assert_eq!(
            ids(apply_filters(&list, &ListingFilters::parse("sort=price_asc"))),
            ["b", "a", "c"]
        );
        assert_eq!(
            ids(apply_filters(&list, &ListingFilters::parse("sort=price_desc"))),
            ["a", "c", "b"]
        );
    }

    #[test]
    fn unpriced_listings_fail_price_bounds_and_sort_last() {
        let mut on_request = listing("r", "Nachlaot", 0, 3.0, 3.0);
        on_request.price_nis = None;
        let list = vec![
            on_request,
            listing("a", "Baka", 5, 1.0, 1.0),
            listing("b", "Baka", 3, 1.0, 1.0),
        ];
        let ids = |v: Vec<Property>| {
            v.into_iter().map(|p| p.id.0).collect::<Vec<_>>()
        };
        assert_eq!(ids(apply_filters(&list, &ListingFilters::parse("maxPrice=1000"))), ["a", "b"]);
        assert_eq!(ids(apply_filters(&list, &ListingFilters::parse("minPrice=1"))), ["a", "b"]);
        assert_eq!(ids(apply_filters(&list, &ListingFilters::parse("minBeds=3"))), ["r"]);
        assert_eq!(
            ids(apply_filters(&list, &ListingFilters::parse("sort=price_asc"))),
            ["b", "a", "r"]
        );
        assert_eq!(
            ids(apply_filters(&list, &ListingFilters::parse("sort=price_desc"))),
            ["a", "b", "r"]
        );
    }

    #[test]
    fn validate_flags_garbage_numbers() {
        assert!(validate_numbers(&ListingFilters::parse("minBeds=2&maxPrice=8,000,000")).is_ok());
        assert_eq!(
            validate_numbers(&ListingFilters::parse("minBaths=two")),
            Err(ModelError::InvalidNumber {
                field: "minBaths",
                value: "two".into()
            })
        );
    }
}
