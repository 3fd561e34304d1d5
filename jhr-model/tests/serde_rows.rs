use jhr_model::{ListingFilters, Property, SortKey, apply_filters};

const UNITS_JSON: &str = r#"[
  {
    "id": "rehavia-12",
    "propertyName": "Metudela 14 • Unit 12",
    "neighborhood": "Rehavia",
    "street": "14 Metudela St",
    "city": "Jerusalem",
    "priceNIS": 7390500,
    "beds": 2.5,
    "baths": 2,
    "indoorSqm": 108.2,
    "outdoorSqm": 11,
    "broker_id": "b-1",
    "broker": { "id": "b-1", "name": "Dana Levi", "photoUrl": null },
    "heroImageUrl": "/pictures/rehavia-1/0.jpg",
    "backdropImageUrl": "/pictures/rehavia-1/1.jpg",
    "thumbImageUrl": "/pictures/rehavia-1/0.jpg"
  },
  {
    "id": "romema-1",
    "propertyName": "Pninat Chemed",
    "neighborhood": "Romema",
    "street": "Opposite Rav Shefa Mall",
    "city": "Jerusalem",
    "priceNIS": 16000000,
    "beds": 5,
    "baths": 3.5,
    "indoorSqm": 240,
    "broker_id": "b-2"
  }
]"#;

#[test]
fn units_rows_deserialize_with_hosted_field_names() {
    let rows: Vec<Property> = serde_json::from_str(UNITS_JSON).unwrap();
    assert_eq!(rows.len(), 2);

    let first = &rows[0];
    assert_eq!(first.id.as_str(), "rehavia-12");
    assert_eq!(first.price_nis, Some(7_390_500));
    assert_eq!(first.broker_id.as_str(), "b-1");
    let broker = first.broker.as_ref().unwrap();
    assert_eq!(broker.photo_path(), "defaultAvatar.jpg");

    let second = &rows[1];
    assert_eq!(second.outdoor_sqm, 0.0);
    assert!(second.broker.is_none());
    assert!(second.hero_image_url.is_empty());
}

#[test]
fn filters_from_url_drive_selection_and_order() {
    let rows: Vec<Property> = serde_json::from_str(UNITS_JSON).unwrap();
    let filters = ListingFilters::parse("?minBaths=2&sort=price_desc");
    assert_eq!(filters.sort_key(), SortKey::PriceDesc);

    let result = apply_filters(&rows, &filters);
    let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["romema-1", "rehavia-12"]);

    let filters = ListingFilters::parse("neighborhood=Rehavia");
    assert_eq!(apply_filters(&rows, &filters).len(), 1);
}

#[test]
fn filters_serialize_camel_case() {
    let filters = ListingFilters::parse("minPrice=100&neighborhood=Baka");
    let json = serde_json::to_value(&filters).unwrap();
    assert_eq!(json["minPrice"], "100");
    assert_eq!(json["neighborhoods"][0], "Baka");
}

#[test]
fn missing_or_null_price_means_on_request() {
    let rows: Vec<Property> = serde_json::from_str(
        r#"[
          {"id":"nachlaot","propertyName":"Artist House","neighborhood":"Nachlaot","street":"","city":"Jerusalem",
           "priceNIS":null,"beds":3,"baths":3,"indoorSqm":180,"broker_id":"b-1"},
          {"id":"nachlaot-2","propertyName":"Courtyard","neighborhood":"Nachlaot","street":"","city":"Jerusalem",
           "beds":4,"baths":2,"indoorSqm":150,"broker_id":"b-1"}
        ]"#,
    )
    .unwrap();
    assert!(rows.iter().all(|p| p.price_nis.is_none()));

    let bounded = ListingFilters::parse("maxPrice=1000");
    assert!(apply_filters(&rows, &bounded).is_empty());
}
