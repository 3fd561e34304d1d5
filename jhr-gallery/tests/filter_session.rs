use std::time::Duration;

use jhr_gallery::app::run_filter_session;
use jhr_gallery::{FilterMessage, GalleryConfig, NavigationRequest, StaticCatalog};
use jhr_model::FilterField;

fn debounced(ms: u64) -> GalleryConfig {
    GalleryConfig {
        filter_debounce_ms: ms,
        ..GalleryConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn edits_replace_the_url_after_the_configured_debounce() {
    let catalog = StaticCatalog::jerusalem();
    let report = run_filter_session(
        &catalog,
        &debounced(350),
        "/listings",
        "",
        vec![
            FilterMessage::Edit(FilterField::MinBeds, "4".into()),
            FilterMessage::Edit(FilterField::Sort, "price_asc".into()),
        ],
    )
    .await
    .unwrap();

    assert_eq!(
        report.navigations,
        vec![NavigationRequest::Replace("/listings?minBeds=4&sort=price_asc".into())]
    );
    assert!(report.settled_after >= Duration::from_millis(350));
    assert!(report.settled_after < Duration::from_millis(400));
    assert_eq!(report.query, "minBeds=4&sort=price_asc");
    let ids: Vec<_> = report.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["rehavia-2", "romema-1"]);
}

#[tokio::test(start_paused = true)]
async fn longer_debounce_is_honoured() {
    let catalog = StaticCatalog::jerusalem();
    let report = run_filter_session(
        &catalog,
        &debounced(1_500),
        "/listings",
        "",
        vec![FilterMessage::ToggleNeighborhood("Nachlaot".into())],
    )
    .await
    .unwrap();

    assert!(report.settled_after >= Duration::from_millis(1_500));
    assert_eq!(report.query, "neighborhood=Nachlaot");
    assert_eq!(report.rows.len(), 3);
    assert!(report.rows.iter().all(|r| r.location.contains("Nachlaot")));
}

#[tokio::test(start_paused = true)]
async fn unedited_page_keeps_its_url() {
    let catalog = StaticCatalog::jerusalem();
    let report = run_filter_session(
        &catalog,
        &GalleryConfig::default(),
        "/listings",
        "?neighborhood=German%20Colony",
        Vec::new(),
    )
    .await
    .unwrap();

    assert!(report.navigations.is_empty());
    assert_eq!(report.settled_after, Duration::ZERO);
    assert_eq!(report.query, "neighborhood=German+Colony");
}
