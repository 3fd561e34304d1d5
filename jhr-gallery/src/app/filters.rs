//! Scripted filter-panel session on the tokio scheduler
//!
//! Plays a list of panel edits against [`FilterSync`], waits out the
//! configured debounce, applies each URL replacement the way a browser
//! would, then lists whatever the settled query selects.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::time::Instant;

use crate::app::listings::{ListingRow, query_listings};
use crate::domains::listings::{
    FilterMessage, FilterSync, ListingSource, NavigationRequest,
};
use crate::infra::config::GalleryConfig;
use crate::infra::scheduler::TokioScheduler;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterReport {
    /// URL replacements requested by the panel, in order.
    pub navigations: Vec<NavigationRequest>,
    /// Time from the last edit until the URL stopped changing.
    pub settled_after: Duration,
    /// Query of the page once settled, without the leading `?`.
    pub query: String,
    pub rows: Vec<ListingRow>,
}

pub async fn run_filter_session(
    source: &dyn ListingSource,
    config: &GalleryConfig,
    path: &str,
    query: &str,
    edits: Vec<FilterMessage>,
) -> anyhow::Result<FilterReport> {
    let (scheduler, mut fired_rx) = TokioScheduler::from_current()?;
    let mut sync = FilterSync::new(path, query, config.filter_debounce(), Arc::new(scheduler));
    let mut navigations = Vec::new();

    for edit in edits {
        log::debug!("filter panel: {edit:?}");
        if let Some(request) = sync.update(edit) {
            navigate(&mut sync, request, &mut navigations);
        }
    }

    let edited_at = Instant::now();
    while sync.pending_timer().is_some() {
        let fired = fired_rx
            .recv()
            .await
            .context("filter debounce timer channel closed")?;
        if let Some(request) = sync.update(FilterMessage::TimerFired(fired.id)) {
            navigate(&mut sync, request, &mut navigations);
        }
    }
    let settled_after = edited_at.elapsed();

    let query = sync.params_key().to_owned();
    let rows = query_listings(source, &query)
        .await
        .with_context(|| format!("listing query {query:?}"))?;

    Ok(FilterReport {
        navigations,
        settled_after,
        query,
        rows,
    })
}

/// Performs a replace and reports the new query back, as the page would.
fn navigate(
    sync: &mut FilterSync,
    request: NavigationRequest,
    navigations: &mut Vec<NavigationRequest>,
) {
    let query = request
        .target()
        .split_once('?')
        .map_or("", |(_, query)| query)
        .to_owned();
    log::info!("url replaced with {}", request.target());
    navigations.push(request);
    sync.update(FilterMessage::ParamsChanged(query));
}
