//! Filter panel state kept in step with the page URL
//!
//! The URL query is the source of truth. Edits are re-encoded after every
//! change; when the encoding differs from the current query a single
//! debounce timer is (re)armed, and when it fires the host is asked to
//! replace the URL. The host reports the new query back with
//! [`FilterMessage::ParamsChanged`].

use std::time::Duration;

use jhr_model::{FilterField, ListingFilters};

use crate::infra::scheduler::{SharedScheduler, TimerId, TimerMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMessage {
    /// The page URL query changed (navigation, back button, our own replace).
    ParamsChanged(String),
    Edit(FilterField, String),
    ToggleNeighborhood(String),
    Clear,
    TimerFired(TimerId),
}

/// Navigation the host should perform. Replacing never adds a history
/// entry and never scrolls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    Replace(String),
}

impl NavigationRequest {
    pub fn target(&self) -> &str {
        match self {
            NavigationRequest::Replace(target) => target,
        }
    }
}

#[derive(Debug)]
pub struct FilterSync {
    path: String,
    params_key: String,
    filters: ListingFilters,
    debounce: Duration,
    pending: Option<TimerId>,
    scheduler: SharedScheduler,
}

impl FilterSync {
    pub fn new(
        path: impl Into<String>,
        params_key: impl Into<String>,
        debounce: Duration,
        scheduler: SharedScheduler,
    ) -> Self {
        let params_key = normalize_key(&params_key.into());
        Self {
            path: path.into(),
            filters: ListingFilters::parse(&params_key),
            params_key,
            debounce,
            pending: None,
            scheduler,
        }
    }

    pub fn filters(&self) -> &ListingFilters {
        &self.filters
    }

    pub fn params_key(&self) -> &str {
        &self.params_key
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    pub fn update(&mut self, message: FilterMessage) -> Option<NavigationRequest> {
        match message {
            FilterMessage::ParamsChanged(query) => {
                self.params_key = normalize_key(&query);
                self.filters = ListingFilters::parse(&self.params_key);
                self.reconcile();
                None
            }
            FilterMessage::Edit(field, value) => {
                self.filters.set(field, value);
                self.reconcile();
                None
            }
            FilterMessage::ToggleNeighborhood(name) => {
                self.filters.toggle_neighborhood(&name);
                self.reconcile();
                None
            }
            FilterMessage::Clear => Some(self.clear()),
            FilterMessage::TimerFired(id) => {
                if self.pending != Some(id) {
                    log::trace!("filter sync ignoring stale {id}");
                    return None;
                }
                self.pending = None;
                let request = NavigationRequest::Replace(self.target());
                log::debug!("filter sync replacing url with {}", request.target());
                Some(request)
            }
        }
    }

    /// Resets every filter and navigates to the bare path right away.
    pub fn clear(&mut self) -> NavigationRequest {
        self.cancel_pending();
        self.filters.clear();
        NavigationRequest::Replace(self.path.clone())
    }

    fn target(&self) -> String {
        let query = self.filters.to_query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query)
        }
    }

    fn reconcile(&mut self) {
        self.cancel_pending();
        if self.filters.to_query_string() != self.params_key {
            self.pending = Some(self.scheduler.arm(self.debounce, TimerMode::Once));
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl Drop for FilterSync {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

fn normalize_key(query: &str) -> String {
    ListingFilters::canonical_query(query)
}
