// MedConnect - app/state.rs
//
// Application state management. Holds the full provider list, the current
// view, search and filter state, favorites, and in-flight request tracking.
// Owned by the eframe::App implementation.

use crate::app::autocomplete::AutocompleteState;
use crate::app::favorites::Favorites;
use crate::app::source::{RequestKind, SourceResponse};
use crate::core::catalog::SPECIALTIES;
use crate::core::filter::{self, FilterCriteria};
use crate::core::model::Provider;

/// A request the caller must hand to the source worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: u64,
    pub kind: RequestKind,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Every provider returned by the last successful fetch.
    pub all_providers: Vec<Provider>,

    /// Providers currently displayed: `applied_filters` over the candidate pool.
    pub view: Vec<Provider>,

    /// Last submitted search text. Blank = no search.
    pub search_query: String,

    /// Result of the last completed search. None = pool is `all_providers`.
    search_results: Option<Vec<Provider>>,

    /// Criteria being edited in the filter panel.
    pub filters: FilterCriteria,

    /// Criteria the current view was built with.
    applied_filters: FilterCriteria,

    /// Bookmarked providers, persisted on every change.
    pub favorites: Favorites,

    /// Search box and suggestion dropdown.
    pub autocomplete: AutocompleteState,

    /// Whether a fetch or search is in flight.
    pub loading: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether the favorites window is open.
    pub show_favorites: bool,

    /// Whether the filter panel body is expanded.
    pub filters_expanded: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    /// Id handed to the next request.
    next_request_id: u64,

    /// Fetch still in flight. Only a reply carrying this id is applied.
    pending_fetch: Option<u64>,

    /// Newest search still in flight. Older search replies are dropped.
    latest_search: Option<u64>,
}

impl AppState {
    /// Create initial state with restored favorites and no providers loaded.
    pub fn new(favorites: Favorites, debug_mode: bool) -> Self {
        Self {
            all_providers: Vec::new(),
            view: Vec::new(),
            search_query: String::new(),
            search_results: None,
            filters: FilterCriteria::default(),
            applied_filters: FilterCriteria::default(),
            favorites,
            autocomplete: AutocompleteState::new(SPECIALTIES),
            loading: false,
            status_message: "Ready.".to_string(),
            show_favorites: false,
            filters_expanded: true,
            debug_mode,
            next_request_id: 1,
            pending_fetch: None,
            latest_search: None,
        }
    }

    // -------------------------------------------------------------------------
    // Source requests
    // -------------------------------------------------------------------------

    /// Start loading the full provider list.
    pub fn begin_fetch(&mut self) -> PendingRequest {
        self.status_message = "Loading doctors...".to_string();
        self.issue(RequestKind::FetchAll)
    }

    /// Start a name search.
    ///
    /// A blank query clears the search synchronously and returns None; a
    /// search still in flight is superseded, a pending fetch is not.
    pub fn begin_search(&mut self, query: &str) -> Option<PendingRequest> {
        self.search_query = query.to_string();

        if query.trim().is_empty() {
            self.search_results = None;
            self.latest_search = None;
            self.sync_loading();
            self.refresh_view();
            self.status_message = "Search cleared.".to_string();
            return None;
        }

        self.status_message = format!("Searching for \"{}\"...", query.trim());
        Some(self.issue(RequestKind::Search {
            query: query.to_string(),
        }))
    }

    fn issue(&mut self, kind: RequestKind) -> PendingRequest {
        let id = self.next_request_id;
        self.next_request_id += 1;
        *self.slot_for(&kind) = Some(id);
        self.sync_loading();
        PendingRequest { id, kind }
    }

    /// Fetches and searches are tracked separately: a request only
    /// supersedes older requests of the same kind.
    fn slot_for(&mut self, kind: &RequestKind) -> &mut Option<u64> {
        match kind {
            RequestKind::FetchAll => &mut self.pending_fetch,
            RequestKind::Search { .. } => &mut self.latest_search,
        }
    }

    fn sync_loading(&mut self) {
        self.loading = self.pending_fetch.is_some() || self.latest_search.is_some();
    }

    /// Apply a worker reply. Returns false when the reply was superseded.
    ///
    /// A failed reply is logged and leaves the view unchanged.
    pub fn handle_response(&mut self, response: SourceResponse) -> bool {
        let slot = self.slot_for(&response.kind);
        if *slot != Some(response.request_id) {
            tracing::debug!(
                request_id = response.request_id,
                latest = ?*slot,
                "Dropping superseded source response"
            );
            return false;
        }
        *slot = None;
        self.sync_loading();

        match (response.kind, response.result) {
            (RequestKind::FetchAll, Ok(providers)) => {
                tracing::info!(count = providers.len(), "Providers loaded");
                self.all_providers = providers;
                self.refresh_view();
                self.status_message = format!("Loaded {} doctors.", self.all_providers.len());
            }
            (RequestKind::Search { query }, Ok(results)) => {
                tracing::info!(query = %query, hits = results.len(), "Search complete");
                self.search_results = Some(results);
                self.refresh_view();
                self.status_message = format!("Search complete: {} match(es).", self.view.len());
            }
            (kind, Err(e)) => {
                tracing::error!(operation = ?kind, error = %e, "Source request failed");
                self.status_message = format!("Request failed: {e}");
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------------

    /// Rebuild the view from the candidate pool with the edited criteria.
    pub fn apply_filters(&mut self) {
        self.applied_filters = self.filters.clone();
        self.refresh_view();
        tracing::debug!(
            active = self.applied_filters.active_count(),
            sort = %self.applied_filters.sort_by,
            shown = self.view.len(),
            "Filters applied"
        );
    }

    /// Clear all criteria and show the unfiltered candidate pool.
    pub fn reset_filters(&mut self) {
        self.filters = FilterCriteria::default();
        self.applied_filters = FilterCriteria::default();
        self.refresh_view();
    }

    /// Criteria the current view was built with.
    pub fn applied_filters(&self) -> &FilterCriteria {
        &self.applied_filters
    }

    /// Search results when a search is active, otherwise every provider.
    pub fn candidate_pool(&self) -> &[Provider] {
        match self.search_results {
            Some(ref results) if !self.search_query.trim().is_empty() => results,
            _ => &self.all_providers,
        }
    }

    fn refresh_view(&mut self) {
        self.view = filter::apply_filters(self.candidate_pool(), &self.applied_filters);
    }

    // -------------------------------------------------------------------------
    // Favorites
    // -------------------------------------------------------------------------

    /// Toggle `id` in the favorite set. Returns true if it is now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }

    /// Favorite providers, in catalog order.
    pub fn favorite_providers(&self) -> Vec<Provider> {
        self.favorites.select(&self.all_providers)
    }

    // -------------------------------------------------------------------------
    // Display helpers
    // -------------------------------------------------------------------------

    /// Heading above the result list.
    pub fn result_heading(&self) -> String {
        if self.loading {
            "Finding doctors...".to_string()
        } else {
            format!("{} Doctors Found", self.view.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::builtin_providers;
    use crate::core::model::SortMode;
    use crate::platform::storage::MemoryStore;
    use crate::util::error::SourceError;

    fn new_state() -> AppState {
        AppState::new(Favorites::load(Box::new(MemoryStore::new())), false)
    }

    fn loaded_state() -> AppState {
        let mut state = new_state();
        let req = state.begin_fetch();
        assert!(state.handle_response(SourceResponse {
            request_id: req.id,
            kind: req.kind,
            result: Ok(builtin_providers()),
        }));
        state
    }

    fn search_reply(req: &PendingRequest, hits: Vec<Provider>) -> SourceResponse {
        SourceResponse {
            request_id: req.id,
            kind: req.kind.clone(),
            result: Ok(hits),
        }
    }

    fn ids(providers: &[Provider]) -> Vec<&str> {
        providers.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_fetch_populates_list_and_view() {
        let mut state = new_state();
        let req = state.begin_fetch();
        assert!(state.loading);
        assert_eq!(state.result_heading(), "Finding doctors...");

        state.handle_response(SourceResponse {
            request_id: req.id,
            kind: req.kind,
            result: Ok(builtin_providers()),
        });
        assert!(!state.loading);
        assert_eq!(state.all_providers.len(), 8);
        assert_eq!(state.view.len(), 8);
        assert_eq!(state.result_heading(), "8 Doctors Found");
    }

    #[test]
    fn test_failed_fetch_leaves_view_unchanged() {
        let mut state = new_state();
        let req = state.begin_fetch();
        state.handle_response(SourceResponse {
            request_id: req.id,
            kind: req.kind,
            result: Err(SourceError::Unavailable {
                operation: "fetch",
                reason: "offline".to_string(),
            }),
        });
        assert!(!state.loading);
        assert!(state.view.is_empty());
        assert!(state.status_message.contains("offline"));
    }

    #[test]
    fn test_superseded_search_is_dropped() {
        let mut state = loaded_state();
        let first = state.begin_search("sarah").unwrap();
        let second = state.begin_search("chen").unwrap();
        assert_ne!(first.id, second.id);

        let providers = builtin_providers();
        let chen = vec![providers[1].clone()];
        let sarah = vec![providers[0].clone()];

        // Latest reply arrives first, stale one afterwards.
        assert!(state.handle_response(search_reply(&second, chen)));
        assert!(!state.handle_response(search_reply(&first, sarah)));
        assert_eq!(ids(&state.view), vec!["2"]);
    }

    #[test]
    fn test_stale_reply_before_latest_keeps_loading() {
        let mut state = loaded_state();
        let first = state.begin_search("sarah").unwrap();
        let _second = state.begin_search("chen").unwrap();
        assert!(!state.handle_response(search_reply(&first, Vec::new())));
        assert!(state.loading, "latest request is still in flight");
    }

    #[test]
    fn test_blank_search_restores_full_list_and_supersedes() {
        let mut state = loaded_state();
        let pending = state.begin_search("chen").unwrap();
        assert!(state.begin_search("   ").is_none());
        assert!(!state.loading);
        assert_eq!(state.view.len(), 8);
        assert!(!state.handle_response(search_reply(&pending, Vec::new())));
        assert_eq!(state.view.len(), 8);
    }

    #[test]
    fn test_blank_search_during_fetch_keeps_fetch() {
        let mut state = new_state();
        let fetch = state.begin_fetch();
        assert!(state.begin_search("").is_none());
        assert!(state.loading, "fetch is still in flight");

        assert!(state.handle_response(SourceResponse {
            request_id: fetch.id,
            kind: fetch.kind,
            result: Ok(builtin_providers()),
        }));
        assert!(!state.loading);
        assert_eq!(state.all_providers.len(), 8);
        assert_eq!(state.view.len(), 8);
    }

    #[test]
    fn test_search_during_fetch_keeps_both_replies() {
        let fetch_reply = |req: &PendingRequest| SourceResponse {
            request_id: req.id,
            kind: req.kind.clone(),
            result: Ok(builtin_providers()),
        };
        let chen = vec![builtin_providers()[1].clone()];

        // Search reply first, then the fetch.
        let mut state = new_state();
        let fetch = state.begin_fetch();
        let search = state.begin_search("chen").unwrap();
        assert!(state.handle_response(search_reply(&search, chen.clone())));
        assert!(state.loading);
        assert!(state.handle_response(fetch_reply(&fetch)));
        assert!(!state.loading);
        assert_eq!(state.all_providers.len(), 8);
        assert_eq!(ids(&state.view), vec!["2"]);

        // Fetch reply first, then the search.
        let mut state = new_state();
        let fetch = state.begin_fetch();
        let search = state.begin_search("chen").unwrap();
        assert!(state.handle_response(fetch_reply(&fetch)));
        assert!(state.handle_response(search_reply(&search, chen)));
        assert_eq!(ids(&state.view), vec!["2"]);

        state.toggle_favorite("5");
        assert_eq!(ids(&state.favorite_providers()), vec!["5"]);
        assert!(state.begin_search(" ").is_none());
        assert_eq!(state.view.len(), 8);
    }

    #[test]
    fn test_newer_fetch_supersedes_older_fetch() {
        let mut state = new_state();
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        let reply = |req: &PendingRequest| SourceResponse {
            request_id: req.id,
            kind: req.kind.clone(),
            result: Ok(builtin_providers()),
        };
        assert!(!state.handle_response(reply(&first)));
        assert!(state.loading);
        assert!(state.handle_response(reply(&second)));
        assert!(!state.loading);
    }

    #[test]
    fn test_filters_narrow_search_results() {
        let mut state = loaded_state();
        let req = state.begin_search("dr.").unwrap();
        let all = builtin_providers();
        let hits = vec![all[0].clone(), all[3].clone(), all[4].clone()];
        state.handle_response(search_reply(&req, hits));
        assert_eq!(state.view.len(), 3);

        state.filters.set_specialty("Cardiology");
        state.apply_filters();
        assert_eq!(ids(&state.view), vec!["1"]);

        state.reset_filters();
        assert_eq!(ids(&state.view), vec!["1", "4", "5"]);
        assert_eq!(state.filters, FilterCriteria::default());
    }

    #[test]
    fn test_apply_twice_does_not_compound() {
        let mut state = loaded_state();
        state.filters.set_location("Los Angeles");
        state.apply_filters();
        state.apply_filters();
        assert_eq!(ids(&state.view), vec!["3", "8"]);

        state.filters.set_location("Boston");
        state.apply_filters();
        assert_eq!(ids(&state.view), vec!["2"]);
    }

    #[test]
    fn test_applied_filters_survive_new_search() {
        let mut state = loaded_state();
        state.filters.accepting_new_patients = true;
        state.filters.sort_by = SortMode::HighestRated;
        state.apply_filters();

        let req = state.begin_search("o").unwrap();
        let all = builtin_providers();
        // Wilson (not accepting) and Rodriguez (accepting).
        state.handle_response(search_reply(&req, vec![all[2].clone(), all[3].clone()]));
        assert_eq!(ids(&state.view), vec!["4"]);
    }

    #[test]
    fn test_favorite_providers_follow_toggles() {
        let mut state = loaded_state();
        assert!(state.toggle_favorite("4"));
        assert!(state.toggle_favorite("1"));
        assert!(state.is_favorite("4"));
        assert_eq!(state.favorites_count(), 2);
        assert_eq!(ids(&state.favorite_providers()), vec!["1", "4"]);

        assert!(!state.toggle_favorite("4"));
        assert_eq!(ids(&state.favorite_providers()), vec!["1"]);
    }
}
