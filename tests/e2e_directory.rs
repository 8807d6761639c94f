// MedConnect - tests/e2e_directory.rs
//
// End-to-end tests for the directory pipeline.
//
// These tests exercise the real catalog source on its background worker,
// the real state transitions, and the real file-backed favorites store
// under a temporary directory. No mocks.

use medconnect::app::favorites::Favorites;
use medconnect::app::source::{CatalogSource, Latency, SourceWorker};
use medconnect::app::state::AppState;
use medconnect::core::catalog::{builtin_providers, SPECIALTIES};
use medconnect::core::filter::{apply_filters, FilterCriteria};
use medconnect::core::model::SortMode;
use medconnect::core::search::suggestions;
use medconnect::platform::storage::{storage_path, FileStore};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

const REPLY_TIMEOUT: Duration = Duration::from_secs(10);

/// State with a file-backed favorites store under `dir`.
fn state_in(dir: &TempDir) -> AppState {
    let store = FileStore::open(storage_path(dir.path()));
    AppState::new(Favorites::load(Box::new(store)), false)
}

/// Worker over the built-in catalog with a short simulated delay.
fn worker() -> SourceWorker {
    let latency = Latency {
        fetch: Duration::from_millis(20),
        search: Duration::from_millis(10),
    };
    SourceWorker::new(Arc::new(CatalogSource::new(latency)))
}

/// Drain replies until the state has nothing in flight.
fn settle(state: &mut AppState, worker: &SourceWorker) {
    while state.loading {
        let reply = worker
            .wait_response(REPLY_TIMEOUT)
            .expect("source worker should reply");
        state.handle_response(reply);
    }
}

fn loaded(dir: &TempDir, worker: &SourceWorker) -> AppState {
    let mut state = state_in(dir);
    let request = state.begin_fetch();
    worker.submit(request.id, request.kind);
    settle(&mut state, worker);
    state
}

fn ids(state: &AppState) -> Vec<&str> {
    state.view.iter().map(|p| p.id.as_str()).collect()
}

// =============================================================================
// Fetch / search / filter
// =============================================================================

#[test]
fn e2e_fetch_loads_full_catalog() {
    let dir = TempDir::new().unwrap();
    let worker = worker();
    let state = loaded(&dir, &worker);

    assert_eq!(state.all_providers.len(), 8);
    assert_eq!(state.view, builtin_providers());
    assert_eq!(state.result_heading(), "8 Doctors Found");
}

#[test]
fn e2e_cardiology_then_accepting() {
    let dir = TempDir::new().unwrap();
    let worker = worker();
    let mut state = loaded(&dir, &worker);

    state.filters.specialty = Some("Cardiology".to_string());
    state.apply_filters();

    let expected: Vec<&str> = state
        .all_providers
        .iter()
        .filter(|p| {
            p.specialty == "Cardiology" || p.subspecialty.as_deref() == Some("Cardiology")
        })
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids(&state), expected);
    assert_eq!(ids(&state), vec!["1"]);

    state.filters.accepting_new_patients = true;
    state.apply_filters();
    assert!(state.view.iter().all(|p| p.accepting_new_patients));
    assert_eq!(ids(&state), vec!["1"]);
}

#[test]
fn e2e_search_then_filter_then_clear() {
    let dir = TempDir::new().unwrap();
    let worker = worker();
    let mut state = loaded(&dir, &worker);

    let request = state.begin_search("DR. SARAH JOHNSON").expect("non-blank query");
    worker.submit(request.id, request.kind);
    settle(&mut state, &worker);
    assert_eq!(ids(&state), vec!["1"]);

    // Filters restrict the search result, not the full list.
    state.filters.location = Some("Boston".to_string());
    state.apply_filters();
    assert!(state.view.is_empty());

    state.reset_filters();
    assert_eq!(ids(&state), vec!["1"]);

    // Blank search brings back everything.
    assert!(state.begin_search("").is_none());
    assert_eq!(state.view.len(), 8);
}

#[test]
fn e2e_no_match_search_is_empty() {
    let dir = TempDir::new().unwrap();
    let worker = worker();
    let mut state = loaded(&dir, &worker);

    let request = state.begin_search("nobody by this name").unwrap();
    worker.submit(request.id, request.kind);
    settle(&mut state, &worker);
    assert!(state.view.is_empty());
    assert_eq!(state.result_heading(), "0 Doctors Found");
}

#[test]
fn e2e_last_search_wins() {
    let dir = TempDir::new().unwrap();
    let worker = worker();
    let mut state = loaded(&dir, &worker);

    let first = state.begin_search("wilson").unwrap();
    worker.submit(first.id, first.kind);
    let second = state.begin_search("kim").unwrap();
    worker.submit(second.id, second.kind);

    // Both replies arrive; whichever order, only the second is applied.
    let mut applied = 0;
    for _ in 0..2 {
        let reply = worker.wait_response(REPLY_TIMEOUT).unwrap();
        if state.handle_response(reply) {
            applied += 1;
        }
    }
    assert_eq!(applied, 1);
    assert!(!state.loading);
    assert_eq!(ids(&state), vec!["5"]);
}

#[test]
fn e2e_search_while_initial_fetch_in_flight() {
    let dir = TempDir::new().unwrap();
    let worker = worker();
    let mut state = state_in(&dir);

    let fetch = state.begin_fetch();
    worker.submit(fetch.id, fetch.kind);
    let search = state.begin_search("chen").unwrap();
    worker.submit(search.id, search.kind);
    settle(&mut state, &worker);

    assert_eq!(state.all_providers.len(), 8);
    assert_eq!(ids(&state), vec!["2"]);

    state.toggle_favorite("7");
    assert_eq!(state.favorite_providers().len(), 1);

    assert!(state.begin_search("").is_none());
    assert_eq!(state.view.len(), 8);
}

#[test]
fn e2e_blank_search_while_initial_fetch_in_flight() {
    let dir = TempDir::new().unwrap();
    let worker = worker();
    let mut state = state_in(&dir);

    let fetch = state.begin_fetch();
    worker.submit(fetch.id, fetch.kind);
    assert!(state.begin_search("   ").is_none());
    settle(&mut state, &worker);

    assert_eq!(state.all_providers.len(), 8);
    assert_eq!(state.view, builtin_providers());
}

#[test]
fn e2e_sort_by_rating_over_full_list() {
    let providers = builtin_providers();
    let criteria = FilterCriteria {
        sort_by: SortMode::HighestRated,
        ..Default::default()
    };
    let sorted = apply_filters(&providers, &criteria);
    let order: Vec<_> = sorted.iter().map(|p| p.id.as_str()).collect();
    // Ties keep catalog order: 2, 4, 8 at 4.9; 1, 6 at 4.8; 3, 7 at 4.7.
    assert_eq!(order, vec!["2", "4", "8", "1", "6", "3", "7", "5"]);
}

#[test]
fn e2e_suggestions_from_specialty_vocabulary() {
    assert_eq!(
        suggestions(SPECIALTIES, "ped"),
        vec!["Orthopedics".to_string(), "Pediatrics".to_string()]
    );
    assert!(suggestions(SPECIALTIES, "").is_empty());
}

// =============================================================================
// Favorites persistence
// =============================================================================

#[test]
fn e2e_favorites_survive_restart() {
    let dir = TempDir::new().unwrap();
    let worker = worker();

    {
        let mut state = loaded(&dir, &worker);
        state.toggle_favorite("6");
        state.toggle_favorite("2");
        state.toggle_favorite("4");
        state.toggle_favorite("4");
        assert_eq!(state.favorites_count(), 2);
    }

    let state = loaded(&dir, &worker);
    assert_eq!(state.favorites_count(), 2);
    let names: Vec<_> = state
        .favorite_providers()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Dr. Michael Chen", "Dr. Lisa Patel"]);
}

#[test]
fn e2e_corrupt_store_starts_with_no_favorites() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        storage_path(dir.path()),
        br#"{"favorites":"this is not a list"}"#,
    )
    .unwrap();

    let worker = worker();
    let mut state = loaded(&dir, &worker);
    assert_eq!(state.favorites_count(), 0);

    // The next toggle overwrites the bad value.
    state.toggle_favorite("3");
    let reopened = state_in(&dir);
    assert!(reopened.is_favorite("3"));
}
