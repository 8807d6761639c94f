// MedConnect - app/source.rs
//
// Provider record source and its background worker.
//
// Architecture:
//   - `ProviderSource` is the collaborator: fetch everything, or search by name.
//   - `CatalogSource` serves the built-in catalog behind a simulated latency.
//   - `SourceWorker` lives on the UI thread; each request runs on its own
//     background thread and replies over an mpsc channel.
//   - Every request carries a monotonically increasing id. The worker does not
//     cancel superseded requests; `AppState` applies only the latest reply.

use crate::core::catalog;
use crate::core::model::Provider;
use crate::core::search;
use crate::util::constants;
use crate::util::error::SourceError;
use std::sync::{mpsc, Arc};
use std::time::Duration;

/// Collaborator that produces provider records. Every call may fail.
pub trait ProviderSource: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<Provider>, SourceError>;

    fn search(&self, query: &str) -> Result<Vec<Provider>, SourceError>;
}

// =============================================================================
// Catalog source
// =============================================================================

/// Simulated latencies for the catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub fetch: Duration,
    pub search: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(constants::DEFAULT_FETCH_LATENCY_MS),
            search: Duration::from_millis(constants::DEFAULT_SEARCH_LATENCY_MS),
        }
    }
}

impl Latency {
    /// No delay at all, for tests.
    pub fn none() -> Self {
        Self {
            fetch: Duration::ZERO,
            search: Duration::ZERO,
        }
    }
}

/// In-memory source over the built-in catalog.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    providers: Vec<Provider>,
    latency: Latency,
}

impl CatalogSource {
    pub fn new(latency: Latency) -> Self {
        Self::with_providers(catalog::builtin_providers(), latency)
    }

    pub fn with_providers(providers: Vec<Provider>, latency: Latency) -> Self {
        Self { providers, latency }
    }
}

impl ProviderSource for CatalogSource {
    fn fetch_all(&self) -> Result<Vec<Provider>, SourceError> {
        std::thread::sleep(self.latency.fetch);
        Ok(self.providers.clone())
    }

    fn search(&self, query: &str) -> Result<Vec<Provider>, SourceError> {
        std::thread::sleep(self.latency.search);
        // A blank query against the source returns everything; the state layer
        // normally short-circuits blank queries before reaching here.
        Ok(search::search_by_name(&self.providers, query)
            .unwrap_or_else(|| self.providers.clone()))
    }
}

// =============================================================================
// Worker
// =============================================================================

/// Which operation a response answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    FetchAll,
    Search { query: String },
}

impl RequestKind {
    fn operation(&self) -> &'static str {
        match self {
            RequestKind::FetchAll => "fetch",
            RequestKind::Search { .. } => "search",
        }
    }
}

/// Reply from the worker for one request.
#[derive(Debug)]
pub struct SourceResponse {
    pub request_id: u64,
    pub kind: RequestKind,
    pub result: Result<Vec<Provider>, SourceError>,
}

/// Runs source requests off the UI thread.
pub struct SourceWorker {
    source: Arc<dyn ProviderSource>,
    tx: mpsc::Sender<SourceResponse>,
    rx: mpsc::Receiver<SourceResponse>,
}

impl SourceWorker {
    pub fn new(source: Arc<dyn ProviderSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    /// Start `kind` on a background thread, tagged with `request_id`.
    pub fn submit(&self, request_id: u64, kind: RequestKind) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let requested = kind.clone();

        tracing::debug!(request_id, operation = kind.operation(), "Source request started");

        let spawned = std::thread::Builder::new()
            .name(format!("source-{request_id}"))
            .spawn(move || {
                let result = match kind {
                    RequestKind::FetchAll => source.fetch_all(),
                    RequestKind::Search { ref query } => source.search(query),
                };
                // Receiver dropped means the UI closed; exit quietly.
                let _ = tx.send(SourceResponse {
                    request_id,
                    kind,
                    result,
                });
            });

        if let Err(e) = spawned {
            tracing::error!(request_id, error = %e, "Failed to spawn source thread");
            let _ = self.tx.send(SourceResponse {
                request_id,
                result: Err(SourceError::Unavailable {
                    operation: requested.operation(),
                    reason: e.to_string(),
                }),
                kind: requested,
            });
        }
    }

    /// Poll for replies without blocking. Returns all pending messages.
    pub fn poll_responses(&self) -> Vec<SourceResponse> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// Block until one reply arrives or `timeout` elapses.
    pub fn wait_response(&self, timeout: Duration) -> Option<SourceResponse> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl ProviderSource for FailingSource {
        fn fetch_all(&self) -> Result<Vec<Provider>, SourceError> {
            Err(SourceError::Unavailable {
                operation: "fetch",
                reason: "offline".to_string(),
            })
        }

        fn search(&self, _query: &str) -> Result<Vec<Provider>, SourceError> {
            Err(SourceError::Unavailable {
                operation: "search",
                reason: "offline".to_string(),
            })
        }
    }

    #[test]
    fn test_catalog_source_fetch_and_search() {
        let source = CatalogSource::new(Latency::none());
        assert_eq!(source.fetch_all().unwrap().len(), 8);
        let hits = source.search("chen").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dr. Michael Chen");
    }

    #[test]
    fn test_worker_replies_with_request_id() {
        let worker = SourceWorker::new(Arc::new(CatalogSource::new(Latency::none())));
        worker.submit(7, RequestKind::Search {
            query: "wright".to_string(),
        });
        let reply = worker
            .wait_response(Duration::from_secs(5))
            .expect("worker should reply");
        assert_eq!(reply.request_id, 7);
        assert_eq!(
            reply.kind,
            RequestKind::Search {
                query: "wright".to_string()
            }
        );
        assert_eq!(reply.result.unwrap().len(), 1);
    }

    #[test]
    fn test_worker_forwards_failures() {
        let worker = SourceWorker::new(Arc::new(FailingSource));
        worker.submit(1, RequestKind::FetchAll);
        let reply = worker.wait_response(Duration::from_secs(5)).unwrap();
        assert!(reply.result.is_err());
    }

    #[test]
    fn test_poll_without_requests_is_empty() {
        let worker = SourceWorker::new(Arc::new(CatalogSource::new(Latency::none())));
        assert!(worker.poll_responses().is_empty());
    }
}
