// MedConnect - app/favorites.rs
//
// Bookmarked provider ids with strict toggle semantics.
//
// The set is restored once from the key/value store at startup and written
// back synchronously after every toggle. There is exactly one writer, so the
// last write always wins.

use crate::core::model::Provider;
use crate::platform::storage::KeyValueStore;
use crate::util::constants::FAVORITES_KEY;
use crate::util::error::{self, StorageError};

/// Favorite provider ids mirrored to a durable store.
pub struct Favorites {
    /// Ids in the order they were bookmarked. Never contains duplicates.
    ids: Vec<String>,
    store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Favorites").field("ids", &self.ids).finish()
    }
}

impl Favorites {
    /// Restore favorites from `store`.
    ///
    /// Missing, malformed or non-array data means "no favorites"; the parse
    /// failure is logged and never propagated.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => dedup_keep_order(list),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored favorites are malformed, starting empty");
                    Vec::new()
                }
            },
        };
        tracing::info!(count = ids.len(), "Favorites restored");
        Self { ids, store }
    }

    /// Add `id` if absent, remove it if present, then persist.
    ///
    /// Returns true when `id` is a favorite after the call. A failed write is
    /// logged; the in-memory change stands.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = match self.ids.iter().position(|f| f == id) {
            Some(pos) => {
                self.ids.remove(pos);
                false
            }
            None => {
                self.ids.push(id.to_string());
                true
            }
        };
        tracing::debug!(id, favorite = now_favorite, "Favorite toggled");

        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, "Failed to persist favorites");
        }
        now_favorite
    }

    /// Write the current id list to the store.
    pub fn persist(&mut self) -> error::Result<()> {
        let json = serde_json::to_string(&self.ids).map_err(|e| StorageError::Serialize {
            key: FAVORITES_KEY.to_string(),
            source: e,
        })?;
        self.store.set(FAVORITES_KEY, json)?;
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in bookmark order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Providers from `all` whose id is a favorite, in `all`'s order.
    pub fn select(&self, all: &[Provider]) -> Vec<Provider> {
        all.iter().filter(|p| self.contains(&p.id)).cloned().collect()
    }
}

fn dedup_keep_order(list: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(list.len());
    for id in list {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::builtin_providers;
    use crate::platform::storage::MemoryStore;
    use std::sync::{Arc, Mutex};

    /// Store whose contents outlive the `Favorites` that owns it, so a test
    /// can reload from the same backing data.
    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<MemoryStore>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.lock().unwrap().get(key)
        }

        fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
            self.0.lock().unwrap().set(key, value)
        }
    }

    /// Store whose writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "/dev/full".into(),
                operation: "write",
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            })
        }
    }

    fn store_with(raw: &str) -> Box<dyn KeyValueStore> {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, raw.to_string()).unwrap();
        Box::new(store)
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut favs = Favorites::load(store_with(r#"["2"]"#));
        let before = favs.ids().to_vec();

        assert!(favs.toggle("5"));
        assert!(favs.contains("5"));
        assert!(!favs.toggle("5"));
        assert_eq!(favs.ids(), before.as_slice());

        assert!(!favs.toggle("2"));
        assert!(favs.toggle("2"));
        assert_eq!(favs.ids(), before.as_slice());
    }

    #[test]
    fn test_persist_then_reload_reconstructs_set() {
        let shared = SharedStore::default();
        let mut favs = Favorites::load(Box::new(shared.clone()));
        favs.toggle("3");
        favs.toggle("1");
        favs.toggle("7");
        favs.toggle("1");

        let reloaded = Favorites::load(Box::new(shared));
        assert_eq!(reloaded.ids(), favs.ids());
        assert_eq!(reloaded.ids(), &["3".to_string(), "7".to_string()]);
    }

    #[test]
    fn test_malformed_storage_means_no_favorites() {
        assert!(Favorites::load(store_with("not json")).is_empty());
        assert!(Favorites::load(store_with(r#"{"a":1}"#)).is_empty());
        assert!(Favorites::load(store_with("[1,2,3]")).is_empty());
        assert!(Favorites::load(Box::new(MemoryStore::new())).is_empty());
    }

    #[test]
    fn test_duplicate_ids_in_storage_collapse() {
        let favs = Favorites::load(store_with(r#"["1","1","4"]"#));
        assert_eq!(favs.len(), 2);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_toggle() {
        let mut favs = Favorites::load(Box::new(BrokenStore));
        assert!(favs.toggle("1"));
        assert!(favs.contains("1"));
        assert!(matches!(
            favs.persist(),
            Err(error::MedConnectError::Storage(StorageError::Io { .. }))
        ));
    }

    #[test]
    fn test_select_is_intersection_in_catalog_order() {
        let mut favs = Favorites::load(Box::new(MemoryStore::new()));
        favs.toggle("8");
        favs.toggle("2");
        favs.toggle("unknown");
        let selected = favs.select(&builtin_providers());
        let ids: Vec<_> = selected.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "8"]);
    }
}
