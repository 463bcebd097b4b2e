//! Bounded favourites list per namespace, persisted through a [`KeyValueStore`].
//!
//! Nothing is cached here: every operation re-reads the stored list.

use std::time::Duration;

use crate::store::KeyValueStore;

pub const MAX_FAVOURITES: usize = 6;

/// Seven days.
pub const FAVOURITES_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Storage key for a namespace, e.g. `"universityfavourites"`.
pub fn storage_key(namespace: &str) -> String {
    format!("{namespace}favourites")
}

pub struct Favourites<S> {
    store: S,
}

impl<S: KeyValueStore> Favourites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current list, oldest first. Missing or malformed data reads as empty.
    pub fn list(&self, namespace: &str) -> Vec<String> {
        let Some(raw) = self.store.get(&storage_key(namespace)) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::debug!(namespace, error = %e, "Discarding malformed favourites");
            Vec::new()
        })
    }

    pub fn contains(&self, namespace: &str, id: &str) -> bool {
        self.list(namespace).iter().any(|f| f == id)
    }

    /// Append `id`, evicting the oldest entry first once the list is full.
    ///
    /// Eviction runs before the duplicate check, so re-adding an existing id to a
    /// full list shrinks it by one.
    pub fn add(&self, namespace: &str, id: &str) {
        let mut favourites = self.list(namespace);
        if favourites.len() >= MAX_FAVOURITES {
            favourites.remove(0);
        }
        if !favourites.iter().any(|f| f == id) {
            favourites.push(id.to_string());
        }
        self.save(namespace, &favourites);
    }

    pub fn remove(&self, namespace: &str, id: &str) {
        let mut favourites = self.list(namespace);
        favourites.retain(|f| f != id);
        self.save(namespace, &favourites);
    }

    /// Flip membership of `id` and return the refreshed list.
    pub fn toggle(&self, namespace: &str, id: &str) -> Vec<String> {
        if self.contains(namespace, id) {
            self.remove(namespace, id);
        } else {
            self.add(namespace, id);
        }
        self.list(namespace)
    }

    fn save(&self, namespace: &str, favourites: &[String]) {
        match serde_json::to_string(favourites) {
            Ok(json) => self.store.set(&storage_key(namespace), &json, FAVOURITES_TTL),
            Err(e) => tracing::warn!(namespace, error = %e, "Failed to encode favourites"),
        }
    }
}
