use std::time::Duration;

use campusmap_shared::store::{decode_entry, encode_entry, KeyValueStore};

/// `window.localStorage` with expiry envelopes.
///
/// Without a window or storage access (private mode, sandboxed frames) reads
/// return nothing and writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = local_storage()?;
        let raw = storage.get_item(key).ok().flatten()?;
        let value = decode_entry(&raw, js_sys::Date::now());
        if value.is_none() {
            let _ = storage.remove_item(key);
        }
        value
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) {
        let Some(storage) = local_storage() else {
            tracing::warn!(key, "localStorage unavailable, not persisting");
            return;
        };
        let raw = encode_entry(value, js_sys::Date::now(), ttl);
        if let Err(e) = storage.set_item(key, &raw) {
            tracing::warn!(key, error = ?e, "Failed to write localStorage");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
