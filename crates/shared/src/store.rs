use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// String key-value store with per-entry expiry.
///
/// Implementations are read-through: every `get` consults the backing store,
/// so two handles over the same storage always agree.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str, ttl: Duration);
    fn remove(&self, key: &str);
}

/// Persisted form of a value: the payload plus its expiry in epoch millis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Entry {
    value: String,
    expires_at: f64,
}

/// Wrap `value` in an expiry envelope.
pub fn encode_entry(value: &str, now_ms: f64, ttl: Duration) -> String {
    let entry = Entry {
        value: value.to_string(),
        expires_at: now_ms + ttl.as_millis() as f64,
    };
    // A struct of a String and an f64 always serializes.
    serde_json::to_string(&entry).unwrap_or_default()
}

/// Unwrap an envelope. Expired or undecodable envelopes read as absent.
pub fn decode_entry(raw: &str, now_ms: f64) -> Option<String> {
    let entry: Entry = serde_json::from_str(raw).ok()?;
    if now_ms >= entry.expires_at {
        return None;
    }
    Some(entry.value)
}

/// In-process store with a manual clock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    now_ms: Cell<f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now_ms.set(self.now_ms.get() + by.as_millis() as f64);
    }

    /// Write a raw envelope, bypassing encoding.
    pub fn set_raw(&self, key: &str, raw: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = self.entries.borrow().get(key).cloned()?;
        let value = decode_entry(&raw, self.now_ms.get());
        if value.is_none() {
            self.remove(key);
        }
        value
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) {
        let raw = encode_entry(value, self.now_ms.get(), ttl);
        self.entries.borrow_mut().insert(key.to_string(), raw);
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) {
        (**self).set(key, value, ttl)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
