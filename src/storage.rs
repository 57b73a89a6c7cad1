/// Storage abstraction over the browser's localStorage.
/// Components depend on this trait rather than the ambient global, so the
/// like tracker and review submissions can run against an in-memory fake
/// in tests.
use leptos::logging::log;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to write key {key}")]
    WriteFailed { key: String },
}

pub trait StorageAdapter {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads and parses a persisted JSON value. Missing or malformed values
/// degrade to the default rather than failing; everything here is best-effort.
pub fn get_json<T>(storage: &dyn StorageAdapter, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match storage.get(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log!("[STORAGE] Discarding malformed value for {}: {}", key, e);
            T::default()
        }),
        None => T::default(),
    }
}

/// Serializes and writes a value under the given key, overwriting the
/// previous value entirely. Failures are logged, never propagated.
pub fn set_json<T: Serialize>(storage: &dyn StorageAdapter, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            if let Err(err) = storage.set(key, &raw) {
                log!("[STORAGE] {}", err);
            }
        }
        Err(e) => log!("[STORAGE] Failed to encode value for {}: {}", key, e),
    }
}

/// The real adapter, backed by `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backend() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageAdapter for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backend().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let backend = Self::backend().ok_or(StorageError::Unavailable)?;
        backend
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed { key: key.to_string() })
    }
}

/// In-memory fake for tests.
#[derive(Default)]
pub struct MemStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
