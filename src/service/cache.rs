//! In-process TTL cache for listing payloads.
//!
//! Read-heavy listing endpoints cache their serialized payloads here.
//! Entries expire after a fixed TTL and writers invalidate by key prefix, so
//! a sale acceptance can drop every auction listing at once. The cache is a
//! plain map behind an `RwLock`; it is per-process and vanishes on restart,
//! which is acceptable because every entry can be rebuilt from the database.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::{Duration, Instant},
};

struct CacheEntry {
    expires_at: Instant,
    value: serde_json::Value,
}

/// Shared TTL cache keyed by listing name.
///
/// Cloning is cheap; all clones share the same underlying map.
#[derive(Clone)]
pub struct ListingCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl ListingCache {
    /// Creates a cache whose entries live for `ttl_secs` seconds.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    /// Looks up a fresh entry. Expired entries read as misses and are left
    /// for the next write pass to drop.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let entries = self.read_entries();
        let entry = entries.get(key)?;

        if entry.expires_at <= Instant::now() {
            return None;
        }

        Some(entry.value.clone())
    }

    /// Stores a value under `key`, replacing any previous entry and pruning
    /// expired entries while the write lock is held.
    pub fn put(&self, key: impl Into<String>, value: serde_json::Value) {
        let now = Instant::now();
        let mut entries = self.write_entries();

        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.into(),
            CacheEntry {
                expires_at: now + self.ttl,
                value,
            },
        );
    }

    /// Drops every entry whose key starts with `prefix`.
    ///
    /// # Returns
    /// The number of entries removed.
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let mut entries = self.write_entries();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        before - entries.len()
    }

    // A poisoned lock only means another thread panicked mid-operation; the
    // map itself is still valid, so recover the guard instead of propagating.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
