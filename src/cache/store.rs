//! In-memory response store with per-entry time-to-live

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;

/// A cached response payload and its freshness window.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub stored_at: Instant,
    pub ttl: Duration,
}

impl CacheEntry {
    /// An entry is readable while `now - stored_at <= ttl`.
    pub fn is_fresh(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) <= self.ttl
    }
}

/// Process-wide response cache keyed by canonical request identity.
///
/// Stale entries are evicted lazily by the read that observes them. Size is
/// unbounded unless `max_entries` is set, in which case inserting a new key
/// at capacity drops the oldest stored entry.
#[derive(Debug, Default)]
pub struct TtlCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    max_entries: Option<usize>,
}

impl TtlCache {
    /// Create an unbounded cache.
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache holding at most `max_entries` keys.
    pub fn with_capacity_limit(max_entries: Option<usize>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_entries: max_entries.filter(|n| *n > 0),
        }
    }

    /// Return the cached value if it is still fresh, evicting it otherwise.
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().ok()?;
        let now = Instant::now();

        match entries.get(key) {
            Some(entry) if entry.is_fresh(now) => Some(entry.value.clone()),
            Some(_) => {
                log::debug!("Cache expired: {}", key);
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Insert or overwrite an entry, stamping it with the current time.
    pub fn set(&self, key: &str, value: Value, ttl: Duration) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };

        if let Some(limit) = self.max_entries
            && !entries.contains_key(key)
            && entries.len() >= limit
        {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                log::debug!("Cache full ({} entries), evicting {}", limit, oldest);
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Remove one entry. Returns whether it existed.
    pub fn remove(&self, key: &str) -> bool {
        self.entries
            .lock()
            .map(|mut entries| entries.remove(key).is_some())
            .unwrap_or(false)
    }

    /// Drop every entry.
    #[allow(dead_code)]
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    /// Drop every stale entry, returning how many were removed.
    #[allow(dead_code)]
    pub fn purge_expired(&self) -> usize {
        let Ok(mut entries) = self.entries.lock() else {
            return 0;
        };
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_fresh(now));
        before - entries.len()
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
