//! In-memory cache for content API responses
//!
//! Read responses from the primary content API are kept in a process-wide
//! store with a per-entry time-to-live. Writes are never cached.

pub mod key;
pub mod store;

use std::collections::HashMap;
use std::time::Duration;

/// Cache TTL configuration per endpoint
///
/// Endpoints not listed here use [`CacheTtl::DEFAULT`].
pub struct CacheTtl;

impl CacheTtl {
    pub const DEFAULT: Duration = Duration::from_secs(5 * 60); // 5 min

    // Rarely changing listings
    pub const TEAM: Duration = Duration::from_secs(10 * 60); // 10 min
    pub const LEADERSHIP: Duration = Duration::from_secs(10 * 60); // 10 min

    // Homepage highlights rotate often
    pub const FEATURED: Duration = Duration::from_secs(2 * 60); // 2 min

    /// Built-in per-endpoint TTLs. `None` disables caching for that endpoint.
    pub fn builtin(endpoint: &str) -> Option<Option<Duration>> {
        match endpoint {
            "team" => Some(Some(Self::TEAM)),
            "leadership" => Some(Some(Self::LEADERSHIP)),
            "featured" => Some(Some(Self::FEATURED)),
            // Search results are never cached
            "search" => Some(None),
            _ => None,
        }
    }
}

/// Resolved caching behaviour for the content layer.
#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Master switch (false for `--no-cache`)
    pub enabled: bool,
    /// TTL for endpoints without a specific override
    pub default_ttl: Duration,
    /// Per-endpoint TTL overrides from configuration; zero disables caching
    pub overrides: HashMap<String, Duration>,
    /// Optional cap on the number of cached responses
    pub max_entries: Option<usize>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            default_ttl: CacheTtl::DEFAULT,
            overrides: HashMap::new(),
            max_entries: None,
        }
    }
}

impl CacheSettings {
    /// TTL to apply to reads of `endpoint`, or `None` when they must not be cached.
    ///
    /// Configuration overrides take precedence over the built-in table.
    pub fn ttl_for(&self, endpoint: &str) -> Option<Duration> {
        if !self.enabled {
            return None;
        }

        if let Some(ttl) = self.overrides.get(endpoint) {
            return (!ttl.is_zero()).then_some(*ttl);
        }

        match CacheTtl::builtin(endpoint) {
            Some(ttl) => ttl,
            None => (!self.default_ttl.is_zero()).then_some(self.default_ttl),
        }
    }
}

// Re-export main types
pub use key::cache_key;
pub use store::TtlCache;
