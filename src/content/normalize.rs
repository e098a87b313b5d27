//! Response normalization and media URL resolution
//!
//! Every list response ends up as a [`Listing`], whether the source sent a
//! bare JSON array or a `{"results": [...], "count": n}` page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// List payload as sent by either source.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Paginated shape: `{"results": [...], "count": n}`
    Wrapped {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
    /// Bare array
    Bare(Vec<T>),
}

/// Normalized list result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Listing<T> {
    /// The result returned when no source could provide content.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Keep only items matching `keep`, recounting the total.
    pub fn retain(mut self, keep: impl FnMut(&T) -> bool) -> Self {
        self.items.retain(keep);
        self.total_count = self.items.len() as u64;
        self
    }

    /// Keep only items matching `keep` on a server page, lowering the total
    /// by the number of items dropped.
    pub fn retain_page(mut self, mut keep: impl FnMut(&T) -> bool) -> Self {
        let before = self.items.len();
        self.items.retain(|item| keep(item));
        let dropped = (before - self.items.len()) as u64;
        self.total_count = self.total_count.saturating_sub(dropped);
        self
    }

    /// Keep at most `limit` items. The total count is left untouched.
    pub fn truncate(mut self, limit: usize) -> Self {
        self.items.truncate(limit);
        self
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<ListPayload<T>> for Listing<T> {
    fn from(payload: ListPayload<T>) -> Self {
        match payload {
            ListPayload::Wrapped { results, count } => {
                let total_count = count.unwrap_or(results.len() as u64);
                Self {
                    items: results,
                    total_count,
                }
            }
            ListPayload::Bare(items) => Self {
                total_count: items.len() as u64,
                items,
            },
        }
    }
}

/// Decode a list payload of either shape.
pub fn decode_listing<T: DeserializeOwned>(payload: Value) -> Result<Listing<T>, ApiError> {
    serde_json::from_value::<ListPayload<T>>(payload)
        .map(Listing::from)
        .map_err(|e| ApiError::InvalidResponse(format!("Unexpected list payload: {}", e)))
}

/// Decode a single-record payload.
pub fn decode_record<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::InvalidResponse(format!("Unexpected payload: {}", e)))
}

/// Turns stored media references into fetchable URLs against a base.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    base: String,
}

impl MediaResolver {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve one reference. Empty references resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }

        if is_absolute_url(path) {
            return Some(path.to_string());
        }

        if path.starts_with('/') {
            Some(format!("{}{}", self.base, path))
        } else {
            Some(format!("{}/media/{}", self.base, path))
        }
    }

    /// Resolve the first non-empty candidate.
    pub fn resolve_first(&self, candidates: &[Option<&str>]) -> Option<String> {
        candidates
            .iter()
            .flatten()
            .find(|c| !c.trim().is_empty())
            .and_then(|c| self.resolve(c))
    }
}

fn is_absolute_url(path: &str) -> bool {
    ["http://", "https://", "file://", "data:"]
        .iter()
        .any(|scheme| path.starts_with(scheme))
}

/// Implemented by content carrying image or file references.
pub trait MediaRefs {
    fn resolve_media(&mut self, resolver: &MediaResolver);
}

impl<T: MediaRefs> MediaRefs for Vec<T> {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        for item in self.iter_mut() {
            item.resolve_media(resolver);
        }
    }
}

impl<T: MediaRefs> MediaRefs for Option<T> {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        if let Some(inner) = self {
            inner.resolve_media(resolver);
        }
    }
}

impl<T: MediaRefs> MediaRefs for Listing<T> {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.items.resolve_media(resolver);
    }
}
