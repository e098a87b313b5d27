//! Cache-first, degrading content loader
//!
//! Reads go cache → primary API → static bundle → empty value. The first
//! primary failure flips the shared [`SourceModeController`] to degraded, after
//! which reads skip the primary API entirely. Writes only ever hit the
//! primary API.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, warn};
use serde_json::Value;

use super::endpoints::{Form, ReadTarget};
use super::normalize::{MediaRefs, MediaResolver};
use crate::cache::{CacheSettings, TtlCache};
use crate::client::dispatch::Dispatcher;
use crate::client::models::Acknowledgement;
use crate::client::request::{CachePolicy, DEFAULT_TIMEOUT, RequestDescriptor};
use crate::client::transport::Transport;
use crate::error::ApiError;
use crate::source::{SourceMode, SourceModeController, StaticSource};

/// Where a read was ultimately served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Primary,
    Static,
}

/// A decoded read result and its origin.
#[derive(Debug, Clone)]
pub struct Served<M> {
    pub value: M,
    pub origin: Origin,
}

/// Content access layer over a primary transport and a static fallback.
pub struct ContentLoader<T: Transport, S: StaticSource> {
    dispatcher: Dispatcher<T>,
    static_source: S,
    cache: Arc<TtlCache>,
    mode: Arc<SourceModeController>,
    settings: CacheSettings,
    timeout: Duration,
}

impl<T: Transport, S: StaticSource> ContentLoader<T, S> {
    /// Create a loader sharing `cache` and `mode` with any other loader built
    /// from the same handles.
    pub fn new(
        dispatcher: Dispatcher<T>,
        static_source: S,
        cache: Arc<TtlCache>,
        mode: Arc<SourceModeController>,
    ) -> Self {
        Self {
            dispatcher,
            static_source,
            cache,
            mode,
            settings: CacheSettings::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_settings(mut self, settings: CacheSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Bound applied to every primary request and static fetch.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if !timeout.is_zero() {
            self.timeout = timeout;
        }
        self
    }

    pub fn mode(&self) -> SourceMode {
        self.mode.state()
    }

    pub fn base_url(&self) -> &str {
        self.dispatcher.base_url()
    }

    pub fn static_source(&self) -> &S {
        &self.static_source
    }

    #[allow(dead_code)]
    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    #[allow(dead_code)]
    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    /// Resolver for the source that is active right now.
    pub fn media_resolver(&self) -> MediaResolver {
        match self.mode.state() {
            SourceMode::Primary => MediaResolver::new(self.dispatcher.base_url()),
            SourceMode::Degraded => MediaResolver::new(&self.static_source.asset_base()),
        }
    }

    fn prepare(&self, target: &ReadTarget) -> RequestDescriptor {
        let policy = match self.settings.ttl_for(target.name) {
            Some(ttl) => CachePolicy::ttl(ttl),
            None => CachePolicy::disabled(),
        };
        target.request.clone().cache(policy).timeout(self.timeout)
    }

    /// Read `target`, decoding with `decode`. Returns `None` only when
    /// neither source produced a decodable payload.
    pub async fn read<M, F>(&self, target: ReadTarget, decode: F) -> Option<Served<M>>
    where
        M: MediaRefs,
        F: Fn(Value) -> Result<M, ApiError>,
    {
        let request = self.prepare(&target);
        let key = request.cache_key();

        if let Some(ref key) = key
            && let Some(value) = self.cache.get(key)
        {
            match decode(value) {
                Ok(value) => {
                    debug!("Cache hit: {}", key);
                    return Some(self.finish(value, Origin::Cache));
                }
                Err(e) => {
                    debug!("Evicting undecodable cache entry {}: {}", key, e);
                    self.cache.remove(key);
                }
            }
        }

        if self.mode.is_degraded() {
            debug!("Degraded mode: skipping primary for {}", target.name);
        } else {
            if let Some(ref key) = key {
                debug!("Cache miss: {}", key);
            }

            let outcome = self
                .dispatcher
                .dispatch(&request)
                .await
                .and_then(|raw| decode(raw.clone()).map(|value| (raw, value)));

            match outcome {
                Ok((raw, value)) => {
                    if let Some(ref key) = key {
                        self.cache.set(key, raw, request.cache.ttl);
                    }
                    return Some(self.finish(value, Origin::Primary));
                }
                Err(e) => {
                    warn!(
                        "Primary read of {} failed ({}): {}",
                        target.name,
                        e.kind(),
                        e
                    );
                    self.mode.mark_degraded(&e.to_string());
                }
            }
        }

        let document = target.static_document.as_deref()?;
        match self.read_static(document, &decode).await {
            Ok(value) => Some(self.finish(value, Origin::Static)),
            Err(e) => {
                error!("Static fallback for {} failed: {}", target.name, e);
                None
            }
        }
    }

    async fn read_static<M, F>(&self, document: &str, decode: &F) -> Result<M, ApiError>
    where
        F: Fn(Value) -> Result<M, ApiError>,
    {
        let fetched = tokio::time::timeout(self.timeout, self.static_source.fetch(document))
            .await
            .map_err(|_| ApiError::Timeout {
                endpoint: document.to_string(),
                timeout: self.timeout,
            })??;
        decode(fetched)
    }

    fn finish<M: MediaRefs>(&self, mut value: M, origin: Origin) -> Served<M> {
        value.resolve_media(&self.media_resolver());
        Served { value, origin }
    }

    /// Submit `request` to the `form` endpoint. Never cached, never falls
    /// back and never changes the source mode.
    pub async fn write(
        &self,
        form: Form,
        request: RequestDescriptor,
    ) -> Result<Acknowledgement, ApiError> {
        let request = request.timeout(self.timeout);

        match self.dispatcher.dispatch(&request).await {
            Ok(payload) => {
                debug!("{} accepted", form.name());
                Ok(Acknowledgement::from_payload(
                    payload,
                    form.accepted_message(),
                ))
            }
            Err(e) => {
                warn!("{} failed ({}): {}", form.name(), e.kind(), e);
                Err(e)
            }
        }
    }
}
