//! Render cache for generated table of contents markup.
//!
//! The TOC pipeline itself never memoizes. This module wraps it with a
//! cache keyed by content identity and an options fingerprint, so hosts can
//! reuse output across requests and drop it when the content is edited.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};
use log::{debug, trace};
use sha2::{Digest, Sha256};

use crate::toc::{render_toc, TocOptions};

/// Prefix shared by every TOC cache key
const KEY_PREFIX: &str = "gp_toc_";
/// One week
pub const DEFAULT_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Storage behind the TOC cache
pub trait RenderCache {
    /// Cached value for `key`, unless missing or expired
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key` for `ttl`
    fn set(&self, key: &str, value: String, ttl: Duration);

    /// Drop every entry whose key does not satisfy `keep`, returning how many were dropped
    fn retain(&self, keep: &dyn Fn(&str) -> bool) -> usize;
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Enable caching
    pub enabled: bool,
    /// Lifetime of a cached render in seconds
    pub ttl_seconds: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: DEFAULT_TTL_SECONDS,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Thread-safe in-memory cache with per-entry expiry
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RenderCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.read();
        let entry = entries.get(key)?;
        if entry.expires_at > Utc::now() {
            Some(entry.value.clone())
        } else {
            trace!("Cache entry {} expired", key);
            None
        }
    }

    fn set(&self, key: &str, value: String, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Utc::now() + ttl,
        };
        self.write().insert(key.to_string(), entry);
    }

    fn retain(&self, keep: &dyn Fn(&str) -> bool) -> usize {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|key, _| keep(key.as_str()));
        before - entries.len()
    }
}

/// Fingerprint of the options, stable for equal values
pub fn options_fingerprint(options: &TocOptions) -> String {
    let serialized = serde_json::to_vec(options)
        .unwrap_or_else(|_| format!("{:?}", options).into_bytes());
    let mut hasher = Sha256::new();
    hasher.update(&serialized);
    let result = hasher.finalize();
    hex::encode(&result[..16])
}

/// Cache key for one piece of content rendered with `options`
pub fn cache_key(content_id: &str, options: &TocOptions) -> String {
    format!("{}{}_{}", KEY_PREFIX, content_id, options_fingerprint(options))
}

/// Whether `key` was produced by [`cache_key`] for `content_id`
fn is_key_for(key: &str, content_id: &str) -> bool {
    key.strip_prefix(KEY_PREFIX)
        .and_then(|rest| rest.strip_prefix(content_id))
        .and_then(|rest| rest.strip_prefix('_'))
        .is_some_and(|fingerprint| !fingerprint.contains('_'))
}

/// Caching wrapper around the TOC pipeline
#[derive(Debug)]
pub struct TocCache<C: RenderCache> {
    store: C,
    config: CacheConfig,
}

impl<C: RenderCache> TocCache<C> {
    pub fn new(store: C) -> Self {
        Self::with_config(store, CacheConfig::default())
    }

    pub fn with_config(store: C, config: CacheConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    /// Rendered TOC for the content, from cache when available.
    ///
    /// Suppressed (empty) output is cached like any other result. Two
    /// concurrent misses for the same key may both render; the pipeline is
    /// pure so they store the same value.
    pub fn cached_toc_output(&self, content_id: &str, content: &str, options: &TocOptions) -> String {
        if !self.config.enabled {
            return render_toc(content, options);
        }

        let key = cache_key(content_id, options);
        if let Some(cached) = self.store.get(&key) {
            trace!("Cache hit for {}", key);
            return cached;
        }

        debug!("Cache miss for {}, rendering table of contents", key);
        let toc = render_toc(content, options);
        self.store
            .set(&key, toc.clone(), Duration::seconds(self.config.ttl_seconds));
        toc
    }

    /// Drop all cached renders of one piece of content, e.g. after it was edited
    pub fn flush_toc_cache(&self, content_id: &str) -> usize {
        let removed = self.store.retain(&|key: &str| !is_key_for(key, content_id));
        debug!("Flushed {} cached renders for {}", removed, content_id);
        removed
    }
}
