//! Thread-safe wrapper around [`TrigTableCache`].

use std::sync::Arc;

use parking_lot::Mutex;

use super::cache::{CacheStats, TrigTableCache};
use super::table::SinCosTable;
use crate::config::TrigConfig;
use crate::core::{RangeScan, ScanGeometry};

/// [`TrigTableCache`] shared between threads.
///
/// The lock is held across lookup, flush and insert, so two threads asking
/// for the same new geometry compute it once. Returned tables are `Arc`
/// handles and stay valid when another thread flushes the cache.
///
/// ```rust
/// use std::sync::Arc;
/// use vastu_trig::{ScanGeometry, SharedTrigTableCache};
///
/// let cache = Arc::new(SharedTrigTableCache::new());
/// let worker = {
///     let cache = Arc::clone(&cache);
///     std::thread::spawn(move || cache.get(&ScanGeometry::new(360, std::f32::consts::TAU, true)).ray_count())
/// };
/// assert_eq!(worker.join().unwrap(), 360);
/// ```
#[derive(Debug, Default)]
pub struct SharedTrigTableCache {
    inner: Mutex<TrigTableCache>,
}

impl SharedTrigTableCache {
    /// Create a shared cache with the default capacity.
    pub fn new() -> Self {
        Self::from_cache(TrigTableCache::new())
    }

    /// Create a shared cache holding at most `max_entries` tables.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self::from_cache(TrigTableCache::with_capacity(max_entries))
    }

    /// Create a shared cache from loaded configuration.
    pub fn from_config(config: &TrigConfig) -> Self {
        Self::from_cache(TrigTableCache::from_config(config))
    }

    /// Wrap an existing cache.
    pub fn from_cache(cache: TrigTableCache) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Get the table for a geometry, computing it on first use.
    pub fn get(&self, geometry: &ScanGeometry) -> Arc<SinCosTable> {
        self.inner.lock().get(geometry)
    }

    /// Get the table matching a scan's geometry.
    pub fn get_for_scan(&self, scan: &RangeScan) -> Arc<SinCosTable> {
        self.get(&scan.geometry())
    }

    /// Is a table for this geometry cached?
    pub fn contains(&self, geometry: &ScanGeometry) -> bool {
        self.inner.lock().contains(geometry)
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Drop all cached tables.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Usage counters
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Unwrap into the single-owner cache.
    pub fn into_inner(self) -> TrigTableCache {
        self.inner.into_inner()
    }
}
