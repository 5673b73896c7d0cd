//! Memoizing cache of sine/cosine tables.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace, warn};

use super::table::SinCosTable;
use crate::config::TrigConfig;
use crate::core::{RangeScan, ScanGeometry};

/// Default number of tables kept before the cache is flushed.
pub const DEFAULT_MAX_ENTRIES: usize = 20;

/// Cache usage counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests served from the cache
    pub hits: u64,
    /// Requests that computed a new table
    pub misses: u64,
    /// Times the whole cache was cleared to make room
    pub flushes: u64,
    /// Tables currently cached
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of requests served from the cache (0.0 when unused).
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }
}

/// Sine/cosine tables memoized by scan geometry.
///
/// Tables are computed on the first request for a geometry and shared as
/// `Arc` afterwards, so a handle stays valid even after the cache flushes.
///
/// When a new geometry arrives while the cache already holds
/// `max_entries` tables, every table is dropped before the new one is
/// inserted. The cache therefore never exceeds its capacity.
///
/// # Example
///
/// ```rust
/// use vastu_trig::{RangeScan, TrigTableCache};
///
/// let mut cache = TrigTableCache::new();
/// let scan = RangeScan::new(vec![1.0; 181], std::f32::consts::PI, true, 0.15, 8.0);
///
/// let table = cache.get_for_scan(&scan);
/// let points = scan.project(&table);
/// assert_eq!(points.len(), 181);
/// ```
#[derive(Debug)]
pub struct TrigTableCache {
    tables: HashMap<ScanGeometry, Arc<SinCosTable>>,
    max_entries: usize,
    stats: CacheStats,
}

impl TrigTableCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    /// Create a cache holding at most `max_entries` tables (minimum 1).
    pub fn with_capacity(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            tables: HashMap::with_capacity(max_entries),
            max_entries,
            stats: CacheStats::default(),
        }
    }

    /// Create a cache from loaded configuration.
    pub fn from_config(config: &TrigConfig) -> Self {
        Self::with_capacity(config.cache.max_entries)
    }

    /// Get the table for a geometry, computing it on first use.
    pub fn get(&mut self, geometry: &ScanGeometry) -> Arc<SinCosTable> {
        if let Some(table) = self.tables.get(geometry) {
            self.stats.hits += 1;
            trace!(
                "[TrigCache] hit: rays={} aperture={:.4}",
                geometry.ray_count(),
                geometry.aperture()
            );
            return Arc::clone(table);
        }

        if self.tables.len() >= self.max_entries {
            warn!(
                "[TrigCache] {} distinct scan geometries cached, flushing",
                self.tables.len()
            );
            self.tables.clear();
            self.stats.flushes += 1;
        }

        debug!(
            "[TrigCache] computing table: rays={} aperture={:.4} right_to_left={}",
            geometry.ray_count(),
            geometry.aperture(),
            geometry.right_to_left()
        );
        let table = Arc::new(SinCosTable::compute(geometry));
        self.tables.insert(*geometry, Arc::clone(&table));
        self.stats.misses += 1;
        table
    }

    /// Get the table matching a scan's geometry.
    pub fn get_for_scan(&mut self, scan: &RangeScan) -> Arc<SinCosTable> {
        self.get(&scan.geometry())
    }

    /// Is a table for this geometry cached?
    pub fn contains(&self, geometry: &ScanGeometry) -> bool {
        self.tables.contains_key(geometry)
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Maximum number of cached tables
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Drop all cached tables. Counters are kept.
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    /// Usage counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.tables.len(),
            ..self.stats
        }
    }
}

impl Default for TrigTableCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_hit_returns_same_table() {
        let mut cache = TrigTableCache::new();
        let geometry = ScanGeometry::new(360, 2.0 * PI, true);

        let first = cache.get(&geometry);
        let second = cache.get(&geometry);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_geometries_cached_separately() {
        let mut cache = TrigTableCache::new();
        let rtl = cache.get(&ScanGeometry::new(3, PI, true));
        let ltr = cache.get(&ScanGeometry::new(3, PI, false));

        assert_eq!(cache.len(), 2);
        assert_ne!(rtl.sin(), ltr.sin());
    }

    #[test]
    fn test_table_lengths() {
        let mut cache = TrigTableCache::new();
        for n in [0, 1, 5, 720] {
            let table = cache.get(&ScanGeometry::new(n, PI, true));
            assert_eq!(table.padded_cos().len(), n + 4);
            assert_eq!(table.padded_sin().len(), n + 4);
        }
    }

    #[test]
    fn test_flush_at_capacity() {
        let mut cache = TrigTableCache::with_capacity(3);
        for n in 1..=3 {
            cache.get(&ScanGeometry::new(n, PI, true));
        }
        assert_eq!(cache.len(), 3);

        let newest = ScanGeometry::new(4, PI, true);
        cache.get(&newest);

        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&newest));
        assert_eq!(cache.stats().flushes, 1);
    }

    #[test]
    fn test_hit_at_capacity_does_not_flush() {
        let mut cache = TrigTableCache::with_capacity(2);
        let a = ScanGeometry::new(10, PI, true);
        cache.get(&a);
        cache.get(&ScanGeometry::new(11, PI, true));

        cache.get(&a);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().flushes, 0);
    }

    #[test]
    fn test_handle_survives_flush() {
        let mut cache = TrigTableCache::with_capacity(1);
        let held = cache.get(&ScanGeometry::new(3, PI, true));
        cache.get(&ScanGeometry::new(4, PI, true));

        assert!(!cache.contains(&ScanGeometry::new(3, PI, true)));
        assert_eq!(held.ray_count(), 3);
        assert_eq!(held.cos().len(), 3);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let cache = TrigTableCache::with_capacity(0);
        assert_eq!(cache.capacity(), 1);
    }

    #[test]
    fn test_clear_keeps_counters() {
        let mut cache = TrigTableCache::new();
        cache.get(&ScanGeometry::new(8, PI, true));
        cache.clear();

        let stats = cache.stats();
        assert!(cache.is_empty());
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_hit_rate() {
        let mut cache = TrigTableCache::new();
        assert_eq!(cache.stats().hit_rate(), 0.0);

        let geometry = ScanGeometry::new(8, PI, true);
        for _ in 0..4 {
            cache.get(&geometry);
        }
        assert_eq!(cache.stats().hit_rate(), 0.75);
    }
}
