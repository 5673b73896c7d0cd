//! Sine/cosine lookup tables for scan geometries.
//!
//! ## Components
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`SinCosTable`] | Per-ray `cos`/`sin` values for one geometry |
//! | [`TrigTableCache`] | Memoizes tables by [`ScanGeometry`](crate::ScanGeometry), single owner |
//! | [`SharedTrigTableCache`] | Same cache behind a mutex, for use across threads |
//!
//! ## Eviction
//!
//! The cache holds at most [`DEFAULT_MAX_ENTRIES`] tables by default. A robot
//! sees one or two lidar geometries, so reaching the limit means something
//! upstream is producing bogus geometries; the cache is simply flushed and
//! starts over instead of tracking recency.

mod cache;
mod shared;
mod table;

pub use cache::{CacheStats, DEFAULT_MAX_ENTRIES, TrigTableCache};
pub use shared::SharedTrigTableCache;
pub use table::{SinCosTable, TABLE_PADDING};
