//! # VastuTrig
//!
//! Memoized sine/cosine lookup tables for 2D range scans.
//!
//! ## Overview
//!
//! Every ray of a 2D lidar scan sits at an angle fully determined by the
//! scan geometry: number of rays, angular aperture and sweep direction.
//! Projecting ranges into cartesian points needs `cos`/`sin` of each of
//! those angles, and a robot only ever sees a handful of distinct
//! geometries. [`TrigTableCache`] computes the table once per geometry and
//! hands out the same [`SinCosTable`] for every later scan.
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_trig::{ScanGeometry, TrigTableCache};
//!
//! let mut cache = TrigTableCache::new();
//! let geometry = ScanGeometry::new(360, std::f32::consts::TAU, true);
//!
//! let table = cache.get(&geometry);
//! assert_eq!(table.ray_count(), 360);
//!
//! // Second request is served from the cache
//! let again = cache.get(&geometry);
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(table.cos(), again.cos());
//! ```
//!
//! ## Angle Convention
//!
//! Angles are in radians, counter-clockwise positive, centered on the
//! sensor's forward axis:
//!
//! ```text
//!   right-to-left:  -aperture/2  ──────►  +aperture/2
//!   left-to-right:  +aperture/2  ──────►  -aperture/2
//! ```

#![warn(missing_docs)]

// Scan geometry and raw range scans
pub mod core;

// Lookup tables and the memoizing cache
pub mod lut;

// Configuration loading
pub mod config;

pub use crate::core::{RangeScan, ScanGeometry};

pub use lut::{
    CacheStats, DEFAULT_MAX_ENTRIES, SharedTrigTableCache, SinCosTable, TABLE_PADDING,
    TrigTableCache,
};

pub use config::{CacheSection, ConfigLoadError, TrigConfig};
