//! Core types for VastuTrig.
//!
//! - [`ScanGeometry`]: Angular layout of a scan, the cache key
//! - [`RangeScan`]: Raw range measurements plus the metadata a geometry is derived from

mod geometry;
mod scan;

pub use geometry::ScanGeometry;
pub use scan::RangeScan;
