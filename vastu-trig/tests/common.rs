//! Test utilities for VastuTrig integration tests.

#![allow(dead_code)]

use std::f32::consts::PI;
use vastu_trig::{RangeScan, ScanGeometry};

/// `n` distinct geometries (ray counts 1..=n, half-circle aperture).
pub fn distinct_geometries(n: usize) -> Vec<ScanGeometry> {
    (1..=n).map(|rays| ScanGeometry::new(rays, PI, true)).collect()
}

/// Circular room scan: every ray returns `radius`.
pub fn circular_room_scan(rays: usize, radius: f32) -> RangeScan {
    RangeScan::new(vec![radius; rays], 2.0 * PI, true, 0.15, 8.0)
}

/// Install the test logger once.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}
