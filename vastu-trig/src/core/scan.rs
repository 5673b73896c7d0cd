//! Raw 2D range scans.

use serde::{Deserialize, Serialize};

use super::geometry::ScanGeometry;
use crate::lut::SinCosTable;

/// A 2D range scan with evenly spaced rays.
///
/// Ranges are ordered by ray index. Ray angles are not stored; they follow
/// from the ray count, `aperture` and `right_to_left` (see [`ScanGeometry`]).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeScan {
    /// Range measurements in meters, one per ray.
    pub ranges: Vec<f32>,
    /// Total field of view in radians.
    pub aperture: f32,
    /// Sweep direction (true = angles increase with ray index).
    pub right_to_left: bool,
    /// Minimum valid range in meters.
    pub range_min: f32,
    /// Maximum valid range in meters.
    pub range_max: f32,
}

impl RangeScan {
    /// Create a new range scan
    pub fn new(
        ranges: Vec<f32>,
        aperture: f32,
        right_to_left: bool,
        range_min: f32,
        range_max: f32,
    ) -> Self {
        Self {
            ranges,
            aperture,
            right_to_left,
            range_min,
            range_max,
        }
    }

    /// Number of rays in the scan
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Is the scan empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Check if a range measurement is valid
    #[inline]
    pub fn is_valid_range(&self, range: f32) -> bool {
        range >= self.range_min && range <= self.range_max && range.is_finite()
    }

    /// Angular geometry of this scan, used as the lookup-table key.
    pub fn geometry(&self) -> ScanGeometry {
        ScanGeometry::new(self.ranges.len(), self.aperture, self.right_to_left)
    }

    /// Convert valid ranges to cartesian points in the sensor frame.
    ///
    /// `table` must have been built for this scan's geometry; rays beyond
    /// the table's ray count are ignored.
    pub fn project(&self, table: &SinCosTable) -> Vec<(f32, f32)> {
        debug_assert_eq!(
            table.ray_count(),
            self.len(),
            "table built for a different geometry"
        );

        self.ranges
            .iter()
            .zip(table.iter())
            .filter(|&(&range, _)| self.is_valid_range(range))
            .map(|(&range, (cos, sin))| (range * cos, range * sin))
            .collect()
    }
}
