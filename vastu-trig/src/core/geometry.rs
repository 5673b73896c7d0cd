//! Scan geometry descriptor.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Angular layout of a 2D range scan.
///
/// Rays are spread with equal spacing across `aperture`, centered on the
/// sensor's forward axis:
///
/// ```text
///   right_to_left = true          right_to_left = false
///
///        +a/2  ray n-1                 +a/2  ray 0
///          ╲                             ╲
///           ●───── 0 (forward)            ●───── 0 (forward)
///          ╱                             ╱
///        -a/2  ray 0                   -a/2  ray n-1
/// ```
///
/// Two geometries are equal when all three fields are equal. The aperture
/// is compared by bit pattern, so the type can be used as a hash map key.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScanGeometry {
    ray_count: usize,
    aperture: f32,
    right_to_left: bool,
}

impl ScanGeometry {
    /// Create a new scan geometry.
    ///
    /// # Arguments
    /// * `ray_count` - Number of rays in the scan
    /// * `aperture` - Total field of view in radians
    /// * `right_to_left` - Sweep direction (true = angles increase with ray index)
    pub fn new(ray_count: usize, aperture: f32, right_to_left: bool) -> Self {
        Self {
            ray_count,
            aperture,
            right_to_left,
        }
    }

    /// Number of rays
    #[inline]
    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    /// Field of view in radians
    #[inline]
    pub fn aperture(&self) -> f32 {
        self.aperture
    }

    /// Sweep direction
    #[inline]
    pub fn right_to_left(&self) -> bool {
        self.right_to_left
    }

    /// Angle of the first ray.
    #[inline]
    pub fn start_angle(&self) -> f32 {
        if self.right_to_left {
            -0.5 * self.aperture
        } else {
            0.5 * self.aperture
        }
    }

    /// Signed angular increment between consecutive rays.
    ///
    /// Scans with fewer than two rays have no spacing; the step is 0 so a
    /// single ray sits at [`start_angle`](Self::start_angle).
    #[inline]
    pub fn angle_step(&self) -> f32 {
        if self.ray_count < 2 {
            return 0.0;
        }
        let step = self.aperture / (self.ray_count - 1) as f32;
        if self.right_to_left { step } else { -step }
    }

    /// Angle of ray `index`, or `None` if out of range.
    pub fn ray_angle(&self, index: usize) -> Option<f32> {
        (index < self.ray_count).then(|| self.start_angle() + index as f32 * self.angle_step())
    }
}

impl PartialEq for ScanGeometry {
    fn eq(&self, other: &Self) -> bool {
        self.ray_count == other.ray_count
            && self.aperture.to_bits() == other.aperture.to_bits()
            && self.right_to_left == other.right_to_left
    }
}

impl Eq for ScanGeometry {}

impl Hash for ScanGeometry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ray_count.hash(state);
        self.aperture.to_bits().hash(state);
        self.right_to_left.hash(state);
    }
}

impl PartialOrd for ScanGeometry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScanGeometry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ray_count
            .cmp(&other.ray_count)
            .then_with(|| self.aperture.total_cmp(&other.aperture))
            .then_with(|| self.right_to_left.cmp(&other.right_to_left))
    }
}
