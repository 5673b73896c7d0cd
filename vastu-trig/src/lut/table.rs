//! Per-geometry sine/cosine table.

use crate::core::ScanGeometry;

/// Extra slots allocated past the last ray in both buffers.
///
/// Lets 4-wide SIMD loops read a full final chunk without bounds handling.
/// Padding values are unspecified (currently zero).
pub const TABLE_PADDING: usize = 4;

/// Cosine and sine of every ray angle of a scan geometry.
///
/// Stored as two parallel buffers (SoA layout), each of length
/// `ray_count + TABLE_PADDING`.
#[derive(Clone, Debug, PartialEq)]
pub struct SinCosTable {
    ray_count: usize,
    cos: Vec<f32>,
    sin: Vec<f32>,
}

impl SinCosTable {
    /// Compute the table for a geometry.
    ///
    /// Angles start at [`ScanGeometry::start_angle`] and advance by
    /// [`ScanGeometry::angle_step`] per ray. A geometry with zero rays
    /// yields padding only.
    pub fn compute(geometry: &ScanGeometry) -> Self {
        let n = geometry.ray_count();
        let mut cos = vec![0.0; n + TABLE_PADDING];
        let mut sin = vec![0.0; n + TABLE_PADDING];

        if n > 0 {
            let step = geometry.angle_step();
            let mut angle = geometry.start_angle();
            for (c, s) in cos.iter_mut().zip(sin.iter_mut()).take(n) {
                (*s, *c) = angle.sin_cos();
                angle += step;
            }
        }

        Self {
            ray_count: n,
            cos,
            sin,
        }
    }

    /// Number of rays (logical length, excludes padding)
    #[inline]
    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    /// Cosine of each ray angle
    #[inline]
    pub fn cos(&self) -> &[f32] {
        &self.cos[..self.ray_count]
    }

    /// Sine of each ray angle
    #[inline]
    pub fn sin(&self) -> &[f32] {
        &self.sin[..self.ray_count]
    }

    /// Full cosine buffer including the trailing padding slots.
    #[inline]
    pub fn padded_cos(&self) -> &[f32] {
        &self.cos
    }

    /// Full sine buffer including the trailing padding slots.
    #[inline]
    pub fn padded_sin(&self) -> &[f32] {
        &self.sin
    }

    /// `(cos, sin)` of ray `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(f32, f32)> {
        (index < self.ray_count).then(|| (self.cos[index], self.sin[index]))
    }

    /// Iterate `(cos, sin)` pairs in ray order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.cos().iter().copied().zip(self.sin().iter().copied())
    }
}
