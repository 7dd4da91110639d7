//! Position strategies: (level, scores) → point in 3D.
//!
//! # Strategies
//! - `SphericalStrategy` - level picks the shell, scores pick a direction on it
//! - `AxisStrategy` - three chosen dimensions become x, y, z directly

use std::f64::consts::{PI, TAU};

use crate::semantics::{AbstractionLevel, Dimension, DimensionScores};

pub type Point3 = [f64; 3];

/// Below this resultant length the weighted directions cancel out.
const AZIMUTH_EPSILON: f64 = 1e-9;

/// Maps a classified word to a point. Implementations must be pure.
pub trait PositionStrategy {
    fn place(&self, level: AbstractionLevel, dimensions: &DimensionScores) -> Point3;
}

// =============================================================================
// Spherical (default)
// =============================================================================

/// Weighted-azimuth placement on the level's shell.
///
/// Azimuth is the circular mean of the dimension slots weighted by
/// `|score|`; elevation is a decorative `sin(3·az)·0.3π` wave.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalStrategy;

impl SphericalStrategy {
    /// Azimuth in radians, normalized into [0, 2π). Neutral words sit at 0.
    pub fn azimuth(dimensions: &DimensionScores) -> f64 {
        let (mut sin_sum, mut cos_sum, mut total_weight) = (0.0, 0.0, 0.0);

        for (dimension, score) in dimensions.iter() {
            let weight = score.abs();
            let angle = dimension.angle_radians();
            sin_sum += weight * angle.sin();
            cos_sum += weight * angle.cos();
            total_weight += weight;
        }

        if total_weight == 0.0 || sin_sum.hypot(cos_sum) < AZIMUTH_EPSILON * total_weight {
            return 0.0;
        }

        sin_sum.atan2(cos_sum).rem_euclid(TAU)
    }

    pub fn elevation(azimuth: f64) -> f64 {
        (azimuth * 3.0).sin() * 0.3 * PI
    }
}

impl PositionStrategy for SphericalStrategy {
    fn place(&self, level: AbstractionLevel, dimensions: &DimensionScores) -> Point3 {
        let radius = level.radius();
        let azimuth = Self::azimuth(dimensions);
        let elevation = Self::elevation(azimuth);

        [
            radius * elevation.cos() * azimuth.cos(),
            radius * elevation.sin(),
            radius * elevation.cos() * azimuth.sin(),
        ]
    }
}

// =============================================================================
// Direct axes (multi-view)
// =============================================================================

/// Three dimension scores used directly as coordinates. Ignores level.
#[derive(Debug, Clone, Copy)]
pub struct AxisStrategy {
    pub axes: [Dimension; 3],
    pub view_radius: f64,
}

impl AxisStrategy {
    pub const DEFAULT_VIEW_RADIUS: f64 = 5.0;

    pub fn new(axes: [Dimension; 3], view_radius: f64) -> Self {
        Self { axes, view_radius }
    }
}

impl PositionStrategy for AxisStrategy {
    fn place(&self, _level: AbstractionLevel, dimensions: &DimensionScores) -> Point3 {
        let [x, y, z] = self.axes;
        [
            dimensions.get(x) * self.view_radius,
            dimensions.get(y) * self.view_radius,
            dimensions.get(z) * self.view_radius,
        ]
    }
}
