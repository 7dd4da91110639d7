//! Static scene guides: layer shells, dimension spokes, marker sizing.

use serde::Serialize;

use crate::layout::Point3;
use crate::semantics::{AbstractionLevel, Dimension, ABSTRACTION_LAYERS};

pub const SPOKE_LENGTH: f64 = 8.0;
pub const SPOKE_LABEL_SCALE: f64 = 1.1;
const MARKER_BASE: f64 = 0.1;
const MARKER_PER_OCCURRENCE: f64 = 0.05;
const LABEL_GAP: f64 = 0.3;

#[derive(Debug, Clone, Serialize)]
pub struct Shell {
    pub level: AbstractionLevel,
    pub radius: f64,
    pub color: u32,
    pub name: &'static str,
    pub examples: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Spoke {
    pub dimension: Dimension,
    pub end: Point3,
    pub label_position: Point3,
    pub color: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneGuides {
    pub shells: Vec<Shell>,
    pub spokes: Vec<Spoke>,
}

impl SceneGuides {
    pub fn new() -> Self {
        let shells = ABSTRACTION_LAYERS
            .iter()
            .map(|layer| Shell {
                level: layer.level,
                radius: layer.radius,
                color: layer.color,
                name: layer.name,
                examples: layer.examples,
            })
            .collect();

        let spokes = Dimension::ALL
            .iter()
            .map(|&dimension| {
                let angle = dimension.angle_radians();
                let end = [SPOKE_LENGTH * angle.cos(), 0.0, SPOKE_LENGTH * angle.sin()];
                Spoke {
                    dimension,
                    end,
                    label_position: end.map(|c| c * SPOKE_LABEL_SCALE),
                    color: dimension.color(),
                    description: dimension.description(),
                }
            })
            .collect();

        Self { shells, spokes }
    }
}

impl Default for SceneGuides {
    fn default() -> Self {
        Self::new()
    }
}

/// Marker sphere radius; grows with how often the word was used
pub fn marker_radius(occurrence_count: u32) -> f64 {
    MARKER_BASE + occurrence_count as f64 * MARKER_PER_OCCURRENCE
}

/// Where the word's text label floats, just above its marker
pub fn label_anchor(position: Point3, occurrence_count: u32) -> Point3 {
    [
        position[0],
        position[1] + marker_radius(occurrence_count) + LABEL_GAP,
        position[2],
    ]
}
