//! The six orthogonal semantic dimensions and their per-word scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A semantic axis. Each owns an angular slot around the sphere's equator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Scale,
    Temporal,
    Agency,
    Social,
    Sensory,
    Causality,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Scale,
        Dimension::Temporal,
        Dimension::Agency,
        Dimension::Social,
        Dimension::Sensory,
        Dimension::Causality,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Scale => "Scale",
            Dimension::Temporal => "Temporal",
            Dimension::Agency => "Agency",
            Dimension::Social => "Social",
            Dimension::Sensory => "Sensory",
            Dimension::Causality => "Causality",
        }
    }

    /// Angular slot in degrees: 0, 60, ..., 300
    pub fn angle_degrees(self) -> f64 {
        self.index() as f64 * 60.0
    }

    pub fn angle_radians(self) -> f64 {
        self.angle_degrees().to_radians()
    }

    pub fn color(self) -> u32 {
        match self {
            Dimension::Scale => 0xff6b6b,
            Dimension::Temporal => 0x4ecdc4,
            Dimension::Agency => 0x45b7d1,
            Dimension::Social => 0xf9ca24,
            Dimension::Sensory => 0x6c5ce7,
            Dimension::Causality => 0xa55eea,
        }
    }

    /// Negative pole ↔ positive pole
    pub fn description(self) -> &'static str {
        match self {
            Dimension::Scale => "Microscopic ↔ Cosmic",
            Dimension::Temporal => "Instant ↔ Eternal",
            Dimension::Agency => "Passive ↔ Active",
            Dimension::Social => "Individual ↔ Collective",
            Dimension::Sensory => "Physical ↔ Mental",
            Dimension::Causality => "Effect ↔ Cause",
        }
    }

    /// All unordered triples of distinct dimensions, in lexicographic order (20 of them).
    pub fn triples() -> Vec<[Dimension; 3]> {
        let mut out = Vec::with_capacity(20);
        for a in 0..Self::ALL.len() {
            for b in (a + 1)..Self::ALL.len() {
                for c in (b + 1)..Self::ALL.len() {
                    out.push([Self::ALL[a], Self::ALL[b], Self::ALL[c]]);
                }
            }
        }
        out
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One score in [-1, 1] per dimension. Serialized as `{"Scale": .., ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionScores {
    #[serde(rename = "Scale")]
    pub scale: f64,
    #[serde(rename = "Temporal")]
    pub temporal: f64,
    #[serde(rename = "Agency")]
    pub agency: f64,
    #[serde(rename = "Social")]
    pub social: f64,
    #[serde(rename = "Sensory")]
    pub sensory: f64,
    #[serde(rename = "Causality")]
    pub causality: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Scale => self.scale,
            Dimension::Temporal => self.temporal,
            Dimension::Agency => self.agency,
            Dimension::Social => self.social,
            Dimension::Sensory => self.sensory,
            Dimension::Causality => self.causality,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        let slot = match dimension {
            Dimension::Scale => &mut self.scale,
            Dimension::Temporal => &mut self.temporal,
            Dimension::Agency => &mut self.agency,
            Dimension::Social => &mut self.social,
            Dimension::Sensory => &mut self.sensory,
            Dimension::Causality => &mut self.causality,
        };
        *slot = value;
    }

    /// (dimension, score) pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }

    pub fn is_neutral(&self) -> bool {
        self.iter().all(|(_, v)| v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angles_are_evenly_spaced() {
        let angles: Vec<f64> = Dimension::ALL.iter().map(|d| d.angle_degrees()).collect();
        assert_eq!(angles, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
    }

    #[test]
    fn test_triples_cover_all_combinations() {
        let triples = Dimension::triples();
        assert_eq!(triples.len(), 20);
        assert_eq!(triples[0], [Dimension::Scale, Dimension::Temporal, Dimension::Agency]);
        assert!(triples.iter().all(|t| t[0] != t[1] && t[1] != t[2] && t[0] != t[2]));
    }

    #[test]
    fn test_scores_get_set() {
        let mut scores = DimensionScores::default();
        assert!(scores.is_neutral());
        scores.set(Dimension::Social, 0.5);
        assert_eq!(scores.get(Dimension::Social), 0.5);
        assert_eq!(scores.iter().filter(|(_, v)| *v != 0.0).count(), 1);
        assert!(!scores.is_neutral());
    }

    #[test]
    fn test_scores_serialize_by_dimension_name() {
        let mut scores = DimensionScores::default();
        scores.set(Dimension::Scale, -1.0);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["Scale"], -1.0);
        assert_eq!(json["Causality"], 0.0);
    }
}
