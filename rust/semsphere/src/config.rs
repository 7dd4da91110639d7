//! Configuration types and defaults for SemSphere

use serde::{Deserialize, Serialize};

use crate::error::SphereError;
use crate::layout::{AxisStrategy, PositionStrategy, SphericalStrategy};
use crate::lexicon::MatchPolicy;
use crate::semantics::Dimension;

// =============================================================================
// Position strategy selection
// =============================================================================

/// Which placement the plotter uses
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Level shells with weighted azimuth (single view)
    #[default]
    Spherical,
    /// Three dimensions as x/y/z (multi-view grids)
    Axes {
        axes: [Dimension; 3],
        #[serde(default = "default_view_radius")]
        view_radius: f64,
    },
}

fn default_view_radius() -> f64 { AxisStrategy::DEFAULT_VIEW_RADIUS }

impl StrategyConfig {
    pub fn build(&self) -> Box<dyn PositionStrategy> {
        match self {
            StrategyConfig::Spherical => Box::new(SphericalStrategy),
            StrategyConfig::Axes { axes, view_radius } => Box::new(AxisStrategy::new(*axes, *view_radius)),
        }
    }
}

// =============================================================================
// Main configuration
// =============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SphereConfig {
    /// Marker matching. Default: substring
    #[serde(default)]
    pub match_policy: MatchPolicy,
    /// Default: spherical
    #[serde(default)]
    pub strategy: StrategyConfig,
    /// Horizontal jitter per collision. Default: 0.3
    #[serde(default = "default_jitter_radius")]
    pub jitter_radius: f64,
    /// Vertical rise per collision step. Default: 0.1
    #[serde(default = "default_jitter_step")]
    pub jitter_step: f64,
    /// Decimals kept when comparing positions. Default: 3
    #[serde(default = "default_quantize_decimals")]
    pub quantize_decimals: u32,
    /// Shorter tokens are never plotted. Default: 2
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// Paths with fewer words get no polyline. Default: 2
    #[serde(default = "default_min_path_words")]
    pub min_path_words: usize,
    /// Emit plot diagnostics through `log`. Default: false
    #[serde(default)]
    pub diagnostics: bool,
}

fn default_jitter_radius() -> f64 { 0.3 }
fn default_jitter_step() -> f64 { 0.1 }
fn default_quantize_decimals() -> u32 { 3 }
fn default_min_word_len() -> usize { 2 }
fn default_min_path_words() -> usize { 2 }

const MAX_QUANTIZE_DECIMALS: u32 = 6;

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            match_policy: MatchPolicy::default(),
            strategy: StrategyConfig::default(),
            jitter_radius: default_jitter_radius(),
            jitter_step: default_jitter_step(),
            quantize_decimals: default_quantize_decimals(),
            min_word_len: default_min_word_len(),
            min_path_words: default_min_path_words(),
            diagnostics: false,
        }
    }
}

impl SphereConfig {
    /// Whole-word matching, no substring false positives
    pub fn strict() -> Self {
        Self {
            match_policy: MatchPolicy::WholeWord,
            ..Self::default()
        }
    }

    /// Direct-axis view over three dimensions
    pub fn axes(x: Dimension, y: Dimension, z: Dimension) -> Self {
        Self {
            strategy: StrategyConfig::Axes {
                axes: [x, y, z],
                view_radius: default_view_radius(),
            },
            ..Self::default()
        }
    }

    /// Parse from JSON and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SphereError> {
        let config: SphereConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SphereError> {
        if !self.jitter_radius.is_finite() || self.jitter_radius <= 0.0 {
            return Err(SphereError::InvalidConfig(format!(
                "jitter_radius must be positive, got {}",
                self.jitter_radius
            )));
        }
        if self.quantize_decimals > MAX_QUANTIZE_DECIMALS {
            return Err(SphereError::InvalidConfig(format!(
                "quantize_decimals must be at most {}, got {}",
                MAX_QUANTIZE_DECIMALS, self.quantize_decimals
            )));
        }
        // Each collision step has to clear at least one quantum vertically
        let quantum = 10f64.powi(-(self.quantize_decimals as i32));
        if !self.jitter_step.is_finite() || self.jitter_step < quantum {
            return Err(SphereError::InvalidConfig(format!(
                "jitter_step must be at least {}, got {}",
                quantum, self.jitter_step
            )));
        }
        if let StrategyConfig::Axes { axes, view_radius } = &self.strategy {
            if axes[0] == axes[1] || axes[1] == axes[2] || axes[0] == axes[2] {
                return Err(SphereError::InvalidConfig(format!(
                    "axes must be three distinct dimensions, got {:?}",
                    axes
                )));
            }
            if !view_radius.is_finite() || *view_radius <= 0.0 {
                return Err(SphereError::InvalidConfig(format!(
                    "view_radius must be positive, got {}",
                    view_radius
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = SphereConfig::from_json("{}").unwrap();
        assert_eq!(config, SphereConfig::default());
        assert_eq!(config.jitter_radius, 0.3);
        assert_eq!(config.quantize_decimals, 3);
        assert_eq!(config.strategy, StrategyConfig::Spherical);
    }

    #[test]
    fn test_axes_strategy_from_json() {
        let config = SphereConfig::from_json(
            r#"{"strategy": {"kind": "axes", "axes": ["Scale", "Social", "Causality"]}, "match_policy": "whole_word"}"#,
        )
        .unwrap();
        assert_eq!(config.match_policy, MatchPolicy::WholeWord);
        assert_eq!(
            config.strategy,
            StrategyConfig::Axes {
                axes: [Dimension::Scale, Dimension::Social, Dimension::Causality],
                view_radius: 5.0,
            }
        );
    }

    #[test]
    fn test_rejects_repeated_axes() {
        let config = SphereConfig::axes(Dimension::Scale, Dimension::Scale, Dimension::Agency);
        assert!(matches!(config.validate(), Err(SphereError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_jitter() {
        let mut config = SphereConfig::default();
        config.jitter_radius = 0.0;
        assert!(config.validate().is_err());
        config.jitter_radius = f64::NAN;
        assert!(config.validate().is_err());
        config.jitter_radius = 0.3;
        config.quantize_decimals = 12;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_jitter_step_must_clear_a_quantum() {
        let mut config = SphereConfig::default();
        config.jitter_step = 0.0;
        assert!(matches!(config.validate(), Err(SphereError::InvalidConfig(_))));
        config.jitter_step = 0.0005;
        assert!(config.validate().is_err());
        config.quantize_decimals = 4;
        assert!(config.validate().is_ok());
        config.jitter_step = 0.002;
        config.quantize_decimals = 3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(SphereConfig::strict().match_policy, MatchPolicy::WholeWord);
        assert!(SphereConfig::axes(Dimension::Scale, Dimension::Temporal, Dimension::Agency)
            .validate()
            .is_ok());
    }
}
