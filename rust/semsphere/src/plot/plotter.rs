//! Plotter: one full pass from sentences to a renderable `PlotResult`.
//!
//! A pass is a pure function of (sentences, config). The occupancy table
//! and the per-word cache live only inside `plot_with` and are rebuilt on
//! every call, so re-plotting the same sentences gives identical output.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::guides::{label_anchor, marker_radius};
use super::pather::{PathToken, SentencePather};
use crate::config::{SphereConfig, StrategyConfig};
use crate::diagnostics::Diagnostics;
use crate::error::SphereError;
use crate::layout::{sentence_color, AxisStrategy, CollisionResolver, Point3, PositionStrategy};
use crate::semantics::{AbstractionLevel, Classification, Dimension, DimensionScores, WordClassifier};

// =============================================================================
// Types
// =============================================================================

/// Everything the renderer needs for one distinct word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub word: String,
    pub abstraction_level: AbstractionLevel,
    pub dimensions: DimensionScores,
    pub position: Point3,
    pub occurrence_count: u32,
    /// Jitter steps applied to free the position (0 = none)
    pub collision_index: u32,
    /// Marker sphere size for the final occurrence count
    pub marker_radius: f64,
    /// Where the text label floats above the marker
    pub label_anchor: Point3,
}

/// Polyline through a sentence's semantic words
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentencePath {
    pub sentence: String,
    /// Position of the sentence in the input list (drives the color)
    pub sentence_index: usize,
    pub words: Vec<String>,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlotStats {
    pub sentence_count: usize,
    pub distinct_words: usize,
    pub total_occurrences: usize,
    pub collisions: usize,
    pub dropped_tokens: usize,
    pub elapsed_us: u64,
}

/// Immutable output of one plot pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlotResult {
    /// Distinct words in first-seen order
    pub words: Vec<WordAnalysis>,
    pub paths: Vec<SentencePath>,
    pub stats: PlotStats,
}

impl PlotResult {
    pub fn word(&self, text: &str) -> Option<&WordAnalysis> {
        self.words.iter().find(|w| w.word == text)
    }

    /// Positions along a path. Words missing from this pass are skipped.
    pub fn path_points(&self, path: &SentencePath) -> Vec<Point3> {
        let index: HashMap<&str, &WordAnalysis> =
            self.words.iter().map(|w| (w.word.as_str(), w)).collect();
        path.words
            .iter()
            .filter_map(|w| index.get(w.as_str()).map(|a| a.position))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, SphereError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One cell of the multi-view grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisView {
    pub axes: [Dimension; 3],
    pub result: PlotResult,
}

// =============================================================================
// Plotter
// =============================================================================

pub struct Plotter {
    classifier: WordClassifier,
    config: SphereConfig,
}

impl Plotter {
    pub fn new(config: SphereConfig) -> Result<Self, SphereError> {
        config.validate()?;
        Ok(Self {
            classifier: WordClassifier::new(config.match_policy)?,
            config,
        })
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    pub fn classifier(&self) -> &WordClassifier {
        &self.classifier
    }

    pub fn classify(&self, word: &str) -> Classification {
        self.classifier.classify(&word.trim().to_lowercase())
    }

    pub fn pather(&self) -> SentencePather<'_> {
        SentencePather::new(self.classifier.lexicon().vocabulary(), self.config.min_word_len)
    }

    /// Plot with the configured strategy
    pub fn plot<S: AsRef<str>>(&self, sentences: &[S]) -> PlotResult {
        let strategy = self.config.strategy.build();
        self.plot_with(sentences, &*strategy)
    }

    /// Direct-axis plots for each triple (all 20 when `triples` is empty)
    pub fn plot_axis_views<S: AsRef<str>>(&self, sentences: &[S], triples: &[[Dimension; 3]]) -> Vec<AxisView> {
        let view_radius = match &self.config.strategy {
            StrategyConfig::Axes { view_radius, .. } => *view_radius,
            StrategyConfig::Spherical => AxisStrategy::DEFAULT_VIEW_RADIUS,
        };
        let triples = if triples.is_empty() { Dimension::triples() } else { triples.to_vec() };

        triples
            .into_iter()
            .map(|axes| AxisView {
                axes,
                result: self.plot_with(sentences, &AxisStrategy::new(axes, view_radius)),
            })
            .collect()
    }

    /// One pass: tokenize, classify each new word, place, resolve, build paths
    pub fn plot_with<S: AsRef<str>>(&self, sentences: &[S], strategy: &dyn PositionStrategy) -> PlotResult {
        let start = instant::Instant::now();
        let diagnostics = Diagnostics::new(self.config.diagnostics);
        let pather = self.pather();
        let mut resolver = CollisionResolver::new(
            self.config.quantize_decimals,
            self.config.jitter_radius,
            self.config.jitter_step,
        );

        let mut words: Vec<WordAnalysis> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut paths = Vec::new();
        let mut stats = PlotStats {
            sentence_count: sentences.len(),
            ..PlotStats::default()
        };

        for (sentence_index, sentence) in sentences.iter().enumerate() {
            let sentence = sentence.as_ref();
            let mut path = Vec::new();

            for token in pather.scan(sentence) {
                let word = match token {
                    PathToken::Word(w) => w,
                    PathToken::Dropped(t) => {
                        stats.dropped_tokens += 1;
                        diagnostics.token_dropped(sentence_index, &t);
                        continue;
                    }
                };

                stats.total_occurrences += 1;
                match seen.get(&word) {
                    Some(&idx) => words[idx].occurrence_count += 1,
                    None => {
                        let Classification { level, dimensions } = self.classifier.classify(&word);
                        let resolved = resolver.resolve(strategy.place(level, &dimensions));
                        let analysis = WordAnalysis {
                            word: word.clone(),
                            abstraction_level: level,
                            dimensions,
                            position: resolved.position,
                            occurrence_count: 1,
                            collision_index: resolved.collision_index,
                            marker_radius: marker_radius(1),
                            label_anchor: label_anchor(resolved.position, 1),
                        };
                        diagnostics.word_placed(&analysis);
                        seen.insert(word.clone(), words.len());
                        words.push(analysis);
                    }
                }
                path.push(word);
            }

            if path.len() >= self.config.min_path_words {
                paths.push(SentencePath {
                    sentence: sentence.to_string(),
                    sentence_index,
                    words: path,
                    color: sentence_color(sentence_index),
                });
            }
        }

        for word in &mut words {
            word.marker_radius = marker_radius(word.occurrence_count);
            word.label_anchor = label_anchor(word.position, word.occurrence_count);
        }

        stats.distinct_words = words.len();
        stats.collisions = resolver.collisions();
        stats.elapsed_us = start.elapsed().as_micros() as u64;
        diagnostics.plot_finished(&stats);

        PlotResult { words, paths, stats }
    }
}
