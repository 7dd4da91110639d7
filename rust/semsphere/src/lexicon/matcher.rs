//! BucketMatcher - first-bucket-wins marker lookup
//!
//! Substring mode compiles every marker of a lexicon into a single
//! Aho-Corasick automaton and runs an overlapping search over the word, so
//! one pass sees every marker hidden inside it. The lowest bucket index
//! among the hits wins, which reproduces "check buckets in order, first
//! containing list wins" without scanning each list separately.
//!
//! Whole-word mode is a plain hash lookup.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::SphereError;

/// How a marker has to relate to a word to count as a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The word contains the marker ("rockery" hits "rock")
    #[default]
    Substring,
    /// The word equals the marker
    WholeWord,
}

enum Engine {
    Automaton {
        automaton: AhoCorasick,
        /// Bucket index for each pattern id
        pattern_bucket: Vec<usize>,
    },
    Exact(HashMap<&'static str, usize>),
}

/// Matcher over an ordered list of marker buckets
pub struct BucketMatcher {
    engine: Engine,
}

impl BucketMatcher {
    /// Build a matcher from buckets in priority order.
    ///
    /// A marker that appears in more than one bucket belongs to the first.
    pub fn new(buckets: &[&'static [&'static str]], policy: MatchPolicy) -> Result<Self, SphereError> {
        let mut seen: HashMap<&'static str, usize> = HashMap::new();
        let mut patterns: Vec<&'static str> = Vec::new();
        let mut pattern_bucket: Vec<usize> = Vec::new();

        for (bucket_idx, markers) in buckets.iter().enumerate() {
            for &marker in markers.iter() {
                if marker.is_empty() || seen.contains_key(marker) {
                    continue;
                }
                seen.insert(marker, bucket_idx);
                patterns.push(marker);
                pattern_bucket.push(bucket_idx);
            }
        }

        let engine = match policy {
            MatchPolicy::WholeWord => Engine::Exact(seen),
            MatchPolicy::Substring => {
                let automaton = AhoCorasickBuilder::new()
                    .match_kind(MatchKind::Standard)
                    .build(&patterns)
                    .map_err(|e| SphereError::Lexicon(e.to_string()))?;
                Engine::Automaton { automaton, pattern_bucket }
            }
        };

        Ok(Self { engine })
    }

    /// Index of the first bucket with a marker matching `word`
    pub fn first_match(&self, word: &str) -> Option<usize> {
        match &self.engine {
            Engine::Exact(table) => table.get(word).copied(),
            Engine::Automaton { automaton, pattern_bucket } => automaton
                .find_overlapping_iter(word)
                .map(|m| pattern_bucket[m.pattern().as_usize()])
                .min(),
        }
    }
}
