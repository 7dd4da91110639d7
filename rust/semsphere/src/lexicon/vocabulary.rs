//! Fixed vocabulary: the semantic words a sentence may plot, and the
//! connector words it may use in between.

use serde::Serialize;
use std::collections::HashSet;

use super::tables::{dimension_buckets, CONNECTOR_WORDS, LEVEL_BUCKETS};
use crate::semantics::Dimension;

/// How a token relates to the vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Semantic,
    Connector,
    Unmapped,
}

/// A labelled list of words, one per guided-input button row
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyGroup {
    pub label: String,
    pub words: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
    semantic: HashSet<&'static str>,
    connectors: HashSet<&'static str>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    /// Union of every marker in every lexicon, plus the connector set.
    pub fn new() -> Self {
        let mut semantic: HashSet<&'static str> = LEVEL_BUCKETS
            .iter()
            .flat_map(|b| b.markers.iter().copied())
            .collect();
        for dimension in Dimension::ALL {
            for bucket in dimension_buckets(dimension) {
                semantic.extend(bucket.markers.iter().copied());
            }
        }

        Self {
            semantic,
            connectors: CONNECTOR_WORDS.iter().copied().collect(),
        }
    }

    /// Semantic membership wins when a word is in both sets ("be", "i").
    pub fn kind(&self, token: &str) -> TokenKind {
        if self.is_semantic(token) {
            TokenKind::Semantic
        } else if self.is_connector(token) {
            TokenKind::Connector
        } else {
            TokenKind::Unmapped
        }
    }

    pub fn is_semantic(&self, token: &str) -> bool {
        self.semantic.contains(token)
    }

    pub fn is_connector(&self, token: &str) -> bool {
        self.connectors.contains(token)
    }

    /// Button rows for guided sentence building: one per level list, one per
    /// dimension bucket, then the connectors. Words within a row keep table order.
    pub fn groups(&self) -> Vec<VocabularyGroup> {
        let mut groups = Vec::new();

        for bucket in LEVEL_BUCKETS {
            groups.push(VocabularyGroup {
                label: format!("Level {} · {}", bucket.level.as_u8(), bucket.level.name()),
                words: bucket.markers.to_vec(),
            });
        }
        for dimension in Dimension::ALL {
            for bucket in dimension_buckets(dimension) {
                groups.push(VocabularyGroup {
                    label: format!("{} · {}", dimension.name(), bucket.name),
                    words: bucket.markers.to_vec(),
                });
            }
        }
        groups.push(VocabularyGroup {
            label: "Connectors".to_string(),
            words: CONNECTOR_WORDS.to_vec(),
        });

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kinds() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.kind("stone"), TokenKind::Semantic);
        assert_eq!(vocab.kind("galaxy"), TokenKind::Semantic);
        assert_eq!(vocab.kind("the"), TokenKind::Connector);
        assert_eq!(vocab.kind("became"), TokenKind::Connector);
        assert_eq!(vocab.kind("zebra"), TokenKind::Unmapped);
    }

    #[test]
    fn test_semantic_beats_connector() {
        let vocab = Vocabulary::new();
        assert!(vocab.is_semantic("be"));
        assert_eq!(vocab.kind("be"), TokenKind::Semantic);
        assert!(vocab.is_connector("and"));
    }

    #[test]
    fn test_groups_cover_every_bucket() {
        let vocab = Vocabulary::new();
        let groups = vocab.groups();
        // 5 level lists + 5 + 5 + 3 + 4 + 3 + 3 dimension buckets + connectors
        assert_eq!(groups.len(), 5 + 23 + 1);
        assert_eq!(groups[0].label, "Level 1 · Concrete Objects");
        assert!(groups.last().unwrap().words.contains(&"became"));

        let listed: HashSet<&str> = groups[..groups.len() - 1]
            .iter()
            .flat_map(|g| g.words.iter().copied())
            .collect();
        assert!(listed.iter().all(|w| vocab.is_semantic(w)));
        assert!(listed.contains("matter"));
    }
}
