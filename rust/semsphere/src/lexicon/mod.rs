//! Lexicon: static marker tables compiled into matchers.

pub mod matcher;
pub mod tables;
pub mod vocabulary;

pub use matcher::*;
pub use tables::{Bucket, LevelBucket, CONNECTOR_WORDS, LEVEL_BUCKETS};
pub use vocabulary::*;

use crate::error::SphereError;
use crate::semantics::{AbstractionLevel, Dimension};

/// Compiled form of every table, built once per classifier.
pub struct Lexicon {
    levels: BucketMatcher,
    dimensions: Vec<(Dimension, BucketMatcher)>,
    vocabulary: Vocabulary,
}

impl Lexicon {
    pub fn new(policy: MatchPolicy) -> Result<Self, SphereError> {
        let level_markers: Vec<&'static [&'static str]> =
            LEVEL_BUCKETS.iter().map(|b| b.markers).collect();
        let levels = BucketMatcher::new(&level_markers, policy)?;

        let mut dimensions = Vec::with_capacity(Dimension::ALL.len());
        for dimension in Dimension::ALL {
            let markers: Vec<&'static [&'static str]> =
                tables::dimension_buckets(dimension).iter().map(|b| b.markers).collect();
            dimensions.push((dimension, BucketMatcher::new(&markers, policy)?));
        }

        Ok(Self {
            levels,
            dimensions,
            vocabulary: Vocabulary::new(),
        })
    }

    /// Level of the first level list with a matching marker
    pub fn level_of(&self, word: &str) -> Option<AbstractionLevel> {
        self.levels.first_match(word).map(|idx| LEVEL_BUCKETS[idx].level)
    }

    /// Bucket matched on one dimension, if any
    pub fn bucket_of(&self, dimension: Dimension, word: &str) -> Option<&'static Bucket> {
        let (_, matcher) = &self.dimensions[dimension.index()];
        matcher
            .first_match(word)
            .map(|idx| &tables::dimension_buckets(dimension)[idx])
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_matchers_are_in_slot_order() {
        let lexicon = Lexicon::new(MatchPolicy::Substring).unwrap();
        for (i, (dimension, _)) in lexicon.dimensions.iter().enumerate() {
            assert_eq!(dimension.index(), i);
        }
    }

    #[test]
    fn test_level_and_bucket_lookup() {
        let lexicon = Lexicon::new(MatchPolicy::Substring).unwrap();
        assert_eq!(lexicon.level_of("stone"), Some(AbstractionLevel::Concrete));
        assert_eq!(lexicon.level_of("sand"), Some(AbstractionLevel::Material));
        assert_eq!(lexicon.level_of("quark"), None);
        assert_eq!(lexicon.bucket_of(Dimension::Scale, "galaxy").map(|b| b.name), Some("cosmic"));
        assert_eq!(lexicon.bucket_of(Dimension::Scale, "sand"), None);
        assert_eq!(lexicon.bucket_of(Dimension::Social, "team"), Some(&tables::SOCIAL_BUCKETS[2]));
    }

    #[test]
    fn test_policy_changes_level_lookup() {
        let fuzzy = Lexicon::new(MatchPolicy::Substring).unwrap();
        let strict = Lexicon::new(MatchPolicy::WholeWord).unwrap();
        assert_eq!(fuzzy.level_of("rockery"), Some(AbstractionLevel::Concrete));
        assert_eq!(strict.level_of("rockery"), None);
    }
}
