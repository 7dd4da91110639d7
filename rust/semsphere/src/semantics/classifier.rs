//! WordClassifier - lexicon lookup for a single word
//!
//! Pure and total: every non-empty word gets a level and six scores, even
//! when nothing in the lexicon recognises it.

use serde::{Deserialize, Serialize};

use super::{AbstractionLevel, Dimension, DimensionScores};
use crate::error::SphereError;
use crate::lexicon::{Lexicon, MatchPolicy};

/// Level plus per-dimension scores for one word
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub level: AbstractionLevel,
    pub dimensions: DimensionScores,
}

pub struct WordClassifier {
    lexicon: Lexicon,
}

impl WordClassifier {
    pub fn new(policy: MatchPolicy) -> Result<Self, SphereError> {
        Ok(Self {
            lexicon: Lexicon::new(policy)?,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify a lowercase word.
    ///
    /// Level: first matching level list, else the suffix fallback.
    /// Dimensions: first matching bucket's value, else 0.
    pub fn classify(&self, word: &str) -> Classification {
        let level = self
            .lexicon
            .level_of(word)
            .unwrap_or_else(|| AbstractionLevel::from_suffix(word));

        let mut dimensions = DimensionScores::default();
        for dimension in Dimension::ALL {
            if let Some(bucket) = self.lexicon.bucket_of(dimension, word) {
                dimensions.set(dimension, bucket.value);
            }
        }

        Classification { level, dimensions }
    }
}
