//! Hand-authored marker tables.
//!
//! Every lexicon is an ordered list of buckets. The first bucket with a
//! matching marker decides the result, so order matters: a word that hits
//! both `micro` and `cosmic` is micro.

use crate::semantics::{AbstractionLevel, Dimension};

/// A named bucket carrying a fixed scalar and its marker words
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub name: &'static str,
    pub value: f64,
    pub markers: &'static [&'static str],
}

impl Bucket {
    pub const fn new(name: &'static str, value: f64, markers: &'static [&'static str]) -> Self {
        Self { name, value, markers }
    }
}

/// A level together with the markers that claim it
#[derive(Debug, Clone, Copy)]
pub struct LevelBucket {
    pub level: AbstractionLevel,
    pub markers: &'static [&'static str],
}

// =============================================================================
// Abstraction levels (checked 1 → 5)
// =============================================================================

pub const LEVEL_BUCKETS: &[LevelBucket] = &[
    LevelBucket {
        level: AbstractionLevel::Concrete,
        markers: &[
            "stone", "rock", "apple", "tree", "chair", "table", "car", "house", "book", "phone",
            "water", "fire",
        ],
    },
    LevelBucket {
        level: AbstractionLevel::Material,
        markers: &[
            "sand", "liquid", "solid", "gas", "metal", "wood", "plastic", "glass", "fabric", "paper",
        ],
    },
    LevelBucket {
        level: AbstractionLevel::Property,
        markers: &[
            "hard", "soft", "hot", "cold", "big", "small", "fast", "slow", "silicon", "carbon",
            "oxygen",
        ],
    },
    LevelBucket {
        level: AbstractionLevel::Process,
        markers: &[
            "energy", "motion", "change", "growth", "dust", "particle", "wave", "force", "power",
        ],
    },
    LevelBucket {
        level: AbstractionLevel::Abstract,
        markers: &[
            "love", "justice", "beauty", "truth", "existence", "reality", "consciousness",
            "infinity", "freedom", "matter",
        ],
    },
];

// =============================================================================
// Dimensions
// =============================================================================

/// Scale: microscopic (-1) to cosmic (+1)
pub const SCALE_BUCKETS: &[Bucket] = &[
    Bucket::new("micro", -1.0, &["atom", "cell", "molecule", "bacteria", "electron", "proton"]),
    Bucket::new("small", -0.5, &["grain", "pebble", "insect", "leaf", "finger"]),
    Bucket::new("medium", 0.0, &["rock", "tree", "person", "house", "car"]),
    Bucket::new("large", 0.5, &["mountain", "ocean", "city", "continent", "planet"]),
    Bucket::new("cosmic", 1.0, &["star", "galaxy", "universe", "cosmos", "infinity"]),
];

/// Temporal: instant (-1) to eternal (+1)
pub const TEMPORAL_BUCKETS: &[Bucket] = &[
    Bucket::new("instant", -1.0, &["now", "moment", "flash", "instant", "second"]),
    Bucket::new("short", -0.5, &["minute", "hour", "day", "quick", "brief"]),
    Bucket::new("medium", 0.0, &["week", "month", "season", "regular"]),
    Bucket::new("long", 0.5, &["year", "decade", "century", "lasting", "enduring"]),
    Bucket::new("eternal", 1.0, &["forever", "eternal", "infinite", "timeless", "always"]),
];

/// Agency: passive (-1) to active (+1)
pub const AGENCY_BUCKETS: &[Bucket] = &[
    Bucket::new("passive", -1.0, &["stone", "water", "sleep", "rest", "still", "calm", "receive"]),
    Bucket::new("neutral", 0.0, &["exist", "be", "have", "contain", "hold"]),
    Bucket::new("active", 1.0, &["run", "jump", "create", "build", "move", "action", "do", "make"]),
];

/// Social: individual (-1) to collective (+1). Four buckets, no neutral middle.
pub const SOCIAL_BUCKETS: &[Bucket] = &[
    Bucket::new(
        "individual",
        -1.0,
        &["i", "me", "self", "alone", "personal", "individual", "private"],
    ),
    Bucket::new("small", -0.5, &["friend", "family", "pair", "couple", "partner"]),
    Bucket::new("group", 0.5, &["team", "group", "community", "neighborhood", "organization"]),
    Bucket::new(
        "collective",
        1.0,
        &["society", "humanity", "civilization", "culture", "public", "global"],
    ),
];

/// Sensory: physical (-1) to mental (+1)
pub const SENSORY_BUCKETS: &[Bucket] = &[
    Bucket::new(
        "physical",
        -1.0,
        &["touch", "feel", "hard", "soft", "hot", "cold", "taste", "smell", "see", "hear"],
    ),
    Bucket::new("neutral", 0.0, &["sense", "experience", "perceive"]),
    Bucket::new(
        "mental",
        1.0,
        &["think", "believe", "know", "understand", "idea", "concept", "mind", "thought"],
    ),
];

/// Causality: effect (-1) to cause (+1)
pub const CAUSALITY_BUCKETS: &[Bucket] = &[
    Bucket::new("effect", -1.0, &["result", "outcome", "consequence", "end", "finish", "product"]),
    Bucket::new("neutral", 0.0, &["process", "change", "transform"]),
    Bucket::new(
        "cause",
        1.0,
        &["create", "make", "build", "start", "begin", "source", "origin", "reason"],
    ),
];

pub fn dimension_buckets(dimension: Dimension) -> &'static [Bucket] {
    match dimension {
        Dimension::Scale => SCALE_BUCKETS,
        Dimension::Temporal => TEMPORAL_BUCKETS,
        Dimension::Agency => AGENCY_BUCKETS,
        Dimension::Social => SOCIAL_BUCKETS,
        Dimension::Sensory => SENSORY_BUCKETS,
        Dimension::Causality => CAUSALITY_BUCKETS,
    }
}

// =============================================================================
// Connector words (never plotted)
// =============================================================================

pub const CONNECTOR_WORDS: &[&str] = &[
    // articles / determiners
    "a", "an", "the", "some", "any", "each", "every", "all", "no",
    // prepositions
    "in", "on", "at", "to", "from", "of", "with", "into", "onto", "through", "over", "under",
    "between", "by", "for", "about", "across", "after", "before", "toward", "towards", "within",
    "without", "upon", "beyond", "around", "like",
    // pronouns
    "it", "its", "he", "she", "they", "them", "we", "us", "you", "your", "his", "her", "their",
    "our", "my", "this", "that", "these", "those", "who", "which", "what",
    // auxiliaries and linking verbs
    "is", "are", "was", "were", "been", "being", "am", "has", "had", "does", "did", "will",
    "would", "can", "could", "should", "may", "might", "must", "shall", "become", "becomes",
    "became", "becoming", "turn", "turns", "turned", "get", "gets", "got", "seems",
    // conjunctions
    "and", "or", "but", "so", "then", "than", "as", "if", "because", "while", "when", "until",
    // common adverbs
    "very", "more", "most", "less", "also", "just", "too", "not", "never", "ever", "again",
    "only", "even", "here", "there",
];
