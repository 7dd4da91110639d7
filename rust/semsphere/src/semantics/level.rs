//! Abstraction levels and the concentric layer table.
//!
//! Level 1 sits at the centre of the sphere (concrete objects), level 5 on
//! the outermost shell (abstract concepts).

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Discrete concreteness class of a word. Serialized as its number (1..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AbstractionLevel {
    Concrete = 1,
    Material = 2,
    Property = 3,
    Process = 4,
    Abstract = 5,
}

/// Static description of one layer shell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AbstractionLayer {
    pub level: AbstractionLevel,
    pub radius: f64,
    pub name: &'static str,
    pub color: u32,
    pub examples: &'static str,
}

pub const ABSTRACTION_LAYERS: [AbstractionLayer; 5] = [
    AbstractionLayer {
        level: AbstractionLevel::Concrete,
        radius: 1.0,
        name: "Concrete Objects",
        color: 0x2ecc71,
        examples: "stone, apple, chair",
    },
    AbstractionLayer {
        level: AbstractionLevel::Material,
        radius: 2.5,
        name: "Material States",
        color: 0x3498db,
        examples: "sand, liquid, solid",
    },
    AbstractionLayer {
        level: AbstractionLevel::Property,
        radius: 4.0,
        name: "Properties/Elements",
        color: 0x9b59b6,
        examples: "silicon, hardness, carbon",
    },
    AbstractionLayer {
        level: AbstractionLevel::Process,
        radius: 5.5,
        name: "Processes/Particles",
        color: 0xe67e22,
        examples: "dust, energy, motion",
    },
    AbstractionLayer {
        level: AbstractionLevel::Abstract,
        radius: 7.0,
        name: "Abstract Concepts",
        color: 0xe74c3c,
        examples: "matter, existence, reality",
    },
];

impl AbstractionLevel {
    pub const ALL: [AbstractionLevel; 5] = [
        AbstractionLevel::Concrete,
        AbstractionLevel::Material,
        AbstractionLevel::Property,
        AbstractionLevel::Process,
        AbstractionLevel::Abstract,
    ];

    /// Default level for words no list and no suffix rule claims.
    pub const MIDDLE: AbstractionLevel = AbstractionLevel::Property;

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn layer(self) -> &'static AbstractionLayer {
        &ABSTRACTION_LAYERS[self as usize - 1]
    }

    /// Shell radius for this level: 1, 2.5, 4, 5.5, 7
    pub fn radius(self) -> f64 {
        self.layer().radius
    }

    pub fn color(self) -> u32 {
        self.layer().color
    }

    pub fn name(self) -> &'static str {
        self.layer().name
    }

    /// Level guessed from word shape when no lexicon list matched.
    ///
    /// `-ness/-ity/-ism/-tion` read as abstract nouns, `-ing/-ed` as
    /// processes, everything else (including `-ly`) stays mid-level.
    pub fn from_suffix(word: &str) -> AbstractionLevel {
        const ABSTRACT_SUFFIXES: [&str; 4] = ["ness", "ity", "ism", "tion"];
        const PROCESS_SUFFIXES: [&str; 2] = ["ing", "ed"];

        if ABSTRACT_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            AbstractionLevel::Abstract
        } else if PROCESS_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            AbstractionLevel::Process
        } else if word.ends_with("ly") {
            AbstractionLevel::Property
        } else {
            Self::MIDDLE
        }
    }
}

impl From<AbstractionLevel> for u8 {
    fn from(level: AbstractionLevel) -> u8 {
        level.as_u8()
    }
}

impl TryFrom<u8> for AbstractionLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AbstractionLevel::Concrete),
            2 => Ok(AbstractionLevel::Material),
            3 => Ok(AbstractionLevel::Property),
            4 => Ok(AbstractionLevel::Process),
            5 => Ok(AbstractionLevel::Abstract),
            other => Err(format!("abstraction level out of range: {}", other)),
        }
    }
}
