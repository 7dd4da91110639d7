//! SemSphere: sentences plotted as paths across a semantic sphere
//!
//! A Rust/WASM core for the semantic sphere explorer. Every word gets an
//! abstraction level (1-5) and six dimension scores from hand-authored
//! lexicons; those become a 3D point, and every sentence becomes a colored
//! polyline through its words. Rendering stays in JavaScript.
//!
//! # Architecture
//!
//! ## Lexicon & Semantics
//! - `lexicon/tables.rs` - Level lists, dimension buckets, connector words
//! - `lexicon/matcher.rs` - BucketMatcher: Aho-Corasick first-bucket lookup
//! - `lexicon/vocabulary.rs` - Semantic/connector membership, word-button groups
//! - `semantics/` - AbstractionLevel, Dimension, WordClassifier
//!
//! ## Layout
//! - `layout/strategy.rs` - PositionStrategy: spherical (default) or direct axes
//! - `layout/collision.rs` - CollisionResolver: quantized occupancy + jitter
//! - `layout/color.rs` - Golden-angle sentence colors
//!
//! ## Plot
//! - `plot/pather.rs` - Tokenize, filter, validate sentences
//! - `plot/plotter.rs` - Plotter: (sentences, config) → PlotResult
//! - `plot/guides.rs` - Layer shells and dimension spokes
//! - `plot/session.rs` - SphereSession: the editable sentence list
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { SemanticSphere } from 'semsphere';
//!
//! await init();
//!
//! const sphere = new SemanticSphere({ match_policy: 'substring' });
//!
//! try {
//!   sphere.addSentence("The stone became sand");
//! } catch (e) {
//!   console.warn(e.words);   // unmapped tokens, if any
//! }
//!
//! const result = sphere.plot();
//! console.log(result.words);   // [{ word, abstraction_level, dimensions, position, ... }]
//! console.log(result.paths);   // [{ sentence, words: ['stone', 'sand'], color }]
//! console.log(sphere.guides()); // shells + spokes for the scene
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod layout;
pub mod lexicon;
pub mod plot;
pub mod semantics;
pub mod wasm;

// Public exports
pub use config::{SphereConfig, StrategyConfig};
pub use error::SphereError;
pub use layout::{AxisStrategy, CollisionResolver, Point3, PositionStrategy, SphericalStrategy};
pub use lexicon::{Lexicon, MatchPolicy, Vocabulary};
pub use plot::{
    AxisView, PlotResult, PlotStats, Plotter, SceneGuides, SentencePath, SphereSession,
    WordAnalysis,
};
pub use semantics::{AbstractionLevel, Classification, Dimension, DimensionScores, WordClassifier};
pub use wasm::SemanticSphere;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Panic hook and (with `debug_logs`) console logging
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    diagnostics::init_logger();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("semsphere v{}", env!("CARGO_PKG_VERSION"))
}
