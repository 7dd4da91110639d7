//! JavaScript facade over `SphereSession`.
//!
//! Plot results, guides and vocabulary cross the boundary as plain JS
//! objects via serde-wasm-bindgen. Errors become `{ error, message, words? }`.

use wasm_bindgen::prelude::*;

use crate::config::SphereConfig;
use crate::error::SphereError;
use crate::plot::{SceneGuides, SphereSession};
use crate::semantics::Dimension;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| SphereError::from(e).into())
}

#[wasm_bindgen]
pub struct SemanticSphere {
    session: SphereSession,
}

#[wasm_bindgen]
impl SemanticSphere {
    /// Create a sphere with an optional config object
    ///
    /// # Arguments
    /// * `config` - `SphereConfig` as a JS object, or null/undefined for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SemanticSphere, JsValue> {
        let config: SphereConfig = if config.is_null() || config.is_undefined() {
            SphereConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| SphereError::InvalidConfig(e.to_string()))?
        };

        Ok(Self {
            session: SphereSession::new(config)?,
        })
    }

    /// Returns false for blank input; throws on unmapped words
    #[wasm_bindgen(js_name = addSentence)]
    pub fn add_sentence(&mut self, text: &str) -> Result<bool, JsValue> {
        Ok(self.session.add_sentence(text)?)
    }

    /// Guided input from the word buttons
    #[wasm_bindgen(js_name = addWords)]
    pub fn add_words(&mut self, words: Vec<String>) -> Result<bool, JsValue> {
        Ok(self.session.add_words(&words)?)
    }

    /// Returns the removed sentence, or undefined if out of range
    #[wasm_bindgen(js_name = removeSentence)]
    pub fn remove_sentence(&mut self, index: usize) -> Option<String> {
        self.session.remove_sentence(index)
    }

    /// Unmapped tokens of `text` (empty when the sentence is acceptable)
    #[wasm_bindgen]
    pub fn validate(&self, text: &str) -> Vec<String> {
        self.session.plotter().pather().unmapped(text)
    }

    #[wasm_bindgen]
    pub fn sentences(&self) -> Vec<String> {
        self.session.sentences().to_vec()
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Full plot of the current sentences: `{ words, paths, stats }`
    #[wasm_bindgen]
    pub fn plot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.plot())
    }

    /// Multi-view plots, one per axis triple.
    ///
    /// `triples` is an array of `["Scale", "Social", "Sensory"]`-style
    /// arrays; null/undefined/empty plots all 20 combinations.
    #[wasm_bindgen(js_name = plotAxisViews)]
    pub fn plot_axis_views(&self, triples: JsValue) -> Result<JsValue, JsValue> {
        let triples: Vec<[Dimension; 3]> = if triples.is_null() || triples.is_undefined() {
            Vec::new()
        } else {
            serde_wasm_bindgen::from_value(triples).map_err(SphereError::from)?
        };
        to_js(&self.session.plot_axis_views(&triples))
    }

    /// Classification of a single word: `{ level, dimensions }`
    #[wasm_bindgen]
    pub fn classify(&self, word: &str) -> Result<JsValue, JsValue> {
        to_js(&self.session.plotter().classify(word))
    }

    /// Layer shells and dimension spokes
    #[wasm_bindgen]
    pub fn guides(&self) -> Result<JsValue, JsValue> {
        to_js(&SceneGuides::new())
    }

    /// Word-button rows: `[{ label, words }]`
    #[wasm_bindgen]
    pub fn vocabulary(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.plotter().classifier().lexicon().vocabulary().groups())
    }

    #[wasm_bindgen]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.plotter().config())
    }
}
