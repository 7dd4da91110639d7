//! SphereSession: the editable sentence list behind the "Plot" button.
//!
//! Holds only what the user typed. Plot output is returned by value and
//! never stored, so each plot replaces the last one wholesale.

use super::plotter::{AxisView, PlotResult, Plotter};
use crate::config::SphereConfig;
use crate::error::SphereError;
use crate::semantics::Dimension;

pub struct SphereSession {
    plotter: Plotter,
    sentences: Vec<String>,
}

impl SphereSession {
    pub fn new(config: SphereConfig) -> Result<Self, SphereError> {
        Ok(Self {
            plotter: Plotter::new(config)?,
            sentences: Vec::new(),
        })
    }

    pub fn plotter(&self) -> &Plotter {
        &self.plotter
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Validate and append a sentence.
    ///
    /// Returns `Ok(false)` for blank input (nothing added). Unknown tokens
    /// reject the sentence and leave the list unchanged.
    pub fn add_sentence(&mut self, text: &str) -> Result<bool, SphereError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        self.plotter.pather().validate(trimmed)?;
        self.sentences.push(trimmed.to_string());
        Ok(true)
    }

    /// Guided input: words picked from the vocabulary buttons
    pub fn add_words<S: AsRef<str>>(&mut self, words: &[S]) -> Result<bool, SphereError> {
        let sentence = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.add_sentence(&sentence)
    }

    pub fn remove_sentence(&mut self, index: usize) -> Option<String> {
        if index < self.sentences.len() {
            Some(self.sentences.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.sentences.clear();
    }

    pub fn plot(&self) -> PlotResult {
        self.plotter.plot(&self.sentences)
    }

    pub fn plot_axis_views(&self, triples: &[[Dimension; 3]]) -> Vec<AxisView> {
        self.plotter.plot_axis_views(&self.sentences, triples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SphereSession {
        SphereSession::new(SphereConfig::default()).unwrap()
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut s = session();
        assert_eq!(s.add_sentence("   "), Ok(false));
        assert!(s.sentences().is_empty());
    }

    #[test]
    fn test_sentence_is_trimmed_and_kept() {
        let mut s = session();
        assert_eq!(s.add_sentence("  The stone became sand  "), Ok(true));
        assert_eq!(s.sentences(), &["The stone became sand".to_string()]);
    }

    #[test]
    fn test_invalid_sentence_is_rejected() {
        let mut s = session();
        let err = s.add_sentence("The unicorn became sand").unwrap_err();
        assert_eq!(err.unmapped_words(), Some(&["unicorn".to_string()][..]));
        assert!(s.sentences().is_empty());
    }

    #[test]
    fn test_add_words_joins_buttons() {
        let mut s = session();
        assert_eq!(s.add_words(&["the", "star", "became", "dust"]), Ok(true));
        assert_eq!(s.sentences()[0], "the star became dust");
        assert_eq!(s.add_words::<&str>(&[]), Ok(false));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut s = session();
        s.add_sentence("stone sand").unwrap();
        s.add_sentence("dust matter").unwrap();
        assert_eq!(s.remove_sentence(0), Some("stone sand".to_string()));
        assert_eq!(s.remove_sentence(5), None);
        assert_eq!(s.sentences().len(), 1);
        s.clear();
        assert!(s.plot().words.is_empty());
    }
}
