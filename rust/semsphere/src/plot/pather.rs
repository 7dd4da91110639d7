//! SentencePather - semantic word extraction and sentence validation

use super::tokenize::tokenize;
use crate::error::SphereError;
use crate::lexicon::{TokenKind, Vocabulary};

/// One token after vocabulary filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathToken {
    /// Goes on the path
    Word(String),
    /// Connector, unmapped, or too short
    Dropped(String),
}

pub struct SentencePather<'a> {
    vocabulary: &'a Vocabulary,
    min_word_len: usize,
}

impl<'a> SentencePather<'a> {
    pub fn new(vocabulary: &'a Vocabulary, min_word_len: usize) -> Self {
        Self {
            vocabulary,
            min_word_len,
        }
    }

    /// Every token of the sentence, marked kept or dropped, in order
    pub fn scan(&self, sentence: &str) -> Vec<PathToken> {
        tokenize(sentence)
            .into_iter()
            .map(|token| {
                if token.chars().count() >= self.min_word_len && self.vocabulary.is_semantic(&token) {
                    PathToken::Word(token)
                } else {
                    PathToken::Dropped(token)
                }
            })
            .collect()
    }

    /// Semantic words of the sentence in original order, duplicates kept
    pub fn extract_path(&self, sentence: &str) -> Vec<String> {
        self.scan(sentence)
            .into_iter()
            .filter_map(|t| match t {
                PathToken::Word(w) => Some(w),
                PathToken::Dropped(_) => None,
            })
            .collect()
    }

    /// Tokens that are neither semantic words nor connectors, first occurrence order
    pub fn unmapped(&self, sentence: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for token in tokenize(sentence) {
            if self.vocabulary.kind(&token) == TokenKind::Unmapped && !out.contains(&token) {
                out.push(token);
            }
        }
        out
    }

    /// Accept the sentence only if every token is known
    pub fn validate(&self, sentence: &str) -> Result<(), SphereError> {
        let words = self.unmapped(sentence);
        if words.is_empty() {
            Ok(())
        } else {
            Err(SphereError::UnmappedWords { words })
        }
    }
}
