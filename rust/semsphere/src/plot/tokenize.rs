//! Sentence normalization: lowercase, strip punctuation, split on whitespace.

use regex::Regex;
use std::sync::OnceLock;

static PUNCTUATION: OnceLock<Regex> = OnceLock::new();

fn punctuation() -> &'static Regex {
    PUNCTUATION.get_or_init(|| Regex::new(r"[^\w\s]").expect("static punctuation pattern"))
}

/// Tokens of a sentence in order, duplicates kept.
///
/// "The stone, became sand!" → ["the", "stone", "became", "sand"]
pub fn tokenize(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    punctuation()
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
