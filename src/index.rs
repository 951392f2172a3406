//! Vocabulary and tag indices
//!
//! Both indices are set-valued, so a (text, tag) pair seen many times in the
//! corpus contributes exactly one entry to each side.

use crate::token::Token;
use rustc_hash::{FxHashMap, FxHashSet};

/// Lowercase text to tags, and tag to lowercase texts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusIndex {
    /// Lowercase token text -> tags seen with it
    vocabulary: FxHashMap<String, FxHashSet<String>>,
    /// Tag -> lowercase token texts seen with it
    tags: FxHashMap<String, FxHashSet<String>>,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a token in both indices
    pub(crate) fn add_token(&mut self, token: &Token) {
        let text = token.lowercase_text();
        let tag = token.tag().unwrap_or_default();

        self.vocabulary
            .entry(text.clone())
            .or_default()
            .insert(tag.to_string());

        self.tags.entry(tag.to_string()).or_default().insert(text);
    }

    /// Tags observed for a lowercase text
    pub fn tags_for(&self, text: &str) -> Option<&FxHashSet<String>> {
        self.vocabulary.get(text)
    }

    /// Lowercase texts observed with a tag
    pub fn texts_for(&self, tag: &str) -> Option<&FxHashSet<String>> {
        self.tags.get(tag)
    }

    /// Sorted distinct lowercase texts
    pub fn word_list(&self) -> Vec<&str> {
        sorted_keys(&self.vocabulary)
    }

    /// Sorted distinct tags
    pub fn pos_list(&self) -> Vec<&str> {
        sorted_keys(&self.tags)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

fn sorted_keys(map: &FxHashMap<String, FxHashSet<String>>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
