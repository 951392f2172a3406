//! Tagged tokens
//!
//! A token is a (surface text, POS tag) pair. Equality, hashing and ordering
//! look only at the text and tag; the sentence a token belongs to is carried
//! along as a handle but never compared.

use crate::sentence::SentenceId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single tagged word
#[derive(Debug, Clone)]
pub struct Token {
    text: Option<String>,
    tag: Option<String>,
    sentence: Option<SentenceId>,
}

impl Token {
    /// Create a token that does not belong to any sentence
    ///
    /// Tokens inside a corpus are only ever created through
    /// [`Corpus::add_token`](crate::Corpus::add_token) or
    /// [`Sentence::add_token`](crate::Sentence::add_token).
    pub fn new(text: Option<&str>, tag: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
            tag: tag.map(str::to_string),
            sentence: None,
        }
    }

    pub(crate) fn attached(text: String, tag: String, sentence: Option<SentenceId>) -> Self {
        Self {
            text: Some(text),
            tag: Some(tag),
            sentence,
        }
    }

    /// Copy of this token re-homed into another sentence
    pub(crate) fn rehome(&self, sentence: Option<SentenceId>) -> Self {
        Self {
            text: self.text.clone(),
            tag: self.tag.clone(),
            sentence,
        }
    }

    /// Surface text, case as in the source
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Handle of the containing sentence, if any
    pub fn sentence(&self) -> Option<SentenceId> {
        self.sentence
    }

    /// Lowercased surface text, the key used by the vocabulary index
    pub fn lowercase_text(&self) -> String {
        self.text.as_deref().unwrap_or_default().to_lowercase()
    }

    fn key(&self) -> (Option<&str>, Option<&str>) {
        (self.text.as_deref(), self.tag.as_deref())
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// None sorts before any text, which is what Option's ordering gives us
impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.text.as_deref().unwrap_or_default(),
            self.tag.as_deref().unwrap_or_default()
        )
    }
}
