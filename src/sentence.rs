//! Sentence data structures
//!
//! A sentence owns its tokens in source order. Sentences that live inside a
//! [`Corpus`](crate::Corpus) carry a [`SentenceId`] naming their position there.

use crate::token::Token;
use std::fmt;

/// Position of a sentence within its owning corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SentenceId(pub(crate) usize);

impl SentenceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An ordered run of tokens bounded by blank lines in the source file
#[derive(Debug, Clone, Default)]
pub struct Sentence {
    id: Option<SentenceId>,
    tokens: Vec<Token>,
}

impl Sentence {
    /// Create an empty sentence that belongs to no corpus
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_id(id: SentenceId) -> Self {
        Self {
            id: Some(id),
            tokens: Vec::new(),
        }
    }

    /// Handle of this sentence in its owning corpus
    pub fn id(&self) -> Option<SentenceId> {
        self.id
    }

    /// Append a token to a free-standing sentence
    ///
    /// Sentences owned by a corpus are extended through
    /// [`Corpus::add_token`](crate::Corpus::add_token) so the corpus indices
    /// stay in step.
    pub fn add_token(&mut self, text: &str, tag: &str) -> &Token {
        let token = Token::attached(text.to_string(), tag.to_string(), self.id);
        self.push(token)
    }

    pub(crate) fn push(&mut self, token: Token) -> &Token {
        self.tokens.push(token);
        &self.tokens[self.tokens.len() - 1]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token texts joined by single spaces
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Token tags joined by single spaces
    pub fn tags(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.tag().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// `text/tag` pairs joined by single spaces
impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_sentence() -> Sentence {
        let mut sentence = Sentence::new();
        sentence.add_token("Aku", "PRP");
        sentence.add_token("makan", "VB");
        sentence.add_token("nasi", "NN");
        sentence
    }

    #[test]
    fn test_sentence_views() {
        let sentence = create_test_sentence();

        assert_eq!(sentence.len(), 3);
        assert_eq!(sentence.text(), "Aku makan nasi");
        assert_eq!(sentence.tags(), "PRP VB NN");
        assert_eq!(sentence.to_string(), "Aku/PRP makan/VB nasi/NN");
    }

    #[test]
    fn test_sentence_keeps_append_order() {
        let sentence = create_test_sentence();
        let texts: Vec<_> = sentence.iter().filter_map(|t| t.text()).collect();

        assert_eq!(texts, vec!["Aku", "makan", "nasi"]);
        assert_eq!(sentence.get(1).unwrap().tag(), Some("VB"));
        assert!(sentence.get(3).is_none());
    }

    #[test]
    fn test_free_standing_sentence_has_no_id() {
        let sentence = create_test_sentence();
        assert_eq!(sentence.id(), None);
        assert!(sentence.iter().all(|t| t.sentence().is_none()));
    }

    #[test]
    fn test_empty_sentence() {
        let sentence = Sentence::new();
        assert!(sentence.is_empty());
        assert_eq!(sentence.text(), "");
        assert_eq!(sentence.tags(), "");
        assert_eq!(sentence.to_string(), "");
    }
}
