//! The corpus: sentences plus derived indices
//!
//! Every token enters the corpus through `Corpus::attach`, which appends it
//! to its sentence, to the flat token list, and to both indices in one place.
//! Nothing else mutates those structures, so they cannot drift apart.

use crate::index::CorpusIndex;
use crate::searcher::{MatchMode, SearchError, compile_pattern};
use crate::sentence::{Sentence, SentenceId};
use crate::token::Token;
use rustc_hash::FxHashSet;
use std::ops::Index;
use tracing::debug;

/// Position of a token: owning sentence, then offset within it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TokenRef {
    sentence: usize,
    offset: usize,
}

/// Ordered sentences with a flat token list and lookup indices
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sentences: Vec<Sentence>,
    tokens: Vec<TokenRef>,
    index: CorpusIndex,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sub-corpus from existing sentences
    ///
    /// Sentences are copied in the order given and renumbered; every token is
    /// re-attached so the indices are derived from scratch.
    pub fn from_sentences<'a, I>(sentences: I) -> Self
    where
        I: IntoIterator<Item = &'a Sentence>,
    {
        let mut corpus = Self::new();
        for sentence in sentences {
            let id = corpus.new_sentence();
            for token in sentence {
                corpus.attach(id, token.rehome(Some(id)));
            }
        }
        debug!(
            "built sub-corpus with {} sentences, {} tokens",
            corpus.len(),
            corpus.token_count()
        );
        corpus
    }

    /// Append an empty sentence and return its handle
    pub fn new_sentence(&mut self) -> SentenceId {
        let id = SentenceId(self.sentences.len());
        self.sentences.push(Sentence::with_id(id));
        id
    }

    /// Append a token to one of this corpus's sentences
    ///
    /// Returns `None` if the handle does not name a sentence of this corpus.
    pub fn add_token(&mut self, sentence: SentenceId, text: &str, tag: &str) -> Option<&Token> {
        if sentence.0 >= self.sentences.len() {
            return None;
        }
        let token = Token::attached(text.to_string(), tag.to_string(), Some(sentence));
        Some(self.attach(sentence, token))
    }

    /// The single place where tokens join the corpus
    fn attach(&mut self, sentence: SentenceId, token: Token) -> &Token {
        self.index.add_token(&token);
        let owner = &mut self.sentences[sentence.0];
        self.tokens.push(TokenRef {
            sentence: sentence.0,
            offset: owner.len(),
        });
        owner.push(token)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn get(&self, id: SentenceId) -> Option<&Sentence> {
        self.sentences.get(id.0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    /// Sentence that owns a token of this corpus
    pub fn sentence_of(&self, token: &Token) -> Option<&Sentence> {
        token.sentence().and_then(|id| self.get(id))
    }

    /// All tokens, sentence order then token order
    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens
            .iter()
            .map(|r| &self.sentences[r.sentence].tokens()[r.offset])
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn indices(&self) -> &CorpusIndex {
        &self.index
    }

    /// Tags observed for a lowercase text
    pub fn tags_for(&self, text: &str) -> Option<&FxHashSet<String>> {
        self.index.tags_for(text)
    }

    /// Lowercase texts observed with a tag
    pub fn texts_for(&self, tag: &str) -> Option<&FxHashSet<String>> {
        self.index.texts_for(tag)
    }

    /// Sorted distinct lowercase token texts
    pub fn word_list(&self) -> Vec<&str> {
        self.index.word_list()
    }

    /// Sorted distinct tags
    pub fn pos_list(&self) -> Vec<&str> {
        self.index.pos_list()
    }

    /// Tokens whose text starts with a match for `pattern`
    ///
    /// With `case_sensitive` false the lowercased text is matched instead, so
    /// the pattern itself should be lowercase. Duplicates are kept and corpus
    /// order is preserved.
    pub fn find_word(
        &self,
        pattern: &str,
        case_sensitive: bool,
    ) -> Result<Vec<&Token>, SearchError> {
        let re = compile_pattern(pattern, MatchMode::Prefix)?;
        let found = self
            .tokens()
            .filter(|token| {
                if case_sensitive {
                    re.is_match(token.text().unwrap_or_default())
                } else {
                    re.is_match(&token.lowercase_text())
                }
            })
            .collect();
        Ok(found)
    }

    /// Sub-corpus of the sentences containing a token matched by [`find_word`]
    ///
    /// Each sentence appears once however many of its tokens match. Sentences
    /// come out in the order of their first matching token.
    ///
    /// [`find_word`]: Corpus::find_word
    pub fn find(&self, pattern: &str, case_sensitive: bool) -> Result<Corpus, SearchError> {
        let tokens = self.find_word(pattern, case_sensitive)?;
        let mut seen = FxHashSet::default();
        let sentences = tokens
            .into_iter()
            .filter_map(|token| token.sentence())
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.get(id));
        Ok(Corpus::from_sentences(sentences))
    }
}

impl Index<usize> for Corpus {
    type Output = Sentence;

    fn index(&self, index: usize) -> &Sentence {
        &self.sentences[index]
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}
