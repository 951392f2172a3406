//! Sentence-level lookups over a corpus
//!
//! Each lookup compiles a regular expression, tests it against one string
//! view of every sentence, prints a numbered listing of the hits and returns
//! them as a fresh sub-corpus. The source corpus is never modified.
//!
//! Views:
//! - tags: `PRP VB NN` ([`lookup_c`], [`search_c_to`])
//! - display form, lowercased: `aku/prp makan/vb nasi/nn` ([`lookup`], [`search_to`])

use crate::corpus::Corpus;
use crate::sentence::Sentence;
use regex::Regex;
use std::io::{self, Write};
use thiserror::Error;

/// Error during search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Failed to write results: {0}")]
    Io(#[from] io::Error),
}

/// Where a pattern may match in the candidate string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Anchored at the start; need not cover the whole string
    Prefix,
    /// Anywhere in the string
    Anywhere,
}

/// Which string view of a sentence a lookup matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceView {
    /// Tags joined by spaces
    Tags,
    /// `text/tag` pairs joined by spaces, lowercased
    Display,
}

impl SentenceView {
    fn render(self, sentence: &Sentence) -> String {
        match self {
            SentenceView::Tags => sentence.tags(),
            SentenceView::Display => sentence.to_string().to_lowercase(),
        }
    }
}

/// A user pattern compiled as typed, plus where it may match
#[derive(Debug, Clone)]
pub struct Pattern {
    re: Regex,
    mode: MatchMode,
}

impl Pattern {
    pub fn is_match(&self, haystack: &str) -> bool {
        match self.mode {
            MatchMode::Anywhere => self.re.is_match(haystack),
            // leftmost-first: a match at 0 exists iff the first match starts there
            MatchMode::Prefix => self.re.find(haystack).is_some_and(|m| m.start() == 0),
        }
    }
}

/// Compile a user pattern for the given match mode
///
/// The pattern is never rewritten, so inline flags and comments behave as
/// written and errors quote exactly what the user typed.
pub fn compile_pattern(pattern: &str, mode: MatchMode) -> Result<Pattern, SearchError> {
    let re = Regex::new(pattern)?;
    Ok(Pattern { re, mode })
}

/// Print a 1-indexed listing, one sentence per line
pub fn dump<'a, I, W>(sentences: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Sentence>,
    W: Write + ?Sized,
{
    for (idx, sentence) in sentences.into_iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, sentence)?;
    }
    Ok(())
}

/// Keep the sentences accepted by `cond`, list them, and return them
pub fn select<F, W>(corpus: &Corpus, out: &mut W, mut cond: F) -> Result<Corpus, SearchError>
where
    F: FnMut(&Sentence) -> bool,
    W: Write + ?Sized,
{
    let hits: Vec<&Sentence> = corpus.iter().filter(|s| cond(s)).collect();
    dump(hits.iter().copied(), out)?;
    Ok(Corpus::from_sentences(hits))
}

/// Match `pattern` against one view of every sentence
pub fn sentence_lookup<W>(
    corpus: &Corpus,
    pattern: &str,
    view: SentenceView,
    mode: MatchMode,
    out: &mut W,
) -> Result<Corpus, SearchError>
where
    W: Write + ?Sized,
{
    let re = compile_pattern(pattern, mode)?;
    select(corpus, out, |sentence| re.is_match(&view.render(sentence)))
}

/// Sentences whose tag sequence starts with a match for `pattern`
pub fn lookup_c_to<W: Write + ?Sized>(
    corpus: &Corpus,
    pattern: &str,
    out: &mut W,
) -> Result<Corpus, SearchError> {
    sentence_lookup(corpus, pattern, SentenceView::Tags, MatchMode::Prefix, out)
}

/// Sentences whose lowercased display form starts with a match for `pattern`
///
/// The whole `text/tag` string is lowercased, tags included, so patterns must
/// be written in lowercase: `aku/prp \w+/vb`.
pub fn lookup_to<W: Write + ?Sized>(
    corpus: &Corpus,
    pattern: &str,
    out: &mut W,
) -> Result<Corpus, SearchError> {
    sentence_lookup(corpus, pattern, SentenceView::Display, MatchMode::Prefix, out)
}

/// Like [`lookup_c_to`] but the pattern may match anywhere in the tag sequence
pub fn search_c_to<W: Write + ?Sized>(
    corpus: &Corpus,
    pattern: &str,
    out: &mut W,
) -> Result<Corpus, SearchError> {
    sentence_lookup(corpus, pattern, SentenceView::Tags, MatchMode::Anywhere, out)
}

/// Like [`lookup_to`] but the pattern may match anywhere in the sentence
pub fn search_to<W: Write + ?Sized>(
    corpus: &Corpus,
    pattern: &str,
    out: &mut W,
) -> Result<Corpus, SearchError> {
    sentence_lookup(corpus, pattern, SentenceView::Display, MatchMode::Anywhere, out)
}

/// [`lookup_c_to`] printing to stdout
pub fn lookup_c(corpus: &Corpus, pattern: &str) -> Result<Corpus, SearchError> {
    lookup_c_to(corpus, pattern, &mut io::stdout().lock())
}

/// [`lookup_to`] printing to stdout
pub fn lookup(corpus: &Corpus, pattern: &str) -> Result<Corpus, SearchError> {
    lookup_to(corpus, pattern, &mut io::stdout().lock())
}
