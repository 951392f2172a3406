//! itctk: toolkit for a POS-tagged text corpus
//!
//! Loads a tab-separated, sentence-segmented tagged corpus into memory and
//! answers ad-hoc queries over token text and tag sequences.

// Core data model
pub mod corpus; // Sentences plus flat token list and indices
pub mod index; // Vocabulary and tag indices
pub mod sentence; // Sentence and its handle
pub mod token; // Tagged token with value semantics

// Loading and querying
pub mod loader; // Tagged corpus file parsing
pub mod searcher; // Regex lookups returning sub-corpora
pub mod stats; // Summary counts

// Collaborators
pub mod command; // Session command parser
pub mod config; // Corpus path resolution
pub mod export; // Plain-text export
pub mod negation; // Negation-prefix scan
pub mod session; // Interactive session
pub mod tagset; // POS tagset reference table

// Re-exports for convenience
pub use corpus::Corpus;
pub use index::CorpusIndex;
pub use loader::{LoadError, load, parse_str};
pub use searcher::{MatchMode, SearchError, lookup, lookup_c};
pub use sentence::{Sentence, SentenceId};
pub use stats::{Stats, stats};
pub use token::Token;
