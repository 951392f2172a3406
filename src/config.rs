//! Runtime configuration
//!
//! The corpus path comes from the command line, then the `ITCTK_CORPUS`
//! environment variable, then [`DEFAULT_CORPUS_PATH`].

use std::env;
use std::path::PathBuf;

pub const DEFAULT_CORPUS_PATH: &str = "data/itcdata/Indonesian_Manually_Tagged_Corpus.tsv";
pub const CORPUS_PATH_VAR: &str = "ITCTK_CORPUS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub corpus_path: PathBuf,
}

impl Config {
    /// Resolve the configuration, preferring an explicit CLI value
    pub fn resolve(cli_corpus: Option<PathBuf>) -> Self {
        Self::resolve_with(cli_corpus, env::var(CORPUS_PATH_VAR).ok())
    }

    fn resolve_with(cli_corpus: Option<PathBuf>, env_corpus: Option<String>) -> Self {
        let corpus_path = cli_corpus
            .or_else(|| env_corpus.filter(|p| !p.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS_PATH));
        Self { corpus_path }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve_with(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_wins() {
        let config = Config::resolve_with(Some("a.tsv".into()), Some("b.tsv".to_string()));
        assert_eq!(config.corpus_path, PathBuf::from("a.tsv"));
    }

    #[test]
    fn test_env_then_default() {
        let config = Config::resolve_with(None, Some("b.tsv".to_string()));
        assert_eq!(config.corpus_path, PathBuf::from("b.tsv"));

        let config = Config::resolve_with(None, Some(String::new()));
        assert_eq!(config.corpus_path, PathBuf::from(DEFAULT_CORPUS_PATH));

        assert_eq!(Config::default().corpus_path, PathBuf::from(DEFAULT_CORPUS_PATH));
    }
}
