//! Tagged corpus file loading
//!
//! Format: sentences separated by a blank line, one token per line, each
//! token line being `<text>\t<tag>`.
//!
//! ```text
//! Kera	NN
//! untuk	SC
//! amankan	VB
//!
//! Pemerintah	NNP
//! ...
//! ```
//!
//! Parsing is lenient on purpose:
//! - a line without a tab is skipped, it produces no token and no error
//! - a line is split on its first tab only, so any further tabs stay in the tag
//! - every `\n\n`-separated block becomes a sentence, even an empty one
//!
//! Files ending in `.gz` are decompressed on the fly.

use crate::corpus::Corpus;
use bstr::ByteSlice;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{info, trace};

/// Error while reading a corpus file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read corpus: {0}")]
    Io(#[from] io::Error),
}

/// Load a corpus from a file path
pub fn load(path: impl AsRef<Path>) -> Result<Corpus, LoadError> {
    let path = path.as_ref();
    let start = Instant::now();

    let bytes = read_file(path)?;
    let corpus = parse_bytes(&bytes);

    info!(
        "loaded {} sentences, {} tokens from {} in {} ms",
        corpus.len(),
        corpus.token_count(),
        path.display(),
        start.elapsed().as_millis()
    );
    Ok(corpus)
}

fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        GzDecoder::new(file).read_to_end(&mut bytes)?;
    } else {
        let mut file = file;
        file.read_to_end(&mut bytes)?;
    }
    Ok(bytes)
}

/// Parse raw file content, replacing invalid UTF-8
pub fn parse_bytes(bytes: &[u8]) -> Corpus {
    parse_str(&bytes.to_str_lossy())
}

/// Parse corpus text
///
/// Never fails: malformed lines are dropped, and even empty input yields one
/// empty sentence.
pub fn parse_str(text: &str) -> Corpus {
    let text = normalize_newlines(text);
    let mut corpus = Corpus::new();

    for block in text.split("\n\n") {
        let sentence = corpus.new_sentence();
        for line in block.split('\n') {
            let Some((word, tag)) = split_token_line(line) else {
                if !line.is_empty() {
                    trace!("skipping line without tab: {:?}", line);
                }
                continue;
            };
            corpus.add_token(sentence, word, tag);
        }
    }

    corpus
}

/// Split a token line at its first tab
fn split_token_line(line: &str) -> Option<(&str, &str)> {
    let tab = memchr::memchr(b'\t', line.as_bytes())?;
    Some((&line[..tab], &line[tab + 1..]))
}

/// Fold `\r\n` and lone `\r` line endings into `\n`
fn normalize_newlines(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n").into()
    } else {
        text.into()
    }
}
