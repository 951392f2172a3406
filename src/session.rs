//! Interactive corpus session
//!
//! Holds the loaded corpus and the result of the most recent query, and runs
//! [`Command`]s against them. Output goes to any `io::Write`; the binary wires
//! it to stdin/stdout.

use crate::command::{Command, HELP, parse_command};
use crate::corpus::Corpus;
use crate::loader::{LoadError, load};
use crate::searcher::{SearchError, lookup_c_to, lookup_to, search_c_to, search_to};
use crate::stats::stats;
use crate::tagset::{TAGSET, tag_info};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::warn;

/// Error raised by a single command; the session itself carries on
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] crate::command::CommandError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("No sentence {0} in the last result")]
    NoSuchSentence(usize),

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A loaded corpus plus the last query result
pub struct Session {
    corpus: Corpus,
    last: Option<Corpus>,
}

impl Session {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus, last: None }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Sub-corpus returned by the most recent query
    pub fn last(&self) -> Option<&Corpus> {
        self.last.as_ref()
    }

    /// Parse and run one line of input
    pub fn execute_line<W: Write + ?Sized>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> Result<Flow, SessionError> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let command = parse_command(line)?;
        self.execute(command, out)
    }

    pub fn execute<W: Write + ?Sized>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<Flow, SessionError> {
        match command {
            Command::Help => write!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Stats => writeln!(out, "{}", stats(&self.corpus))?,
            Command::Last => match &self.last {
                Some(last) => writeln!(out, "{}", stats(last))?,
                None => writeln!(out, "No query has been run yet")?,
            },
            Command::Tags(None) => {
                for info in TAGSET {
                    writeln!(out, "{}", info)?;
                }
            }
            Command::Tags(Some(code)) => {
                let info = tag_info(&code).ok_or(SessionError::UnknownTag(code))?;
                writeln!(out, "{}", info)?;
            }
            Command::FindWord {
                pattern,
                case_sensitive,
            } => {
                let found = self.corpus.find_word(&pattern, case_sensitive)?;
                for (idx, token) in found.iter().enumerate() {
                    writeln!(out, "{}. {}", idx + 1, token)?;
                }
                writeln!(out, "{} token(s)", found.len())?;
            }
            Command::Find {
                pattern,
                case_sensitive,
            } => {
                let found = self.corpus.find(&pattern, case_sensitive)?;
                crate::searcher::dump(found.iter(), out)?;
                self.remember(found, out)?;
            }
            Command::Lookup(pattern) => {
                let found = lookup_to(&self.corpus, &pattern, out)?;
                self.remember(found, out)?;
            }
            Command::LookupC(pattern) => {
                let found = lookup_c_to(&self.corpus, &pattern, out)?;
                self.remember(found, out)?;
            }
            Command::Search(pattern) => {
                let found = search_to(&self.corpus, &pattern, out)?;
                self.remember(found, out)?;
            }
            Command::SearchC(pattern) => {
                let found = search_c_to(&self.corpus, &pattern, out)?;
                self.remember(found, out)?;
            }
            Command::Show(n) => {
                let sentence = self
                    .last
                    .as_ref()
                    .zip(n.checked_sub(1))
                    .and_then(|(last, idx)| last.sentences().get(idx))
                    .ok_or(SessionError::NoSuchSentence(n))?;
                writeln!(out, "{}", sentence)?;
                writeln!(out, "  text: {}", sentence.text())?;
                writeln!(out, "  tags: {}", sentence.tags())?;
            }
            Command::Load(path) => {
                self.corpus = load(&path)?;
                self.last = None;
                writeln!(out, "{}", stats(&self.corpus))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn remember<W: Write + ?Sized>(&mut self, found: Corpus, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} sentence(s)", found.len())?;
        self.last = Some(found);
        Ok(())
    }

    /// Read commands from `input` until it ends or `quit` is given
    ///
    /// Command errors are reported on `out` and do not end the session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        write!(out, "> ")?;
        out.flush()?;
        for line in input.lines() {
            match self.execute_line(&line?, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(SessionError::Io(e)) => return Err(e),
                Err(e) => {
                    warn!("command failed: {}", e);
                    writeln!(out, "{}", e)?;
                }
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}
