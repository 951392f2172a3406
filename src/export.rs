//! Plain-text export
//!
//! One sentence per line in `text/tag` display form. The output is meant for
//! reading and grepping; it does not load back into the tagged format.

use crate::corpus::Corpus;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write every sentence of `corpus` to `out`, one per line
pub fn export<W: Write + ?Sized>(corpus: &Corpus, out: &mut W) -> io::Result<()> {
    for sentence in corpus {
        writeln!(out, "{}", sentence)?;
    }
    out.flush()
}

/// Export to a file, creating or truncating it
pub fn export_to_file(corpus: &Corpus, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    export(corpus, &mut out)?;
    info!("exported {} sentences to {}", corpus.len(), path.display());
    Ok(())
}
