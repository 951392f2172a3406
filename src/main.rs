use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Subscriber, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use itctk::config::Config;
use itctk::export::{export, export_to_file};
use itctk::negation::negation_forms;
use itctk::session::Session;
use itctk::{load, stats};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "itctk")]
#[command(about = "Toolkit for manipulating a POS-tagged text corpus")]
struct Cli {
    /// Tagged corpus file (.tsv, optionally .gz)
    #[arg(long, value_name = "PATH")]
    corpus: Option<PathBuf>,

    /// List negation-prefixed word forms and exit
    #[arg(short, long)]
    dev_mode: bool,

    /// Write the corpus as plain text (`-` for stdout) and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = Config::resolve(cli.corpus.clone());
    info!("reading corpus from {}", config.corpus_path.display());
    let corpus = load(&config.corpus_path)
        .with_context(|| format!("cannot load corpus {}", config.corpus_path.display()))?;

    if cli.dev_mode {
        println!("Find negative words");
        for form in negation_forms(&corpus) {
            println!("{}", form);
        }
        return Ok(());
    }

    if let Some(path) = &cli.export {
        if path.as_os_str() == "-" {
            export(&corpus, &mut io::stdout().lock())?;
        } else {
            export_to_file(&corpus, path)
                .with_context(|| format!("cannot export to {}", path.display()))?;
        }
        return Ok(());
    }

    println!("Corpus is ready; type `help` for commands.");
    println!("{}", stats(&corpus));
    let mut session = Session::new(corpus);
    session.run(io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let default = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    subscriber(env_filter).init();
}

/// Formatting subscriber governed entirely by `filter`, so per-target
/// directives such as `itctk=trace,regex=off` survive
fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_subscriber_keeps_per_target_directives() {
        let filter = EnvFilter::try_new("itctk=trace,regex=off,warn").unwrap();
        tracing::subscriber::with_default(subscriber(filter), || {
            assert!(tracing::enabled!(target: "itctk::loader", Level::TRACE));
            assert!(!tracing::enabled!(target: "regex", Level::ERROR));
            assert!(tracing::enabled!(target: "other", Level::WARN));
            assert!(!tracing::enabled!(target: "other", Level::INFO));
        });
    }
}
