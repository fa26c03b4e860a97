//! SymSpell server - builds a spelling dictionary from a corpus and answers
//! correction requests over TCP or from the console.
//!
//! # Startup Sequence
//! 1. Load the persisted config and apply command line overrides
//! 2. Build the index from the corpus (and optional frequency dictionary)
//! 3. Freeze the index and serve it
//!
//! A missing corpus is reported and the service starts with an empty index,
//! answering `Not Found` to every request.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{error, info, warn};

use symspell::config::Config;
use symspell::{dictionary, logging, repl, server::Server, Corrector, SymSpell, Verbosity};

#[derive(Parser, Debug)]
#[command(name = "symspell")]
#[command(about = "Symmetric delete spelling correction server")]
#[command(version)]
struct Args {
    /// Text corpus to build the dictionary from
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// Additional "word frequency" list
    #[arg(long)]
    frequency_dictionary: Option<PathBuf>,

    /// Language namespace for loaded words and queries
    #[arg(short, long)]
    language: Option<String>,

    /// Maximum edit distance indexed and searched
    #[arg(long)]
    max_edit_distance: Option<u32>,

    /// 0: top suggestion, 1: all of the smallest distance, 2: all within distance
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=2))]
    verbosity: Option<u8>,

    /// Address to listen on
    #[arg(long)]
    listen: Option<String>,

    /// Read words from the console instead of listening on TCP
    #[arg(long)]
    repl: bool,

    /// Do not persist the effective config
    #[arg(long)]
    no_save: bool,
}

fn apply_overrides(config: &mut Config, args: &Args) -> symspell::Result<()> {
    if let Some(corpus) = &args.corpus {
        config.corpus = Some(corpus.clone());
    }
    if let Some(path) = &args.frequency_dictionary {
        config.frequency_dictionary = Some(path.clone());
    }
    if let Some(language) = &args.language {
        config.language = language.clone();
    }
    if let Some(max_edit_distance) = args.max_edit_distance {
        config.max_edit_distance = max_edit_distance;
    }
    if let Some(verbosity) = args.verbosity {
        config.verbosity = Verbosity::try_from(verbosity)?;
    }
    if let Some(listen) = &args.listen {
        config.listen_addr = listen.clone();
    }
    Ok(())
}

fn build_index(config: &Config) -> SymSpell {
    let mut symspell = SymSpell::new(config.max_edit_distance, config.verbosity);

    let corpus = config.corpus_path();
    info!("Creating dictionary from {} ...", corpus.display());
    if let Err(err) = dictionary::load_corpus(&mut symspell, &corpus, &config.language) {
        error!("Failed to load corpus: {err}");
    }

    if let Some(path) = &config.frequency_dictionary {
        if let Err(err) = dictionary::load_frequency_dictionary(&mut symspell, path, &config.language) {
            error!("Failed to load frequency dictionary: {err}");
        }
    }

    info!(
        "Dictionary ready: {} words, {} entries",
        symspell.word_count(),
        symspell.entry_count()
    );
    symspell
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = Config::load()?;
    apply_overrides(&mut config, &args)?;

    logging::init(logging::parse_level(&config.log_level))?;

    // Persist defaults so users get a concrete config file on first run.
    if !args.no_save {
        if let Err(err) = config.save() {
            warn!("Failed to persist config: {err}");
        }
    }

    let corrector = Arc::new(Corrector::new(build_index(&config), config.language.clone()));

    if args.repl {
        let stdin = io::stdin();
        repl::run(stdin.lock(), io::stdout(), &corrector)?;
        return Ok(());
    }

    Server::bind(config.listen_addr.as_str(), corrector)?.run()?;
    Ok(())
}
