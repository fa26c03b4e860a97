//! Dictionary loading from files.
//!
//! Two sources are supported:
//! - **Corpus**: any UTF-8 text. Every token counts as one occurrence.
//! - **Frequency dictionary**: one word per line with an optional count.
//!
//! # Frequency Dictionary Format
//!
//! ```text
//! # Comments start with #
//! word frequency
//! the 1000000
//! hello 15000
//! ```
//!
//! If frequency is omitted or unparsable, it defaults to 1.
//!
//! Loading only ever appends to the index. A file that cannot be read
//! leaves the index exactly as it was.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::{Result, SpellError};
use crate::symspell::SymSpell;

/// Build the index from a text corpus.
///
/// Returns the number of distinct words that were new to the index.
///
/// # Errors
/// Returns `CorpusNotFound` if the file does not exist, or an I/O error if it
/// cannot be read as UTF-8 text.
pub fn load_corpus(symspell: &mut SymSpell, path: &Path, language: &str) -> Result<usize> {
    let text = read_existing(path, |p| fs::read_to_string(p))?;

    let added = symspell.build_from_corpus(&text, language);
    info!(
        "Dictionary created from {}: {} words, {} entries, for edit distance={}",
        path.display(),
        added,
        symspell.entry_count(),
        symspell.max_edit_distance()
    );
    Ok(added)
}

/// Load a `word frequency` list.
///
/// Words are lowercased. Returns the number of distinct words that were new
/// to the index.
pub fn load_frequency_dictionary(symspell: &mut SymSpell, path: &Path, language: &str) -> Result<usize> {
    let file = read_existing(path, |p| File::open(p))?;
    let reader = BufReader::new(file);

    let mut added = 0usize;
    for line in reader.lines() {
        let line = line?;
        if let Some((word, frequency)) = parse_frequency_line(&line) {
            if symspell.add_word_with_count(language, &word, frequency) {
                added += 1;
            }
        }
    }

    info!(
        "Loaded frequency dictionary from {}: {} words, {} entries",
        path.display(),
        added,
        symspell.entry_count()
    );
    Ok(added)
}

fn read_existing<T>(path: &Path, read: impl FnOnce(&Path) -> io::Result<T>) -> Result<T> {
    read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SpellError::CorpusNotFound(path.to_path_buf()),
        _ => SpellError::Io(err),
    })
}

fn parse_frequency_line(line: &str) -> Option<(String, u64)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut parts = line.split_whitespace();
    let word = parts.next()?.to_lowercase();
    let frequency = parts
        .next()
        .and_then(|count| count.parse::<u64>().ok())
        .unwrap_or(1);
    Some((word, frequency))
}
