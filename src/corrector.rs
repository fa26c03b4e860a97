//! The query-side service shared by the console and the network listener.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::lookup::SuggestItem;
use crate::symspell::{SymSpell, Verbosity};

/// Response sent over the wire when a word has no suggestions.
pub const NOT_FOUND: &str = "Not Found";

/// Serves lookups from a frozen index snapshot.
///
/// Readers clone the current `Arc<SymSpell>` and run their lookup without
/// holding any lock. Writers build on a private copy of the index and
/// publish it in a single swap, so a partially built index is never visible.
pub struct Corrector {
    index: RwLock<Arc<SymSpell>>,
    // Serializes writers so that concurrent extensions are not lost.
    writer: Mutex<()>,
    language: String,
    max_edit_distance: u32,
    verbosity: Verbosity,
}

impl Corrector {
    pub fn new(symspell: SymSpell, language: impl Into<String>) -> Self {
        let max_edit_distance = symspell.max_edit_distance();
        let verbosity = symspell.verbosity();
        Self {
            index: RwLock::new(Arc::new(symspell)),
            writer: Mutex::new(()),
            language: language.into(),
            max_edit_distance,
            verbosity,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// The index as currently published.
    pub fn snapshot(&self) -> Arc<SymSpell> {
        Arc::clone(&self.index.read())
    }

    /// Suggestions for `word` in `language`, best first.
    pub fn correct(&self, word: &str, language: &str) -> Vec<SuggestItem> {
        self.snapshot()
            .lookup(word, language, self.max_edit_distance, self.verbosity)
    }

    /// Answer one wire request: trimmed, lowercased, looked up in the default
    /// language, and rendered as space-separated terms.
    pub fn answer(&self, request: &str) -> String {
        let word = request.trim().to_lowercase();
        let suggestions = self.correct(&word, &self.language);
        if suggestions.is_empty() {
            return NOT_FOUND.to_string();
        }
        suggestions
            .iter()
            .map(|s| s.term.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Apply `update` to a copy of the index and publish the result.
    pub fn extend<R>(&self, update: impl FnOnce(&mut SymSpell) -> R) -> R {
        let _writer = self.writer.lock();
        let mut next = SymSpell::clone(&self.snapshot());
        let result = update(&mut next);
        *self.index.write() = Arc::new(next);
        result
    }
}
