// symspell.rs - Symmetric delete index for fast spell correction
// Every word seen in a corpus is stored together with all of its delete
// variants up to the configured edit distance; lookups live in lookup.rs.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::edits::{self, EditItem};
use crate::error::SpellError;
use crate::tokenizer;

/// How many suggestions a lookup returns and how aggressively it prunes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Verbosity {
    /// Only the single best suggestion.
    Top,
    /// All suggestions tied at the smallest distance found.
    Closest,
    /// All suggestions within the distance budget, without early termination.
    #[default]
    All,
}

impl Verbosity {
    /// Whether early termination and lowest-distance pruning apply.
    pub fn prunes(self) -> bool {
        self != Verbosity::All
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = SpellError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Verbosity::Top),
            1 => Ok(Verbosity::Closest),
            2 => Ok(Verbosity::All),
            other => Err(SpellError::InvalidVerbosity(other)),
        }
    }
}

impl From<Verbosity> for u8 {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Top => 0,
            Verbosity::Closest => 1,
            Verbosity::All => 2,
        }
    }
}

/// One key of the index.
///
/// A key can be a real word (`term` is set), a delete variant of other words
/// (`suggestions` is non-empty), or both at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryItem {
    /// The word itself, once it has been seen in a corpus.
    pub term: Option<String>,
    /// Corpus occurrences; zero for keys that only exist as delete variants.
    pub count: u64,
    /// Words this key is a delete variant of, at most one link per word.
    pub suggestions: Vec<EditItem>,
}

impl DictionaryItem {
    pub fn is_word(&self) -> bool {
        self.term.is_some()
    }
}

/// Delete-variant index, partitioned by language.
#[derive(Debug, Clone)]
pub struct SymSpell {
    // language -> key -> item
    dictionary: AHashMap<String, AHashMap<String, DictionaryItem>>,
    max_edit_distance: u32,
    verbosity: Verbosity,
    word_count: usize,
}

impl SymSpell {
    /// Create an empty index.
    ///
    /// `verbosity` is fixed at construction: under the pruning modes only the
    /// lowest-distance links are stored for each delete variant.
    pub fn new(max_edit_distance: u32, verbosity: Verbosity) -> Self {
        Self {
            dictionary: AHashMap::new(),
            max_edit_distance,
            verbosity,
            word_count: 0,
        }
    }

    pub fn max_edit_distance(&self) -> u32 {
        self.max_edit_distance
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Record one occurrence of `word`.
    ///
    /// Returns true the first time the word is seen, which is also the only
    /// time its delete variants are generated.
    pub fn add_word(&mut self, language: &str, word: &str) -> bool {
        self.add_word_with_count(language, word, 1)
    }

    /// Record `count` occurrences of `word` at once.
    pub fn add_word_with_count(&mut self, language: &str, word: &str, count: u64) -> bool {
        if word.is_empty() || count == 0 {
            return false;
        }

        let max_edit_distance = self.max_edit_distance;
        let prunes = self.verbosity.prunes();
        let entries = self.dictionary.entry(language.to_string()).or_default();

        // An existing key is either a repeated word or a delete variant of an
        // earlier word that is now seen as a word in its own right.
        let item = entries.entry(word.to_string()).or_default();
        item.count = item.count.saturating_add(count);
        if item.is_word() {
            return false;
        }
        item.term = Some(word.to_string());
        self.word_count += 1;

        if max_edit_distance == 0 {
            return true;
        }

        // Deletes are unique and generated once per word, so no variant
        // already links back to `word`.
        for delete in edits::deletes(word, 0, max_edit_distance, true) {
            let link = EditItem {
                term: word.to_string(),
                distance: delete.distance,
            };
            let variant = entries.entry(delete.term).or_default();
            add_lowest_distance(&mut variant.suggestions, link, prunes);
        }

        true
    }

    /// Add every token of `text` and return how many distinct new words were indexed.
    pub fn build_from_corpus(&mut self, text: &str, language: &str) -> usize {
        let tokens = tokenizer::tokenize(text);
        tokens
            .iter()
            .filter(|token| self.add_word(language, token))
            .count()
    }

    /// Get the index entry stored under `key`.
    pub fn entry(&self, language: &str, key: &str) -> Option<&DictionaryItem> {
        self.dictionary.get(language)?.get(key)
    }

    /// Corpus frequency of `word`, if it is a known word.
    pub fn frequency(&self, language: &str, word: &str) -> Option<u64> {
        self.entry(language, word)
            .filter(|item| item.is_word())
            .map(|item| item.count)
    }

    /// Number of distinct words across all languages.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of keys (words and delete variants) across all languages.
    pub fn entry_count(&self) -> usize {
        self.dictionary.values().map(|entries| entries.len()).sum()
    }
}

// Under the pruning modes a strictly closer link evicts every existing link,
// including links to other words, and a farther link is not stored at all.
fn add_lowest_distance(suggestions: &mut Vec<EditItem>, suggestion: EditItem, prunes: bool) {
    if prunes {
        if let Some(first) = suggestions.first() {
            if first.distance > suggestion.distance {
                suggestions.clear();
            } else if first.distance < suggestion.distance {
                return;
            }
        }
    }
    suggestions.push(suggestion);
}
