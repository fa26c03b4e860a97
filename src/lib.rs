//! SymSpell - symmetric delete spelling correction.
//!
//! # Overview
//!
//! Every word of a corpus is indexed together with all strings reachable by
//! deleting up to `max_edit_distance` of its characters. A lookup then only
//! has to generate deletes of the misspelled input and probe the index,
//! which is independent of the vocabulary size.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Corpus text    │
//! └────────┬────────┘
//!          │  tokenizer.rs
//!          ▼
//! ┌─────────────────┐
//! │  SymSpell index │ ← words + delete variants (symspell.rs, edits.rs)
//! └────────┬────────┘
//!          │  frozen behind an Arc (corrector.rs)
//!          ▼
//! ┌─────────────────┐
//! │  Lookup         │ ← candidate expansion, ranking (lookup.rs, distance.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ REPL / TCP      │ ← repl.rs, server.rs
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use symspell::{SymSpell, Verbosity};
//!
//! let mut symspell = SymSpell::new(2, Verbosity::All);
//! symspell.build_from_corpus("bank bank bank river", "en");
//!
//! let suggestions = symspell.lookup("bnak", "en", 2, Verbosity::All);
//! assert_eq!(suggestions[0].term, "bank");
//! assert_eq!(suggestions[0].distance, 1);
//! ```

pub mod config;
pub mod corrector;
pub mod dictionary;
pub mod distance;
pub mod edits;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod repl;
pub mod server;
pub mod symspell;
pub mod tokenizer;

pub use corrector::Corrector;
pub use distance::damerau_levenshtein;
pub use error::{Result, SpellError};
pub use lookup::SuggestItem;
pub use symspell::{SymSpell, Verbosity};
