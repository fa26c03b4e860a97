//! Corpus tokenization.
//!
//! Text is lowercased once and then split into maximal runs of word
//! characters, digits, underscores and hyphens. The pattern is Unicode
//! aware, so the tokenizer works unchanged on non-Latin scripts.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[\w\-\d_]+").unwrap();
}

/// Lowercased corpus text that can be walked token by token, any number of times.
#[derive(Debug, Clone)]
pub struct Tokens {
    lowered: String,
}

impl Tokens {
    /// Iterate over the tokens from left to right.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        WORD.find_iter(&self.lowered).map(|m| m.as_str())
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a str;
    type IntoIter = Box<dyn Iterator<Item = &'a str> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

pub fn tokenize(text: &str) -> Tokens {
    Tokens {
        lowered: text.to_lowercase(),
    }
}
