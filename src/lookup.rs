//! Candidate expansion and ranking.
//!
//! A lookup walks the delete variants of the input breadth first, from the
//! input itself (distance 0) up to the distance budget. Every variant that is
//! an index key yields the word stored there and the words it links back to.
//! Because candidates are visited in order of increasing distance, the pruning
//! modes can stop as soon as no closer suggestion is possible.

use std::cmp::Ordering;
use std::collections::VecDeque;

use ahash::AHashSet;

use crate::distance::damerau_levenshtein;
use crate::edits::{self, EditItem};
use crate::symspell::{SymSpell, Verbosity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestItem {
    pub term: String,
    pub distance: u32,
    pub frequency: u64,
}

impl SuggestItem {
    fn new(term: String, distance: u32, frequency: u64) -> Self {
        Self { term, distance, frequency }
    }
}

/// Suggestions accumulated during one lookup, unique by term.
#[derive(Default)]
struct Suggestions {
    items: Vec<SuggestItem>,
    terms: AHashSet<String>,
    best: Option<u32>,
}

impl Suggestions {
    fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    fn push(&mut self, item: SuggestItem) {
        self.best = Some(self.best.map_or(item.distance, |best| best.min(item.distance)));
        self.terms.insert(item.term.clone());
        self.items.push(item);
    }

    /// Drop everything farther than `distance`.
    fn retain_within(&mut self, distance: u32) {
        if self.best.is_some_and(|best| best > distance) {
            self.items.clear();
            self.terms.clear();
            self.best = None;
            return;
        }
        if self.items.iter().any(|item| item.distance > distance) {
            self.items.retain(|item| item.distance <= distance);
            self.terms = self.items.iter().map(|item| item.term.clone()).collect();
        }
    }

    fn into_sorted(mut self) -> Vec<SuggestItem> {
        self.items.sort_by(|a, b| match a.distance.cmp(&b.distance) {
            Ordering::Equal => b.frequency.cmp(&a.frequency),
            other => other,
        });
        self.items
    }
}

/// Exact distance between `input` and a word reached through a shared delete variant.
///
/// `link` is the word with the number of deletes applied to it, `candidate`
/// is the variant of the input with the number of deletes applied to the
/// input. When only one side was edited, its delete count is exact. When both
/// were, the counts do not add up reliably (`bank` vs `bnak` and `bank` vs
/// `kanb` share the variant `ba` at one delete each side, yet are 1 and 2
/// apart), so the distance is recomputed from the original strings.
pub fn true_distance(link: &EditItem, candidate: &EditItem, input: &str) -> u32 {
    if link.term == input {
        0
    } else if link.distance == 0 {
        candidate.distance
    } else if candidate.distance == 0 {
        link.distance
    } else {
        damerau_levenshtein(&link.term, input) as u32
    }
}

impl SymSpell {
    /// Find the words of `language` within `max_edit_distance` of `input`.
    ///
    /// Results are sorted by distance, then by descending frequency.
    /// `max_edit_distance` is capped at the distance the index was built for.
    pub fn lookup(
        &self,
        input: &str,
        language: &str,
        max_edit_distance: u32,
        verbosity: Verbosity,
    ) -> Vec<SuggestItem> {
        let max_edit_distance = max_edit_distance.min(self.max_edit_distance());
        let suggestions = self.collect_suggestions(input, language, max_edit_distance, verbosity);

        let mut sorted = suggestions.into_sorted();
        if verbosity == Verbosity::Top {
            sorted.truncate(1);
        }
        sorted
    }

    fn collect_suggestions(
        &self,
        input: &str,
        language: &str,
        max_edit_distance: u32,
        verbosity: Verbosity,
    ) -> Suggestions {
        let prunes = verbosity.prunes();
        let mut suggestions = Suggestions::default();

        let mut queued: AHashSet<String> = AHashSet::new();
        let mut candidates: VecDeque<EditItem> = VecDeque::new();
        queued.insert(input.to_string());
        candidates.push_back(EditItem {
            term: input.to_string(),
            distance: 0,
        });

        while let Some(candidate) = candidates.pop_front() {
            // Candidates arrive in order of distance, so nothing closer can follow.
            if prunes && suggestions.best.is_some_and(|best| candidate.distance > best) {
                break;
            }
            if candidate.distance > max_edit_distance {
                break;
            }

            if let Some(item) = self.entry(language, &candidate.term) {
                if let Some(term) = &item.term {
                    if !suggestions.contains(term) {
                        if prunes {
                            suggestions.retain_within(candidate.distance);
                        }
                        suggestions.push(SuggestItem::new(term.clone(), candidate.distance, item.count));
                        if prunes && candidate.distance == 0 {
                            break;
                        }
                    }
                }

                for link in &item.suggestions {
                    if suggestions.contains(&link.term) {
                        continue;
                    }
                    let distance = true_distance(link, &candidate, input);

                    if prunes {
                        if suggestions.best.is_some_and(|best| distance > best) {
                            continue;
                        }
                        suggestions.retain_within(distance);
                    }

                    if distance <= max_edit_distance {
                        if let Some(frequency) = self.frequency(language, &link.term) {
                            suggestions.push(SuggestItem::new(link.term.clone(), distance, frequency));
                        }
                    }
                }
            }

            if candidate.distance < max_edit_distance {
                for delete in edits::deletes(&candidate.term, candidate.distance, max_edit_distance, false) {
                    if queued.insert(delete.term.clone()) {
                        candidates.push_back(delete);
                    }
                }
            }
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(max_edit_distance: u32, verbosity: Verbosity, words: &[(&str, u64)]) -> SymSpell {
        let mut symspell = SymSpell::new(max_edit_distance, verbosity);
        for (word, count) in words {
            symspell.add_word_with_count("en", word, *count);
        }
        symspell
    }

    fn terms(suggestions: &[SuggestItem]) -> Vec<&str> {
        suggestions.iter().map(|s| s.term.as_str()).collect()
    }

    #[test]
    fn test_exact_match() {
        let symspell = build(2, Verbosity::All, &[("hello", 100), ("world", 50)]);
        let suggestions = symspell.lookup("hello", "en", 2, Verbosity::All);
        assert_eq!(suggestions[0], SuggestItem::new("hello".to_string(), 0, 100));
    }

    #[test]
    fn test_exact_match_stops_pruning_lookup() {
        let symspell = build(2, Verbosity::Closest, &[("hello", 100), ("hell", 500)]);
        let suggestions = symspell.lookup("hello", "en", 2, Verbosity::Closest);
        assert_eq!(terms(&suggestions), vec!["hello"]);
    }

    #[test]
    fn test_single_edits() {
        let symspell = build(2, Verbosity::All, &[("hello", 100), ("something", 10)]);
        for typo in ["hllo", "zello", "helo", "hell", "hello!", "ehllo"] {
            let suggestions = symspell.lookup(typo, "en", 2, Verbosity::All);
            assert_eq!(terms(&suggestions), vec!["hello"], "{typo}");
            assert_eq!(suggestions[0].distance, 1, "{typo}");
        }
        let suggestions = symspell.lookup("zllo", "en", 2, Verbosity::All);
        assert_eq!(suggestions[0].term, "hello");
        assert_eq!(suggestions[0].distance, 2);
    }

    #[test]
    fn test_both_sides_edited_uses_true_distance() {
        let symspell = build(1, Verbosity::All, &[("bank", 5)]);
        assert_eq!(symspell.lookup("bnak", "en", 1, Verbosity::All)[0].distance, 1);
        assert_eq!(symspell.lookup("bink", "en", 1, Verbosity::All)[0].distance, 1);
        for typo in ["kanb", "xban", "baxn"] {
            assert!(symspell.lookup(typo, "en", 1, Verbosity::All).is_empty(), "{typo}");
        }
    }

    #[test]
    fn test_true_distance_cases() {
        let item = |term: &str, distance| EditItem { term: term.to_string(), distance };
        assert_eq!(true_distance(&item("bank", 1), &item("ban", 1), "bank"), 0);
        assert_eq!(true_distance(&item("bank", 0), &item("bank", 2), "bankxy"), 2);
        assert_eq!(true_distance(&item("bank", 1), &item("ban", 0), "ban"), 1);
        assert_eq!(true_distance(&item("bank", 1), &item("ban", 1), "kanb"), 2);
    }

    #[test]
    fn test_ranking_by_distance_then_frequency() {
        let symspell = build(
            2,
            Verbosity::All,
            &[("bank", 5), ("band", 50), ("bane", 1), ("banks", 500)],
        );
        let suggestions = symspell.lookup("ban", "en", 2, Verbosity::All);
        assert_eq!(terms(&suggestions), vec!["band", "bank", "bane", "banks"]);
        assert_eq!(suggestions[3].distance, 2);
    }

    #[test]
    fn test_closest_keeps_only_smallest_distance() {
        let symspell = build(
            2,
            Verbosity::Closest,
            &[("bank", 5), ("band", 50), ("banks", 500)],
        );
        let suggestions = symspell.lookup("ban", "en", 2, Verbosity::Closest);
        assert_eq!(terms(&suggestions), vec!["band", "bank"]);
    }

    #[test]
    fn test_top_returns_one() {
        let symspell = build(2, Verbosity::Top, &[("bank", 5), ("band", 50), ("banks", 500)]);
        let suggestions = symspell.lookup("ban", "en", 2, Verbosity::Top);
        assert_eq!(terms(&suggestions), vec!["band"]);
    }

    #[test]
    fn test_closer_word_found_later_replaces_farther_ones() {
        // "thexx" is reached at distance 2 through the input itself being a
        // variant, "he" is a word at distance 1 reached one level deeper.
        let symspell = build(2, Verbosity::Closest, &[("thexx", 9), ("he", 1)]);
        let suggestions = symspell.lookup("hex", "en", 2, Verbosity::Closest);
        assert_eq!(terms(&suggestions), vec!["he"]);
        assert_eq!(suggestions[0].distance, 1);
    }

    #[test]
    fn test_distance_is_capped_by_index() {
        let symspell = build(1, Verbosity::All, &[("hello", 100)]);
        assert!(symspell.lookup("hlo", "en", 3, Verbosity::All).is_empty());
    }

    #[test]
    fn test_empty_and_unknown() {
        let symspell = build(2, Verbosity::All, &[("hello", 100)]);
        assert!(symspell.lookup("", "en", 2, Verbosity::All).is_empty());
        assert!(symspell.lookup("xyzzy", "en", 2, Verbosity::All).is_empty());
        assert!(symspell.lookup("hello", "de", 2, Verbosity::All).is_empty());

        let empty = SymSpell::new(2, Verbosity::All);
        assert!(empty.lookup("hello", "en", 2, Verbosity::All).is_empty());
    }
}
