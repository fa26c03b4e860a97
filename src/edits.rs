//! Delete variant generation.
//!
//! Only deletes are generated, never inserts, replaces or transposes: those
//! operations on the input are equivalent to deletes on the dictionary side,
//! and deletes do not depend on the size of the alphabet.

use ahash::AHashSet;

/// A string reached by deleting `distance` characters from some source term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditItem {
    pub term: String,
    pub distance: u32,
}

/// Generate the unique delete variants of `word`.
///
/// Every variant is tagged with `distance + 1` for a single deletion. When
/// `recursive` is set, variants are deleted again until `max_distance` is
/// reached. A variant reachable through several deletion paths appears once.
pub fn deletes(word: &str, distance: u32, max_distance: u32, recursive: bool) -> Vec<EditItem> {
    let mut edits = Vec::new();
    let mut seen = AHashSet::new();
    collect(word, distance, max_distance, recursive, &mut edits, &mut seen);
    edits
}

fn collect(
    word: &str,
    distance: u32,
    max_distance: u32,
    recursive: bool,
    edits: &mut Vec<EditItem>,
    seen: &mut AHashSet<String>,
) {
    let distance = distance + 1;
    if word.chars().nth(1).is_none() {
        return;
    }

    for (offset, ch) in word.char_indices() {
        let mut delete = String::with_capacity(word.len() - ch.len_utf8());
        delete.push_str(&word[..offset]);
        delete.push_str(&word[offset + ch.len_utf8()..]);

        if seen.insert(delete.clone()) {
            if recursive && distance < max_distance {
                collect(&delete, distance, max_distance, recursive, edits, seen);
            }
            edits.push(EditItem { term: delete, distance });
        }
    }
}
