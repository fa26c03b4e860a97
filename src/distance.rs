//! Damerau-Levenshtein distance with unrestricted adjacent transpositions.

use ahash::AHashMap;

/// Calculate the true Damerau-Levenshtein distance between two strings.
///
/// Insertions, deletions, substitutions and transpositions of adjacent
/// characters all cost one, and a transposed pair may be edited again
/// (unlike optimal string alignment, `"ca"` to `"abc"` is 2, not 3).
/// Characters are Unicode scalar values, the same unit the delete
/// generator removes.
pub fn damerau_levenshtein(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let (m, n) = (source.len(), target.len());

    // (m + 2) x (n + 2) matrix; row 0 and column 0 hold the sentinel.
    let width = n + 2;
    let infinity = m + n;
    let mut h = vec![0usize; (m + 2) * width];
    h[0] = infinity;
    for i in 0..=m {
        h[(i + 1) * width + 1] = i;
        h[(i + 1) * width] = infinity;
    }
    for j in 0..=n {
        h[width + j + 1] = j;
        h[j + 1] = infinity;
    }

    // Last row in which each source character was seen.
    let mut last_row: AHashMap<char, usize> = AHashMap::new();

    for i in 1..=m {
        let mut last_match_col = 0;
        for j in 1..=n {
            let i1 = last_row.get(&target[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;

            let cell = (i + 1) * width + j + 1;
            if source[i - 1] == target[j - 1] {
                h[cell] = h[i * width + j];
                last_match_col = j;
            } else {
                h[cell] = h[i * width + j]
                    .min(h[(i + 1) * width + j])
                    .min(h[i * width + j + 1])
                    + 1;
            }

            let transposition = h[i1 * width + j1] + (i - i1 - 1) + 1 + (j - j1 - 1);
            h[cell] = h[cell].min(transposition);
        }
        last_row.insert(source[i - 1], i);
    }

    h[(m + 1) * width + n + 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        for s in ["", "a", "hello", "mississippi", "日本語"] {
            assert_eq!(damerau_levenshtein(s, s), 0);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(damerau_levenshtein("", "abc"), 3);
        assert_eq!(damerau_levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_transposition() {
        assert_eq!(damerau_levenshtein("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein("the", "teh"), 1);
        assert_eq!(damerau_levenshtein("bank", "bnak"), 1);
    }

    #[test]
    fn test_edited_transposition() {
        assert_eq!(damerau_levenshtein("ca", "abc"), 2);
    }

    #[test]
    fn test_classic_pairs() {
        assert_eq!(damerau_levenshtein("kitten", "sitting"), 3);
        assert_eq!(damerau_levenshtein("bank", "kanb"), 2);
        assert_eq!(damerau_levenshtein("bank", "xban"), 2);
        assert_eq!(damerau_levenshtein("bank", "baxn"), 2);
        assert_eq!(damerau_levenshtein("bank", "bink"), 1);
    }

    #[test]
    fn test_hello_variants() {
        let cases = [
            ("elo", 2),
            ("ello", 1),
            ("hll", 2),
            ("helo", 1),
            ("heo", 2),
            ("hel", 2),
            ("zello", 1),
            ("ell", 2),
            ("hllo", 1),
            ("hlo", 2),
            ("hell", 1),
            ("hello!", 1),
            ("hello WORLD!", 7),
        ];
        for (other, expected) in cases {
            assert_eq!(damerau_levenshtein("hello", other), expected, "hello vs {other}");
        }
    }

    #[test]
    fn test_symmetric() {
        let words = ["", "a", "ab", "abc", "acb", "kitten", "sitting", "ca", "abc", "xyzzy"];
        for a in words {
            for b in words {
                assert_eq!(damerau_levenshtein(a, b), damerau_levenshtein(b, a), "{a} / {b}");
            }
        }
    }
}
