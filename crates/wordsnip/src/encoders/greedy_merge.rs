//! # Greedy Rank-Ordered Merging
//!
//! Each iteration scans every adjacent symbol pair, picks the lowest-ranked
//! pair present in the codes, and applies all non-overlapping occurrences of
//! that pair left-to-right. This is O(n^2) per word, which is fine for
//! whitespace-delimited words.

use crate::{
    codes::CodeTable,
    types::{END_OF_WORD, Rank},
};

/// A merge candidate: an adjacent pair at `pos` with the given `rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MergeSite {
    pos: usize,
    rank: Rank,
}

/// Split a word into its initial symbols.
///
/// Every character is one symbol; the final character carries the
/// end-of-word marker. An empty word has no symbols.
pub fn initial_symbols(word: &str) -> Vec<String> {
    let mut chars = word.chars();
    let Some(last) = chars.next_back() else {
        return Vec::new();
    };

    let mut symbols: Vec<String> = chars.map(String::from).collect();

    let mut tail = String::with_capacity(last.len_utf8() + END_OF_WORD.len());
    tail.push(last);
    tail.push_str(END_OF_WORD);
    symbols.push(tail);

    symbols
}

/// Remove the end-of-word marker from the final symbol.
///
/// A bare marker symbol is dropped; a marker suffix is stripped.
pub fn strip_end_of_word(symbols: &mut Vec<String>) {
    let Some(last) = symbols.last_mut() else {
        return;
    };

    if last.as_str() == END_OF_WORD {
        symbols.pop();
    } else if last.ends_with(END_OF_WORD) {
        last.truncate(last.len() - END_OF_WORD.len());
    }
}

/// Segment a word with the merge codes.
///
/// ## Arguments
/// * `codes` - the merge codes.
/// * `word` - the word; should not contain whitespace.
/// * `keep` - called once per in-codes candidate pair per iteration;
///   returning `false` drops that candidate for the iteration.
///
/// ## Returns
/// The subwords, with the end-of-word marker removed.
pub fn greedy_merge<F>(
    codes: &CodeTable,
    word: &str,
    mut keep: F,
) -> Vec<String>
where
    F: FnMut() -> bool,
{
    let mut symbols = initial_symbols(word);
    let mut sites: Vec<MergeSite> = Vec::with_capacity(symbols.len());

    while symbols.len() > 1 {
        sites.clear();
        for (pos, pair) in symbols.windows(2).enumerate() {
            if let Some(rank) = codes.rank(&pair[0], &pair[1])
                && keep()
            {
                sites.push(MergeSite { pos, rank });
            }
        }

        let Some(best) = sites.iter().map(|site| site.rank).min() else {
            break;
        };
        let Some(pair) = codes.pair(best) else {
            break;
        };
        let merged = pair.merged();

        let mut next = Vec::with_capacity(symbols.len());
        let mut cursor = 0;
        // Ranks are unique, so equal rank means equal pair.
        for site in sites.iter().filter(|site| site.rank == best) {
            // Overlapping occurrence: ``x x x -> xx x``.
            if site.pos < cursor {
                continue;
            }
            next.extend_from_slice(&symbols[cursor..site.pos]);
            next.push(merged.clone());
            cursor = site.pos + 2;
        }
        next.extend_from_slice(&symbols[cursor..]);

        symbols = next;
    }

    strip_end_of_word(&mut symbols);
    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge_all(
        codes: &CodeTable,
        word: &str,
    ) -> Vec<String> {
        greedy_merge(codes, word, || true)
    }

    #[test]
    fn test_initial_symbols() {
        assert_eq!(initial_symbols("low"), vec!["l", "o", "w</w>"]);
        assert_eq!(initial_symbols("a"), vec!["a</w>"]);
        assert_eq!(initial_symbols("caf\u{e9}"), vec!["c", "a", "f", "\u{e9}</w>"]);
        assert!(initial_symbols("").is_empty());
    }

    #[test]
    fn test_strip_end_of_word() {
        let mut symbols = vec!["lo".to_string(), "w</w>".to_string()];
        strip_end_of_word(&mut symbols);
        assert_eq!(symbols, vec!["lo", "w"]);

        let mut symbols = vec!["low".to_string(), "</w>".to_string()];
        strip_end_of_word(&mut symbols);
        assert_eq!(symbols, vec!["low"]);

        let mut symbols: Vec<String> = Vec::new();
        strip_end_of_word(&mut symbols);
        assert!(symbols.is_empty());
    }

    #[test]
    fn test_low() {
        let codes = CodeTable::from_pairs([("l", "o"), ("lo", "w")]);
        assert_eq!(merge_all(&codes, "low"), vec!["lo", "w"]);

        let codes = CodeTable::from_pairs([("l", "o"), ("lo", "w</w>")]);
        assert_eq!(merge_all(&codes, "low"), vec!["low"]);
        assert_eq!(merge_all(&codes, "lower"), vec!["lo", "w", "e", "r"]);
    }

    #[test]
    fn test_rank_beats_position() {
        let codes = CodeTable::from_pairs([("b", "c"), ("a", "b")]);
        assert_eq!(merge_all(&codes, "abcd"), vec!["a", "bc", "d"]);

        let codes = CodeTable::from_pairs([("a", "b"), ("b", "c")]);
        assert_eq!(merge_all(&codes, "abcd"), vec!["ab", "c", "d"]);
    }

    #[test]
    fn test_no_overlapping_merges() {
        let codes = CodeTable::from_pairs([("a", "a")]);
        assert_eq!(merge_all(&codes, "aaaa"), vec!["aa", "a", "a"]);
        assert_eq!(merge_all(&codes, "aaaaa"), vec!["aa", "aa", "a"]);

        let codes = CodeTable::from_pairs([("a", "a"), ("a", "a</w>")]);
        assert_eq!(merge_all(&codes, "aaaa"), vec!["aa", "aa"]);
        assert_eq!(merge_all(&codes, "aaaaa"), vec!["aa", "aa", "a"]);
    }

    #[test]
    fn test_single_character() {
        let codes = CodeTable::from_pairs([("a", "</w>")]);
        assert_eq!(merge_all(&codes, "a"), vec!["a"]);
    }

    #[test]
    fn test_empty_word() {
        let codes = CodeTable::from_pairs([("a", "b")]);
        assert!(merge_all(&codes, "").is_empty());
    }

    #[test]
    fn test_keep_none() {
        let codes = CodeTable::from_pairs([("l", "o"), ("lo", "w</w>")]);
        assert_eq!(greedy_merge(&codes, "low", || false), vec!["l", "o", "w"]);
    }

    #[test]
    fn test_keep_is_only_asked_about_known_pairs() {
        let codes = CodeTable::from_pairs([("l", "o")]);
        let mut calls = 0;
        let subwords = greedy_merge(&codes, "hellos", || {
            calls += 1;
            true
        });
        assert_eq!(subwords, vec!["h", "e", "l", "lo", "s"]);
        assert_eq!(calls, 1);
    }
}
