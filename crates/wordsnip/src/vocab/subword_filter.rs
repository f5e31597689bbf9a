//! # Post-Merge Subword Filters
//!
//! A [`SubwordFilter`] runs on the merged subwords of one word, after the
//! end-of-word marker has been removed and before the result is cached.

use core::fmt::Debug;

use crate::{codes::CodeTable, types::END_OF_WORD, vocab::Vocabulary};

fn concat(
    a: &str,
    b: &str,
) -> String {
    let mut s = String::with_capacity(a.len() + b.len());
    s.push_str(a);
    s.push_str(b);
    s
}

/// Post-merge hook over the subwords of a single word.
pub trait SubwordFilter: Send + Sync + Debug {
    /// Filter the subwords of one word.
    ///
    /// ## Arguments
    /// * `codes` - the merge codes the subwords were built from.
    /// * `separator` - the continuation marker the encoder will append.
    /// * `subwords` - the subwords, in order; the last is word-final.
    ///
    /// ## Returns
    /// The replacement subwords, whose concatenation must equal the input's.
    fn filter(
        &self,
        codes: &CodeTable,
        separator: &str,
        subwords: Vec<String>,
    ) -> Vec<String>;
}

/// A [`SubwordFilter`] which passes subwords through unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoFilter;

impl SubwordFilter for NoFilter {
    fn filter(
        &self,
        _codes: &CodeTable,
        _separator: &str,
        subwords: Vec<String>,
    ) -> Vec<String> {
        subwords
    }
}

/// A [`SubwordFilter`] which re-splits subwords missing from a vocabulary.
///
/// Non-final subwords are looked up as ``{subword}{separator}``, using the
/// encoder's current separator; the final subword is looked up bare. A missing subword is reversed through the
/// codes into the pair that produced it, and each half is checked in turn,
/// until every piece is either in the vocabulary or was never merged.
#[derive(Debug, Clone)]
pub struct VocabularySplitter {
    vocab: Vocabulary,
}

impl VocabularySplitter {
    /// Create a new splitter.
    ///
    /// ## Arguments
    /// * `vocab` - the target vocabulary, with its threshold applied.
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    /// Get the target vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    fn is_known(
        &self,
        separator: &str,
        piece: &str,
        is_final: bool,
    ) -> bool {
        if is_final {
            self.vocab.contains(piece)
        } else {
            self.vocab.contains(&concat(piece, separator))
        }
    }

    fn split_into(
        &self,
        codes: &CodeTable,
        separator: &str,
        segment: &str,
        is_final: bool,
        out: &mut Vec<String>,
    ) {
        let halves = if is_final {
            codes
                .lookup_merged(&concat(segment, END_OF_WORD))
                .and_then(|pair| {
                    let right = pair.right.strip_suffix(END_OF_WORD)?;
                    Some((pair.left.as_str(), right))
                })
        } else {
            codes
                .lookup_merged(segment)
                .map(|pair| (pair.left.as_str(), pair.right.as_str()))
        };

        // Each half must be strictly shorter than the segment.
        let Some((left, right)) = halves.filter(|(l, r)| !l.is_empty() && !r.is_empty()) else {
            out.push(segment.to_string());
            return;
        };

        if self.is_known(separator, left, false) {
            out.push(left.to_string());
        } else {
            self.split_into(codes, separator, left, false, out);
        }

        if self.is_known(separator, right, is_final) {
            out.push(right.to_string());
        } else {
            self.split_into(codes, separator, right, is_final, out);
        }
    }
}

impl SubwordFilter for VocabularySplitter {
    fn filter(
        &self,
        codes: &CodeTable,
        separator: &str,
        subwords: Vec<String>,
    ) -> Vec<String> {
        let n = subwords.len();
        let mut out = Vec::with_capacity(n);

        for (idx, subword) in subwords.into_iter().enumerate() {
            let is_final = idx + 1 == n;
            if self.is_known(separator, &subword, is_final) {
                out.push(subword);
            } else {
                self.split_into(codes, separator, &subword, is_final, &mut out);
            }
        }

        out
    }
}
