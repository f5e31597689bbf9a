//! # Glossary Isolators
//!
//! [`NoIsolation`] and the literal-entry [`Glossary`].

use core::fmt::Debug;

use regex::Regex;

use crate::errors::{WSResult, WordsnipError};

/// A fragment of a word, as produced by a [`WordIsolator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordPiece<'a> {
    /// Text to be segmented with the merge codes.
    Mergeable(&'a str),

    /// Text to be emitted as a single subword.
    Atomic(&'a str),
}

impl<'a> WordPiece<'a> {
    /// The text of the piece.
    pub fn as_str(&self) -> &'a str {
        match self {
            WordPiece::Mergeable(s) | WordPiece::Atomic(s) => s,
        }
    }
}

/// Pre-merge hook which splits a word into [`WordPiece`]s.
///
/// Implementations must return at least one piece for a non-empty word,
/// and the pieces must concatenate back to the word.
pub trait WordIsolator: Send + Sync + Debug {
    /// Split `word` into pieces.
    fn isolate<'a>(
        &self,
        word: &'a str,
    ) -> Vec<WordPiece<'a>>;
}

/// A [`WordIsolator`] which returns the whole word as one mergeable piece.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoIsolation;

impl WordIsolator for NoIsolation {
    fn isolate<'a>(
        &self,
        word: &'a str,
    ) -> Vec<WordPiece<'a>> {
        vec![WordPiece::Mergeable(word)]
    }
}

/// A set of literal strings which are never split.
///
/// Entries apply in order: each entry splits every still-mergeable piece
/// around its occurrences, which become atomic pieces. Earlier entries
/// therefore take precedence over overlapping later ones.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: Vec<String>,
    matchers: Vec<Regex>,
}

impl Glossary {
    /// Build a glossary.
    ///
    /// Empty entries are ignored.
    ///
    /// ## Arguments
    /// * `entries` - the literal strings to protect, in precedence order.
    pub fn new<I, S>(entries: I) -> WSResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries
            .into_iter()
            .map(Into::into)
            .filter(|e: &String| !e.is_empty())
            .collect();

        let matchers = entries
            .iter()
            .map(|entry| {
                Regex::new(&regex::escape(entry))
                    .map_err(|e| WordsnipError::Glossary(format!("{entry:?}: {e}")))
            })
            .collect::<WSResult<Vec<_>>>()?;

        Ok(Self { entries, matchers })
    }

    /// The glossary entries.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Is the glossary empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a mergeable piece around the matches of `matcher`.
///
/// Atomic pieces, and pieces without a match, pass through; empty
/// fragments between matches are dropped.
fn split_around<'a>(
    matcher: &Regex,
    piece: WordPiece<'a>,
    out: &mut Vec<WordPiece<'a>>,
) {
    let WordPiece::Mergeable(text) = piece else {
        out.push(piece);
        return;
    };

    let mut last = 0;
    for m in matcher.find_iter(text) {
        if m.start() > last {
            out.push(WordPiece::Mergeable(&text[last..m.start()]));
        }
        out.push(WordPiece::Atomic(m.as_str()));
        last = m.end();
    }
    if last == 0 {
        out.push(piece);
    } else if last < text.len() {
        out.push(WordPiece::Mergeable(&text[last..]));
    }
}

impl WordIsolator for Glossary {
    fn isolate<'a>(
        &self,
        word: &'a str,
    ) -> Vec<WordPiece<'a>> {
        let mut pieces = vec![WordPiece::Mergeable(word)];
        for matcher in &self.matchers {
            let mut next = Vec::with_capacity(pieces.len());
            for piece in pieces {
                split_around(matcher, piece, &mut next);
            }
            pieces = next;
        }
        pieces
    }
}
