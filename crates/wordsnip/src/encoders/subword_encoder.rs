//! # Subword Encoder

use std::{path::Path, sync::Arc};

use rand::{Rng, RngCore};

use crate::{
    codes::CodeTable,
    encoders::{
        DropoutRate,
        EncoderOptions,
        MergeMode,
        SegmentationCache,
        greedy_merge::greedy_merge,
    },
    errors::WSResult,
    glossary::{NoIsolation, WordIsolator, WordPiece},
    types::DEFAULT_SEPARATOR,
    vocab::{NoFilter, SubwordFilter, Vocabulary},
};

/// Whitespace preserved verbatim at the edges of a line.
const EDGE_WHITESPACE: &[char] = &[' ', '\r', '\n'];

/// Segments lines and words into subwords with learned merge codes.
///
/// The codes and vocabulary are shared read-only; the segmentation cache
/// is locked internally, so one encoder may be shared across threads.
#[derive(Debug, Clone)]
pub struct SubwordEncoder {
    codes: Arc<CodeTable>,
    vocab: Arc<Vocabulary>,
    separator: String,
    isolator: Arc<dyn WordIsolator>,
    filter: Arc<dyn SubwordFilter>,
    cache: SegmentationCache,
}

impl SubwordEncoder {
    /// Create an encoder with the default separator and no-op hooks.
    ///
    /// ## Arguments
    /// * `codes` - the merge codes.
    /// * `vocab` - the vocabulary; may be empty.
    pub fn new<C, V>(
        codes: C,
        vocab: V,
    ) -> Self
    where
        C: Into<Arc<CodeTable>>,
        V: Into<Arc<Vocabulary>>,
    {
        Self {
            codes: codes.into(),
            vocab: vocab.into(),
            separator: DEFAULT_SEPARATOR.to_string(),
            isolator: Arc::new(NoIsolation),
            filter: Arc::new(NoFilter),
            cache: SegmentationCache::default(),
        }
    }

    /// Load an encoder with default [`EncoderOptions`].
    ///
    /// ## Arguments
    /// * `codes_path` - the codes file; failing to load it is an error.
    /// * `vocab_path` - the vocabulary file; failing to load it yields an
    ///   empty vocabulary.
    pub fn from_paths<C, V>(
        codes_path: C,
        vocab_path: V,
    ) -> WSResult<Self>
    where
        C: AsRef<Path>,
        V: AsRef<Path>,
    {
        EncoderOptions::default().load(codes_path, Some(vocab_path.as_ref()))
    }

    /// Load an encoder with default [`EncoderOptions`] and no vocabulary.
    pub fn from_codes_path<C: AsRef<Path>>(codes_path: C) -> WSResult<Self> {
        EncoderOptions::default().load(codes_path, None)
    }

    /// Set the continuation marker and return the encoder.
    ///
    /// The marker is passed to the [`SubwordFilter`] on every call, so
    /// vocabulary lookups follow it. Clears the cache.
    pub fn with_separator<S: Into<String>>(
        mut self,
        separator: S,
    ) -> Self {
        self.separator = separator.into();
        self.cache.clear();
        self
    }

    /// Replace the cache with one of the given threshold, and return the encoder.
    pub fn with_cache_max_entries(
        mut self,
        max_entries: usize,
    ) -> Self {
        self.cache = SegmentationCache::new(max_entries);
        self
    }

    /// Set the pre-merge isolator and return the encoder.
    ///
    /// Clears the cache.
    pub fn with_isolator(
        mut self,
        isolator: Arc<dyn WordIsolator>,
    ) -> Self {
        self.isolator = isolator;
        self.cache.clear();
        self
    }

    /// Set the post-merge filter and return the encoder.
    ///
    /// Clears the cache.
    pub fn with_filter(
        mut self,
        filter: Arc<dyn SubwordFilter>,
    ) -> Self {
        self.filter = filter;
        self.cache.clear();
        self
    }

    /// Get the merge codes.
    pub fn codes(&self) -> &Arc<CodeTable> {
        &self.codes
    }

    /// Get the vocabulary.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }

    /// Get the continuation marker.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Get the segmentation cache.
    pub fn cache(&self) -> &SegmentationCache {
        &self.cache
    }

    /// Encode one word deterministically, through the cache.
    ///
    /// Glossary isolation is not applied; see [`segment_word`](Self::segment_word).
    pub fn encode(
        &self,
        word: &str,
    ) -> Vec<String> {
        self.encode_with_mode(word, &mut MergeMode::Deterministic)
    }

    /// Encode one word with BPE-dropout; never cached.
    pub fn encode_with_dropout<R: RngCore>(
        &self,
        word: &str,
        rate: DropoutRate,
        rng: &mut R,
    ) -> Vec<String> {
        self.encode_with_mode(word, &mut MergeMode::dropout(rate, rng))
    }

    /// Encode one word in the given mode.
    ///
    /// ## Returns
    /// The subwords, without continuation markers; empty for an empty word.
    pub fn encode_with_mode(
        &self,
        word: &str,
        mode: &mut MergeMode<'_>,
    ) -> Vec<String> {
        match mode {
            MergeMode::Deterministic => {
                if let Some(subwords) = self.cache.get(word) {
                    return subwords;
                }
                let subwords = self.merge(word, || true);
                if !word.is_empty() {
                    self.cache.insert(word, subwords.clone());
                }
                subwords
            }
            MergeMode::Dropout { rate, rng } => {
                let keep_probability = rate.keep_probability();
                self.merge(word, || rng.random_bool(keep_probability))
            }
        }
    }

    fn merge<F>(
        &self,
        word: &str,
        keep: F,
    ) -> Vec<String>
    where
        F: FnMut() -> bool,
    {
        let subwords = greedy_merge(&self.codes, word, keep);
        self.filter.filter(&self.codes, &self.separator, subwords)
    }

    /// Segment one whitespace-free token: isolate, then encode each piece.
    ///
    /// ## Returns
    /// The subwords, without continuation markers.
    pub fn segment_word(
        &self,
        token: &str,
        mode: &mut MergeMode<'_>,
    ) -> Vec<String> {
        let mut subwords = Vec::new();
        for piece in self.isolator.isolate(token) {
            match piece {
                WordPiece::Atomic(s) => subwords.push(s.to_string()),
                WordPiece::Mergeable(s) => subwords.extend(self.encode_with_mode(s, mode)),
            }
        }
        subwords
    }

    /// Segment a sequence of tokens.
    ///
    /// Every subword but the last of each token carries the separator.
    /// Tokens which produce no subwords contribute nothing.
    pub fn segment_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
        mode: &mut MergeMode<'_>,
    ) -> Vec<String> {
        let mut output = Vec::with_capacity(tokens.len());
        for token in tokens {
            let subwords = self.segment_word(token.as_ref(), mode);
            let Some((last, init)) = subwords.split_last() else {
                continue;
            };
            for subword in init {
                let mut marked = String::with_capacity(subword.len() + self.separator.len());
                marked.push_str(subword);
                marked.push_str(&self.separator);
                output.push(marked);
            }
            output.push(last.clone());
        }
        output
    }

    /// Segment a line deterministically.
    ///
    /// Leading and trailing runs of spaces, carriage returns and newlines
    /// are preserved; interior whitespace collapses to single spaces.
    pub fn process_line(
        &self,
        line: &str,
    ) -> String {
        self.process_line_with_mode(line, &mut MergeMode::Deterministic)
    }

    /// Segment a line with BPE-dropout.
    pub fn process_line_with_dropout<R: RngCore>(
        &self,
        line: &str,
        rate: DropoutRate,
        rng: &mut R,
    ) -> String {
        self.process_line_with_mode(line, &mut MergeMode::dropout(rate, rng))
    }

    /// Segment a line with a raw dropout probability.
    ///
    /// A zero `dropout` is deterministic; otherwise draws come from the
    /// thread-local [`rand::rng`], and are not reproducible.
    ///
    /// ## Returns
    /// The segmented line, or [`InvalidDropout`](crate::WordsnipError::InvalidDropout).
    pub fn try_process_line(
        &self,
        line: &str,
        dropout: f64,
    ) -> WSResult<String> {
        let rate = DropoutRate::new(dropout)?;
        if rate.is_zero() {
            return Ok(self.process_line(line));
        }
        Ok(self.process_line_with_dropout(line, rate, &mut rand::rng()))
    }

    /// Segment a line in the given mode.
    pub fn process_line_with_mode(
        &self,
        line: &str,
        mode: &mut MergeMode<'_>,
    ) -> String {
        let body = line.trim_start_matches(EDGE_WHITESPACE);
        let leading = &line[..line.len() - body.len()];
        let trailing = &line[line.trim_end_matches(EDGE_WHITESPACE).len()..];

        let tokens: Vec<&str> = body.split_whitespace().collect();
        let segments = self.segment_tokens(&tokens, mode);

        let mut out = String::with_capacity(line.len() * 2);
        out.push_str(leading);
        out.push_str(&segments.join(" "));
        // An all-whitespace line is entirely leading whitespace.
        if !trailing.is_empty() && trailing.len() != line.len() {
            out.push_str(trailing);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::glossary::Glossary;

    fn static_is_send_sync_check<T: Send + Sync>(_: &T) {}

    fn test_encoder() -> SubwordEncoder {
        let codes = CodeTable::from_pairs([
            ("l", "o"),
            ("lo", "w"),
            ("e", "r</w>"),
            ("w", "er</w>"),
            ("h", "e"),
            ("l", "l"),
            ("ll", "o</w>"),
        ]);
        SubwordEncoder::new(codes, Vocabulary::default())
    }

    #[test]
    fn test_encode() {
        let encoder = test_encoder();
        static_is_send_sync_check(&encoder);

        assert_eq!(encoder.encode("low"), vec!["lo", "w"]);
        assert_eq!(encoder.encode("lower"), vec!["low", "er"]);
        assert_eq!(encoder.encode("hello"), vec!["he", "llo"]);
        assert_eq!(encoder.encode("x"), vec!["x"]);
        assert!(encoder.encode("").is_empty());
    }

    #[test]
    fn test_encode_populates_cache() {
        let encoder = test_encoder();
        assert!(encoder.cache().is_empty());

        let first = encoder.encode("lower");
        assert_eq!(encoder.cache().len(), 1);
        assert_eq!(encoder.cache().get("lower"), Some(first.clone()));

        assert_eq!(encoder.encode("lower"), first);
        assert_eq!(encoder.cache().len(), 1);

        encoder.encode("");
        assert_eq!(encoder.cache().len(), 1);
    }

    #[test]
    fn test_dropout_skips_cache() {
        let encoder = test_encoder();
        let mut rng = StdRng::seed_from_u64(42);
        let rate = DropoutRate::new(0.5).unwrap();

        for _ in 0..10 {
            let subwords = encoder.encode_with_dropout("lower", rate, &mut rng);
            assert_eq!(subwords.concat(), "lower");
        }
        assert!(encoder.cache().is_empty());
    }

    #[test]
    fn test_zero_dropout_is_cached() {
        let encoder = test_encoder();
        let mut rng = StdRng::seed_from_u64(42);

        let subwords = encoder.encode_with_dropout("lower", DropoutRate::ZERO, &mut rng);
        assert_eq!(subwords, vec!["low", "er"]);
        assert_eq!(encoder.cache().len(), 1);
    }

    #[test]
    fn test_segment_tokens() {
        let encoder = test_encoder();
        let mut mode = MergeMode::Deterministic;

        assert_eq!(
            encoder.segment_tokens(&["lower", "hello", "x"], &mut mode),
            vec!["low@@", "er", "he@@", "llo", "x"]
        );
        assert_eq!(
            encoder.segment_tokens(&["", "low", ""], &mut mode),
            vec!["lo@@", "w"]
        );
        assert!(
            encoder
                .segment_tokens::<&str>(&[], &mut mode)
                .is_empty()
        );
    }

    #[test]
    fn test_process_line() {
        let encoder = test_encoder();

        assert_eq!(encoder.process_line("low"), "lo@@ w");
        assert_eq!(encoder.process_line("lower hello"), "low@@ er he@@ llo");
        assert_eq!(encoder.process_line("  lower  hello  "), "  low@@ er he@@ llo  ");
        assert_eq!(encoder.process_line("\r\n lower\t\thello \n"), "\r\n low@@ er he@@ llo \n");
        assert_eq!(encoder.process_line("x\n"), "x\n");
    }

    #[test]
    fn test_degenerate_lines() {
        let encoder = test_encoder();

        assert_eq!(encoder.process_line(""), "");
        assert_eq!(encoder.process_line("   "), "   ");
        assert_eq!(encoder.process_line("\n"), "\n");
        assert_eq!(encoder.process_line(" \r\n"), " \r\n");
    }

    #[test]
    fn test_try_process_line() {
        let encoder = test_encoder();

        assert_eq!(encoder.try_process_line("lower", 0.0).unwrap(), "low@@ er");

        let line = encoder.try_process_line("lower hello", 0.3).unwrap();
        assert_eq!(line.replace("@@ ", "").replace(' ', ""), "lowerhello");

        assert!(encoder.try_process_line("lower", 1.0).is_err());
        assert!(encoder.try_process_line("lower", -0.5).is_err());
    }

    #[test]
    fn test_separator() {
        let encoder = test_encoder().with_separator("￭");
        assert_eq!(encoder.separator(), "￭");
        assert_eq!(encoder.process_line("lower"), "low￭ er");
    }

    #[test]
    fn test_separator_reaches_vocabulary_filter() {
        let vocab: Vocabulary = [("low##", 5), ("er", 3)].into_iter().collect();
        let encoder = EncoderOptions::default()
            .with_vocabulary_filter(true)
            .build(test_encoder().codes().clone(), vocab)
            .unwrap();
        assert_eq!(encoder.process_line("lower"), "l@@ o@@ w@@ er");

        let encoder = encoder.with_separator("##");
        assert_eq!(encoder.process_line("lower"), "low## er");
    }

    #[test]
    fn test_glossary_pieces_are_atomic() {
        let glossary = Glossary::new(["lower"]).unwrap();
        let encoder = test_encoder().with_isolator(Arc::new(glossary));

        assert_eq!(encoder.process_line("lower"), "lower");
        assert_eq!(encoder.process_line("hellolower"), "he@@ llo@@ lower");
        assert_eq!(encoder.process_line("lowerhello"), "lower@@ he@@ llo");
    }
}
