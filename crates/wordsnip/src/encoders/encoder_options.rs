//! Subword Encoder Options
//!
//! Options for building a [`SubwordEncoder`].

use std::{path::Path, sync::Arc};

use crate::{
    codes::{CodeTable, load_codes_path},
    encoders::{DEFAULT_CACHE_MAX_ENTRIES, SubwordEncoder},
    errors::WSResult,
    glossary::{Glossary, NoIsolation, WordIsolator},
    types::DEFAULT_SEPARATOR,
    vocab::{NoFilter, SubwordFilter, Vocabulary, VocabularySplitter, load_vocabulary_or_empty},
};

/// Options for configuring a [`SubwordEncoder`].
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderOptions {
    /// The continuation marker appended to non-final subwords.
    pub separator: String,

    /// Literal strings which are never split.
    pub glossaries: Vec<String>,

    /// Minimum vocabulary count for a subword to count as known.
    pub vocabulary_threshold: Option<u64>,

    /// Should subwords missing from the vocabulary be re-split?
    ///
    /// Has no effect with an empty vocabulary.
    pub vocabulary_filter: bool,

    /// The cache size which, once exceeded, clears the cache.
    pub cache_max_entries: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            glossaries: Vec::new(),
            vocabulary_threshold: None,
            vocabulary_filter: false,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

impl EncoderOptions {
    /// Get the continuation marker.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Set the continuation marker.
    pub fn set_separator<S: Into<String>>(
        &mut self,
        separator: S,
    ) {
        self.separator = separator.into();
    }

    /// Set the continuation marker and return the options.
    pub fn with_separator<S: Into<String>>(
        mut self,
        separator: S,
    ) -> Self {
        self.set_separator(separator);
        self
    }

    /// Get the glossary entries.
    pub fn glossaries(&self) -> &[String] {
        &self.glossaries
    }

    /// Set the glossary entries.
    pub fn set_glossaries<I, S>(
        &mut self,
        glossaries: I,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.glossaries = glossaries.into_iter().map(Into::into).collect();
    }

    /// Set the glossary entries and return the options.
    pub fn with_glossaries<I, S>(
        mut self,
        glossaries: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_glossaries(glossaries);
        self
    }

    /// Get the vocabulary threshold.
    pub fn vocabulary_threshold(&self) -> Option<u64> {
        self.vocabulary_threshold
    }

    /// Set the vocabulary threshold.
    pub fn set_vocabulary_threshold(
        &mut self,
        threshold: Option<u64>,
    ) {
        self.vocabulary_threshold = threshold;
    }

    /// Set the vocabulary threshold and return the options.
    pub fn with_vocabulary_threshold(
        mut self,
        threshold: Option<u64>,
    ) -> Self {
        self.set_vocabulary_threshold(threshold);
        self
    }

    /// Is vocabulary re-splitting enabled?
    pub fn vocabulary_filter(&self) -> bool {
        self.vocabulary_filter
    }

    /// Enable or disable vocabulary re-splitting.
    pub fn set_vocabulary_filter(
        &mut self,
        vocabulary_filter: bool,
    ) {
        self.vocabulary_filter = vocabulary_filter;
    }

    /// Enable or disable vocabulary re-splitting and return the options.
    pub fn with_vocabulary_filter(
        mut self,
        vocabulary_filter: bool,
    ) -> Self {
        self.set_vocabulary_filter(vocabulary_filter);
        self
    }

    /// Get the cache clear threshold.
    pub fn cache_max_entries(&self) -> usize {
        self.cache_max_entries
    }

    /// Set the cache clear threshold.
    pub fn set_cache_max_entries(
        &mut self,
        cache_max_entries: usize,
    ) {
        self.cache_max_entries = cache_max_entries;
    }

    /// Set the cache clear threshold and return the options.
    pub fn with_cache_max_entries(
        mut self,
        cache_max_entries: usize,
    ) -> Self {
        self.set_cache_max_entries(cache_max_entries);
        self
    }

    /// Load codes and an optional vocabulary, and build a [`SubwordEncoder`].
    ///
    /// The codes are mandatory; the vocabulary is best-effort, see
    /// [`load_vocabulary_or_empty`].
    ///
    /// ## Arguments
    /// * `codes_path` - the codes file.
    /// * `vocab_path` - the optional vocabulary file.
    pub fn load<P: AsRef<Path>>(
        &self,
        codes_path: P,
        vocab_path: Option<&Path>,
    ) -> WSResult<SubwordEncoder> {
        let codes = load_codes_path(codes_path)?;
        let vocab = vocab_path
            .map(load_vocabulary_or_empty)
            .unwrap_or_default();
        self.build(codes, vocab)
    }

    /// Build a [`SubwordEncoder`].
    ///
    /// ## Arguments
    /// * `codes` - the merge codes.
    /// * `vocab` - the vocabulary; may be empty.
    pub fn build<C>(
        &self,
        codes: C,
        mut vocab: Vocabulary,
    ) -> WSResult<SubwordEncoder>
    where
        C: Into<Arc<CodeTable>>,
    {
        if self.vocabulary_threshold.is_some() {
            vocab.set_threshold(self.vocabulary_threshold);
        }

        let isolator: Arc<dyn WordIsolator> = if self.glossaries.is_empty() {
            Arc::new(NoIsolation)
        } else {
            Arc::new(Glossary::new(self.glossaries.iter().cloned())?)
        };

        let filter: Arc<dyn SubwordFilter> = match (self.vocabulary_filter, vocab.is_empty()) {
            (true, false) => Arc::new(VocabularySplitter::new(vocab.clone())),
            (true, true) => {
                log::warn!("Vocabulary filter requested with an empty vocabulary; disabled");
                Arc::new(NoFilter)
            }
            (false, _) => Arc::new(NoFilter),
        };

        Ok(SubwordEncoder::new(codes, vocab)
            .with_separator(self.separator.clone())
            .with_cache_max_entries(self.cache_max_entries)
            .with_isolator(isolator)
            .with_filter(filter))
    }
}
