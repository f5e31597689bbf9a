//! # Error Types

use std::path::PathBuf;

/// Errors from wordsnip operations.
#[derive(Debug, thiserror::Error)]
pub enum WordsnipError {
    /// The codes file could not be opened or read.
    #[error("unable to load codes from {path:?}: {source}")]
    CodesLoad {
        /// The path of the codes file.
        path: PathBuf,

        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A codes line did not hold exactly two symbols.
    #[error("malformed codes line {line}: {content:?}")]
    MalformedCodesLine {
        /// The 1-based line number.
        line: usize,

        /// The offending line.
        content: String,
    },

    /// A vocabulary line was not `<token> <count>`.
    #[error("malformed vocabulary line {line}: {content:?}")]
    MalformedVocabularyLine {
        /// The 1-based line number.
        line: usize,

        /// The offending line.
        content: String,
    },

    /// Dropout rate was not finite, or not in ``[0, 1)``.
    #[error("dropout rate must be in [0, 1): {0}")]
    InvalidDropout(f64),

    /// The glossary matcher could not be built.
    #[error("glossary error: {0}")]
    Glossary(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for wordsnip operations.
pub type WSResult<T> = core::result::Result<T, WordsnipError>;
