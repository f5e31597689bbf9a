//! # Vocabulary File IO

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::{WSResult, WordsnipError},
    vocab::Vocabulary,
};

/// Load a [`Vocabulary`] from a vocabulary file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocabulary_path<P: AsRef<Path>>(path: P) -> WSResult<Vocabulary> {
    let reader = BufReader::new(File::open(path)?);
    read_vocabulary(reader)
}

/// Load a [`Vocabulary`], falling back to an empty one.
///
/// Vocabularies are optional; a missing, unreadable, or malformed file
/// is logged as a warning rather than failing the caller.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocabulary_or_empty<P: AsRef<Path>>(path: P) -> Vocabulary {
    let path = path.as_ref();
    match load_vocabulary_path(path) {
        Ok(vocab) => {
            log::debug!(
                "Loaded {} vocabulary entries from {}",
                vocab.len(),
                path.display()
            );
            vocab
        }
        Err(err) => {
            log::warn!(
                "Ignoring vocabulary {}: {err}; using an empty vocabulary",
                path.display()
            );
            Vocabulary::default()
        }
    }
}

/// Read a [`Vocabulary`] from a vocabulary line reader.
///
/// Lines are:
/// ```terminaloutput
/// {TOKEN} {COUNT}
/// ```
///
/// Blank lines are skipped.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_vocabulary<R: BufRead>(reader: R) -> WSResult<Vocabulary> {
    let mut vocab = Vocabulary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let malformed = || WordsnipError::MalformedVocabularyLine {
            line: idx + 1,
            content: line.clone(),
        };

        let mut parts = line.split_whitespace();
        let (token, count) = match (parts.next(), parts.next(), parts.next()) {
            (None, ..) => continue,
            (Some(token), Some(count), None) => (token, count),
            _ => return Err(malformed()),
        };
        let count: u64 = count.parse().map_err(|_| malformed())?;

        vocab.insert(token, count);
    }

    Ok(vocab)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_vocabulary() {
        let vocab = read_vocabulary("lo@@ 12\nw 3\n\ner 1\r\n".as_bytes()).unwrap();

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.count("lo@@"), Some(12));
        assert_eq!(vocab.count("w"), Some(3));
        assert_eq!(vocab.count("er"), Some(1));
    }

    #[test]
    fn test_malformed_vocabulary() {
        for (source, bad_line) in [("lo 1\nw\n", 2), ("lo one\n", 1), ("lo 1 2\n", 1)] {
            match read_vocabulary(source.as_bytes()) {
                Err(WordsnipError::MalformedVocabularyLine { line, .. }) => {
                    assert_eq!(line, bad_line)
                }
                other => panic!("expected a malformed line error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_load_or_empty() {
        let dir = tempdir::TempDir::new("vocab_test").unwrap();

        let missing = dir.path().join("missing.txt");
        assert!(load_vocabulary_or_empty(&missing).is_empty());

        let malformed = dir.path().join("malformed.txt");
        File::create(&malformed)
            .and_then(|mut f| f.write_all(b"low\n"))
            .unwrap();
        assert!(load_vocabulary_or_empty(&malformed).is_empty());

        let good = dir.path().join("vocab.txt");
        File::create(&good)
            .and_then(|mut f| f.write_all(b"low 4\nest 2\n"))
            .unwrap();
        let vocab = load_vocabulary_or_empty(&good);
        assert_eq!(vocab.count("low"), Some(4));
        assert_eq!(vocab.count("est"), Some(2));
    }
}
