//! Word list loading utilities
//!
//! Parses line-oriented word lists. Unlike a lenient reader, every non-blank
//! line must be a valid word: a single bad entry fails the whole list.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {origin} contains no words")]
    Empty { origin: String },
    #[error("word list {origin}, line {line}: invalid entry '{entry}': {reason}")]
    InvalidEntry {
        origin: String,
        line: usize,
        entry: String,
        #[source]
        reason: WordError,
    },
}

/// Parse newline-separated words
///
/// Lines are trimmed and lowercased; blank lines are skipped. `origin` names
/// the list in error messages.
///
/// # Errors
///
/// Returns `LoadError::InvalidEntry` for the first line that is not a valid
/// word, or `LoadError::Empty` if no words were found.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n\nSLATE\n", "inline").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
///
/// assert!(parse_words("crane\ncranes\n", "inline").is_err());
/// ```
pub fn parse_words(content: &str, origin: &str) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|reason| LoadError::InvalidEntry {
            origin: origin.to_string(),
            line: index + 1,
            entry: trimmed.to_string(),
            reason,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(LoadError::Empty {
            origin: origin.to_string(),
        });
    }

    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise any error
/// from [`parse_words`].
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content, &path.display().to_string())?;
    log::debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Errors
///
/// Same contract as [`parse_words`].
pub fn words_from_slice(slice: &[&str], origin: &str) -> Result<Vec<Word>, LoadError> {
    parse_words(&slice.join("\n"), origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_game_loader_{}_{name}",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parse_words_normalizes_and_skips_blank_lines() {
        let words = parse_words("  Crane \n\n\tslate\r\nIRATE\n", "test").unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn parse_words_rejects_wrong_length_with_line_number() {
        let err = parse_words("crane\nslate\ntoolong\n", "test").unwrap_err();

        match err {
            LoadError::InvalidEntry {
                line, entry, reason, ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(entry, "toolong");
                assert_eq!(reason, WordError::InvalidLength(7));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_words_rejects_non_alphabetic() {
        assert!(matches!(
            parse_words("cr4ne", "test"),
            Err(LoadError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn parse_words_empty_input() {
        assert!(matches!(parse_words("", "test"), Err(LoadError::Empty { .. })));
        assert!(matches!(
            parse_words("\n  \n", "test"),
            Err(LoadError::Empty { .. })
        ));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_file("ok.txt", "crane\nslate\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_file_missing() {
        let err = load_from_file("/definitely/not/here/answers.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("answers.txt"));
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], "slice").unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_rejects_invalid() {
        assert!(words_from_slice(&["crane", "abc"], "slice").is_err());
        assert!(words_from_slice(&[], "slice").is_err());
    }
}
