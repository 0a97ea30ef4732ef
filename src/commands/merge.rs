//! Offline word-list preprocessing
//!
//! Combines the answer list and the extra-guess list into a single sorted,
//! de-duplicated list of every accepted guess.

use crate::core::Word;
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Union of both lists, sorted and without duplicates
#[must_use]
pub fn merge_lists(answers: &[Word], guesses: &[Word]) -> Vec<Word> {
    let mut merged: Vec<Word> = answers.iter().chain(guesses).cloned().collect();
    merged.sort_unstable();
    merged.dedup();
    merged
}

/// Write one word per line
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_words<W: Write>(out: &mut W, words: &[Word]) -> io::Result<()> {
    for word in words {
        writeln!(out, "{word}")?;
    }
    out.flush()
}

/// Merge two word-list files into `output`, or stdout when `output` is `None`
///
/// Returns the number of words written.
///
/// # Errors
///
/// Returns an error if either input fails to load or the output cannot be
/// written.
pub fn run_merge(answers_path: &Path, guesses_path: &Path, output: Option<&Path>) -> Result<usize> {
    let answers = load_from_file(answers_path)?;
    let guesses = load_from_file(guesses_path)?;
    let merged = merge_lists(&answers, &guesses);

    log::info!(
        "merged {} answers and {} guesses into {} words",
        answers.len(),
        guesses.len(),
        merged.len()
    );

    match output {
        Some(path) => {
            let mut file = io::BufWriter::new(
                fs::File::create(path)
                    .with_context(|| format!("cannot create {}", path.display()))?,
            );
            write_words(&mut file, &merged)
                .with_context(|| format!("cannot write {}", path.display()))?;
        }
        None => write_words(&mut io::stdout().lock(), &merged)?,
    }

    Ok(merged.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn merge_sorts_and_dedups() {
        let merged = merge_lists(
            &words(&["slate", "crane", "level"]),
            &words(&["aahed", "CRANE", "zonal"]),
        );
        let texts: Vec<&str> = merged.iter().map(Word::text).collect();

        assert_eq!(texts, vec!["aahed", "crane", "level", "slate", "zonal"]);
    }

    #[test]
    fn write_words_one_per_line() {
        let mut out = Vec::new();
        write_words(&mut out, &words(&["crane", "slate"])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "crane\nslate\n");
    }

    #[test]
    fn run_merge_round_trip_through_files() {
        let dir = std::env::temp_dir();
        let tag = std::process::id();
        let answers = dir.join(format!("wordle_game_merge_{tag}_answers.txt"));
        let guesses = dir.join(format!("wordle_game_merge_{tag}_guesses.txt"));
        let output = dir.join(format!("wordle_game_merge_{tag}_out.txt"));
        fs::write(&answers, "slate\ncrane\n").unwrap();
        fs::write(&guesses, "crane\naahed\n").unwrap();

        let count = run_merge(&answers, &guesses, Some(&output)).unwrap();
        let written = fs::read_to_string(&output).unwrap();

        for path in [&answers, &guesses, &output] {
            fs::remove_file(path).unwrap();
        }
        assert_eq!(count, 3);
        assert_eq!(written, "aahed\ncrane\nslate\n");
    }

    #[test]
    fn run_merge_missing_input() {
        let missing = Path::new("/definitely/not/here.txt");
        assert!(run_merge(missing, missing, None).is_err());
    }
}
