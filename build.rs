//! Compiles the built-in word lists into the binary
//!
//! `data/answers.txt` holds the words a game may pick as its secret and
//! `data/valid_guesses.txt` the extra words accepted only as guesses. Each
//! becomes a `&[&str]` const plus a `_COUNT` const under `OUT_DIR`. Entries are
//! checked here so a malformed list fails the build instead of the first game.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// (input file, generated file, const name, doc line)
const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Words that can be picked as the hidden answer",
    ),
    (
        "data/valid_guesses.txt",
        "valid_guesses.rs",
        "VALID_GUESSES",
        "Additional words accepted as guesses but never picked as answers",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    for (input, output, const_name, doc) in LISTS {
        let source = embed_list(input, const_name, doc);
        let path = Path::new(&out_dir).join(output);
        fs::write(&path, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
        println!("cargo:rerun-if-changed={input}");
    }
}

fn embed_list(input: &str, const_name: &str, doc: &str) -> String {
    let content =
        fs::read_to_string(input).unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));

    let mut words = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{input}:{}: '{word}' is not a five-letter lowercase word",
            index + 1
        );
        words.push(word);
    }

    let mut source = format!("/// {doc}\npub const {const_name}: &[&str] = &[\n");
    for word in &words {
        let _ = writeln!(source, "    \"{word}\",");
    }
    let _ = writeln!(source, "];\n");
    let _ = writeln!(source, "/// Number of words in {const_name}");
    let _ = writeln!(source, "pub const {const_name}_COUNT: usize = {};", words.len());
    source
}
