//! Guess evaluation
//!
//! Scores every letter of a guess against the secret answer, crediting
//! repeated letters only as many times as they occur in the answer.

use super::{LetterStatus, WORD_SIZE, Word};
use std::fmt;

/// Feedback for a whole guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterStatus; WORD_SIZE]);

impl Evaluation {
    /// All letters in the right place
    pub const PERFECT: Self = Self([LetterStatus::Exact; WORD_SIZE]);

    /// Statuses in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_SIZE] {
        &self.0
    }

    /// Status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if every letter is `Exact`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Exact)
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Evaluation;
    ///
    /// let e: Evaluation = "GY-GY".parse().unwrap();
    /// assert_eq!(e.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(LetterStatus::emoji).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in self.iter() {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    /// Parse a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_SIZE {
            return Err(format!("Invalid evaluation string: {s}"));
        }

        let mut statuses = [LetterStatus::Absent; WORD_SIZE];
        for (slot, ch) in statuses.iter_mut().zip(chars) {
            *slot = LetterStatus::from_char(ch)
                .ok_or_else(|| format!("Invalid evaluation string: {s}"))?;
        }

        Ok(Self(statuses))
    }
}

/// Evaluate `guess` against the hidden `secret`
///
/// Follows Wordle's feedback rules, including duplicate letters.
///
/// # Algorithm
/// 1. Exact pass: mark every position-for-position match and remove it from
///    the secret's per-letter budget
/// 2. Presence pass: for each remaining position, mark `Present` while the
///    letter still has budget left, otherwise `Absent`
///
/// Exact matches are always credited before any `Present`, so a repeated
/// guess letter never steals the credit of an exact match further right.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, LetterStatus::*, evaluate};
///
/// let secret = Word::new("level").unwrap();
/// let guess = Word::new("evils").unwrap();
///
/// let result = evaluate(&secret, &guess);
/// assert_eq!(result.statuses(), &[Present, Present, Absent, Present, Absent]);
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Evaluation {
    let mut result = [LetterStatus::Absent; WORD_SIZE];
    let mut remaining = secret.char_counts();

    // First pass: exact position matches
    for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
        if g == s {
            result[i] = LetterStatus::Exact;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, bounded by what is left in the budget
    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == LetterStatus::Exact {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    Evaluation(result)
}
