//! Per-letter feedback classification

/// Feedback for a single letter of a guess
///
/// Variants are ordered by how much they reveal: `Absent < Present < Exact`.
/// The ordering exists for display (e.g. keeping the best status seen for a
/// keyboard key) and carries no other meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Letter does not contribute any further match to the answer
    Absent,
    /// Letter is in the answer, but not at this position
    Present,
    /// Letter is in the answer at this position
    Exact,
}

impl LetterStatus {
    /// All statuses, least informative first
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Exact];

    /// Square emoji used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Exact => '🟩',
        }
    }

    /// Single-character code: `-` absent, `Y` present, `G` exact
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Exact => 'G',
        }
    }

    /// Parse a status from its code or emoji
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_by_informativeness() {
        assert!(LetterStatus::Absent < LetterStatus::Present);
        assert!(LetterStatus::Present < LetterStatus::Exact);
        assert_eq!(
            LetterStatus::ALL.iter().max(),
            Some(&LetterStatus::Exact)
        );
    }

    #[test]
    fn code_roundtrips_through_from_char() {
        for status in LetterStatus::ALL {
            assert_eq!(LetterStatus::from_char(status.code()), Some(status));
            assert_eq!(LetterStatus::from_char(status.emoji()), Some(status));
        }
        assert_eq!(LetterStatus::from_char('x'), None);
    }
}
