//! Per-letter feedback for a guess
//!
//! Each position of a guess is labelled:
//! - Green: same letter at the same position in the secret
//! - Yellow: letter occurs somewhere else in the secret
//! - Gray: letter does not occur in the secret
//!
//! Letter occurrences in the secret are never consumed. A letter that occurs
//! once in the secret marks every misplaced copy of it in the guess Yellow.

use std::fmt;
use std::str::FromStr;

use super::word::{WORD_LENGTH, Word};

/// Color label for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Green,
    Yellow,
    Gray,
}

impl Label {
    /// Emoji square for this label
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }

    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Gray => '-',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '⬜' => Some(Self::Gray),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        };
        f.write_str(name)
    }
}

/// Feedback for one guess: five labels in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Label; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([Label::Green; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(labels: [Label; WORD_LENGTH]) -> Self {
        Self(labels)
    }

    /// Label each letter of `guess` against `secret`
    ///
    /// Single pass, position by position. A misplaced letter is Yellow
    /// whenever the secret contains it at all, regardless of how many times
    /// it has already been matched.
    ///
    /// # Examples
    /// ```
    /// use wordle_round::core::{Feedback, Label::*, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("alert").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// assert_eq!(feedback.labels(), &[Green, Yellow, Yellow, Gray, Gray]);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut labels = [Label::Gray; WORD_LENGTH];

        for (i, (&letter, &expected)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            labels[i] = if letter == expected {
                Label::Green
            } else if secret.has_letter(letter) {
                Label::Yellow
            } else {
                Label::Gray
            };
        }

        Self(labels)
    }

    #[inline]
    #[must_use]
    pub const fn labels(&self) -> &[Label; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count how many positions carry `label`
    #[must_use]
    pub fn count(&self, label: Label) -> usize {
        self.0.iter().filter(|&&l| l == label).count()
    }

    /// Convert feedback to emoji string, e.g. "🟩🟨🟨⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|l| l.emoji()).collect()
    }
}

/// Parse feedback from a string like "GYY--" or "🟩🟨🟨⬜⬜"
///
/// Accepts:
/// - 'G'/'g'/🟩 for green
/// - 'Y'/'y'/🟨 for yellow
/// - '-'/'_'/⬜ for gray
impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let labels: Vec<Label> = s
            .chars()
            .map(Label::from_char)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        let labels: [Label; WORD_LENGTH] = labels
            .try_into()
            .map_err(|_| format!("Feedback must have {WORD_LENGTH} labels: {s}"))?;

        Ok(Self(labels))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.0 {
            write!(f, "{}", label.code())?;
        }
        Ok(())
    }
}
