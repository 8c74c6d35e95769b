//! Candidate secret words
//!
//! The default list is embedded in the binary; a custom one can be loaded
//! from a file with [`loader::load_from_file`].

mod embedded;
pub mod loader;

use rand::Rng;
use rustc_hash::FxHashSet;

use crate::core::Word;
use crate::error::{GameError, Result};

pub use embedded::{ANSWERS, ANSWERS_COUNT};

/// A validated, non-empty list of distinct secret words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list, dropping repeated words (first occurrence wins)
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| seen.insert(w.text().to_owned()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        Ok(Self { words })
    }

    /// Build a list from strings, rejecting the whole list if any entry is
    /// not a five-letter word
    ///
    /// # Errors
    /// - `GameError::MalformedWordList` naming the first bad entry (1-based)
    /// - `GameError::EmptyWordList` if `entries` is empty
    ///
    /// # Examples
    /// ```
    /// use wordle_round::wordlists::WordList;
    ///
    /// let words = WordList::from_strs(&["apple", "crane"]).unwrap();
    /// assert_eq!(words.len(), 2);
    ///
    /// assert!(WordList::from_strs(&["apple", "pear"]).is_err());
    /// assert!(WordList::from_strs::<&str>(&[]).is_err());
    /// ```
    pub fn from_strs<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let words = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| parse_entry(i + 1, entry.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Self::new(words)
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    /// Only if the embedded data is broken; see `from_strs`.
    pub fn embedded() -> Result<Self> {
        Self::from_strs(ANSWERS)
    }

    /// Choose a word uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Never empty, so the range is never empty either.
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

pub(crate) fn parse_entry(line: usize, entry: &str) -> Result<Word> {
    Word::new(entry).map_err(|source| GameError::MalformedWordList {
        line,
        word: entry.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_loads() {
        let words = WordList::embedded().unwrap();
        assert_eq!(words.len(), ANSWERS_COUNT);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            WordList::new(Vec::new()),
            Err(GameError::EmptyWordList)
        ));
        assert!(matches!(
            WordList::from_strs::<String>(&[]),
            Err(GameError::EmptyWordList)
        ));
    }

    #[test]
    fn malformed_entry_is_reported() {
        let err = WordList::from_strs(&["apple", "crane", "sh0rt"]).unwrap_err();
        match err {
            GameError::MalformedWordList { line, word, source } => {
                assert_eq!(line, 3);
                assert_eq!(word, "sh0rt");
                assert_eq!(source, WordError::InvalidCharacters);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicates_are_dropped() {
        let words = WordList::from_strs(&["apple", "crane", "APPLE", "apple"]).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.words()[0].text(), "apple");
        assert_eq!(words.words()[1].text(), "crane");
    }

    #[test]
    fn pick_returns_members_and_covers_the_list() {
        let words = WordList::from_strs(&["apple", "crane", "moist"]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            let word = words.pick(&mut rng);
            assert!(words.contains(word));
            seen.insert(word.text().to_owned());
        }

        assert_eq!(seen.len(), 3);
    }
}
