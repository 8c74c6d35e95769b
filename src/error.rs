//! Error types for the game core and word lists

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::game::Outcome;

/// A string that cannot be used as a five-letter word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("word must contain only ASCII letters")]
    NonAscii,

    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Errors produced by rounds, sessions and word lists.
#[derive(Debug, Error)]
pub enum GameError {
    /// The guess is not five letters a-z. The round is left untouched.
    #[error("invalid guess")]
    InvalidGuess(#[from] WordError),

    /// A guess was submitted after the round reached a terminal outcome.
    #[error("the round is already over ({0})")]
    RoundOver(Outcome),

    /// An in-progress round had no active attempt.
    #[error("no attempt is active")]
    NoActiveAttempt,

    /// There is no word to choose a secret from.
    #[error("the word list is empty")]
    EmptyWordList,

    #[error("word list entry {line} ({word:?}) is not a valid five-letter word")]
    MalformedWordList {
        line: usize,
        word: String,
        #[source]
        source: WordError,
    },

    #[error("could not read word list {}", path.display())]
    WordListIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
