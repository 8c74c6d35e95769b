//! Wordle Round
//!
//! A five-letter word-guessing game: six attempts, per-letter color feedback,
//! win or lose.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_round::game::{Outcome, Session};
//! use wordle_round::wordlists::WordList;
//!
//! let words = WordList::embedded()?;
//! let mut session = Session::from_seed(words, 2024);
//!
//! let snapshot = session.submit("crane")?;
//! let first = &snapshot.attempts[0];
//! println!("{}", first.feedback().unwrap().to_emoji());
//!
//! if snapshot.outcome == Outcome::InProgress {
//!     assert_eq!(snapshot.active().unwrap().position(), 2);
//! }
//! # Ok::<_, wordle_round::GameError>(())
//! ```

// Core domain types
pub mod core;

// Round state machine and sessions
pub mod game;

// Word lists
pub mod wordlists;

// Error types
pub mod error;

// Keystroke handling for front-ends
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{GameError, Result, WordError};
