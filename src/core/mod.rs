//! Core domain types
//!
//! Words and the feedback evaluator. Everything here is pure: no I/O, no
//! randomness, no mutable state.

mod feedback;
mod word;

pub use feedback::{Feedback, Label};
pub use word::{WORD_LENGTH, Word, WordError};
