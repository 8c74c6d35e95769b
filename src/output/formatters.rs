//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Feedback, Label, WORD_LENGTH, Word};
use crate::game::{Attempt, Outcome, RoundSnapshot};

/// Format one letter as a colored tile, e.g. ` A ` on green
#[must_use]
pub fn tile(letter: u8, label: Label) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match label {
        Label::Green => text.black().bold().on_green(),
        Label::Yellow => text.black().bold().on_yellow(),
        Label::Gray => text.white().bold().on_bright_black(),
    }
}

/// Format a submitted guess as a row of colored tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.labels())
        .map(|(&letter, &label)| tile(letter, label).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an attempt that has no guess yet
#[must_use]
pub fn empty_row(active: bool) -> String {
    let cell = if active { " _ " } else { " · " };
    let row = vec![cell; WORD_LENGTH].join(" ");
    if active {
        row.bright_white().to_string()
    } else {
        row.bright_black().to_string()
    }
}

/// Format any attempt as a row
#[must_use]
pub fn attempt_row(attempt: &Attempt) -> String {
    match (attempt.guess(), attempt.feedback()) {
        (Some(guess), Some(feedback)) => feedback_row(guess, feedback),
        _ => empty_row(attempt.is_active()),
    }
}

/// Emoji grid of the submitted attempts, one line per guess
#[must_use]
pub fn emoji_grid(snapshot: &RoundSnapshot) -> String {
    snapshot
        .submitted()
        .filter_map(Attempt::feedback)
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Message describing how the round ended, `None` while it is in progress
#[must_use]
pub fn outcome_message(snapshot: &RoundSnapshot) -> Option<String> {
    match snapshot.outcome {
        Outcome::InProgress => None,
        Outcome::Won => {
            let turns = snapshot.submitted().count();
            let cheer = match turns {
                1 => "Hole in one!",
                2 => "Magnificent!",
                3 => "Splendid!",
                4 => "Great job!",
                5 => "Nice work!",
                _ => "Phew!",
            };
            let noun = if turns == 1 { "guess" } else { "guesses" };
            Some(format!("{cheer} Solved in {turns} {noun}."))
        }
        Outcome::Lost => Some(match &snapshot.secret {
            Some(secret) => format!("The word was {}.", secret.text().to_uppercase()),
            None => "Out of guesses.".to_string(),
        }),
    }
}
