//! Printing rounds to the terminal

use colored::Colorize;

use super::formatters::{attempt_row, emoji_grid, outcome_message};
use crate::game::{MAX_ATTEMPTS, Outcome, RoundSnapshot};

/// Print the board: one row per attempt
pub fn print_board(snapshot: &RoundSnapshot) {
    println!();
    for attempt in &snapshot.attempts {
        println!("  {}", attempt_row(attempt));
    }
    println!();
}

/// Print the end-of-round banner, if the round is over
pub fn print_outcome(snapshot: &RoundSnapshot) {
    let Some(message) = outcome_message(snapshot) else {
        return;
    };

    println!("{}", "═".repeat(40).bright_cyan());
    match snapshot.outcome {
        Outcome::Won => println!("  {}", message.bright_green().bold()),
        _ => println!("  {}", message.bright_red().bold()),
    }

    let turns = snapshot.submitted().count();
    let score = if snapshot.outcome == Outcome::Won {
        turns.to_string()
    } else {
        "X".to_string()
    };
    println!("\n  {score}/{MAX_ATTEMPTS}");
    for line in emoji_grid(snapshot).lines() {
        println!("  {line}");
    }
    println!("{}", "═".repeat(40).bright_cyan());
}
