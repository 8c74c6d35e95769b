//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is a guess or a command.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use rand::Rng;

use crate::game::{MAX_ATTEMPTS, Session};
use crate::output::{print_board, print_outcome};

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    NewRound,
    Quit,
}

impl Command {
    /// Interpret a trimmed input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewRound,
            other => Self::Guess(other.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> io::Result<()> {
    let stdin = io::stdin();
    play(session, &mut stdin.lock())
}

/// Play rounds, reading lines from `input` until it runs out or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn play<R: Rng, I: BufRead>(session: &mut Session<R>, input: &mut I) -> io::Result<()> {
    println!("\n╔════════════════════════════════════════╗");
    println!("║              W O R D L E               ║");
    println!("╚════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in {MAX_ATTEMPTS} tries.");
    println!("  {} right letter, right spot", "green ".black().on_green());
    println!("  {} right letter, wrong spot", "yellow".black().on_yellow());
    println!("  {} not in the word", "gray  ".white().on_bright_black());
    println!("Commands: 'new' for a new word, 'quit' to exit\n");

    print_board(&session.snapshot());

    loop {
        let snapshot = session.snapshot();

        let prompt = match snapshot.active() {
            Some(attempt) => format!("Guess {}/{MAX_ATTEMPTS}", attempt.position()),
            None => "Play again? (new/quit)".to_string(),
        };

        let Some(line) = read_line(input, &prompt)? else {
            println!();
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            Command::NewRound => {
                let snapshot = session.reset();
                println!("\nNew word chosen!");
                print_board(&snapshot);
            }
            Command::Guess(guess) if snapshot.outcome.is_terminal() => {
                println!("The round is over. Type 'new' for another word (not {guess:?}).\n");
            }
            Command::Guess(guess) => match session.submit(&guess) {
                Ok(snapshot) => {
                    print_board(&snapshot);
                    print_outcome(&snapshot);
                }
                Err(e) => {
                    let reason = std::error::Error::source(&e)
                        .map_or_else(|| e.to_string(), ToString::to_string);
                    println!("{} {reason}\n", "Not accepted:".red());
                }
            },
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead>(input: &mut I, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
