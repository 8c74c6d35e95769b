//! Wordle - CLI
//!
//! Play a five-letter word-guessing game in the terminal, either in the
//! full-screen TUI or line by line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use wordle_round::{
    commands::run_simple,
    game::Session,
    interactive::{App, run_tui},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for choosing secret words, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,
}

fn load_words(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list from {}", path.display())),
        None => WordList::embedded().context("built-in word list is invalid"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let words = load_words(cli.words.as_deref())?;
    info!("using {} candidate words", words.len());

    let mut session = match cli.seed {
        Some(seed) => Session::from_seed(words, seed),
        None => Session::from_os_rng(words),
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_simple(&mut session).context("simple mode failed"),
    }
}
