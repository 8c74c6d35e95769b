//! TUI application state and logic

use crate::game::{Outcome, RoundSnapshot, Session};
use crate::input::GuessInput;
use crate::output::formatters::outcome_message;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::error;
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R = StdRng> {
    pub session: Session<R>,
    pub snapshot: RoundSnapshot,
    pub input: GuessInput,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>) -> Self {
        let snapshot = session.snapshot();

        Self {
            session,
            snapshot,
            input: GuessInput::new(),
            messages: vec![Message {
                text: "Type a five-letter word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// React to a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if self.snapshot.outcome.is_terminal() => match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Submit the typed guess if it is complete
    pub fn submit(&mut self) {
        let Some(guess) = self.input.take_complete() else {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        };

        match self.session.submit(&guess) {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                if let Some(text) = outcome_message(&self.snapshot) {
                    let style = match self.snapshot.outcome {
                        Outcome::Won => MessageStyle::Success,
                        _ => MessageStyle::Error,
                    };
                    self.add_message(&text, style);
                    self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
                }
            }
            Err(e) => {
                self.add_message(&format!("{e}"), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.snapshot = self.session.reset();
        self.input.clear();
        self.messages.clear();
        self.add_message("New word chosen. Good luck!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("tui exited with error: {err:#}");
    }

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;

    fn new_app() -> App {
        let words = WordList::from_strs(&["apple"]).unwrap();
        App::new(Session::from_seed(words, 0))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_fills_input_up_to_five_letters() {
        let mut app = new_app();
        for c in "crane!s".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input.as_str(), "crane");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input.as_str(), "cran");
    }

    #[test]
    fn enter_with_short_input_submits_nothing() {
        let mut app = new_app();
        type_word(&mut app, "cra");

        assert_eq!(app.snapshot.submitted().count(), 0);
        assert_eq!(app.input.as_str(), "cra");
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn winning_round_then_new_game() {
        let mut app = new_app();
        type_word(&mut app, "crane");
        type_word(&mut app, "apple");

        assert_eq!(app.snapshot.outcome, Outcome::Won);
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Success));

        // Letters are ignored once the round is over.
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.snapshot.outcome, Outcome::InProgress);
        assert_eq!(app.snapshot.submitted().count(), 0);
    }

    #[test]
    fn losing_round_reveals_word() {
        let mut app = new_app();
        for word in ["crane", "moist", "dough", "bunky", "fjord", "waltz"] {
            type_word(&mut app, word);
        }

        assert_eq!(app.snapshot.outcome, Outcome::Lost);
        assert!(app.messages.iter().any(|m| m.text == "The word was APPLE."));
    }

    #[test]
    fn ctrl_n_resets_mid_round() {
        let mut app = new_app();
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Char('m'));

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert_eq!(app.snapshot.submitted().count(), 0);
        assert!(app.input.is_empty());
        assert_eq!(app.session.rounds_started(), 2);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is a letter while the round is running");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
