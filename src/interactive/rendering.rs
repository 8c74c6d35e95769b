//! TUI rendering with ratatui
//!
//! Draws the six-row board, the message log and a help line.

use super::app::{App, MessageStyle};
use crate::core::{Label, WORD_LENGTH};
use crate::game::{Attempt, MAX_ATTEMPTS, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board
            Constraint::Length(7),  // Messages
            Constraint::Length(1),  // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn tile_style(label: Label) -> Style {
    let bg = match label {
        Label::Green => Color::Green,
        Label::Yellow => Color::Yellow,
        Label::Gray => Color::DarkGray,
    };
    let fg = if label == Label::Gray {
        Color::White
    } else {
        Color::Black
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

/// One board row: submitted tiles, the letters being typed, or empty cells
fn board_row(attempt: &Attempt, typed: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    match (attempt.guess(), attempt.feedback()) {
        (Some(guess), Some(feedback)) => {
            for (&letter, &label) in guess.chars().iter().zip(feedback.labels()) {
                spans.push(tile(char::from(letter), tile_style(label)));
                spans.push(Span::raw(" "));
            }
        }
        _ if attempt.is_active() => {
            let style = Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            let mut letters = typed.chars();
            for _ in 0..WORD_LENGTH {
                spans.push(tile(letters.next().unwrap_or(' '), style));
                spans.push(Span::raw(" "));
            }
        }
        _ => {
            let style = Style::default().fg(Color::DarkGray);
            for _ in 0..WORD_LENGTH {
                spans.push(tile('·', style));
                spans.push(Span::raw(" "));
            }
        }
    }

    spans.pop();
    Line::from(spans)
}

fn render_board<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for attempt in &app.snapshot.attempts {
        lines.push(board_row(attempt, app.input.as_str()));
        lines.push(Line::from(""));
    }

    if app.snapshot.outcome == Outcome::Won {
        lines.push(Line::styled(
            "✨ 🎉 ✨",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(secret) = &app.snapshot.secret {
        lines.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                secret.text().to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("."),
        ]));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Round {} ", app.session.rounds_started()))
            .borders(Borders::ALL),
    );

    f.render_widget(board, area);
}

fn render_messages<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let help_text = if app.snapshot.outcome.is_terminal() {
        "n: New word | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl-N: New word | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
