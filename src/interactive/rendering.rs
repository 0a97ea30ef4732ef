//! TUI rendering with ratatui
//!
//! Board, keyboard hints, messages and status bar.

use super::app::{App, MessageStyle, Statistics};
use crate::core::{LetterStatus, WORD_SIZE};
use crate::game::{GameStatus, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Tile colors; `None` is a letter not yet scored
fn tile_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        None => base.fg(Color::White),
        Some(LetterStatus::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        Some(LetterStatus::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Exact) => base.fg(Color::Black).bg(Color::Green),
    }
}

fn tile(letter: char, status: Option<LetterStatus>) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), tile_style(status))
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_distribution(f, &app.stats, side_chunks[1]);
    render_messages(f, app, side_chunks[2]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let spans: Vec<Span> = if let Some(turn) = board.get(row) {
            turn.guess
                .chars()
                .iter()
                .zip(turn.evaluation.iter())
                .flat_map(|(&letter, status)| [tile(letter as char, Some(status)), Span::raw(" ")])
                .collect()
        } else if row == board.len() && !app.session.is_over() {
            // Row being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..WORD_SIZE)
                .flat_map(|i| {
                    let letter = typed.get(i).copied().unwrap_or('_');
                    [tile(letter, None), Span::raw(" ")]
                })
                .collect()
        } else {
            (0..WORD_SIZE)
                .flat_map(|_| [tile('·', None), Span::raw(" ")])
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.letter_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.bytes()
                    .map(|letter| tile(letter as char, hints.get(&letter).copied()))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.session.status() {
        GameStatus::Won => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        GameStatus::Lost => (
            " Out of guesses | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
        ),
        GameStatus::Running => (
            " Type a 5 letter word | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

/// "1:0  2:3  ..." wins per number of guesses
fn distribution_text(stats: &Statistics) -> String {
    (1..=MAX_ATTEMPTS)
        .map(|guesses| format!("{guesses}:{}", stats.guess_distribution[guesses]))
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_distribution(f: &mut Frame, stats: &Statistics, area: Rect) {
    let distribution = Paragraph::new(distribution_text(stats))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Wins by guess")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(distribution, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let attempts = Paragraph::new(format!(
        "Guess {}/{MAX_ATTEMPTS}",
        app.session.attempts().min(MAX_ATTEMPTS - 1) + 1
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.is_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
