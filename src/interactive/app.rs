//! TUI application state and logic

use crate::core::WORD_SIZE;
use crate::game::{GameSession, GameStatus, MAX_ATTEMPTS, TurnOutcome};
use crate::output::formatters::{capitalized, display_word};
use crate::wordlists::{EmptyPoolError, GuessRejection, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<'a> {
    pub source: &'a WordSource,
    pub session: GameSession<'a>,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub debug: bool,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 1..=6
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if `source` has no answers.
    pub fn new(
        source: &'a WordSource,
        mut rng: StdRng,
        debug: bool,
    ) -> Result<Self, EmptyPoolError> {
        let session = GameSession::start(source, &mut rng)?;

        let mut app = Self {
            source,
            session,
            rng,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            debug,
        };
        app.announce_game();
        Ok(app)
    }

    fn announce_game(&mut self) {
        self.add_message(
            &format!("Guess the hidden word in {MAX_ATTEMPTS} tries."),
            MessageStyle::Info,
        );
        if self.debug {
            let secret = self.session.secret().to_string();
            self.add_message(&format!("[debug] The answer is {secret}"), MessageStyle::Info);
        }
    }

    /// Start a fresh game with a new answer
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the answer pool is empty.
    pub fn new_game(&mut self) -> Result<(), EmptyPoolError> {
        self.session = GameSession::start(self.source, &mut self.rng)?;
        self.input_buffer.clear();
        self.messages.clear();
        self.announce_game();
        Ok(())
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < WORD_SIZE && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&raw) {
            TurnOutcome::Rejected(rejection) => {
                let text = match rejection {
                    GuessRejection::WrongLength(_) => "Word must be exactly 5 letters!".to_string(),
                    GuessRejection::NotInWordList(word) => {
                        format!("{} is not in the word list!", capitalized(&word))
                    }
                };
                self.add_message(&text, MessageStyle::Error);
                // Let the player fix a typo instead of retyping
                self.input_buffer = raw;
            }
            TurnOutcome::Accepted { status, .. } => self.finish_turn(status),
            TurnOutcome::GameOver(_) => {}
        }
    }

    fn finish_turn(&mut self, status: GameStatus) {
        match status {
            GameStatus::Running => {
                let left = self.session.remaining_attempts();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                    MessageStyle::Info,
                );
            }
            GameStatus::Won => {
                let guess_count = self.session.attempts();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.guess_distribution[guess_count] += 1;

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                let secret = display_word(self.session.secret());
                self.add_message(
                    &format!("You lost. The answer was {secret}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if a new game cannot pick an answer.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), EmptyPoolError> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        if self.session.is_over() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.push_char(c),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    log::info!(
        "leaving TUI: {} games, {} won",
        app.stats.total_games,
        app.stats.games_won
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rand::SeedableRng;

    fn source() -> WordSource {
        let answers = ["crane"];
        let guesses = ["slate", "level", "evils", "irate", "stare", "adieu"];
        WordSource::from_words(
            answers.iter().map(|w| Word::new(w).unwrap()).collect(),
            guesses.iter().map(|w| Word::new(w).unwrap()).collect(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        app.handle_key(key(KeyCode::Enter)).unwrap();
    }

    #[test]
    fn typing_is_limited_to_five_letters() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(0), false).unwrap();

        for c in "CR4ANES".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "crane");

        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.input_buffer, "cran");
    }

    #[test]
    fn rejected_guess_keeps_input_and_attempts() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(0), false).unwrap();

        type_word(&mut app, "abc");
        assert_eq!(app.session.attempts(), 0);
        assert_eq!(app.input_buffer, "abc");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn win_then_new_game() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(0), false).unwrap();

        type_word(&mut app, "slate");
        type_word(&mut app, "crane");

        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);

        // Letters are ignored once the game is over
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert!(app.input_buffer.is_empty());

        app.handle_key(key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.session.status(), GameStatus::Running);
        assert_eq!(app.session.attempts(), 0);
    }

    #[test]
    fn loss_is_counted() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(0), false).unwrap();

        for word in ["slate", "level", "evils", "irate", "stare", "adieu"] {
            type_word(&mut app, word);
        }

        assert_eq!(app.session.status(), GameStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The answer was Crane"))
        );
    }

    #[test]
    fn quit_keys() {
        let source = source();
        let mut app = App::new(&source, StdRng::seed_from_u64(0), false).unwrap();

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn debug_mode_shows_answer() {
        let source = source();
        let app = App::new(&source, StdRng::seed_from_u64(0), true).unwrap();
        assert!(app.messages.iter().any(|m| m.text.contains("crane")));
    }
}
