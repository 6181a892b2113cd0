//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::messages::{GAME_LOST, GAME_WON, reveal_answer};
use crate::game::{RoundStatus, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    RoundOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.add_message(
            "Guess the five-letter word in six tries. Type and press Enter.",
            MessageStyle::Info,
        );
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LENGTH {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }

    /// Submit the typed word; rejected words stay in the buffer for editing
    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit(&input) {
            Ok(submission) => {
                self.input_buffer.clear();
                match submission.status {
                    RoundStatus::InProgress => {}
                    RoundStatus::Won => {
                        if let Some(message) = submission.victory_message {
                            self.add_message(&message, MessageStyle::Success);
                        }
                        self.add_message(GAME_WON, MessageStyle::Success);
                        self.end_round();
                    }
                    RoundStatus::Lost => {
                        let answer = reveal_answer(self.session.round().answer().text());
                        self.add_message(GAME_LOST, MessageStyle::Error);
                        self.add_message(&answer, MessageStyle::Info);
                        self.end_round();
                    }
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn end_round(&mut self) {
        self.input_mode = InputMode::RoundOver;
        self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.messages.clear();
        self.input_buffer.clear();
        match self.session.new_round() {
            Ok(()) => {
                self.input_mode = InputMode::Playing;
                self.add_message("New word chosen. Good luck!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
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
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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
    use crate::core::{ScoringRule, Word};
    use crate::dictionary::WordList;
    use crate::storage::MemoryStreakStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &["crane", "trace", "slate", "audio", "pizza", "fjord", "brick"];

    fn words() -> Vec<Word> {
        WORDS.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn app<'a>(answers: &'a [Word], dictionary: &'a WordList) -> App<'a> {
        let mut session = Session::new(
            answers,
            dictionary,
            Box::new(MemoryStreakStore::default()),
            ScoringRule::Standard,
            StdRng::seed_from_u64(7),
        )
        .unwrap();
        session.new_round_with(Word::new("crane").unwrap()).unwrap();
        App::new(session)
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<'_>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_capped_and_lowercased() {
        let answers = words();
        let dictionary = WordList::new(&answers);
        let mut app = app(&answers, &dictionary);

        for c in "CRANES".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.input_buffer, "crane");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "cran");
    }

    #[test]
    fn accepted_guess_clears_buffer() {
        let answers = words();
        let dictionary = WordList::new(&answers);
        let mut app = app(&answers, &dictionary);

        type_word(&mut app, "trace");
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.round().history().len(), 1);
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn unknown_word_is_kept_for_editing() {
        let answers = words();
        let dictionary = WordList::new(&answers);
        let mut app = app(&answers, &dictionary);

        type_word(&mut app, "zzzzz");
        assert_eq!(app.input_buffer, "zzzzz");
        assert!(app.session.round().history().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Sorry, zzzzz is not a word");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn short_word_is_rejected() {
        let answers = words();
        let dictionary = WordList::new(&answers);
        let mut app = app(&answers, &dictionary);

        type_word(&mut app, "cran");
        assert!(app.session.round().history().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn win_then_new_game() {
        let answers = words();
        let dictionary = WordList::new(&answers);
        let mut app = app(&answers, &dictionary);

        type_word(&mut app, "crane");
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.messages.iter().any(|m| m.text == GAME_WON));
        assert_eq!(app.session.streak(), 1);

        // letters are ignored until a new round starts
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(app.session.round().history().is_empty());
        assert_eq!(app.session.streak(), 1);
    }

    #[test]
    fn loss_reveals_answer() {
        let answers = words();
        let dictionary = WordList::new(&answers);
        let mut app = app(&answers, &dictionary);

        for guess in ["trace", "slate", "audio", "pizza", "fjord", "brick"] {
            type_word(&mut app, guess);
        }
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.messages.iter().any(|m| m.text == "The word was 'crane'."));
    }

    #[test]
    fn messages_are_capped() {
        let answers = words();
        let dictionary = WordList::new(&answers);
        let mut app = app(&answers, &dictionary);

        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "m5");
    }

    #[test]
    fn quit_keys() {
        let answers = words();
        let dictionary = WordList::new(&answers);

        let mut app1 = app(&answers, &dictionary);
        press(&mut app1, KeyCode::Esc);
        assert!(app1.should_quit);

        let mut app2 = app(&answers, &dictionary);
        app2.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);

        // 'q' is a letter while playing
        let mut app3 = app(&answers, &dictionary);
        press(&mut app3, KeyCode::Char('q'));
        assert!(!app3.should_quit);
        assert_eq!(app3.input_buffer, "q");
    }
}
