//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KEYBOARD_ROWS, KeyboardState, LetterState, MAX_ATTEMPTS, Verdict, WORD_LENGTH};
use crate::output::formatters::streak_flames;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const DARK_ORANGE: Color = Color::Rgb(255, 140, 0);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board and messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, &app.session.keyboard(), chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let streak = app.session.streak();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Wriddle 🎉",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Win Streak: "),
        Span::styled(
            streak.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(streak_flames(streak)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => DARK_ORANGE,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn letter_style(state: LetterState) -> Style {
    state.verdict().map_or_else(
        || Style::default().fg(Color::Black).bg(Color::Gray),
        verdict_style,
    )
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

/// Six rows: scored guesses, then the word being typed, then blanks
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let history = app.session.round().history();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS);

    for guess in history {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (letter, verdict) in guess.letters() {
            spans.push(tile(char::from(letter), verdict_style(verdict)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let empty = Style::default().fg(Color::White).bg(Color::Black);
    if app.input_mode == InputMode::Playing && lines.len() < MAX_ATTEMPTS {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans = (0..WORD_LENGTH)
            .flat_map(|i| {
                let letter = typed.get(i).copied().unwrap_or(' ');
                [tile(letter, empty), Span::raw(" ")]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_ATTEMPTS {
        let spans = (0..WORD_LENGTH)
            .flat_map(|_| [tile(' ', empty), Span::raw(" ")])
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    [
                        tile(char::from(letter), letter_style(keyboard.get(letter))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(widget, area);
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
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Press 'n' for a new word or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Playing => (
            " Your guess | Enter to submit, Backspace to edit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let round = app.session.round();
    let attempts_text = format!(
        "Guess {}/{MAX_ATTEMPTS} | Rule: {}",
        (round.history().len() + 1).min(MAX_ATTEMPTS),
        round.rule()
    );
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Playing => "Esc: Quit | Enter: Submit",
        InputMode::RoundOver => "q: Quit | n: New Word",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_letters_use_neutral_style() {
        let style = letter_style(LetterState::Unknown);
        assert_eq!(style.bg, Some(Color::Gray));
        assert_eq!(letter_style(LetterState::Present).bg, Some(DARK_ORANGE));
        assert_eq!(letter_style(LetterState::Correct).bg, Some(Color::Green));
    }
}
