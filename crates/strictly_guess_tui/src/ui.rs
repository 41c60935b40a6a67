//! Stateless UI rendering, one screen per game level.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use strictly_guess::{DigitChoice, GameLevel, GameState};

use crate::app::App;
use crate::pinpad::PinpadKey;

/// Renders the whole app.
pub fn draw(frame: &mut Frame, app: &App) {
    let game = app.game();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Level screen
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new(format!("Strictly Guess - {}", game.level().label()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    match game.level() {
        GameLevel::Start => draw_start(frame, chunks[1], game, &app.choices()),
        GameLevel::Collecting => draw_collecting(frame, chunks[1], game),
        GameLevel::Guessing => draw_guessing(frame, chunks[1], game, app.cursor()),
        GameLevel::Finished => draw_finished(frame, chunks[1], game),
    }

    let help = Paragraph::new(help_text(game))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    if game.alert().is_visible() {
        draw_alert(frame, area, game);
    }
}

fn help_text(game: &GameState) -> &'static str {
    if game.alert().is_visible() {
        return "Enter: Close | q: Quit";
    }
    match game.level() {
        GameLevel::Start => "←→: Digits | Enter: Start | q: Quit",
        GameLevel::Collecting => "Enter: I've got it | q: Quit",
        GameLevel::Guessing => "0-9: Type | ←↑↓→ + Enter: Pinpad | Backspace: Delete | e: Give up",
        GameLevel::Finished => "r: Play again | q: Quit",
    }
}

fn draw_start(frame: &mut Frame, area: Rect, game: &GameState, offered: &[DigitChoice]) {
    let mut choices = vec![Span::raw("How many digits?  ")];
    for &choice in offered {
        let style = if choice == game.digit_choice() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        choices.push(Span::styled(format!(" {} ", choice), style));
        choices.push(Span::raw(" "));
    }

    let text = Text::from(vec![
        Line::from(""),
        Line::from(choices),
        Line::from(""),
        Line::from(format!(
            "A {}-digit number will be shown. Remember it, then key it in.",
            game.digit_choice()
        )),
    ]);
    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("New round"));
    frame.render_widget(body, area);
}

fn draw_collecting(frame: &mut Frame, area: Rect, game: &GameState) {
    let number = game
        .target()
        .map(|target| spaced(&target.to_string()))
        .unwrap_or_default();

    let text = Text::from(vec![
        Line::from(""),
        Line::from("Memorize this number:"),
        Line::from(""),
        Line::from(Span::styled(
            number,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ]);
    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}

fn draw_guessing(frame: &mut Frame, area: Rect, game: &GameState, cursor: PinpadKey) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guess
            Constraint::Min(6),    // Pinpad
            Constraint::Length(1), // Attempts
        ])
        .split(area);

    let slots = game.target().map_or(0, |target| target.digits());
    let guess = Paragraph::new(guess_slots(game.guess(), slots))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Your guess"));
    frame.render_widget(guess, chunks[0]);

    draw_pinpad(frame, chunks[1], cursor, game.is_ready_for_submission());

    let attempts = Paragraph::new(format!("Attempts: {}", game.guesses().len()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(attempts, chunks[2]);
}

fn draw_pinpad(frame: &mut Frame, area: Rect, cursor: PinpadKey, ready: bool) {
    let mut lines = Vec::with_capacity(PinpadKey::ROWS * 2);
    for row in PinpadKey::rows() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for key in row {
            let style = match key {
                _ if key == cursor => Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                PinpadKey::Submit if ready => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                PinpadKey::Submit => Style::default().fg(Color::DarkGray),
                PinpadKey::Delete => Style::default().fg(Color::Red),
                PinpadKey::Digit(_) => Style::default().fg(Color::White),
            };
            spans.push(Span::styled(format!("[{:^5}]", key.label()), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let pad = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    frame.render_widget(pad, center_rect(area, 24, (PinpadKey::ROWS * 2) as u16));
}

fn draw_finished(frame: &mut Frame, area: Rect, game: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let (headline, color) = if game.has_won() {
        ("You got it!", Color::Green)
    } else {
        ("Better luck next time.", Color::Red)
    };
    let answer = game
        .target()
        .map(|target| format!("The number was {}", target))
        .unwrap_or_default();
    let summary = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(answer),
        Line::from(format!("Attempts: {}", game.guesses().len())),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(summary, chunks[0]);

    let items: Vec<ListItem> = game
        .guesses()
        .iter()
        .enumerate()
        .map(|(i, guess)| ListItem::new(format!("{:>3}. {}", i + 1, guess)))
        .collect();
    let log = List::new(items).block(Block::default().borders(Borders::ALL).title("Guesses"));
    frame.render_widget(log, chunks[1]);
}

fn draw_alert(frame: &mut Frame, area: Rect, game: &GameState) {
    let color = if game.has_won() {
        Color::Green
    } else {
        Color::Red
    };
    let popup = center_rect(area, 40, 5);
    let alert = Paragraph::new(game.alert().message().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Result"));
    frame.render_widget(Clear, popup);
    frame.render_widget(alert, popup);
}

/// Entered digits followed by placeholders, e.g. `4 3 _ _`.
fn guess_slots(guess: &str, slots: usize) -> String {
    let placeholders = slots.saturating_sub(guess.len());
    let mut shown: String = guess.to_string();
    shown.extend(std::iter::repeat_n('_', placeholders));
    spaced(&shown)
}

fn spaced(s: &str) -> String {
    s.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
