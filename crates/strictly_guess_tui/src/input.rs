//! Key bindings per game level.

use crossterm::event::KeyCode;
use strictly_guess::{Digit, GameLevel};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Quit,
    /// Select the previous digit count on the start screen.
    PreviousChoice,
    /// Select the next digit count on the start screen.
    NextChoice,
    /// Draw a target and reveal it.
    StartRound,
    /// Stop memorizing and go to the pinpad.
    Continue,
    /// Type a digit directly.
    Enter(Digit),
    /// Delete the last digit.
    Delete,
    /// Press the pinpad key under the cursor.
    PressCursor,
    /// Move the pinpad cursor.
    MoveCursor(KeyCode),
    /// Close the submission alert.
    DismissAlert,
    /// Give up on the current round.
    EndRound,
    /// Back to the start screen.
    Restart,
    /// Nothing bound to this key.
    Ignore,
}

/// Maps a key press to an action for the given level.
///
/// While an alert is showing, only dismissing and quitting are possible.
pub fn action_for(level: GameLevel, alert_visible: bool, key: KeyCode) -> Action {
    if let KeyCode::Char('q') | KeyCode::Char('Q') = key {
        return Action::Quit;
    }
    if alert_visible {
        return match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::DismissAlert,
            _ => Action::Ignore,
        };
    }

    match (level, key) {
        (_, KeyCode::Esc) => Action::Quit,

        (GameLevel::Start, KeyCode::Left | KeyCode::Up) => Action::PreviousChoice,
        (GameLevel::Start, KeyCode::Right | KeyCode::Down) => Action::NextChoice,
        (GameLevel::Start, KeyCode::Enter | KeyCode::Char(' ')) => Action::StartRound,

        (GameLevel::Collecting, KeyCode::Enter | KeyCode::Char(' ')) => Action::Continue,

        (GameLevel::Guessing, KeyCode::Char(c)) if c.is_ascii_digit() => {
            Digit::from_char(c).map_or(Action::Ignore, Action::Enter)
        }
        (GameLevel::Guessing, KeyCode::Backspace | KeyCode::Delete) => Action::Delete,
        (GameLevel::Guessing, KeyCode::Enter | KeyCode::Char(' ')) => Action::PressCursor,
        (
            GameLevel::Guessing,
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right),
        ) => Action::MoveCursor(code),
        (GameLevel::Guessing, KeyCode::Char('e')) => Action::EndRound,

        (GameLevel::Finished, KeyCode::Enter | KeyCode::Char('r')) => Action::Restart,

        _ => Action::Ignore,
    }
}
