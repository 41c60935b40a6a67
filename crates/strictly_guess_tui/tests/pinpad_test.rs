//! Tests for the pinpad layout and key bindings.

use crossterm::event::KeyCode;
use strictly_guess::{Digit, GameLevel};
use strictly_guess_tui::{Action, PinpadKey, action_for, move_cursor};

fn digit_key(value: u8) -> PinpadKey {
    PinpadKey::Digit(Digit::new(value).expect("Valid digit"))
}

#[test]
fn test_layout() {
    assert_eq!(PinpadKey::at(0, 0), Some(digit_key(1)));
    assert_eq!(PinpadKey::at(2, 2), Some(digit_key(9)));
    assert_eq!(PinpadKey::at(3, 0), Some(PinpadKey::Delete));
    assert_eq!(PinpadKey::at(3, 1), Some(digit_key(0)));
    assert_eq!(PinpadKey::at(3, 2), Some(PinpadKey::Submit));
    assert_eq!(PinpadKey::at(4, 0), None);
    assert_eq!(PinpadKey::at(0, 3), None);
}

#[test]
fn test_position_inverts_at() {
    for (r, row) in PinpadKey::rows().enumerate() {
        for (c, key) in row.into_iter().enumerate() {
            assert_eq!(key.position(), (r, c));
        }
    }
    assert_eq!(PinpadKey::rows().count(), PinpadKey::ROWS);
}

#[test]
fn test_cursor_stops_at_edges() {
    let top_left = digit_key(1);
    assert_eq!(move_cursor(top_left, KeyCode::Up), top_left);
    assert_eq!(move_cursor(top_left, KeyCode::Left), top_left);
    assert_eq!(move_cursor(top_left, KeyCode::Right), digit_key(2));
    assert_eq!(move_cursor(top_left, KeyCode::Down), digit_key(4));

    assert_eq!(move_cursor(PinpadKey::Submit, KeyCode::Down), PinpadKey::Submit);
    assert_eq!(move_cursor(PinpadKey::Submit, KeyCode::Right), PinpadKey::Submit);
    assert_eq!(move_cursor(PinpadKey::Submit, KeyCode::Up), digit_key(9));
    assert_eq!(move_cursor(digit_key(0), KeyCode::Left), PinpadKey::Delete);
}

#[test]
fn test_non_arrow_keys_leave_cursor() {
    assert_eq!(move_cursor(digit_key(5), KeyCode::Enter), digit_key(5));
    assert_eq!(PinpadKey::default(), digit_key(5));
}

#[test]
fn test_bindings_per_level() {
    assert_eq!(
        action_for(GameLevel::Start, false, KeyCode::Enter),
        Action::StartRound
    );
    assert_eq!(
        action_for(GameLevel::Collecting, false, KeyCode::Enter),
        Action::Continue
    );
    assert_eq!(
        action_for(GameLevel::Guessing, false, KeyCode::Enter),
        Action::PressCursor
    );
    assert_eq!(
        action_for(GameLevel::Finished, false, KeyCode::Enter),
        Action::Restart
    );
    assert_eq!(
        action_for(GameLevel::Guessing, false, KeyCode::Char('7')),
        Action::Enter(Digit::new(7).unwrap())
    );
    // Digits only type on the pinpad screen.
    assert_eq!(
        action_for(GameLevel::Start, false, KeyCode::Char('7')),
        Action::Ignore
    );
}

#[test]
fn test_alert_swallows_other_keys() {
    assert_eq!(
        action_for(GameLevel::Guessing, true, KeyCode::Char('1')),
        Action::Ignore
    );
    assert_eq!(
        action_for(GameLevel::Guessing, true, KeyCode::Enter),
        Action::DismissAlert
    );
    assert_eq!(
        action_for(GameLevel::Guessing, true, KeyCode::Char('q')),
        Action::Quit
    );
}
