//! Application state and logic.

use crossterm::event::KeyCode;
use strictly_guess::{DigitChoice, GameLevel, GameState, TargetSource, Verdict};
use tracing::{debug, info, instrument};

use crate::input::{Action, action_for};
use crate::pinpad::{PinpadKey, move_cursor};

/// Main application state.
///
/// Owns the one [`GameState`] and mutates it in response to key presses.
pub struct App {
    game: GameState,
    source: Box<dyn TargetSource>,
    configured_digits: DigitChoice,
    preferred_digits: DigitChoice,
    cursor: PinpadKey,
    cursor_moves: u64,
    should_quit: bool,
}

impl App {
    /// Creates the app with a preselected digit count and a target source.
    #[instrument(skip(source))]
    pub fn new(preferred_digits: DigitChoice, source: impl TargetSource + 'static) -> Self {
        let mut game = GameState::new();
        game.set_digit_choice(preferred_digits.get());
        Self {
            game,
            source: Box::new(source),
            configured_digits: preferred_digits,
            preferred_digits,
            cursor: PinpadKey::default(),
            cursor_moves: 0,
            should_quit: false,
        }
    }

    /// Gets the game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the pinpad key under the cursor.
    pub fn cursor(&self) -> PinpadKey {
        self.cursor
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Digit counts shown on the start screen, in ascending order.
    ///
    /// The offered set, plus the count given at startup when config or
    /// the command line picked one outside that set.
    pub fn choices(&self) -> Vec<DigitChoice> {
        let mut choices = DigitChoice::ALLOWED.to_vec();
        if !choices.contains(&self.configured_digits) {
            choices.push(self.configured_digits);
            choices.sort();
        }
        choices
    }

    /// Changes whenever anything on screen would change.
    pub fn revision(&self) -> u64 {
        self.game.revision() + self.cursor_moves
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(level = %self.game.level()))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = action_for(self.game.level(), self.game.alert().is_visible(), key);
        debug!(?action, "Key mapped");
        self.dispatch(action);
    }

    /// Applies an action to the game.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("Player quit");
                self.should_quit = true;
            }
            Action::PreviousChoice => self.cycle_choice(-1),
            Action::NextChoice => self.cycle_choice(1),
            Action::StartRound => self.game.start_game_with(&mut self.source),
            Action::Continue => self.game.advance_level(),
            Action::Enter(digit) => self.press(PinpadKey::Digit(digit)),
            Action::Delete => self.press(PinpadKey::Delete),
            Action::PressCursor => self.press(self.cursor),
            Action::MoveCursor(code) => {
                let next = move_cursor(self.cursor, code);
                if next != self.cursor {
                    self.cursor = next;
                    self.cursor_moves += 1;
                }
            }
            Action::DismissAlert => self.dismiss_alert(),
            Action::EndRound => {
                info!(attempts = self.game.guesses().len(), "Round ended by player");
                self.game.advance_level();
            }
            Action::Restart => self.restart(),
            Action::Ignore => {}
        }
    }

    /// Presses a pinpad key.
    #[instrument(skip(self))]
    fn press(&mut self, key: PinpadKey) {
        match key {
            PinpadKey::Digit(digit) => self.game.append_digit(digit),
            PinpadKey::Delete => self.game.delete_last_digit(),
            PinpadKey::Submit if self.game.is_ready_for_submission() => {
                self.game.submit();
            }
            PinpadKey::Submit => debug!("Guess incomplete, OK ignored"),
        }
    }

    /// Closes the alert; a correct guess ends the round.
    #[instrument(skip(self))]
    fn dismiss_alert(&mut self) {
        if let Some(message) = self.game.take_alert() {
            debug!(%message, "Alert dismissed");
        }
        if self.game.verdict().is_some_and(Verdict::is_correct) {
            self.game.advance_level();
        }
    }

    /// Starts over with the player's preferred digit count.
    #[instrument(skip(self))]
    fn restart(&mut self) {
        self.game.restart();
        self.game.set_digit_choice(self.preferred_digits.get());
        self.cursor = PinpadKey::default();
    }

    /// Steps through the offered digit counts, wrapping at the ends.
    fn cycle_choice(&mut self, step: isize) {
        if self.game.level() != GameLevel::Start {
            return;
        }
        let choices = self.choices();
        let current = choices
            .iter()
            .position(|choice| *choice == self.game.digit_choice())
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(choices.len() as isize) as usize;
        self.preferred_digits = choices[next];
        self.game.set_digit_choice(choices[next].get());
    }
}
