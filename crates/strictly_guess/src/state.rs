//! The game state machine.
//!
//! `GameState` is plain data with explicit transitions. Every operation is
//! total: inputs that don't apply to the current state are ignored and
//! logged rather than reported as errors. Callers that render the state can
//! poll [`GameState::revision`] to learn whether anything changed.

use super::{
    Alert, Digit, DigitChoice, GameLevel, GuessBuffer, RandomTarget, TargetNumber, TargetSource,
    Verdict,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Target value reported by [`GameState::target_or_sentinel`] while unset.
pub const UNSET_TARGET: i64 = -1;

/// Complete state of one player's game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    level: GameLevel,
    digit_choice: DigitChoice,
    target: Option<TargetNumber>,
    guess: GuessBuffer,
    guesses: Vec<String>,
    alert: Alert,
    verdict: Option<Verdict>,
    revision: u64,
}

impl GameState {
    /// Creates a game at the start level with default settings.
    #[instrument]
    pub fn new() -> Self {
        Self {
            level: GameLevel::Start,
            digit_choice: DigitChoice::DEFAULT,
            target: None,
            guess: GuessBuffer::new(),
            guesses: Vec::new(),
            alert: Alert::default(),
            verdict: None,
            revision: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Current level.
    pub fn level(&self) -> GameLevel {
        self.level
    }

    /// Chosen digit count.
    pub fn digit_choice(&self) -> DigitChoice {
        self.digit_choice
    }

    /// The target, once a round has started.
    pub fn target(&self) -> Option<TargetNumber> {
        self.target
    }

    /// The target value, or [`UNSET_TARGET`] at the start level.
    pub fn target_or_sentinel(&self) -> i64 {
        self.target
            .and_then(|target| i64::try_from(target.value()).ok())
            .unwrap_or(UNSET_TARGET)
    }

    /// Digits entered so far.
    pub fn guess(&self) -> &str {
        self.guess.as_str()
    }

    /// Submitted guesses in submission order.
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// The alert for the last submission.
    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    /// Verdict of the last submission this round.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Returns true once a submission has matched the target.
    pub fn has_won(&self) -> bool {
        self.verdict.is_some_and(Verdict::is_correct)
    }

    /// Change counter, bumped by every operation that mutates the state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns true when the guess has as many digits as the target.
    pub fn is_ready_for_submission(&self) -> bool {
        self.target
            .is_some_and(|target| self.guess.len() == target.digits())
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Sets the digit count for the next round.
    ///
    /// Ignored outside the start level or when `n` is out of bounds.
    #[instrument(skip(self), fields(level = %self.level))]
    pub fn set_digit_choice(&mut self, n: u8) {
        if self.level != GameLevel::Start {
            debug!("Digit choice is fixed once a round has started");
            return;
        }
        let Some(choice) = DigitChoice::new(n) else {
            debug!("Digit choice out of bounds, ignoring");
            return;
        };
        if choice != self.digit_choice {
            self.digit_choice = choice;
            self.touch();
        }
    }

    /// Starts a round with a target from the thread-local generator.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        self.start_game_with(&mut RandomTarget::new(rand::thread_rng()));
    }

    /// Starts a round, drawing the target from `source`.
    ///
    /// Moves from the start level to the first active level. Ignored at
    /// any other level, so a round never gets a second target.
    #[instrument(skip(self, source), fields(digits = %self.digit_choice))]
    pub fn start_game_with(&mut self, source: &mut impl TargetSource) {
        if self.level != GameLevel::Start {
            warn!(level = %self.level, "Round already started, ignoring");
            return;
        }
        let target = TargetNumber::draw(self.digit_choice, source);
        self.target = Some(target);
        self.level = GameLevel::Collecting;
        info!(level = %self.level, "Round started");
        self.touch();
    }

    /// Appends a digit to the guess if there is room for it.
    #[instrument(skip(self), fields(guess = %self.guess.as_str()))]
    pub fn append_digit(&mut self, digit: Digit) {
        let Some(target) = self.target else {
            debug!("No target yet, ignoring digit");
            return;
        };
        if self.guess.push(digit, target.digits()) {
            self.touch();
        } else {
            debug!("Guess is full, ignoring digit");
        }
    }

    /// Removes the last digit of the guess. Does nothing if it is empty.
    #[instrument(skip(self), fields(guess = %self.guess.as_str()))]
    pub fn delete_last_digit(&mut self) {
        if self.guess.pop().is_some() {
            self.touch();
        }
    }

    /// Records the current guess and judges it against the target.
    ///
    /// The guess is kept in the buffer and the level is left alone;
    /// the caller decides what happens next. Returns `None` when no
    /// round is running.
    #[instrument(skip(self), fields(guess = %self.guess.as_str()))]
    pub fn submit(&mut self) -> Option<Verdict> {
        let Some(target) = self.target else {
            warn!("Submit before the round started, ignoring");
            return None;
        };

        let guess = self.guess.as_str().to_owned();
        let verdict = if guess.len() != target.digits() {
            Verdict::Unfinished
        } else if !target.matches(&guess) {
            Verdict::Wrong {
                answer: target.value(),
            }
        } else {
            Verdict::Correct
        };
        self.guesses.push(guess);

        info!(%verdict, attempts = self.guesses.len(), "Guess judged");
        self.alert = Alert::shown(verdict);
        self.verdict = Some(verdict);
        self.touch();
        Some(verdict)
    }

    /// Returns the alert message if it is showing, hiding it.
    #[instrument(skip(self))]
    pub fn take_alert(&mut self) -> Option<String> {
        if !self.alert.is_visible() {
            return None;
        }
        self.alert.dismiss();
        self.touch();
        Some(self.alert.message().to_owned())
    }

    /// Hides the alert without reading it.
    #[instrument(skip(self))]
    pub fn dismiss_alert(&mut self) {
        if self.alert.is_visible() {
            self.alert.dismiss();
            self.touch();
        }
    }

    /// Moves to the next level.
    ///
    /// Does nothing at the terminal level. The start level is only left
    /// through [`GameState::start_game`], which also draws the target.
    #[instrument(skip(self), fields(level = %self.level))]
    pub fn advance_level(&mut self) {
        if self.level == GameLevel::Start {
            debug!("Start level is left by starting a round");
            return;
        }
        match self.level.next() {
            Some(next) => {
                info!(%next, "Advancing level");
                self.level = next;
                self.touch();
            }
            None => debug!("Already at the terminal level"),
        }
    }

    /// Resets everything for a new round.
    #[instrument(skip(self), fields(level = %self.level, attempts = self.guesses.len()))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        let revision = self.revision;
        *self = Self::new();
        self.revision = revision;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
