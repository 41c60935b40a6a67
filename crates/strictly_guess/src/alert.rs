//! Submission outcomes and the alert that announces them.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Result of comparing a submitted guess with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Verdict {
    /// Fewer digits than the target were entered.
    #[display("Not finished yet")]
    Unfinished,
    /// Right length, wrong digits.
    #[display("Wrong! The answer was {answer}")]
    Wrong {
        /// The target that was missed.
        answer: u64,
    },
    /// The guess matches the target.
    #[display("Correct!")]
    Correct,
}

impl Verdict {
    /// Returns true for a matching guess.
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Transient message for the view layer.
///
/// Shown once after a submission, then dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alert {
    visible: bool,
    message: String,
}

impl Alert {
    /// A visible alert announcing `verdict`.
    pub fn shown(verdict: Verdict) -> Self {
        Self {
            visible: true,
            message: verdict.to_string(),
        }
    }

    /// Whether the alert should currently be displayed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The alert text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Hides the alert.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
