//! The on-screen pinpad and keyboard navigation over it.

use crossterm::event::KeyCode;
use strictly_guess::Digit;

/// A key on the 4x3 pinpad.
///
/// ```text
/// 1   2   3
/// 4   5   6
/// 7   8   9
/// Del 0   OK
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinpadKey {
    /// A digit key.
    Digit(Digit),
    /// Removes the last digit.
    Delete,
    /// Submits the guess.
    Submit,
}

impl PinpadKey {
    /// Number of rows on the pad.
    pub const ROWS: usize = 4;
    /// Number of columns on the pad.
    pub const COLS: usize = 3;

    /// Returns the key at `row`, `col`, or `None` off the pad.
    pub fn at(row: usize, col: usize) -> Option<Self> {
        if row >= Self::ROWS || col >= Self::COLS {
            return None;
        }
        let key = match (row, col) {
            (3, 0) => Self::Delete,
            (3, 1) => Self::Digit(Digit::new(0)?),
            (3, 2) => Self::Submit,
            _ => Self::Digit(Digit::new(u8::try_from(row * Self::COLS + col + 1).ok()?)?),
        };
        Some(key)
    }

    /// Row and column of this key.
    pub fn position(self) -> (usize, usize) {
        match self {
            Self::Delete => (3, 0),
            Self::Submit => (3, 2),
            Self::Digit(d) if d.value() == 0 => (3, 1),
            Self::Digit(d) => {
                let index = usize::from(d.value()) - 1;
                (index / Self::COLS, index % Self::COLS)
            }
        }
    }

    /// Label printed on the key.
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Delete => "Del".to_string(),
            Self::Submit => "OK".to_string(),
        }
    }

    /// All keys in row-major order.
    pub fn rows() -> impl Iterator<Item = [Self; 3]> {
        (0..Self::ROWS).filter_map(|row| {
            Some([
                Self::at(row, 0)?,
                Self::at(row, 1)?,
                Self::at(row, 2)?,
            ])
        })
    }
}

impl Default for PinpadKey {
    /// The cursor starts on the `5` key in the middle of the pad.
    fn default() -> Self {
        Digit::new(5).map_or(Self::Submit, Self::Digit)
    }
}

/// Moves the cursor based on arrow keys, stopping at the pad edges.
pub fn move_cursor(cursor: PinpadKey, key: KeyCode) -> PinpadKey {
    let (row, col) = cursor.position();
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| PinpadKey::at(r, c))
        .unwrap_or(cursor)
}
