//! The values a board cell can hold, and the result of a finished game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter};

/// The contents of one board cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Disc {
    White,
    Black,
    Empty,
}

impl Disc {
    /// The two colors a player can control.
    pub const COLORS: [Disc; 2] = [Disc::Black, Disc::White];

    /// Returns true for White and Black.
    #[inline]
    pub fn is_color(self) -> bool {
        self != Disc::Empty
    }

    /// The single character used in board text.
    pub fn to_char(self) -> char {
        match self {
            Disc::White => 'W',
            Disc::Black => 'B',
            Disc::Empty => '-',
        }
    }

    /// Parse a single board-text character, case-insensitively.
    pub fn from_char(c: char) -> Result<Self, ParseDiscError> {
        match c.to_ascii_uppercase() {
            'W' => Ok(Disc::White),
            'B' => Ok(Disc::Black),
            '-' => Ok(Disc::Empty),
            _ => Err(ParseDiscError),
        }
    }
}

impl std::ops::Not for Disc {
    type Output = Self;

    /// Gets the opposite color. Empty has no opposite and maps to itself.
    fn not(self) -> Self {
        match self {
            Disc::White => Disc::Black,
            Disc::Black => Disc::White,
            Disc::Empty => Disc::Empty,
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Disc::White => "White",
            Disc::Black => "Black",
            Disc::Empty => "Empty",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("invalid disc string")]
pub struct ParseDiscError;

/// Accepts a board character (`W`, `B`, `-`) or a full name (`white`,
/// `black`, `empty`), ignoring case.
impl std::str::FromStr for Disc {
    type Err = ParseDiscError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }

        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Disc::White),
            "black" => Ok(Disc::Black),
            "empty" => Ok(Disc::Empty),
            _ => Err(ParseDiscError),
        }
    }
}

/// The result of a game, decided by disc count.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display)]
pub enum Outcome {
    White,
    Black,
    Tie,
}

impl Outcome {
    /// Decide the outcome from the two disc counts.
    pub fn from_counts(black: usize, white: usize) -> Self {
        use std::cmp::Ordering;

        match black.cmp(&white) {
            Ordering::Greater => Outcome::Black,
            Ordering::Less => Outcome::White,
            Ordering::Equal => Outcome::Tie,
        }
    }
}
