//! Code for working with [`Location`]s and [`Direction`]s on the board.

use crate::MAX_EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

const COLUMN_LETTERS: &str = "ABCDEFGH";

/// A 0-indexed (row, column) cell on the board.
///
/// A location is not tied to a board size: whether it is on the board is
/// checked by [`Location::is_within`] or by the board accessors.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, From, Into)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

/// One of the eight unit steps from a cell to a neighbor.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Direction {
    d_row: isize,
    d_col: isize,
}

impl Direction {
    pub const NORTH: Self = Self::unchecked(-1, 0);
    pub const NORTH_EAST: Self = Self::unchecked(-1, 1);
    pub const EAST: Self = Self::unchecked(0, 1);
    pub const SOUTH_EAST: Self = Self::unchecked(1, 1);
    pub const SOUTH: Self = Self::unchecked(1, 0);
    pub const SOUTH_WEST: Self = Self::unchecked(1, -1);
    pub const WEST: Self = Self::unchecked(0, -1);
    pub const NORTH_WEST: Self = Self::unchecked(-1, -1);

    /// All eight directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    const fn unchecked(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }

    /// Build a direction from its row and column steps.
    /// Returns None unless both are in {-1, 0, 1} and not both 0.
    pub fn new(d_row: isize, d_col: isize) -> Option<Self> {
        let unit = |d: isize| (-1..=1).contains(&d);
        if unit(d_row) && unit(d_col) && (d_row, d_col) != (0, 0) {
            Some(Self::unchecked(d_row, d_col))
        } else {
            None
        }
    }

    #[inline]
    pub fn d_row(self) -> isize {
        self.d_row
    }

    #[inline]
    pub fn d_col(self) -> isize {
        self.d_col
    }
}

impl Location {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert into a row-major index on a board with the given edge length.
    #[inline]
    pub fn to_index(self, edge_length: usize) -> usize {
        self.row * edge_length + self.col
    }

    /// Convert from a row-major index on a board with the given edge length.
    #[inline]
    pub fn from_index(index: usize, edge_length: usize) -> Self {
        Self::new(index / edge_length, index % edge_length)
    }

    /// Returns whether this location is on a board with the given edge length.
    #[inline]
    pub fn is_within(self, edge_length: usize) -> bool {
        self.row < edge_length && self.col < edge_length
    }

    /// The neighboring location one step along `direction`, if it is on a
    /// board with the given edge length.
    #[inline]
    pub fn step(self, direction: Direction, edge_length: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(direction.d_row)?;
        let col = self.col.checked_add_signed(direction.d_col)?;
        Some(Self::new(row, col)).filter(|loc| loc.is_within(edge_length))
    }
}

/// Convert this [`Location`] into 1-indexed string notation ("D3"). Columns
/// past the last letter are written as a row and column pair ("1,9").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match COLUMN_LETTERS.chars().nth(self.col) {
            Some(col_str) => {
                f.write_char(col_str)?;
                write!(f, "{}", self.row + 1)
            }
            None => write!(f, "{},{}", self.row + 1, self.col + 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from 1-indexed notation: a column letter and row
/// digit ("D3", "d3"), or a row and column pair ("3,4", "3 4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let in_range = |n: usize| (1..=MAX_EDGE_LENGTH).contains(&n);

        let mut numbers = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        if let (Some(row), Some(col), None) = (numbers.next(), numbers.next(), numbers.next()) {
            let row: usize = row.parse().or(Err(ParseLocationError))?;
            let col: usize = col.parse().or(Err(ParseLocationError))?;
            if !in_range(row) || !in_range(col) {
                return Err(ParseLocationError);
            }
            return Ok(Self::new(row - 1, col - 1));
        }

        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if !in_range(row) || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::new(row - 1, col))
    }
}
