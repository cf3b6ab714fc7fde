//! The board grid and the capture rules that operate on it.
//!
//! A [`Board`] stores one [`Disc`] per cell in a flat row-major buffer.
//! It has no notion of turns: every operation takes the disc color it acts
//! for. Turn bookkeeping lives in [`crate::GameState`].

use crate::{utils, Direction, Disc, GameError, Location, MAX_EDGE_LENGTH, MIN_EDGE_LENGTH};
use derive_more::{Display, Error};
use std::fmt;

/// A square grid of discs with an even edge length between 4 and 8.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    edge_length: usize,
    cells: Vec<Disc>,
}

impl Board {
    /// Check that `edge_length` is a supported board size.
    pub fn validate_edge_length(edge_length: usize) -> Result<(), GameError> {
        let in_range = (MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).contains(&edge_length);
        if in_range && edge_length % 2 == 0 {
            Ok(())
        } else {
            Err(GameError::InvalidSize { size: edge_length })
        }
    }

    /// A board of the given size with every cell empty.
    pub fn empty(edge_length: usize) -> Result<Self, GameError> {
        Self::validate_edge_length(edge_length)?;
        Ok(Self {
            edge_length,
            cells: vec![Disc::Empty; edge_length * edge_length],
        })
    }

    /// A board of the given size holding the four-disc opening in the center.
    pub fn starting(edge_length: usize) -> Result<Self, GameError> {
        let mut board = Self::empty(edge_length)?;
        let c = edge_length / 2 - 1;
        board.put(Location::new(c, c), Disc::Black);
        board.put(Location::new(c, c + 1), Disc::White);
        board.put(Location::new(c + 1, c), Disc::White);
        board.put(Location::new(c + 1, c + 1), Disc::Black);
        Ok(board)
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.edge_length
    }

    /// The disc at `loc`, or None if `loc` is off the board.
    #[inline]
    pub fn get(&self, loc: Location) -> Option<Disc> {
        if loc.is_within(self.edge_length) {
            Some(self.cells[loc.to_index(self.edge_length)])
        } else {
            None
        }
    }

    /// Overwrite the disc at `loc`.
    pub fn set(&mut self, loc: Location, disc: Disc) -> Result<(), GameError> {
        if !loc.is_within(self.edge_length) {
            return Err(GameError::OutOfRange {
                row: loc.row,
                col: loc.col,
                size: self.edge_length,
            });
        }
        self.put(loc, disc);
        Ok(())
    }

    // Callers guarantee `loc` is on the board.
    #[inline]
    fn put(&mut self, loc: Location, disc: Disc) {
        let index = loc.to_index(self.edge_length);
        self.cells[index] = disc;
    }

    /// Iterate over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Disc> + '_ {
        self.cells.iter().copied()
    }

    /// Iterate over every location on the board in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let edge_length = self.edge_length;
        (0..edge_length * edge_length).map(move |index| Location::from_index(index, edge_length))
    }

    /// Count the cells holding `disc`.
    pub fn count(&self, disc: Disc) -> usize {
        self.cells().filter(|&cell| cell == disc).count()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Disc::Empty)
    }

    /// Returns whether a `disc` placed at `origin` would capture along
    /// `direction`: the scan must cross at least one opposing disc and then
    /// reach a `disc` with no empty cell in between. Running off the board
    /// captures nothing. The contents of `origin` itself are ignored.
    pub fn direction_has_capture(
        &self,
        origin: Location,
        disc: Disc,
        direction: Direction,
    ) -> bool {
        if !disc.is_color() || !origin.is_within(self.edge_length) {
            return false;
        }

        let mut crossed_opponent = false;
        let mut current = origin;
        while let Some(next) = current.step(direction, self.edge_length) {
            match self.cells[next.to_index(self.edge_length)] {
                Disc::Empty => return false,
                cell if cell == disc => return crossed_opponent,
                _ => crossed_opponent = true,
            }
            current = next;
        }

        false
    }

    /// Returns whether `disc` may be placed at `origin`: the cell is on the
    /// board and empty, and some direction starting at an adjacent opposing
    /// disc captures.
    pub fn is_valid_move(&self, origin: Location, disc: Disc) -> bool {
        if !disc.is_color() || self.get(origin) != Some(Disc::Empty) {
            return false;
        }

        Direction::ALL.iter().any(|&direction| {
            let adjacent = origin
                .step(direction, self.edge_length)
                .and_then(|loc| self.get(loc));
            adjacent == Some(!disc) && self.direction_has_capture(origin, disc, direction)
        })
    }

    /// Get the legal moves for `disc` in row-major order.
    pub fn valid_moves(&self, disc: Disc) -> Vec<Location> {
        self.locations()
            .filter(|&loc| self.is_valid_move(loc, disc))
            .collect()
    }

    /// Returns whether `disc` has any legal move.
    pub fn has_valid_move(&self, disc: Disc) -> bool {
        self.locations().any(|loc| self.is_valid_move(loc, disc))
    }

    /// Place `disc` at `origin`, flipping every opposing run it flanks.
    /// Returns the number of discs flipped.
    ///
    /// Legality is not checked: the disc is placed even if nothing is
    /// flipped. Does nothing if `origin` is off the board.
    pub fn apply_move(&mut self, origin: Location, disc: Disc) -> usize {
        if !disc.is_color() || !origin.is_within(self.edge_length) {
            return 0;
        }

        let mut flipped = 0;
        for direction in Direction::ALL {
            if self.direction_has_capture(origin, disc, direction) {
                flipped += self.flip_direction(origin, disc, direction);
            }
        }
        self.put(origin, disc);

        flipped
    }

    // Flip the run of opposing discs from `origin` up to the first `disc`.
    // Only called on directions that capture.
    fn flip_direction(&mut self, origin: Location, disc: Disc, direction: Direction) -> usize {
        let mut flipped = 0;
        let mut current = origin;
        while let Some(next) = current.step(direction, self.edge_length) {
            if self.get(next) == Some(disc) {
                break;
            }
            self.put(next, disc);
            flipped += 1;
            current = next;
        }
        flipped
    }
}

/// Render the board as a numbered grid (see [`crate::GameState::describe`]).
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(Disc::to_char), self.edge_length, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display("missing column header")]
    MissingHeader,
    #[display("malformed column header")]
    MalformedHeader,
    #[display("unsupported board size {size}")]
    UnsupportedSize { size: usize },
    #[display("malformed row {row}")]
    MalformedRow { row: usize },
    #[display("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
}

/// Parse the numbered grid produced by [`Board`]'s `Display` impl.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());

        let header = lines.next().ok_or(ParseBoardError::MissingHeader)?;
        let mut edge_length = 0;
        for (i, label) in header.split_whitespace().enumerate() {
            match label.parse::<usize>() {
                Ok(n) if n == i + 1 => edge_length = n,
                _ => return Err(ParseBoardError::MalformedHeader),
            }
        }

        let mut board = Self::empty(edge_length)
            .or(Err(ParseBoardError::UnsupportedSize { size: edge_length }))?;

        let mut found = 0;
        for (row, line) in lines.enumerate() {
            if row >= edge_length {
                return Err(ParseBoardError::RowCount {
                    expected: edge_length,
                    found: row + 1,
                });
            }

            let malformed = ParseBoardError::MalformedRow { row: row + 1 };
            let mut tokens = line.split_whitespace();
            if tokens.next().and_then(|label| label.parse::<usize>().ok()) != Some(row + 1) {
                return Err(malformed);
            }

            let mut col = 0;
            for token in tokens {
                let mut chars = token.chars();
                let disc = match (chars.next(), chars.next()) {
                    (Some(c), None) => Disc::from_char(c).or(Err(malformed))?,
                    _ => return Err(malformed),
                };
                board.set(Location::new(row, col), disc).or(Err(malformed))?;
                col += 1;
            }
            if col != edge_length {
                return Err(malformed);
            }

            found += 1;
        }

        if found != edge_length {
            return Err(ParseBoardError::RowCount {
                expected: edge_length,
                found,
            });
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn board(text: &str) -> Board {
        Board::from_str(text).unwrap()
    }

    #[test]
    fn edge_length_validation() {
        for size in [4, 6, 8] {
            assert_eq!(Board::validate_edge_length(size), Ok(()));
        }
        for size in [0, 2, 3, 5, 7, 9, 10] {
            assert_eq!(
                Board::validate_edge_length(size),
                Err(GameError::InvalidSize { size })
            );
        }
    }

    #[test]
    fn starting_board_layout() {
        let board = Board::starting(6).unwrap();
        assert_eq!(board.get(Location::new(2, 2)), Some(Disc::Black));
        assert_eq!(board.get(Location::new(2, 3)), Some(Disc::White));
        assert_eq!(board.get(Location::new(3, 2)), Some(Disc::White));
        assert_eq!(board.get(Location::new(3, 3)), Some(Disc::Black));
        assert_eq!(board.count(Disc::Empty), 32);
    }

    #[test]
    fn get_and_set_bounds() {
        let mut board = Board::empty(4).unwrap();
        assert_eq!(board.get(Location::new(4, 0)), None);
        assert_eq!(
            board.set(Location::new(0, 4), Disc::Black),
            Err(GameError::OutOfRange { row: 0, col: 4, size: 4 })
        );
        assert_eq!(board.set(Location::new(3, 3), Disc::Black), Ok(()));
        assert_eq!(board.get(Location::new(3, 3)), Some(Disc::Black));
    }

    #[test]
    fn capture_requires_an_opposing_disc() {
        let board = board(
            "  1 2 3 4
             1 B B W -
             2 - - - -
             3 - - - -
             4 - - - -",
        );
        let origin = Location::new(0, 3);
        assert!(board.direction_has_capture(origin, Disc::Black, Direction::WEST));
        // Own disc directly adjacent: nothing in between.
        assert!(!board.direction_has_capture(origin, Disc::White, Direction::WEST));
        assert!(!board.direction_has_capture(Location::new(0, 0), Disc::Black, Direction::EAST));
        assert!(!board.direction_has_capture(origin, Disc::Black, Direction::SOUTH));
        assert!(!board.direction_has_capture(origin, Disc::Empty, Direction::WEST));
    }

    #[test]
    fn capture_stops_at_gaps_and_edges() {
        let board = board(
            "  1 2 3 4
             1 B W - W
             2 - W - -
             3 - - B -
             4 - - - W",
        );
        // W at (0,1) flanked by B at (0,0): capture from (0,2) going west.
        assert!(board.direction_has_capture(Location::new(0, 2), Disc::Black, Direction::WEST));
        // The run east of (0,2) reaches the edge without a black disc.
        assert!(!board.direction_has_capture(Location::new(0, 2), Disc::Black, Direction::EAST));
        // Diagonal: (0,0) -> W (1,1) -> B (2,2).
        let corner = Location::new(0, 0);
        assert!(board.direction_has_capture(corner, Disc::Black, Direction::SOUTH_EAST));
        // Gap at (1,0) before anything else.
        assert!(!board.direction_has_capture(corner, Disc::Black, Direction::SOUTH));
    }

    #[test]
    fn valid_moves_on_opening() {
        let board = Board::starting(4).unwrap();
        assert_eq!(
            board.valid_moves(Disc::Black),
            vec![
                Location::new(0, 2),
                Location::new(1, 3),
                Location::new(2, 0),
                Location::new(3, 1),
            ]
        );
        assert!(!board.is_valid_move(Location::new(1, 1), Disc::Black));
        assert!(!board.is_valid_move(Location::new(9, 9), Disc::Black));
        assert!(!board.is_valid_move(Location::new(0, 2), Disc::Empty));
    }

    #[test]
    fn apply_move_flips_every_flanked_run() {
        let mut board = board(
            "  1 2 3 4 5 6
             1 B - B - B -
             2 - W W W - -
             3 B W - W B -
             4 - W W W - -
             5 B - B - B -
             6 - - - - - -",
        );
        let flipped = board.apply_move(Location::new(2, 2), Disc::Black);
        assert_eq!(flipped, 8);
        assert_eq!(board.count(Disc::White), 0);
        assert_eq!(board.count(Disc::Black), 17);
    }

    #[test]
    fn apply_move_leaves_unflanked_runs() {
        let mut board = board(
            "  1 2 3 4
             1 - W B -
             2 W - - -
             3 - - - -
             4 - - - -",
        );
        let flipped = board.apply_move(Location::new(0, 0), Disc::Black);
        assert_eq!(flipped, 1);
        assert_eq!(board.get(Location::new(0, 1)), Some(Disc::Black));
        assert_eq!(board.get(Location::new(1, 0)), Some(Disc::White));
    }

    #[test]
    fn display_format() {
        let expected = "\n  1 2 3 4\n1 - - - -\n2 - B W -\n3 - W B -\n4 - - - -\n";
        assert_eq!(Board::starting(4).unwrap().to_string(), expected);
    }

    #[test]
    fn parse_round_trip() {
        let mut board = Board::starting(8).unwrap();
        assert_eq!(board.apply_move(Location::new(2, 4), Disc::Black), 1);
        assert_eq!(board.apply_move(Location::new(2, 3), Disc::White), 1);
        assert_eq!(Board::from_str(&board.to_string()), Ok(board));
    }

    #[test]
    fn parse_failures() {
        assert_eq!(Board::from_str(""), Err(ParseBoardError::MissingHeader));
        assert_eq!(
            Board::from_str("1 3\n1 - -\n2 - -"),
            Err(ParseBoardError::MalformedHeader)
        );
        assert_eq!(
            Board::from_str("1 2\n1 - -\n2 - -"),
            Err(ParseBoardError::UnsupportedSize { size: 2 })
        );
        assert_eq!(
            Board::from_str("1 2 3 4\n1 - - - -\n2 - - - -\n3 - - X -\n4 - - - -"),
            Err(ParseBoardError::MalformedRow { row: 3 })
        );
        assert_eq!(
            Board::from_str("1 2 3 4\n1 - - - -\n3 - - - -\n2 - - - -\n4 - - - -"),
            Err(ParseBoardError::MalformedRow { row: 2 })
        );
        assert_eq!(
            Board::from_str("1 2 3 4\n1 - - - -\n2 - - -\n3 - - - -\n4 - - - -"),
            Err(ParseBoardError::MalformedRow { row: 2 })
        );
        assert_eq!(
            Board::from_str("1 2 3 4\n1 - - - -\n2 - - - -"),
            Err(ParseBoardError::RowCount { expected: 4, found: 2 })
        );
    }
}
