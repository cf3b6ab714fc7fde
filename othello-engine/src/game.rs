//! Implements game-level Othello logic: turns, forced passes and the end of
//! the game.
//!
//! For correctness this is the interface to use; [`Board`] alone applies
//! captures without tracking whose move it is.

use crate::{Board, Direction, Disc, GameConfig, Location, Outcome};
use derive_more::{Display, Error};
use std::fmt;
use tracing::{debug, instrument, trace};

/// Errors raised when setting up a game or reading a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("invalid board size {size}: must be even and between 4 and 8")]
    InvalidSize { size: usize },
    #[display("invalid player {player}: must be 1 or 2")]
    InvalidPlayer { player: u8 },
    #[display("invalid starting disc {disc}: must be White or Black")]
    InvalidDisc { disc: Disc },
    #[display("location ({row}, {col}) is outside a {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },
}

/// Check that `player` names one of the two players.
pub fn validate_player(player: u8) -> Result<(), GameError> {
    match player {
        1 | 2 => Ok(()),
        _ => Err(GameError::InvalidPlayer { player }),
    }
}

/// Check that `disc` is a color a player can control.
pub fn validate_disc(disc: Disc) -> Result<(), GameError> {
    if disc.is_color() {
        Ok(())
    } else {
        Err(GameError::InvalidDisc { disc })
    }
}

/// The complete state of an Othello game.
///
/// Each player controls one color for the whole game. The active disc is the
/// color that moves next; it usually alternates with `turn`, but when a color
/// has no legal move the other color moves again while `turn` still flips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: u8,
    active_disc: Disc,
    player1_disc: Disc,
    player2_disc: Disc,
}

impl GameState {
    /// Start a game on a `size`x`size` board from the four-disc opening.
    /// `start_player` moves first with `start_disc`; the other player gets
    /// the opposite color.
    #[instrument]
    pub fn create(size: usize, start_player: u8, start_disc: Disc) -> Result<Self, GameError> {
        let board = Board::starting(size)?;
        let game = Self::with_board(board, start_player, start_disc)?;
        debug!("created game");
        Ok(game)
    }

    /// Start a game as described by `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Self::create(config.size, config.start_player, config.start_disc)
    }

    /// Start a game from an arbitrary position.
    pub fn with_board(
        board: Board,
        start_player: u8,
        start_disc: Disc,
    ) -> Result<Self, GameError> {
        validate_player(start_player)?;
        validate_disc(start_disc)?;

        let (player1_disc, player2_disc) = match start_player {
            1 => (start_disc, !start_disc),
            _ => (!start_disc, start_disc),
        };

        Ok(Self {
            board,
            turn: start_player,
            active_disc: start_disc,
            player1_disc,
            player2_disc,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.edge_length()
    }

    /// The player (1 or 2) whose turn it is.
    #[inline]
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// The color that moves next.
    #[inline]
    pub fn active_disc(&self) -> Disc {
        self.active_disc
    }

    /// The color `player` controls, or None if `player` is not 1 or 2.
    pub fn disc_for_player(&self, player: u8) -> Option<Disc> {
        match player {
            1 => Some(self.player1_disc),
            2 => Some(self.player2_disc),
            _ => None,
        }
    }

    /// The disc at (`row`, `col`).
    pub fn disc_at(&self, row: usize, col: usize) -> Result<Disc, GameError> {
        self.board
            .get(Location::new(row, col))
            .ok_or(GameError::OutOfRange {
                row,
                col,
                size: self.size(),
            })
    }

    /// Count the discs of one color.
    pub fn count(&self, disc: Disc) -> usize {
        self.board.count(disc)
    }

    /// Returns whether `disc` placed at (`row`, `col`) would capture along
    /// `direction`.
    pub fn direction_has_capture(
        &self,
        row: usize,
        col: usize,
        disc: Disc,
        direction: Direction,
    ) -> bool {
        self.board
            .direction_has_capture(Location::new(row, col), disc, direction)
    }

    /// Returns whether the active disc may be placed at (`row`, `col`).
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.is_valid_move_for_disc(row, col, self.active_disc)
    }

    /// Returns whether `disc` may be placed at (`row`, `col`).
    /// Occupied and off-board cells are never valid.
    pub fn is_valid_move_for_disc(&self, row: usize, col: usize, disc: Disc) -> bool {
        self.board.is_valid_move(Location::new(row, col), disc)
    }

    /// Get the legal moves for the active disc.
    pub fn valid_moves(&self) -> Vec<Location> {
        self.valid_moves_for_disc(self.active_disc)
    }

    /// Get the legal moves for `disc`.
    pub fn valid_moves_for_disc(&self, disc: Disc) -> Vec<Location> {
        self.board.valid_moves(disc)
    }

    /// Returns whether the active disc has any legal move.
    pub fn has_valid_move(&self) -> bool {
        self.has_valid_move_for_disc(self.active_disc)
    }

    /// Returns whether `disc` has any legal move.
    pub fn has_valid_move_for_disc(&self, disc: Disc) -> bool {
        self.board.has_valid_move(disc)
    }

    /// Place the active disc at (`row`, `col`) and flip what it captures,
    /// then pass the turn on unless the game is over.
    ///
    /// An illegal move is ignored and leaves the game untouched. Check
    /// [`GameState::is_valid_move`] first to tell the two apart.
    #[instrument(skip(self), fields(disc = %self.active_disc))]
    pub fn place_disc_at(&mut self, row: usize, col: usize) {
        if !self.is_valid_move(row, col) {
            trace!("ignoring illegal move");
            return;
        }

        let flipped = self.board.apply_move(Location::new(row, col), self.active_disc);
        trace!(flipped, "placed disc");

        if self.is_game_over() {
            debug!(outcome = %self.determine_outcome(), "game over");
        } else {
            self.advance_turn();
        }
    }

    /// Hand the move to the other player and color. If that color has no
    /// legal move it passes, and the color that just moved goes again; `turn`
    /// alternates either way.
    ///
    /// Callers check [`GameState::is_game_over`] first: when neither color
    /// can move there is no next turn to advance to.
    pub fn advance_turn(&mut self) {
        self.turn = if self.turn == 1 { 2 } else { 1 };

        let next = !self.active_disc;
        if self.has_valid_move_for_disc(next) {
            self.active_disc = next;
        } else {
            debug!(passed = %next, turn = self.turn, "forced pass");
        }
    }

    /// Returns true if no cell is empty.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Returns true if the board is full or neither color can move.
    pub fn is_game_over(&self) -> bool {
        self.is_board_full()
            || Disc::COLORS
                .iter()
                .all(|&disc| !self.has_valid_move_for_disc(disc))
    }

    /// Decide the winner by disc count. Meaningful at any point, but only
    /// final once [`GameState::is_game_over`] holds.
    pub fn determine_outcome(&self) -> Outcome {
        Outcome::from_counts(self.count(Disc::Black), self.count(Disc::White))
    }

    /// Render the board as numbered text for display.
    pub fn describe(&self) -> String {
        self.board.to_string()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
