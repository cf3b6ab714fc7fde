use crate::{game, Board, Disc, GameError};
use serde::{Deserialize, Serialize};

/// Settings needed to start a game, loadable by hosts from a config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: usize,
    pub start_player: u8,
    pub start_disc: Disc,
}

impl Default for GameConfig {
    /// The standard game: 8x8, player 1 opens with Black.
    fn default() -> Self {
        GameConfig {
            size: 8,
            start_player: 1,
            start_disc: Disc::Black,
        }
    }
}

impl GameConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), GameError> {
        Board::validate_edge_length(self.size)?;
        game::validate_player(self.start_player)?;
        game::validate_disc(self.start_disc)
    }
}
