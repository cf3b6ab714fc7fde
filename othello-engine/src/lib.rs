//! `othello-engine` is a rules engine for Othello (Reversi) on square boards
//! from 4x4 to 8x8.
//!
//! The crate is organized in two levels:
//!
//!  - [`Board`] is the grid itself: per-cell [`Disc`] storage, directional
//!    capture scans and flips. It knows nothing about whose turn it is.
//!  - [`GameState`] wraps a board with turn bookkeeping: which player moves,
//!    which color is active, forced passes, termination and the final
//!    [`Outcome`]. This is the interface hosts should use.
//!
//! [`test_utils`] holds a perft counter used by the tests and benchmarks.

pub mod test_utils;

mod board;
mod config;
mod disc;
mod game;
mod location;
mod utils;

pub use board::*;
pub use config::*;
pub use disc::*;
pub use game::*;
pub use location::*;

/// The smallest supported board edge.
pub const MIN_EDGE_LENGTH: usize = 4;

/// The largest supported board edge.
pub const MAX_EDGE_LENGTH: usize = 8;
