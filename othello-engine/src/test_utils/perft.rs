//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation and timing the engine.
//! See: http://www.aartbik.com/MISC/reversi.html
//!
//! Passes are not plies here: [`GameState`] hands a blocked color's turn
//! straight back, so a pass folds into the next move. Counts only match the
//! published ones up to the first pass (depth 8 on the standard board).

use crate::{Disc, GameError, GameState};

/// Count the positions reachable in `depth` moves from the opening of a
/// `size`x`size` game with Black to move. Finished games are leaves.
pub fn run_perft(size: usize, depth: u64) -> Result<u64, GameError> {
    let game = GameState::create(size, 1, Disc::Black)?;
    Ok(leaves_below(&game, depth))
}

fn leaves_below(game: &GameState, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 || game.is_game_over() {
        return 1;
    }

    game.valid_moves()
        .into_iter()
        .map(|mv| {
            let mut child = game.clone();
            child.place_disc_at(mv.row, mv.col);
            leaves_below(&child, depth - 1)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(8, 1), Ok(4));
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(8, 2), Ok(12));
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(8, 3), Ok(56));
}

#[test]
fn perft_rejects_bad_size() {
    assert_eq!(run_perft(7, 1), Err(GameError::InvalidSize { size: 7 }));
}
