//! Line-based terminal interface for two human players.

use colored::Colorize;
use othello_engine::{Disc, GameState, Location, Outcome};
use rustyline::{error::ReadlineError, DefaultEditor};

/// Run the game until it ends or the players quit.
pub fn ui_loop(mut game: GameState) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        println!("{}", colorize(&game.describe()));

        if game.is_game_over() {
            print_result(&game);
            break;
        }

        let mover = game.active_disc();
        let prompt = format!("{} (player {}) > ", mover, player_of(&game, mover));

        match rl.readline(&prompt) {
            Ok(line) => {
                let cmd = line.trim();
                if cmd.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(cmd);

                match cmd.to_ascii_lowercase().as_str() {
                    "quit" | "q" => break,
                    "moves" | "m" => {
                        println!("Legal moves: {}\n", format_moves(&game.valid_moves()))
                    }
                    _ => match cmd.parse::<Location>() {
                        Ok(loc) if game.is_valid_move(loc.row, loc.col) => {
                            game.place_disc_at(loc.row, loc.col);
                            if !game.is_game_over() && game.active_disc() == mover {
                                println!("{} has no legal move and passes.\n", !mover);
                            }
                        }
                        Ok(loc) => println!(
                            "Illegal move: {}. Legal moves: {}\n",
                            loc,
                            format_moves(&game.valid_moves())
                        ),
                        Err(_) => println!("Unknown command: {}\n", cmd),
                    },
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

// The player who owns `disc`; player 1 if neither does.
fn player_of(game: &GameState, disc: Disc) -> u8 {
    if game.disc_for_player(2) == Some(disc) {
        2
    } else {
        1
    }
}

fn print_result(game: &GameState) {
    let black = game.count(Disc::Black);
    let white = game.count(Disc::White);
    let summary = match game.determine_outcome() {
        Outcome::Tie => "Tie.".to_string(),
        winner => format!("{} wins.", winner),
    };
    println!("Black {} - White {}. {}", black, white, summary.bold());
}

fn format_moves(moves: &[Location]) -> String {
    let moves: Vec<String> = moves.iter().map(Location::to_string).collect();
    format!("[{}]", moves.join(", "))
}

// Color the disc characters of the board text.
fn colorize(board_text: &str) -> String {
    board_text
        .chars()
        .map(|c| match c {
            'B' => "B".bold().to_string(),
            'W' => "W".bright_white().bold().to_string(),
            '-' => "-".dimmed().to_string(),
            other => other.to_string(),
        })
        .collect()
}
