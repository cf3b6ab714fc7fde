mod config;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use othello_engine::{Disc, GameConfig, GameState};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play a two-player game of Othello in the terminal.
#[derive(Parser, Debug)]
#[command(name = "othello", version)]
struct Cli {
    /// TOML file with `size`, `start_player` and `start_disc`
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Board edge length: 4, 6 or 8
    #[arg(long)]
    size: Option<usize>,

    /// Player who moves first: 1 or 2
    #[arg(long)]
    start_player: Option<u8>,

    /// Color of the first move: black or white
    #[arg(long)]
    start_disc: Option<Disc>,
}

impl Cli {
    /// The config file (or defaults) with command-line flags applied on top.
    fn game_config(&self) -> Result<GameConfig, config::ConfigError> {
        let mut game_config = config::load_or_default(self.config.as_deref())?;

        if let Some(size) = self.size {
            game_config.size = size;
        }
        if let Some(player) = self.start_player {
            game_config.start_player = player;
        }
        if let Some(disc) = self.start_disc {
            game_config.start_disc = disc;
        }

        game_config.validate()?;
        Ok(game_config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let game_config = cli.game_config()?;
    info!(?game_config, "starting game");

    let game = GameState::from_config(&game_config)?;
    ui::ui_loop(game)?;
    Ok(())
}
