use std::path::{Path, PathBuf};

use derive_more::{Display, Error, From};
use othello_engine::{GameConfig, GameError};

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("failed to read config file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display("failed to parse TOML: {_0}")]
    #[from]
    TomlParse(#[error(source)] toml::de::Error),

    #[display("config validation error: {_0}")]
    #[from]
    Validation(#[error(source)] GameError),
}

/// Load a game configuration from a TOML file. Missing keys take their
/// default values.
pub fn load(path: &Path) -> Result<GameConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: GameConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load the configuration at `path`, or the defaults when no file is given.
pub fn load_or_default(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    match path {
        Some(path) => load(path),
        None => Ok(GameConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_engine::Disc;

    #[test]
    fn parse_partial_config() {
        let config: GameConfig = toml::from_str("size = 6\nstart_disc = \"White\"\n").unwrap();
        assert_eq!(
            config,
            GameConfig {
                size: 6,
                start_player: 1,
                start_disc: Disc::White,
            }
        );
    }

    #[test]
    fn parse_empty_config_gives_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn unknown_disc_fails_to_parse() {
        assert!(toml::from_str::<GameConfig>("start_disc = \"Purple\"").is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = GameConfig {
            size: 4,
            start_player: 2,
            start_disc: Disc::White,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<GameConfig>(&text).unwrap(), config);
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load_or_default(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn load_or_default_reads_the_given_file() {
        let file_name = format!("othello-config-{}.toml", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, "size = 6\nstart_player = 2\n").unwrap();
        let config = load_or_default(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config.unwrap(),
            GameConfig {
                size: 6,
                start_player: 2,
                start_disc: Disc::Black,
            }
        );
        assert!(matches!(
            load_or_default(Some(Path::new("does/not/exist.toml"))),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let path = Path::new("does/not/exist.toml");
        let err = load(path).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
        assert!(err.to_string().starts_with("failed to read config file does/not/exist.toml"));
    }

    #[test]
    fn validation_error_display() {
        let err = ConfigError::from(GameError::InvalidPlayer { player: 3 });
        assert_eq!(
            err.to_string(),
            "config validation error: invalid player 3: must be 1 or 2"
        );
    }
}
