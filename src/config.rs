use std::path::Path;

use ratatui::style::Color as TermColor;
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Color, Player};

/// Largest accepted board width or height.
pub const MAX_BOARD_SIZE: usize = 64;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub ui: UiConfig,
}

/// Board dimensions. Row count is `height`, column count is `width`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 6,
            height: 7,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player1: PlayerConfig,
    pub player2: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player1: PlayerConfig {
                name: "Player 1".into(),
                color: "red".into(),
            },
            player2: PlayerConfig {
                name: "Player 2".into(),
                color: "blue".into(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

impl PlayerConfig {
    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.color.as_str())
    }
}

/// Presentation settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Colors offered on the setup screen, in cycling order.
    pub palette: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            palette: ["red", "blue", "yellow", "green", "magenta", "cyan"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.board.width > MAX_BOARD_SIZE || self.board.height > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board.width and board.height must be <= {MAX_BOARD_SIZE}"
            )));
        }
        if self.board.width < 4 && self.board.height < 4 {
            warn!(
                width = self.board.width,
                height = self.board.height,
                "board too small for four in a row; games can only end in a tie"
            );
        }

        let first = self.players.player1.to_player();
        let second = self.players.player2.to_player();
        for (key, player) in [("players.player1", &first), ("players.player2", &second)] {
            if player.name().trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key}.name must not be empty")));
            }
            if player.color().as_str().is_empty() {
                return Err(ConfigError::Validation(format!("{key}.color must not be empty")));
            }
        }
        if first.color() == second.color() {
            return Err(ConfigError::Validation(
                "players.player1.color and players.player2.color must differ".into(),
            ));
        }

        let palette = self.palette();
        if palette.len() < 2 {
            return Err(ConfigError::Validation(
                "ui.palette must contain at least two colors".into(),
            ));
        }
        for color in &palette {
            if color.as_str().parse::<TermColor>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "ui.palette entry '{color}' is not a terminal color"
                )));
            }
        }
        for color in [first.color(), second.color()] {
            if !palette.contains(color) {
                return Err(ConfigError::Validation(format!(
                    "ui.palette must contain the player color '{color}'"
                )));
            }
        }

        Ok(())
    }

    /// Palette as normalized color tokens, duplicates removed.
    pub fn palette(&self) -> Vec<Color> {
        let mut colors: Vec<Color> = Vec::new();
        for token in &self.ui.palette {
            let color = Color::new(token);
            if !color.as_str().is_empty() && !colors.contains(&color) {
                colors.push(color);
            }
        }
        colors
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
