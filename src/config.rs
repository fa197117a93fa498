//! Configuration file handling for showcase.
//!
//! Loads configuration from `~/.config/showcase/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file structure for showcase.
/// Loaded from ~/.config/showcase/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub autoplay: AutoplayConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct DeckConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct AutoplayConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_autoplay_interval")]
    pub interval_ms: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: default_autoplay_interval(),
        }
    }
}

/// Drives both the visual slide animation and the navigation lock; the
/// two are intentionally the same value.
#[derive(Debug, Deserialize)]
pub struct TransitionConfig {
    #[serde(default = "default_transition_duration")]
    pub duration_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_transition_duration(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GestureConfig {
    #[serde(default = "default_swipe_distance")]
    pub min_swipe_distance: i32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: default_swipe_distance(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub status_bar: bool,
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_bar: true,
            mouse: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_autoplay_interval() -> u64 {
    crate::carousel::AUTOPLAY_INTERVAL.as_millis() as u64
}

fn default_transition_duration() -> u64 {
    crate::carousel::TRANSITION_DURATION.as_millis() as u64
}

fn default_swipe_distance() -> i32 {
    crate::carousel::MIN_SWIPE_DISTANCE
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay.interval_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition.duration_ms)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("com", "showcase", "showcase")
        .map(|d| d.config_dir().to_path_buf().join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/showcase/config.toml")
        })
}

/// Template written by `showcase config init`.
pub const DEFAULT_CONFIG: &str = r#"# showcase configuration

[deck]
# Path to a deck file. Omit to use the built-in sample deck.
# path = "/path/to/deck.toml"

[autoplay]
enabled = true
interval_ms = 5000

[transition]
# Slide animation length. Also the window during which further
# navigation is ignored.
duration_ms = 500

[gesture]
# Minimum horizontal drag distance (in cells) to count as a swipe.
min_swipe_distance = 50

[ui]
status_bar = true
mouse = true
"#;
