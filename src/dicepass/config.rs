use crate::error::{DiceError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_SEPARATOR: &str = " ";
pub const DEFAULT_MAX_LEN: i64 = 64;
pub const DEFAULT_MIN_LEN: i64 = 20;
pub const DEFAULT_WORD_COUNT: i64 = 3;

/// Settings persisted between runs, stored as config.json in the user's
/// config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Start in dark mode
    #[serde(rename = "darkMode")]
    pub dark_mode: bool,

    /// Draw from the extended word list as well
    #[serde(rename = "useExtendedWordList")]
    pub extra: bool,

    /// Longest permissible generated password
    #[serde(rename = "maxLen")]
    pub max_len: i64,

    /// Shortest permissible generated password
    #[serde(rename = "minLen")]
    pub min_len: i64,

    /// Placed between generated words, verbatim
    pub separator: String,

    /// Number of words to generate
    #[serde(rename = "wordCount")]
    pub word_count: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            extra: false,
            max_len: DEFAULT_MAX_LEN,
            min_len: DEFAULT_MIN_LEN,
            separator: DEFAULT_SEPARATOR.to_string(),
            word_count: DEFAULT_WORD_COUNT,
        }
    }
}

/// The fields a config file actually contains. Absent fields leave the
/// current value alone.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    #[serde(rename = "darkMode")]
    dark_mode: Option<bool>,
    #[serde(rename = "useExtendedWordList")]
    extra: Option<bool>,
    #[serde(rename = "maxLen")]
    max_len: Option<i64>,
    #[serde(rename = "minLen")]
    min_len: Option<i64>,
    separator: Option<String>,
    #[serde(rename = "wordCount")]
    word_count: Option<i64>,
}

impl AppConfig {
    /// Overlays the file at `path` onto `self`.
    ///
    /// Returns `Ok(false)` when there is no file, leaving `self` untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(false);
        }

        let content = fs::read_to_string(path).map_err(DiceError::Io)?;
        let overlay: ConfigOverlay =
            serde_json::from_str(&content).map_err(DiceError::Serialization)?;
        self.apply(overlay);
        Ok(true)
    }

    /// Writes the config to `path`, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(DiceError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(DiceError::Serialization)?;
        fs::write(path, content).map_err(DiceError::Io)?;
        Ok(())
    }

    fn apply(&mut self, overlay: ConfigOverlay) {
        if let Some(v) = overlay.dark_mode {
            self.dark_mode = v;
        }
        if let Some(v) = overlay.extra {
            self.extra = v;
        }
        if let Some(v) = overlay.max_len {
            self.max_len = v;
        }
        if let Some(v) = overlay.min_len {
            self.min_len = v;
        }
        if let Some(v) = overlay.separator {
            self.separator = v;
        }
        if let Some(v) = overlay.word_count {
            self.word_count = v;
        }
    }
}

/// The platform's per-user config file location, if one can be found.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "dicepass", "dicepass")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Picks the config file: an explicit path wins, otherwise the platform
/// default. `None` means the session runs without persistence.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path);
    }
    match default_config_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "using config file");
            Some(path)
        }
        None => {
            tracing::warn!(
                "unable to identify a suitable config directory; configuration will not be saved"
            );
            None
        }
    }
}

/// Loads `path` over `config`, logging instead of failing.
///
/// Returns a human-readable warning when the file existed but could not be
/// used.
pub fn load_or_warn(config: &mut AppConfig, path: Option<&Path>) -> Option<String> {
    let path = path?;
    match config.load(path) {
        Ok(true) => {
            tracing::info!(path = %path.display(), "loaded config");
            None
        }
        Ok(false) => {
            tracing::info!(path = %path.display(), "no config file yet, using defaults");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config file could not be loaded");
            Some(format!(
                "Config file {} could not be loaded: {}",
                path.display(),
                e
            ))
        }
    }
}
