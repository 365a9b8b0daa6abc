//! Configuration management for chatgrab.
//!
//! Loaded from `<config dir>/chatgrab/config.toml` (e.g.
//! `~/.config/chatgrab/config.toml` on Linux). A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::ExtractionConfig;
use crate::fetch::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::files::filename::{self, FileTemplate};

/// Conversation fetched when no URL or input file is given.
pub const DEFAULT_URL: &str = "https://chat.openai.com/share/4ad82157-c4b9-421e-9e33-7902ea940d71";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchSettings,
    pub output: OutputSettings,
    pub extract: ExtractionConfig,
}

/// HTTP retrieval settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// URL used when neither a URL nor an input file is given
    pub default_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Pause between consecutive requests in batch mode, in milliseconds
    pub delay_ms: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            default_url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            delay_ms: 1000,
        }
    }
}

impl FetchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Where and under which name transcripts are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory for transcript files (relative paths resolve against the cwd)
    pub directory: PathBuf,
    /// Filename template with exactly one `{id}` tag
    pub filename_template: String,
    /// Maximum length of the `{id}` component
    pub id_max_length: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            filename_template: filename::DEFAULT_TEMPLATE.to_string(),
            id_max_length: filename::DEFAULT_ID_MAX_LENGTH,
        }
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults.
    ///
    /// A host without a config directory also gets the defaults.
    pub fn load() -> Result<Self> {
        Self::load_in(dirs::config_dir())
    }

    fn load_in(config_dir: Option<PathBuf>) -> Result<Self> {
        match config_dir {
            Some(dir) => Self::load_from(&path_in(&dir)),
            None => {
                debug!("no config directory on this host, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        FileTemplate::parse(&config.output.filename_template)
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write config: {:?}", path))?;
        Ok(())
    }

    /// Default config file path.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(path_in(&dir))
    }
}

fn path_in(config_dir: &Path) -> PathBuf {
    config_dir.join("chatgrab").join("config.toml")
}
