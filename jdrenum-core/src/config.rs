use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

pub const DEFAULT_DIGITS: usize = 2;

/// Everything one renumbering run needs. Built once by the caller and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenumberConfig {
    /// Prefix of the folders to pick up, e.g. `10` in `10.01 Projects`.
    pub source_prefix: String,
    /// Prefix to write. Empty means "keep the source prefix".
    pub target_prefix: String,
    /// First number to assign. Zero keeps each folder's own decimal.
    pub start: u64,
    pub root: PathBuf,
    pub dry_run: bool,
    /// Width the decimal is zero-padded to.
    pub digits: usize,
}

impl RenumberConfig {
    pub fn new(source_prefix: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            source_prefix: source_prefix.into(),
            target_prefix: String::new(),
            start: 0,
            root: root.into(),
            dry_run: false,
            digits: DEFAULT_DIGITS,
        }
    }

    #[must_use]
    pub fn with_target_prefix(mut self, target_prefix: impl Into<String>) -> Self {
        self.target_prefix = target_prefix.into();
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn renumbering(&self) -> bool {
        self.start > 0
    }

    /// The prefix every planned name is written with.
    pub fn effective_target_prefix(&self) -> &str {
        if self.target_prefix.is_empty() {
            &self.source_prefix
        } else {
            &self.target_prefix
        }
    }
}

/// Defaults read from `.jdrenum/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default digit width for the decimal part
    #[serde(default = "default_digits")]
    pub digits: usize,

    /// Default output format: "summary", "table" or "json"
    #[serde(default)]
    pub output: OutputFormat,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            output: OutputFormat::default(),
            use_color: None,
        }
    }
}

fn default_digits() -> usize {
    DEFAULT_DIGITS
}

impl Config {
    /// Load config from .jdrenum/config.toml in the current directory if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".jdrenum").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
