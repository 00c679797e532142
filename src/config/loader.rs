//! Configuration file loading and saving

use super::Login;
use super::validation;
use crate::constants;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layout and paging settings for `tea pulls`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullsSettings {
    pub name_width: usize,
    pub title_width: usize,
    pub ticket_prefix: String,
    /// Maximum pages per listing; `0` disables the bound
    pub max_pages: u32,
}

impl Default for PullsSettings {
    fn default() -> Self {
        Self {
            name_width: constants::pulls::NAME_WIDTH,
            title_width: constants::pulls::TITLE_WIDTH,
            ticket_prefix: constants::pulls::TICKET_PREFIX.to_string(),
            max_pages: constants::pulls::DEFAULT_MAX_PAGES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logins: Vec<Login>,
    #[serde(default)]
    pub pulls: PullsSettings,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the config file: `$TEA_CONFIG`, else `~/.tea/tea.yml`
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(constants::config::CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(home
            .join(constants::config::CONFIG_DIR)
            .join(constants::config::CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration file without validating its contents
    ///
    /// Used by the login commands so a hand-edited file that no longer
    /// validates can still be repaired through `tea logout`/`tea login add`.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), logins = config.logins.len(), "loaded config");
        Ok(config)
    }

    /// Load configuration, treating a missing file as an empty configuration
    pub fn load_or_default(path: &Path) -> Result<Self> {
        Self::or_default(path, Self::load)
    }

    /// Like [`Config::load_or_default`], without validation
    pub fn read_or_default(path: &Path) -> Result<Self> {
        Self::or_default(path, Self::read)
    }

    fn or_default(path: &Path, load: fn(&Path) -> Result<Self>) -> Result<Self> {
        if path.exists() {
            load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::new())
        }
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory {}", parent.display())
                })?;
            }
        }

        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("---\n{}", yaml))
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validation::ensure_valid_logins(&self.logins)?;
        validation::validate_width("name_width", self.pulls.name_width)?;
        validation::validate_width("title_width", self.pulls.title_width)?;
        validation::validate_ticket_prefix(&self.pulls.ticket_prefix)?;
        Ok(())
    }

    /// Get login by name
    pub fn get_login(&self, name: &str) -> Option<&Login> {
        self.logins.iter().find(|login| login.name == name)
    }

    /// The login marked as default, if any
    pub fn default_login(&self) -> Option<&Login> {
        self.logins.iter().find(|login| login.default)
    }

    /// The first login whose server host equals `host`
    pub fn login_for_host(&self, host: &str) -> Option<&Login> {
        self.logins
            .iter()
            .find(|login| login.host().eq_ignore_ascii_case(host))
    }

    /// Add a login; the first login added becomes the default
    pub fn add_login(&mut self, mut login: Login) -> Result<()> {
        if self.get_login(&login.name).is_some() {
            return Err(anyhow!("Login '{}' already exists", login.name));
        }

        validation::validate_login(&login).map_err(validation::validation_errors_to_anyhow)?;

        if self.default_login().is_none() {
            login.default = true;
        }
        self.logins.push(login);
        Ok(())
    }

    /// Remove a login; returns whether it existed
    ///
    /// When the default login is removed the first remaining one takes over.
    pub fn remove_login(&mut self, name: &str) -> bool {
        let initial_len = self.logins.len();
        self.logins.retain(|login| login.name != name);
        let removed = self.logins.len() != initial_len;

        if removed && self.default_login().is_none() {
            if let Some(first) = self.logins.first_mut() {
                first.default = true;
            }
        }
        removed
    }
}
