//! Base types and traits for the command pattern

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Context passed to all commands containing shared configuration and options
#[derive(Clone)]
pub struct CommandContext {
    /// The loaded configuration
    pub config: Config,
    /// Where the configuration was loaded from and is saved to
    pub config_path: PathBuf,
    /// Directory used to discover the git remote
    pub workdir: PathBuf,
}

impl CommandContext {
    pub fn new(config: Config, config_path: PathBuf, workdir: PathBuf) -> Self {
        Self {
            config,
            config_path,
            workdir,
        }
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
