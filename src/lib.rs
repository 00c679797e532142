//! Tea - A command line client for Gitea pull requests

pub mod commands;
pub mod config;
pub mod constants;
pub mod git;
pub mod pulls;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Config, Login};
pub use pulls::{MatchCriteria, PullRequestSource, paginate};
