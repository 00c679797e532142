//! Command implementations

pub mod base;
pub mod login;
pub mod pull;
pub mod pulls;
pub mod target;

pub use base::{Command, CommandContext};
pub use login::{LoginAddCommand, LoginListCommand, LogoutCommand};
pub use pull::PullCommand;
pub use pulls::{PullFilter, PullsCommand};
pub use target::{Target, TargetArgs};
