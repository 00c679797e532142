//! Configuration management module

pub mod loader;
pub mod login;
pub mod validation;

pub use loader::{Config, PullsSettings};
pub use login::Login;
pub use validation::ValidationError;
