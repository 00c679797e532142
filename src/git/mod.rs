//! Git operations using system git commands for maximum compatibility
//!
//! - [`remote`]: locate the repository a command runs against from the
//!   `origin` remote of the working directory

pub mod remote;

pub use remote::{RemoteRepo, origin_url, parse_remote_url, parse_repo_slug};
