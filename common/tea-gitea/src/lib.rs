//! Gitea API client library
//!
//! This library provides the subset of the Gitea REST API (`/api/v1`) used by
//! the `tea` command line: listing and fetching pull requests, merging them,
//! and identifying the authenticated user.
//!
//! ## Modules
//!
//! - [`client`]: Core Gitea client implementation
//! - [`error`]: API error type
//! - [`pull_requests`]: Pull request listing, retrieval and merging
//! - [`users`]: Authenticated user lookup

mod client;
mod error;
mod pull_requests;
mod users;

// Re-export public API
pub use client::{GiteaClient, ResponseMeta};
pub use error::{ApiError, Result};
pub use pull_requests::PullRequest;
pub use users::User;
