//! Stored server logins

use serde::{Deserialize, Serialize};

/// Credentials and identity for one Gitea server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub name: String,
    /// Web root of the server, e.g. `https://gitea.example.com`
    pub url: String,
    pub token: String,
    /// Identity pull requests are matched against with `--match-login`
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub default: bool,
}

impl Login {
    pub fn new(name: &str, url: &str, token: &str, user: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            user: user.to_string(),
            default: false,
        }
    }

    /// Host part of the login URL, without scheme, port or path
    pub fn host(&self) -> &str {
        host_of(&self.url)
    }
}

/// Extract the host from an `http(s)://host[:port]/path` URL
pub fn host_of(url: &str) -> &str {
    let without_scheme = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url);
    let authority = without_scheme.split('/').next().unwrap_or_default();
    let authority = authority.rsplit('@').next().unwrap_or(authority);
    authority.split(':').next().unwrap_or(authority)
}
