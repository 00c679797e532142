//! User operations

use crate::client::GiteaClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A Gitea account as embedded in API payloads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Identity used for submitter matching: the e-mail when the server
    /// exposes one, otherwise the username
    pub fn identity(&self) -> &str {
        if self.email.is_empty() {
            &self.login
        } else {
            &self.email
        }
    }

    /// Full name, falling back to the username
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.login
        } else {
            &self.full_name
        }
    }
}

impl GiteaClient {
    /// Fetch the user the configured token belongs to
    pub async fn current_user(&self) -> Result<User> {
        let url = self.api_url("user");
        let response = self.send(self.client.get(&url), &url).await?;
        Self::decode(response, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_prefers_email() {
        let user = User {
            login: "alice".to_string(),
            full_name: "Alice Liddell".to_string(),
            email: "alice@example.com".to_string(),
        };
        assert_eq!(user.identity(), "alice@example.com");
        assert_eq!(user.display_name(), "Alice Liddell");
    }

    #[test]
    fn test_fallbacks_to_login() {
        let user = User {
            login: "bob".to_string(),
            ..Default::default()
        };
        assert_eq!(user.identity(), "bob");
        assert_eq!(user.display_name(), "bob");
    }
}
