//! Pull request operations

use crate::client::{GiteaClient, ResponseMeta};
use crate::error::Result;
use crate::users::User;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A pull request as returned by `GET /repos/{owner}/{repo}/pulls`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub number: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Submitter; Gitea leaves this null for deleted accounts
    #[serde(default)]
    pub user: Option<User>,
    pub updated_at: DateTime<FixedOffset>,
}

impl PullRequest {
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Merge strategy sent to the merge endpoint
const MERGE_STYLE: &str = "rebase";

#[derive(Serialize)]
struct MergePullRequestPayload<'a> {
    #[serde(rename = "Do")]
    style: &'a str,
}

impl GiteaClient {
    /// List one page of open pull requests for a repository
    ///
    /// Pages are 1-based. Entries that the server returns as `null` are kept
    /// as `None` so callers can decide how to treat them.
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent, the server answers
    /// with a status of 400 or above, or the body cannot be parsed
    pub async fn list_repo_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<(Vec<Option<PullRequest>>, ResponseMeta)> {
        let url = self.api_url(&format!("repos/{}/{}/pulls", owner, repo));
        let request = self
            .client
            .get(&url)
            .query(&[("state", "open"), ("page", &page.to_string())]);

        let response = self.send(request, &url).await?;
        let meta = ResponseMeta::from_response(&response);
        let pulls: Vec<Option<PullRequest>> = Self::decode(response, &url).await?;
        Ok((pulls, meta))
    }

    /// Get a specific pull request by index
    pub async fn get_pull_request(&self, owner: &str, repo: &str, index: i64) -> Result<PullRequest> {
        let url = self.api_url(&format!("repos/{}/{}/pulls/{}", owner, repo, index));
        let response = self.send(self.client.get(&url), &url).await?;
        Self::decode(response, &url).await
    }

    /// Merge a pull request by rebasing it onto its base branch
    pub async fn merge_pull_request(&self, owner: &str, repo: &str, index: i64) -> Result<()> {
        let url = self.api_url(&format!("repos/{}/{}/pulls/{}/merge", owner, repo, index));
        let payload = MergePullRequestPayload { style: MERGE_STYLE };
        self.send(self.client.post(&url).json(&payload), &url).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_null_body_and_user() {
        let json = r#"{
            "number": 7,
            "title": "Fix login",
            "body": null,
            "user": null,
            "updated_at": "2024-03-01T10:20:30+01:00"
        }"#;
        let pr: PullRequest = serde_json::from_str(json).unwrap();
        assert_eq!(pr.number, 7);
        assert_eq!(pr.body(), "");
        assert!(pr.user.is_none());
        assert_eq!(pr.updated_at.offset().local_minus_utc(), 3600);
    }
}
