//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::DateTime;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tea::config::{Config, Login};
use tea::pulls::PullRequestSource;
use tea_gitea::{ApiError, PullRequest, ResponseMeta, User};
use tempfile::TempDir;

/// A test workspace with temporary directory and config management
pub struct Workspace {
    pub root: TempDir,
    pub config_path: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let config_path = root.path().join("tea.yml");
        Self { root, config_path }
    }

    /// Write a config holding one default login for `url`
    pub fn write_login(&self, url: &str, user: &str) -> Config {
        let mut config = Config::new();
        config
            .add_login(Login::new("test", url, "secret", user))
            .expect("Failed to add login");
        config.save(&self.config_path).expect("Failed to save config");
        config
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

/// Build a pull request record as the API client would deserialize it
pub fn pull(number: i64, login: &str, body: &str) -> PullRequest {
    PullRequest {
        number,
        title: format!("Change number {}", number),
        body: Some(body.to_string()),
        user: Some(User {
            login: login.to_string(),
            full_name: String::new(),
            email: String::new(),
        }),
        updated_at: DateTime::parse_from_rfc3339("2024-04-05T06:07:08Z").unwrap(),
    }
}

/// JSON payload for one pull request in a listing
pub fn pull_json(number: i64, login: &str, body: &str) -> serde_json::Value {
    json!({
        "number": number,
        "title": format!("Change number {}", number),
        "body": body,
        "user": { "login": login, "full_name": "", "email": "" },
        "updated_at": "2024-04-05T06:07:08Z",
        "state": "open"
    })
}

/// Scripted page outcome for [`FakeSource`]
pub enum FakePage {
    Pulls(Vec<Option<PullRequest>>),
    Error,
}

/// In-memory pull request source recording every requested page
pub struct FakeSource {
    pages: Vec<FakePage>,
    requested: Mutex<Vec<u32>>,
}

impl FakeSource {
    pub fn new(pages: Vec<FakePage>) -> Self {
        Self {
            pages,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestSource for FakeSource {
    async fn list_pull_requests(
        &self,
        _owner: &str,
        _repo: &str,
        page: u32,
    ) -> Result<(Vec<Option<PullRequest>>, ResponseMeta), ApiError> {
        self.requested.lock().unwrap().push(page);

        let meta = ResponseMeta {
            status: 200,
            total_count: None,
        };
        match page
            .checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
        {
            Some(FakePage::Pulls(pulls)) => Ok((pulls.clone(), meta)),
            Some(FakePage::Error) => Err(ApiError::Status {
                status: 500,
                message: "internal error".to_string(),
            }),
            None => Ok((Vec::new(), meta)),
        }
    }
}
