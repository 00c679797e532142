//! Gitea client implementation

use crate::error::{ApiError, Result};
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;

pub(crate) const USER_AGENT: &str = concat!("tea/", env!("CARGO_PKG_VERSION"));

/// Gitea API client for making authenticated requests
///
/// The client is bound to one server. `base_url` is the web root of the
/// instance (e.g. `https://gitea.example.com`); API paths are appended
/// under `/api/v1`.
pub struct GiteaClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
}

/// HTTP metadata returned alongside a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    /// Value of the `X-Total-Count` header, when the server sends one
    pub total_count: Option<u64>,
}

impl ResponseMeta {
    pub(crate) fn from_response(response: &Response) -> Self {
        let total_count = response
            .headers()
            .get("X-Total-Count")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok());
        Self {
            status: response.status().as_u16(),
            total_count,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GiteaClient {
    /// Create a new client for the server at `base_url`
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    /// Web root of the server this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json");
        match &self.token {
            Some(token) => request.header("Authorization", format!("token {}", token)),
            None => request,
        }
    }

    /// Send a request and turn transport failures and statuses >= 400 into errors
    pub(crate) async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        tracing::debug!(url, "sending Gitea API request");

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) => body.message,
                Err(_) if text.trim().is_empty() => status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
                Err(_) => text,
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
        response: Response,
        url: &str,
    ) -> Result<T> {
        response.json().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
