//! Errors returned by the Gitea client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status of 400 or above
    #[error("Gitea API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("failed to parse response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 403,
            message: "token does not have scope".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Gitea API error (403): token does not have scope"
        );
        assert_eq!(err.status(), Some(403));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let err = ApiError::Status {
            status: 404,
            message: String::new(),
        };
        assert!(err.is_not_found());
    }
}
