//! Page-by-page retrieval of open pull requests
//!
//! [`paginate`] walks the listing endpoint from page 1 until the server
//! returns an empty page, filtering and formatting each entry as it arrives.
//! Pages are requested one at a time; a page is fully emitted before the
//! next one is asked for.

use super::format::{FormatOptions, FormattedRow};
use super::matcher::MatchCriteria;
use super::ticket::extract_ticket;
use crate::constants::pulls::{FIRST_PAGE, TICKET_PREFIX};
use async_trait::async_trait;
use std::io;
use tea_gitea::{ApiError, GiteaClient, PullRequest, ResponseMeta};
use thiserror::Error;

/// Anything able to serve pages of open pull requests
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<(Vec<Option<PullRequest>>, ResponseMeta), ApiError>;
}

#[async_trait]
impl PullRequestSource for GiteaClient {
    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<(Vec<Option<PullRequest>>, ResponseMeta), ApiError> {
        self.list_repo_pull_requests(owner, repo, page).await
    }
}

#[derive(Debug, Error)]
pub enum PagerError {
    #[error("failed to fetch page {page} of pull requests")]
    Api {
        page: u32,
        #[source]
        source: ApiError,
    },

    #[error("page {page} of pull requests returned status {status}")]
    Status { page: u32, status: u16 },

    #[error("stopped after {limit} pages without reaching the end of the listing")]
    PageLimit { limit: u32 },

    #[error("failed to write a row of page {page}")]
    Emit {
        page: u32,
        #[source]
        source: io::Error,
    },
}

/// What a listing walks over and how rows are rendered
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub format: FormatOptions,
    pub ticket_prefix: String,
    /// `None` keeps requesting pages until an empty one comes back
    pub max_pages: Option<u32>,
}

impl ListOptions {
    pub fn new(format: FormatOptions) -> Self {
        Self {
            format,
            ticket_prefix: TICKET_PREFIX.to_string(),
            max_pages: None,
        }
    }

    pub fn with_ticket_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ticket_prefix = prefix.into();
        self
    }

    /// Bound the number of pages requested; `0` removes the bound
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = (max_pages > 0).then_some(max_pages);
        self
    }
}

/// Counters describing a finished listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSummary {
    /// Pages requested, including the terminating empty one
    pub pages: u32,
    /// Entries received, null entries included
    pub received: usize,
    /// Rows handed to the caller
    pub emitted: usize,
}

/// Fetch every open pull request of `options.format.owner/repo`
///
/// Each entry that passes `criteria` is turned into a [`FormattedRow`] and
/// passed to `emit` as soon as its page arrives. Null entries and entries
/// without a submitter are skipped. The first failing page, or the first
/// row `emit` rejects, ends the walk with an error; no further page is
/// requested after that.
pub async fn paginate<S, F>(
    source: &S,
    criteria: &MatchCriteria,
    options: &ListOptions,
    mut emit: F,
) -> Result<PageSummary, PagerError>
where
    S: PullRequestSource + ?Sized,
    F: FnMut(FormattedRow) -> io::Result<()>,
{
    let owner = options.format.owner.as_str();
    let repo = options.format.repo.as_str();
    let mut summary = PageSummary::default();
    let mut page = FIRST_PAGE;

    loop {
        if let Some(limit) = options.max_pages {
            if summary.pages >= limit {
                tracing::warn!(limit, "page limit reached");
                return Err(PagerError::PageLimit { limit });
            }
        }

        let (pulls, meta) = source
            .list_pull_requests(owner, repo, page)
            .await
            .map_err(|source| PagerError::Api { page, source })?;
        summary.pages += 1;

        if meta.status >= 400 {
            return Err(PagerError::Status {
                page,
                status: meta.status,
            });
        }

        tracing::debug!(
            page,
            entries = pulls.len(),
            total = ?meta.total_count,
            "fetched pull request page"
        );

        if pulls.is_empty() {
            return Ok(summary);
        }
        summary.received += pulls.len();

        for pull in pulls.iter().flatten() {
            if !criteria.matches_pull(pull) {
                continue;
            }
            let ticket = extract_ticket(pull.body(), &options.ticket_prefix);
            emit(FormattedRow::new(pull, ticket, &options.format))
                .map_err(|source| PagerError::Emit { page, source })?;
            summary.emitted += 1;
        }

        page += 1;
    }
}
