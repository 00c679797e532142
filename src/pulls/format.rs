//! Fixed-width row rendering for pull request listings

use crate::constants::pulls::{DATE_FORMAT, ELLIPSIS, NAME_WIDTH, TITLE_WIDTH};
use std::fmt;
use tea_gitea::PullRequest;

/// Fit `text` into exactly `width` characters
///
/// Longer values keep their first `width - 3` characters followed by `...`;
/// shorter ones are padded with spaces on the right. Widths are counted in
/// characters, not bytes.
pub fn fit_column(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let keep = width.saturating_sub(ELLIPSIS.len());
        let mut fitted: String = text.chars().take(keep).collect();
        fitted.push_str(ELLIPSIS);
        fitted
    } else {
        format!("{:<width$}", text, width = width)
    }
}

/// Layout settings shared by every row of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub name_width: usize,
    pub title_width: usize,
    /// Web root of the server, used to build pull request links
    pub base_url: String,
    pub owner: String,
    pub repo: String,
}

impl FormatOptions {
    pub fn new(base_url: &str, owner: &str, repo: &str) -> Self {
        Self {
            name_width: NAME_WIDTH,
            title_width: TITLE_WIDTH,
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    pub fn with_widths(mut self, name_width: usize, title_width: usize) -> Self {
        self.name_width = name_width;
        self.title_width = title_width;
        self
    }

    /// Web link to a pull request of the configured repository
    pub fn link(&self, index: i64) -> String {
        format!(
            "{}/{}/{}/pulls/{}",
            self.base_url, self.owner, self.repo, index
        )
    }
}

/// One line of `tea pulls` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRow {
    pub index: i64,
    pub display_name: String,
    pub updated_at: String,
    pub title: String,
    pub link: String,
    pub ticket: String,
}

impl FormattedRow {
    pub fn new(pull: &PullRequest, ticket: &str, options: &FormatOptions) -> Self {
        let name = pull
            .user
            .as_ref()
            .map(|user| user.display_name())
            .unwrap_or_default();

        Self {
            index: pull.number,
            display_name: fit_column(name, options.name_width),
            updated_at: pull.updated_at.format(DATE_FORMAT).to_string(),
            title: fit_column(&pull.title, options.title_width),
            link: options.link(pull.number),
            ticket: ticket.to_string(),
        }
    }
}

impl fmt::Display for FormattedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}\t{}\t{}\t{}\t{}\t{}",
            self.index, self.display_name, self.updated_at, self.title, self.link, self.ticket
        )
    }
}
