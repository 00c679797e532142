//! Pull request listing command

use super::{Command, CommandContext, TargetArgs};
use crate::config::PullsSettings;
use crate::pulls::{
    FormatOptions, ListOptions, MatchCriteria, PageSummary, PullRequestSource, paginate,
};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use colored::*;
use std::io::Write;

/// Submitter filter options of `tea pulls`
#[derive(Debug, Clone, Default)]
pub struct PullFilter {
    /// Only list pull requests opened by the identity of the current login
    pub match_login: bool,
    /// Comma-separated submitter identities
    pub matches: Option<String>,
    /// A single submitter identity
    pub author: Option<String>,
    /// Overrides `pulls.max_pages` from the config
    pub max_pages: Option<u32>,
}

impl PullFilter {
    /// Whether any listing-only option was given
    pub fn is_set(&self) -> bool {
        self.match_login
            || self.matches.is_some()
            || self.author.is_some()
            || self.max_pages.is_some()
    }

    /// Criteria for a listing made with the login identified as `current_login`
    pub fn criteria(&self, current_login: &str) -> Result<MatchCriteria> {
        if self.match_login && current_login.trim().is_empty() {
            return Err(anyhow!(
                "The selected login has no user identity; add it again with `tea login add --user`"
            ));
        }

        Ok(MatchCriteria::resolve(
            self.author.as_deref(),
            self.matches.as_deref(),
            self.match_login,
            current_login,
        ))
    }
}

/// List open pull requests of a repository
pub struct PullsCommand {
    pub target: TargetArgs,
    pub filter: PullFilter,
}

#[async_trait]
impl Command for PullsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let target = self.target.resolve(context)?;
        let criteria = self.filter.criteria(&target.login.user)?;
        let format = FormatOptions::new(&target.login.url, &target.owner, &target.repo);
        let options = list_options(&context.config.pulls, format, self.filter.max_pages);

        let client = target.client();
        let mut stdout = std::io::stdout();
        let summary = list_pulls(&client, &criteria, &options, &mut stdout)
            .await
            .with_context(|| {
                format!(
                    "Failed to list pull requests of {}/{}",
                    target.owner, target.repo
                )
            })?;

        if summary.received == 0 {
            println!("{}", "No pull requests left".yellow());
        }

        Ok(())
    }
}

/// Listing options from the config, with an optional page bound override
pub fn list_options(
    settings: &PullsSettings,
    format: FormatOptions,
    max_pages: Option<u32>,
) -> ListOptions {
    ListOptions::new(format.with_widths(settings.name_width, settings.title_width))
        .with_ticket_prefix(settings.ticket_prefix.clone())
        .with_max_pages(max_pages.unwrap_or(settings.max_pages))
}

/// Run the listing and write one line per matching pull request to `out`
///
/// Rows are written as their page arrives, so a failure on a later page
/// leaves the earlier rows in `out`. A failed write stops the listing
/// before the next page is requested.
pub async fn list_pulls<S, W>(
    source: &S,
    criteria: &MatchCriteria,
    options: &ListOptions,
    out: &mut W,
) -> Result<PageSummary>
where
    S: PullRequestSource + ?Sized,
    W: Write,
{
    let summary = paginate(source, criteria, options, |row| writeln!(out, "{}", row)).await?;
    Ok(summary)
}
