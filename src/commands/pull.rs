//! Single pull request command

use super::{Command, CommandContext, PullFilter, PullsCommand, TargetArgs};
use crate::constants::pulls::DATE_FORMAT;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use colored::*;
use tea_gitea::PullRequest;

/// Show or merge one pull request; without an index, list them
pub struct PullCommand {
    pub index: Option<String>,
    pub merge: bool,
    pub target: TargetArgs,
    pub filter: PullFilter,
}

#[async_trait]
impl Command for PullCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let Some(index) = &self.index else {
            return PullsCommand {
                target: self.target.clone(),
                filter: self.filter.clone(),
            }
            .execute(context)
            .await;
        };

        if self.filter.is_set() {
            return Err(anyhow!(
                "--match-login, --match, --author and --max-pages only apply when listing; drop them or the index"
            ));
        }

        let index = parse_index(index)?;
        let target = self.target.resolve(context)?;
        let client = target.client();

        let pull = match client
            .get_pull_request(&target.owner, &target.repo, index)
            .await
        {
            Ok(pull) => pull,
            Err(e) if e.is_not_found() => {
                println!("{}", "Pull request not found".yellow());
                return Ok(());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to get pull request #{}", index));
            }
        };

        if self.merge {
            client
                .merge_pull_request(&target.owner, &target.repo, index)
                .await
                .with_context(|| format!("Failed to merge pull request #{}", index))?;
            println!(
                "{}",
                format!("Merged pull request #{} ({})", pull.number, pull.title).green()
            );
        } else {
            println!("{}", detail_line(&pull));
        }

        Ok(())
    }
}

/// Parse the positional pull request index
pub fn parse_index(index: &str) -> Result<i64> {
    index
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid pull request index '{}'", index))
}

/// Tab-separated detail line: index, submitter, update time, title, body
pub fn detail_line(pull: &PullRequest) -> String {
    let name = pull
        .user
        .as_ref()
        .map(|user| user.display_name())
        .unwrap_or_default();
    format!(
        "#{}\t{}\t{}\t{}\t{}",
        pull.number,
        name,
        pull.updated_at.format(DATE_FORMAT),
        pull.title,
        pull.body()
    )
}
