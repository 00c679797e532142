//! Remote URL discovery and parsing

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::process::Command;

/// Server and repository a git remote points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepo {
    pub host: String,
    pub owner: String,
    pub repo: String,
}

/// URL of the `origin` remote of the repository containing `dir`
pub fn origin_url(dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .current_dir(dir)
        .output()
        .context("Failed to execute git remote command")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to read origin remote: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Parse a git remote URL into host, owner and repository name
///
/// Supports:
/// - SSH: `git@host:owner/repo.git`
/// - SSH with scheme: `ssh://git@host:2222/owner/repo.git`
/// - HTTPS: `https://host/owner/repo.git`, including servers mounted under
///   a sub path (`https://host/gitea/owner/repo`), where the last two path
///   segments are taken
pub fn parse_remote_url(url: &str) -> Result<RemoteRepo> {
    let trimmed = url.trim().trim_end_matches('/').trim_end_matches(".git");

    if let Some(rest) = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .or_else(|| trimmed.strip_prefix("ssh://"))
    {
        let mut parts = rest.split('/');
        let authority = parts.next().unwrap_or_default();
        let segments: Vec<&str> = parts.filter(|s| !s.is_empty()).collect();
        if segments.len() >= 2 {
            return Ok(remote(
                host_without_user_and_port(authority),
                segments[segments.len() - 2],
                segments[segments.len() - 1],
            ));
        }
    } else if let Some((authority, path)) = trimmed.split_once(':') {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Ok(remote(
                host_without_user_and_port(authority),
                parts[0],
                parts[1],
            ));
        }
    }

    Err(anyhow!("Invalid remote URL format: {}", url))
}

/// Parse an `owner/repo` argument
pub fn parse_repo_slug(slug: &str) -> Result<(String, String)> {
    match slug.trim().trim_matches('/').split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(anyhow!(
            "Invalid repository '{}', expected <owner>/<repo>",
            slug
        )),
    }
}

fn host_without_user_and_port(authority: &str) -> &str {
    let host = authority.rsplit('@').next().unwrap_or(authority);
    host.split(':').next().unwrap_or(host)
}

fn remote(host: &str, owner: &str, repo: &str) -> RemoteRepo {
    RemoteRepo {
        host: host.to_string(),
        owner: owner.to_string(),
        repo: repo.to_string(),
    }
}
