//! Resolution of the login and repository a command operates on

use super::CommandContext;
use crate::config::{Config, Login};
use crate::git::{self, RemoteRepo};
use anyhow::{Result, anyhow};
use tea_gitea::GiteaClient;

/// `--login` / `--repo` options shared by repository commands
#[derive(Debug, Clone, Default)]
pub struct TargetArgs {
    pub login: Option<String>,
    /// `<owner>/<repo>`
    pub repo: Option<String>,
}

/// A login plus the repository on its server
#[derive(Debug, Clone)]
pub struct Target {
    pub login: Login,
    pub owner: String,
    pub repo: String,
}

impl Target {
    pub fn client(&self) -> GiteaClient {
        GiteaClient::new(&self.login.url, Some(self.login.token.clone()))
    }
}

impl TargetArgs {
    /// Work out which login and repository to use
    ///
    /// The repository comes from `--repo`, otherwise from the `origin` remote
    /// of the working directory. The login is the one named by `--login`,
    /// otherwise the one whose host matches the remote, otherwise the
    /// default login, otherwise the only configured login.
    pub fn resolve(&self, context: &CommandContext) -> Result<Target> {
        let remote = match git::origin_url(&context.workdir) {
            Ok(url) => git::parse_remote_url(&url).ok(),
            Err(e) => {
                tracing::debug!("no usable git remote: {e:#}");
                None
            }
        };

        let login = select_login(&context.config, self.login.as_deref(), remote.as_ref())?;

        let (owner, repo) = match (&self.repo, remote) {
            (Some(slug), _) => git::parse_repo_slug(slug)?,
            (None, Some(remote)) => (remote.owner, remote.repo),
            (None, None) => {
                return Err(anyhow!(
                    "No repository given. Use --repo <owner>/<repo> or run inside a repository with an origin remote"
                ));
            }
        };

        tracing::debug!(login = %login.name, %owner, %repo, "resolved target");
        Ok(Target {
            login: login.clone(),
            owner,
            repo,
        })
    }
}

fn select_login<'a>(
    config: &'a Config,
    name: Option<&str>,
    remote: Option<&RemoteRepo>,
) -> Result<&'a Login> {
    if let Some(name) = name {
        return config
            .get_login(name)
            .ok_or_else(|| anyhow!("Login '{}' not found. Use `tea login list` to see logins", name));
    }

    if let Some(login) = remote.and_then(|remote| config.login_for_host(&remote.host)) {
        return Ok(login);
    }

    if let Some(login) = config.default_login() {
        return Ok(login);
    }

    match config.logins.as_slice() {
        [only] => Ok(only),
        [] => Err(anyhow!("No logins configured. Use `tea login add` first")),
        _ => Err(anyhow!("Several logins configured; choose one with --login")),
    }
}
