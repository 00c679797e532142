//! Login management commands

use super::{Command, CommandContext};
use crate::config::Login;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use colored::*;
use tea_gitea::GiteaClient;

/// Verify a token against a server and store it as a login
pub struct LoginAddCommand {
    pub name: String,
    pub url: String,
    pub token: String,
    /// Identity to match with `--match-login`; looked up on the server if absent
    pub user: Option<String>,
}

#[async_trait]
impl Command for LoginAddCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let mut config = context.config.clone();
        if config.get_login(&self.name).is_some() {
            return Err(anyhow!("Login '{}' already exists", self.name));
        }

        let client = GiteaClient::new(&self.url, Some(self.token.clone()));
        let account = client
            .current_user()
            .await
            .with_context(|| format!("Failed to verify token against {}", self.url))?;

        let user = match &self.user {
            Some(user) => user.clone(),
            None => account.identity().to_string(),
        };

        config.add_login(Login::new(&self.name, &self.url, &self.token, &user))?;
        config.save(&context.config_path)?;

        println!(
            "{}",
            format!(
                "Login '{}' added for {} as {}",
                self.name,
                account.login,
                user
            )
            .green()
        );
        Ok(())
    }
}

/// Print configured logins, marking the default one
pub struct LoginListCommand;

#[async_trait]
impl Command for LoginListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        if context.config.logins.is_empty() {
            println!("{}", "No logins configured".yellow());
            return Ok(());
        }

        for login in &context.config.logins {
            println!("{}", login_line(login));
        }
        Ok(())
    }
}

/// Remove a stored login
pub struct LogoutCommand {
    pub name: String,
}

#[async_trait]
impl Command for LogoutCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let mut config = context.config.clone();
        if !config.remove_login(&self.name) {
            return Err(anyhow!("Login '{}' not found", self.name));
        }

        config.save(&context.config_path)?;
        println!("{}", format!("Login '{}' removed", self.name).green());
        Ok(())
    }
}

fn login_line(login: &Login) -> String {
    let marker = if login.default { "*" } else { " " };
    format!("{} {}\t{}\t{}", marker, login.name, login.url, login.user)
}
