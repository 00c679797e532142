use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::{env, path::PathBuf};
use tea::commands::*;
use tea::config::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tea")]
#[command(about = "Command line tool to interact with Gitea")]
#[command(version)]
struct Cli {
    /// Configuration file path (defaults to $TEA_CONFIG or ~/.tea/tea.yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct TargetOpts {
    /// Indicate one login, optional when inside a gitea repository
    #[arg(short, long)]
    login: Option<String>,

    /// Indicate one repository as <owner>/<repo>, optional when inside a gitea repository
    #[arg(short, long)]
    repo: Option<String>,
}

#[derive(Args, Clone)]
struct FilterOpts {
    /// Results will be filtered to match the current login value
    #[arg(long = "match-login", visible_aliases = ["matchLogin", "ml"])]
    match_login: bool,

    /// Results will be filtered to these comma-separated submitter identities
    #[arg(short = 'm', long = "match", value_name = "IDENTITIES")]
    matches: Option<String>,

    /// Results will be filtered to a single submitter identity
    #[arg(long)]
    author: Option<String>,

    /// Stop after this many pages (0 for no limit)
    #[arg(long)]
    max_pages: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Operate with pulls of the repository
    Pulls {
        #[command(flatten)]
        target: TargetOpts,

        #[command(flatten)]
        filter: FilterOpts,
    },

    /// Operate with pull of the repository and returns the pull request's body message
    ///
    /// The filter flags are only accepted when no index is given.
    Pull {
        /// Pull request index; lists pull requests when omitted
        index: Option<String>,

        /// Merge a certain pull request
        #[arg(long, visible_alias = "mg")]
        merge: bool,

        #[command(flatten)]
        target: TargetOpts,

        #[command(flatten)]
        filter: FilterOpts,
    },

    /// Manage Gitea server logins
    Login {
        #[command(subcommand)]
        command: LoginCommands,
    },

    /// Remove a Gitea server login
    Logout {
        /// Login name
        name: String,
    },
}

#[derive(Subcommand)]
enum LoginCommands {
    /// Add a Gitea login
    Add {
        /// Login name
        #[arg(long)]
        name: String,

        /// Gitea server URL
        #[arg(long)]
        url: String,

        /// Access token
        #[arg(long, env = "GITEA_TOKEN", hide_env_values = true)]
        token: String,

        /// Identity used by --match-login (defaults to the e-mail or username on the server)
        #[arg(long)]
        user: Option<String>,
    },

    /// List Gitea logins
    List,
}

impl Commands {
    /// Login management must work on a config file that no longer validates
    fn edits_logins(&self) -> bool {
        matches!(self, Commands::Login { .. } | Commands::Logout { .. })
    }
}

impl From<TargetOpts> for TargetArgs {
    fn from(opts: TargetOpts) -> Self {
        Self {
            login: opts.login,
            repo: opts.repo,
        }
    }
}

impl From<FilterOpts> for PullFilter {
    fn from(opts: FilterOpts) -> Self {
        Self {
            match_login: opts.match_login,
            matches: opts.matches,
            author: opts.author,
            max_pages: opts.max_pages,
        }
    }
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "tea=debug,tea_gitea=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = if cli.command.edits_logins() {
        Config::read_or_default(&config_path)?
    } else {
        Config::load_or_default(&config_path)?
    };
    let context = CommandContext::new(config, config_path, env::current_dir()?);

    match cli.command {
        Commands::Pulls { target, filter } => {
            PullsCommand {
                target: target.into(),
                filter: filter.into(),
            }
            .execute(&context)
            .await?;
        }
        Commands::Pull {
            index,
            merge,
            target,
            filter,
        } => {
            PullCommand {
                index,
                merge,
                target: target.into(),
                filter: filter.into(),
            }
            .execute(&context)
            .await?;
        }
        Commands::Login { command } => match command {
            LoginCommands::Add {
                name,
                url,
                token,
                user,
            } => {
                LoginAddCommand {
                    name,
                    url,
                    token,
                    user,
                }
                .execute(&context)
                .await?;
            }
            LoginCommands::List => LoginListCommand.execute(&context).await?,
        },
        Commands::Logout { name } => LogoutCommand { name }.execute(&context).await?,
    }

    Ok(())
}
