//! CLI commands.

pub mod auth;
pub mod user;

use anyhow::Result;
use clap::Subcommand;
use lanadmin::Console;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::load_config;
use crate::output::OutputFormat;
use crate::terminal::TerminalUi;

/// A failure the console already showed to the operator.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Reported(#[from] pub lanadmin::Error);

/// Everything a command runs against.
pub struct App {
    pub console: Console<TerminalUi>,
    pub config_path: PathBuf,
}

impl App {
    pub fn new(console: Console<TerminalUi>, config_path: PathBuf) -> Self {
        Self {
            console,
            config_path,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.console.ui().format()
    }

    /// Load the signed-in user without echoing it.
    pub async fn load_user(&mut self) -> Result<()> {
        self.console.ui_mut().set_show_user(false);
        let result = self.console.refresh_user().await;
        self.console.ui_mut().set_show_user(true);
        result.map_err(|e| Reported(e).into())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage authentication
    Auth {
        #[command(subcommand)]
        action: auth::AuthAction,
    },

    /// Show who the client is acting as
    Whoami,

    /// Change your own password
    Passwd {
        /// Current password
        #[arg(long)]
        old: String,
        /// New password
        #[arg(long)]
        new: String,
        /// New password again
        #[arg(long)]
        repeat: String,
    },

    /// Edit your profile
    Profile {
        /// New display name
        #[arg(short, long)]
        display_name: String,
    },

    /// User administration
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        action: user::UserAction,
    },

    /// Show current configuration
    Config,

    /// Interactive session; logins without --remember last until exit
    Shell,
}

/// Run one command. `Shell` is handled by the caller.
pub async fn run(command: Command, app: &mut App) -> Result<()> {
    match command {
        Command::Auth { action } => auth::handle(action, app).await,
        Command::Whoami => app
            .console
            .refresh_user()
            .await
            .map_err(|e| Reported(e).into()),
        Command::Passwd { old, new, repeat } => {
            app.load_user().await?;
            app.console
                .change_password(&old, &new, &repeat)
                .await
                .map_err(|e| Reported(e).into())
        }
        Command::Profile { display_name } => {
            app.load_user().await?;
            app.console
                .update_profile(&display_name)
                .await
                .map_err(|e| Reported(e).into())
        }
        Command::User { action } => user::handle(action, app).await,
        Command::Config => show_config(app).await,
        Command::Shell => anyhow::bail!("Already in a shell"),
    }
}

async fn show_config(app: &App) -> Result<()> {
    let cfg = load_config(&app.config_path)?;
    let persisted = app.console.client().session().is_persisted().await;

    if app.format() == OutputFormat::Json {
        let value = serde_json::json!({
            "config_file": app.config_path.display().to_string(),
            "base_url": app.console.client().base_url(),
            "connect_timeout_secs": cfg.server.connect_timeout_secs,
            "read_timeout_secs": cfg.server.read_timeout_secs,
            "session_persisted": persisted,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Config file: {}", app.config_path.display());
    println!("Server: {}", app.console.client().base_url());
    if let Some(secs) = cfg.server.connect_timeout_secs {
        println!("Connect timeout: {}s", secs);
    }
    if let Some(secs) = cfg.server.read_timeout_secs {
        println!("Read timeout: {}s", secs);
    }
    println!("Session persisted: {}", persisted);
    Ok(())
}
