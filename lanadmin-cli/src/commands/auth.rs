//! Authentication commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use lanadmin::Credentials;

use super::{App, Reported};
use crate::output::OutputFormat;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in with username and password
    Login {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long, env = "LANADMIN_PASSWORD", hide_env_values = true)]
        password: String,
        /// Keep the session after this process exits
        #[arg(long)]
        remember: bool,
    },
    /// Sign out locally
    Logout,
    /// Show current auth status
    Status,
}

pub async fn handle(action: AuthAction, app: &mut App) -> Result<()> {
    match action {
        AuthAction::Login {
            username,
            password,
            remember,
        } => login(app, Credentials::new(username, password), remember).await,
        AuthAction::Logout => {
            app.console.logout().await;
            Ok(())
        }
        AuthAction::Status => status(app).await,
    }
}

async fn login(app: &mut App, credentials: Credentials, remember: bool) -> Result<()> {
    app.console
        .login(&credentials, remember)
        .await
        .map_err(Reported)?;

    if !remember && app.format() != OutputFormat::Json {
        eprintln!(
            "{}",
            "Session not saved; pass --remember to keep it.".dimmed()
        );
    }
    Ok(())
}

async fn status(app: &App) -> Result<()> {
    let session = app.console.client().session();
    let authenticated = session.has_token();
    let persisted = session.is_persisted().await;

    if app.format() == OutputFormat::Json {
        let value = serde_json::json!({
            "base_url": app.console.client().base_url(),
            "authenticated": authenticated,
            "persisted": persisted,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if authenticated {
        let scope = if persisted { "saved" } else { "this session only" };
        println!(
            "{} ({})",
            format!("Holding a token for {}", app.console.client().base_url()).green(),
            scope
        );
    } else {
        println!("{}", "Not logged in".dimmed());
    }
    Ok(())
}
