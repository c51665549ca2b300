//! Command-line front end for the LAN user-administration service.

mod commands;
mod config;
mod output;
mod shell;
mod terminal;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use commands::{App, Command, Reported};
use lanadmin::Console;
use std::path::PathBuf;
use std::process::ExitCode;
use terminal::TerminalUi;

/// LAN user-administration client
#[derive(Parser)]
#[command(name = "lanadmin")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "plain")]
    format: output::OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: lanadmin.toml next to the executable)
    #[arg(long, global = true, env = "LANADMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Service base URL, overriding the config file
    #[arg(long, global = true, env = "LANADMIN_URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is::<Reported>() => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let command = cli
        .command
        .ok_or_else(|| anyhow::anyhow!("No command given. Run `lanadmin --help` for usage."))?;

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let client = config::build_client(&config_path, cli.url.as_deref()).await?;
    tracing::debug!(base_url = client.base_url(), "client ready");

    let console = Console::new(client, TerminalUi::new(cli.format));
    let mut app = App::new(console, config_path);

    match command {
        Command::Shell => shell::run(&mut app).await,
        command => commands::run(command, &mut app).await,
    }
}
