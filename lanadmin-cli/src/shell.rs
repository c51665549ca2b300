//! Interactive shell.
//!
//! Keeps one console alive across commands, so a login without
//! `--remember` stays valid until the shell exits.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{self, App, Command, Reported};

#[derive(Parser)]
#[command(name = "lanadmin", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unterminated quote")]
pub struct UnterminatedQuote;

/// Split a line into words, honouring single and double quotes.
pub fn split_line(line: &str) -> Result<Vec<String>, UnterminatedQuote> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn prompt(app: &App) -> Result<()> {
    let user = app.console.user();
    let who = if user.is_guest() {
        "guest".to_string()
    } else {
        format!("@{}", user.username())
    };
    print!("lanadmin({})> ", who);
    std::io::stdout().flush().context("Failed to write prompt")
}

pub async fn run(app: &mut App) -> Result<()> {
    // Failures are already on screen; the shell starts either way.
    let _ = app.console.refresh_user().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(app)?;
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            println!();
            break;
        };

        let words = match split_line(&line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                continue;
            }
        };
        match words.first().map(String::as_str) {
            None => continue,
            Some("exit" | "quit") => break,
            Some(_) => {}
        }

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };
        if let Command::Shell = parsed.command {
            eprintln!("{}", "Already in a shell".dimmed());
            continue;
        }

        if let Err(e) = commands::run(parsed.command, app).await {
            if !e.is::<Reported>() {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(
            split_line("  user   list ").unwrap(),
            vec!["user".to_string(), "list".to_string()]
        );
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_quoted() {
        assert_eq!(
            split_line(r#"profile -d "Jane Doe""#).unwrap(),
            vec!["profile", "-d", "Jane Doe"]
        );
        assert_eq!(
            split_line("auth login -u bob -p 'p w'").unwrap(),
            vec!["auth", "login", "-u", "bob", "-p", "p w"]
        );
        assert_eq!(split_line(r#"x """#).unwrap(), vec!["x", ""]);
    }

    #[test]
    fn test_split_unterminated() {
        assert_eq!(split_line("profile -d \"Jane"), Err(UnterminatedQuote));
    }

    #[test]
    fn test_shell_line_parses_commands() {
        let parsed = ShellLine::try_parse_from(["user", "disable", "7"]).unwrap();
        assert!(matches!(
            parsed.command,
            Command::User {
                action: commands::user::UserAction::Disable { id }
            } if id.get() == 7
        ));

        assert!(ShellLine::try_parse_from(["user", "disable", "seven"]).is_err());
    }
}
