//! Terminal rendering of console events.

use colored::Colorize;
use lanadmin::{CurrentUser, Error, Modal, ServerUser, Ui};

use crate::output::{print_table, OutputFormat, SessionRow, UserRow};

/// Prints console events to the terminal.
///
/// Notices go to stdout, except in JSON mode where stdout is reserved for
/// data and they move to stderr. Errors always go to stderr.
#[derive(Debug, Clone)]
pub struct TerminalUi {
    format: OutputFormat,
    /// Whether user changes are echoed.
    show_user: bool,
}

impl TerminalUi {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            show_user: true,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Stop echoing user changes; for commands whose output is something
    /// else and only refresh the user as a side step.
    pub fn set_show_user(&mut self, show: bool) {
        self.show_user = show;
    }
}

impl Ui for TerminalUi {
    fn apply_user(&mut self, user: &CurrentUser) {
        if self.show_user {
            print_table(vec![SessionRow::from(user)], self.format);
        }
    }

    fn draw_user_list(&mut self, users: &[ServerUser]) {
        let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
        print_table(rows, self.format);
    }

    fn open_modal(&mut self, modal: Modal) {
        tracing::debug!(modal = modal.id(), "open");
        if modal == Modal::ChangePassword {
            let hint = "Run `lanadmin passwd --old <OLD> --new <NEW> --repeat <NEW>`";
            eprintln!("{}", hint.dimmed());
        }
    }

    fn close_modal(&mut self, modal: Modal) {
        tracing::debug!(modal = modal.id(), "close");
    }

    fn notify(&mut self, message: &str) {
        if self.format == OutputFormat::Json {
            eprintln!("{}", message.blue());
        } else {
            println!("{}", message.blue());
        }
    }

    fn report_error(&mut self, error: &Error) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    fn notify_password_change_required(&mut self) {
        eprintln!("{}", "Password change is required".yellow().bold());
        self.open_modal(Modal::ChangePassword);
    }
}
