//! Output formatting.

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use lanadmin::{CurrentUser, ServerUser};
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table format
    Table,
    /// JSON format
    Json,
    /// Plain text format
    #[default]
    Plain,
}

/// Trait for plain text output.
pub trait PlainPrint {
    /// Print as plain text with formatting.
    fn plain_print(&self);
}

/// Trait for table row generation.
pub trait TableRow {
    /// Get table headers.
    fn headers() -> Vec<&'static str>;
    /// Get row data as strings.
    fn row(&self) -> Vec<String>;
}

/// Print items in plain text format.
pub fn print_plain<T: PlainPrint>(items: &[T]) {
    if items.is_empty() {
        println!("No results");
        return;
    }
    for item in items {
        item.plain_print();
    }
}

/// Print a table of items with proper formatting for each output mode.
pub fn print_table<T: TableRow + Serialize + PlainPrint>(items: Vec<T>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items).unwrap_or_default());
        }
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results");
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(T::headers());
            for item in &items {
                table.add_row(item.row());
            }
            println!("{table}");
        }
        OutputFormat::Plain => {
            print_plain(&items);
        }
    }
}

/// Row for the user-management table.
#[derive(Debug, Serialize)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: &'static str,
    pub status: &'static str,
    pub actions: Vec<&'static str>,
}

impl From<&ServerUser> for UserRow {
    fn from(u: &ServerUser) -> Self {
        // Disabled accounts can only come back or go away.
        let actions = if u.disabled {
            vec!["enable", "delete"]
        } else {
            vec!["reset-password", "disable"]
        };
        Self {
            id: u.user_id.map(|id| id.to_string()).unwrap_or_default(),
            username: u.username.clone(),
            display_name: u.display_name.clone(),
            role: if u.admin { "admin" } else { "user" },
            status: if u.disabled { "disabled" } else { "active" },
            actions,
        }
    }
}

impl TableRow for UserRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Username", "Display Name", "Role", "Status", "Actions"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.username.clone(),
            self.display_name.clone(),
            self.role.to_string(),
            self.status.to_string(),
            self.actions.join(", "),
        ]
    }
}

impl PlainPrint for UserRow {
    fn plain_print(&self) {
        let status = if self.status == "active" {
            self.status.green()
        } else {
            self.status.red()
        };
        println!(
            "[{}] {} {} ({}, {})",
            self.id.cyan(),
            format!("@{}", self.username).bold(),
            self.display_name,
            self.role,
            status
        );
        println!("   {}", self.actions.join(" | ").dimmed());
    }
}

/// Row describing who the client is acting as.
#[derive(Debug, Serialize)]
pub struct SessionRow {
    pub id: Option<i64>,
    pub username: String,
    pub display_name: String,
    pub admin: bool,
    pub guest: bool,
}

impl From<&CurrentUser> for SessionRow {
    fn from(u: &CurrentUser) -> Self {
        Self {
            id: u.id().map(|id| id.get()),
            username: u.username().to_owned(),
            display_name: u.display_name().to_owned(),
            admin: u.is_admin(),
            guest: u.is_guest(),
        }
    }
}

impl SessionRow {
    /// One-line summary used by plain output.
    pub fn summary(&self) -> String {
        if self.guest {
            return format!("Not signed in ({})", self.display_name);
        }
        let role = if self.admin { "admin" } else { "user" };
        format!(
            "Signed in as {} (@{}, {})",
            self.display_name, self.username, role
        )
    }
}

impl TableRow for SessionRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Username", "Display Name", "Role"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
            self.username.clone(),
            self.display_name.clone(),
            match (self.guest, self.admin) {
                (true, _) => "guest".to_string(),
                (false, true) => "admin".to_string(),
                (false, false) => "user".to_string(),
            },
        ]
    }
}

impl PlainPrint for SessionRow {
    fn plain_print(&self) {
        if self.guest {
            println!("{}", self.summary().dimmed());
        } else {
            println!("{}", self.summary().green());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanadmin::UserId;
    use pretty_assertions::assert_eq;

    fn server_user(disabled: bool, admin: bool) -> ServerUser {
        ServerUser {
            user_id: Some(UserId(2)),
            username: "user1".into(),
            display_name: "User 1".into(),
            admin,
            disabled,
        }
    }

    #[test]
    fn test_user_row_active() {
        let row = UserRow::from(&server_user(false, true));
        assert_eq!(
            row.row(),
            vec!["2", "user1", "User 1", "admin", "active", "reset-password, disable"]
        );
    }

    #[test]
    fn test_user_row_disabled() {
        let row = UserRow::from(&server_user(true, false));
        assert_eq!(row.status, "disabled");
        assert_eq!(row.role, "user");
        assert_eq!(row.actions, vec!["enable", "delete"]);
    }

    #[test]
    fn test_session_summary() {
        let guest = SessionRow::from(&CurrentUser::guest());
        assert_eq!(guest.summary(), "Not signed in (Guest)");
        assert_eq!(guest.row()[3], "guest");

        let user = CurrentUser::from_server(&server_user(false, true));
        assert_eq!(
            SessionRow::from(&user).summary(),
            "Signed in as User 1 (@user1, admin)"
        );
    }
}
