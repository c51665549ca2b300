//! User administration commands.

use anyhow::Result;
use clap::Subcommand;
use lanadmin::{NewUser, ServerUser, Ui, UserId};

use super::{App, Reported};

#[derive(Subcommand)]
pub enum UserAction {
    /// List all users
    #[command(alias = "ls")]
    List,

    /// View a user by ID
    Get {
        /// User ID
        id: UserId,
    },

    /// Create a user
    Create {
        /// Login name
        #[arg(short, long)]
        username: String,
        /// Display name
        #[arg(short, long)]
        display_name: String,
        /// Grant administrator rights
        #[arg(long)]
        admin: bool,
    },

    /// Enable a disabled user
    Enable {
        /// User ID
        id: UserId,
    },

    /// Disable a user
    Disable {
        /// User ID
        id: UserId,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: UserId,
    },

    /// Reset a user's password
    ResetPassword {
        /// User ID
        id: UserId,
    },
}

pub async fn handle(action: UserAction, app: &mut App) -> Result<()> {
    let result = match action {
        UserAction::List => app.console.list_users().await.map(|_| ()),
        UserAction::Get { id } => app.console.show_user(id).await.map(|_| ()),
        UserAction::Create {
            username,
            display_name,
            admin,
        } => {
            let user = NewUser {
                username,
                display_name,
                admin,
            };
            app.console.add_user(&user).await
        }
        UserAction::Enable { id } => {
            let user = lookup(app, id).await?;
            app.console.set_user_enabled(&user, true).await
        }
        UserAction::Disable { id } => {
            let user = lookup(app, id).await?;
            app.console.set_user_enabled(&user, false).await
        }
        UserAction::Delete { id } => {
            let user = lookup(app, id).await?;
            app.console.delete_user(&user).await
        }
        UserAction::ResetPassword { id } => {
            let user = lookup(app, id).await?;
            app.console.reset_user_password(&user).await
        }
    };
    result.map_err(|e| Reported(e).into())
}

/// Fetch the record an action applies to, so notices can name the user.
async fn lookup(app: &mut App, id: UserId) -> Result<ServerUser> {
    let result = app.console.client().users().get(id).await;
    match result {
        Ok(user) => Ok(user),
        Err(e) => {
            app.console.ui_mut().report_error(&e);
            Err(Reported(e).into())
        }
    }
}
