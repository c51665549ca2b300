//! Operator actions on top of the client.
//!
//! Every action reads its inputs, calls the matching endpoint and, on
//! success, updates the [`CurrentUser`] and the [`Ui`]. Failures are
//! reported through [`Ui::report_error`] before being returned, so callers
//! only need the `Result` to decide what happens next.

mod ui;

pub use ui::{Modal, Ui};

use crate::{
    client::AdminClient,
    error::{Error, Result},
    models::{
        Credentials, CurrentUser, NewUser, PasswordChange, ProfileUpdate, ServerUser,
        StatusUpdate, UserId,
    },
};

/// Drives the client on behalf of an operator.
pub struct Console<U: Ui> {
    client: AdminClient,
    user: CurrentUser,
    ui: U,
}

impl<U: Ui> std::fmt::Debug for Console<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("client", &self.client)
            .field("user", &self.user)
            .finish()
    }
}

impl<U: Ui> Console<U> {
    /// Start as the guest. Call [`Console::refresh_user`] to pick up an
    /// existing session.
    pub fn new(client: AdminClient, ui: U) -> Self {
        Self {
            client,
            user: CurrentUser::guest(),
            ui,
        }
    }

    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    fn reported<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            log::debug!("action failed: {}", e);
            self.ui.report_error(e);
        }
        result
    }

    fn apply(&mut self, server: &ServerUser) {
        self.user.reset(server);
        self.ui.apply_user(&self.user);
    }

    /// Fetch the user owning the current token.
    pub async fn refresh_user(&mut self) -> Result<()> {
        let result = self.client.users().current().await;
        let user = self.reported(result)?;
        self.apply(&user);
        Ok(())
    }

    /// Sign in. With `persist` the token survives the process.
    pub async fn login(&mut self, credentials: &Credentials, persist: bool) -> Result<()> {
        let result = self.client.auth().authenticate(credentials).await;
        let auth = self.reported(result)?;

        self.client
            .session()
            .set_token(auth.auth_token.as_str(), persist)
            .await;
        self.apply(&auth.user);
        self.ui.close_modal(Modal::Login);
        if auth.must_change_password {
            self.ui.notify_password_change_required();
        }
        Ok(())
    }

    /// Forget the token locally and fall back to the guest.
    pub async fn logout(&mut self) {
        self.client.session().clear_token().await;
        self.apply(&ServerUser::guest());
    }

    /// Change the operator's own password.
    ///
    /// `new_password` and `repeat_password` must match exactly; otherwise
    /// nothing is sent.
    pub async fn change_password(
        &mut self,
        old_password: &str,
        new_password: &str,
        repeat_password: &str,
    ) -> Result<()> {
        if new_password != repeat_password {
            return self.reported(Err(Error::PasswordMismatch));
        }

        let change = PasswordChange {
            user_id: self.user.id(),
            old_password: old_password.to_owned(),
            new_password: new_password.to_owned(),
        };
        let result = self.client.users().change_password(&change).await;
        self.reported(result)?;

        self.ui.notify("Password updated. Please re-login.");
        self.ui.close_modal(Modal::ChangePassword);
        Ok(())
    }

    /// Update the operator's display name.
    pub async fn update_profile(&mut self, display_name: &str) -> Result<()> {
        let update = ProfileUpdate {
            user_id: self.user.id(),
            display_name: display_name.to_owned(),
        };
        let result = self.client.users().update_details(&update).await;
        let user = self.reported(result)?;

        self.apply(&user);
        self.ui.close_modal(Modal::EditProfile);
        Ok(())
    }

    /// Fetch and draw the user table.
    pub async fn list_users(&mut self) -> Result<Vec<ServerUser>> {
        let result = self.client.users().list().await;
        let users = self.reported(result)?;
        self.ui.draw_user_list(&users);
        Ok(users)
    }

    /// Fetch and draw a single user.
    pub async fn show_user(&mut self, user_id: UserId) -> Result<ServerUser> {
        let result = self.client.users().get(user_id).await;
        let user = self.reported(result)?;
        self.ui.draw_user_list(std::slice::from_ref(&user));
        Ok(user)
    }

    /// Create a user, then redraw the table.
    pub async fn add_user(&mut self, user: &NewUser) -> Result<()> {
        let result = self.client.users().create(user).await;
        self.reported(result)?;

        self.ui.close_modal(Modal::NewUser);
        self.list_users().await.map(|_| ())
    }

    pub async fn reset_user_password(&mut self, user: &ServerUser) -> Result<()> {
        let id = self.reported(user.require_id())?;
        let result = self.client.users().reset_password(id).await;
        self.reported(result)?;

        self.ui
            .notify(&format!("Password for user @{} was reset.", user.username));
        Ok(())
    }

    /// Enable or disable a user, then redraw the table.
    pub async fn set_user_enabled(&mut self, user: &ServerUser, enabled: bool) -> Result<()> {
        let id = self.reported(user.require_id())?;
        let status = StatusUpdate {
            user_id: id,
            disabled: !enabled,
        };
        let result = self.client.users().set_status(&status).await;
        self.reported(result)?;

        let verb = if enabled { "enabled" } else { "disabled" };
        self.ui
            .notify(&format!("User @{} {}.", user.username, verb));
        self.list_users().await.map(|_| ())
    }

    /// Delete a user, then redraw the table.
    pub async fn delete_user(&mut self, user: &ServerUser) -> Result<()> {
        let id = self.reported(user.require_id())?;
        let result = self.client.users().delete(id).await;
        self.reported(result)?;

        self.ui.notify(&format!("User @{} deleted.", user.username));
        self.list_users().await.map(|_| ())
    }
}
