//! The presentation seam the console drives.

use crate::{
    error::Error,
    models::{CurrentUser, ServerUser},
};

/// Dialogs the console opens and closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    Login,
    ChangePassword,
    EditProfile,
    NewUser,
}

impl Modal {
    /// Stable identifier, e.g. for element ids or log lines.
    pub fn id(&self) -> &'static str {
        match self {
            Modal::Login => "login-modal",
            Modal::ChangePassword => "change-password-modal",
            Modal::EditProfile => "edit-profile-modal",
            Modal::NewUser => "new-user-modal",
        }
    }
}

/// Whatever shows things to the operator: a terminal, a window, a test
/// recorder.
pub trait Ui {
    /// Reflect the current user (menus, name, admin-only items).
    fn apply_user(&mut self, user: &CurrentUser);

    /// Render the user-management table.
    fn draw_user_list(&mut self, users: &[ServerUser]);

    fn open_modal(&mut self, modal: Modal);

    fn close_modal(&mut self, modal: Modal);

    /// Transient success notice.
    fn notify(&mut self, message: &str);

    /// Transient failure notice.
    fn report_error(&mut self, error: &Error);

    /// Tell the operator the service demands a new password.
    fn notify_password_change_required(&mut self) {
        self.notify("Password change is required");
        self.open_modal(Modal::ChangePassword);
    }
}
