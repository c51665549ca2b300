//! Request and response bodies of the user service.

use serde::{Deserialize, Serialize};

use super::{user::null_as_default, ServerUser, UserId};

/// Login credentials for `POST /authenticate`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Result of a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    /// The signed-in user.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: ServerUser,
    /// Bearer token for later requests.
    pub auth_token: String,
    /// The service requires a password change before anything else.
    #[serde(default)]
    pub must_change_password: bool,
}

/// Body of `POST /user/change-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub user_id: Option<UserId>,
    pub old_password: String,
    pub new_password: String,
}

/// Body of `PATCH /user/details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub user_id: Option<UserId>,
    pub display_name: String,
}

/// Body of `POST /user/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub display_name: String,
    pub admin: bool,
}

/// Body of `PATCH /user/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub user_id: UserId,
    pub disabled: bool,
}
