//! User models.

use serde::{Deserialize, Deserializer, Serialize};

use super::UserId;

/// Read a field the service may send as `null`, falling back to its default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Username shown for the guest.
pub const GUEST_USERNAME: &str = "anonymous";

/// Display name shown for the guest.
pub const GUEST_DISPLAY_NAME: &str = "Guest";

/// A user record as sent by the service.
///
/// `GET /user` answers with a record without `userId` when the caller is not
/// signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerUser {
    /// User ID, absent for the guest marker.
    pub user_id: Option<UserId>,
    /// Login name.
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    /// Whether the user is an administrator.
    #[serde(deserialize_with = "null_as_default")]
    pub admin: bool,
    /// Whether the account is disabled.
    #[serde(deserialize_with = "null_as_default")]
    pub disabled: bool,
}

impl ServerUser {
    /// The guest marker: a record without an ID.
    pub fn guest() -> Self {
        Self::default()
    }

    /// ID or an error naming the action that needed it.
    pub fn require_id(&self) -> crate::Result<UserId> {
        self.user_id
            .ok_or_else(|| crate::Error::invalid(format!("user @{} has no id", self.username)))
    }
}

/// The user operating the client.
///
/// Starts as the guest and is replaced wholesale from every user payload the
/// service returns. There is no stored guest flag: a user is the guest
/// exactly when no ID is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    id: Option<UserId>,
    username: String,
    display_name: String,
    is_admin: bool,
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self::guest()
    }
}

impl CurrentUser {
    /// The unauthenticated placeholder.
    pub fn guest() -> Self {
        Self {
            id: None,
            username: GUEST_USERNAME.to_owned(),
            display_name: GUEST_DISPLAY_NAME.to_owned(),
            is_admin: false,
        }
    }

    /// Build from a server record.
    pub fn from_server(user: &ServerUser) -> Self {
        let mut current = Self::guest();
        current.reset(user);
        current
    }

    /// Overwrite every field from a server record.
    pub fn reset(&mut self, user: &ServerUser) {
        *self = match user.user_id {
            Some(id) => Self {
                id: Some(id),
                username: user.username.clone(),
                display_name: user.display_name.clone(),
                is_admin: user.admin,
            },
            None => Self::guest(),
        };
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn is_guest(&self) -> bool {
        self.id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_reset_with_id() {
        let server: ServerUser = serde_json::from_value(json!({
            "userId": 5,
            "username": "bob",
            "displayName": "Bob",
            "admin": true
        }))
        .unwrap();

        let mut user = CurrentUser::guest();
        user.reset(&server);

        assert!(!user.is_guest());
        assert_eq!(user.id(), Some(UserId(5)));
        assert_eq!(user.username(), "bob");
        assert_eq!(user.display_name(), "Bob");
        assert!(user.is_admin());
    }

    #[test]
    fn test_reset_without_id_is_guest() {
        let server: ServerUser = serde_json::from_value(json!({ "userId": null })).unwrap();

        let mut user = CurrentUser::from_server(&ServerUser {
            user_id: Some(UserId(1)),
            username: "admin".into(),
            display_name: "Admin".into(),
            admin: true,
            disabled: false,
        });
        user.reset(&server);

        assert!(user.is_guest());
        assert_eq!(user.id(), None);
        assert_eq!(user.username(), GUEST_USERNAME);
        assert_eq!(user.display_name(), GUEST_DISPLAY_NAME);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_reset_ignores_fields_of_guest_marker() {
        let server = ServerUser {
            user_id: None,
            username: "ghost".into(),
            display_name: "Ghost".into(),
            admin: true,
            disabled: false,
        };
        assert_eq!(CurrentUser::from_server(&server), CurrentUser::guest());
    }

    #[test]
    fn test_default_is_guest() {
        assert!(CurrentUser::default().is_guest());
    }

    #[test]
    fn test_server_user_wire_format() {
        let user = ServerUser {
            user_id: Some(UserId(3)),
            username: "user2".into(),
            display_name: "User 2".into(),
            admin: false,
            disabled: true,
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "userId": 3,
                "username": "user2",
                "displayName": "User 2",
                "admin": false,
                "disabled": true
            })
        );
    }

    #[test]
    fn test_null_strings_decode_as_empty() {
        let server: ServerUser = serde_json::from_value(json!({
            "userId": 4,
            "username": "legacy",
            "displayName": null,
            "admin": null
        }))
        .unwrap();
        assert_eq!(server.user_id, Some(UserId(4)));
        assert_eq!(server.username, "legacy");
        assert_eq!(server.display_name, "");
        assert!(!server.admin);
    }

    #[test]
    fn test_guest_marker_with_null_strings() {
        let server: ServerUser = serde_json::from_value(json!({
            "userId": null,
            "username": null,
            "displayName": null
        }))
        .unwrap();
        assert_eq!(CurrentUser::from_server(&server), CurrentUser::guest());
    }

    #[test]
    fn test_require_id() {
        assert!(ServerUser::guest().require_id().is_err());
        let user = ServerUser {
            user_id: Some(UserId(8)),
            ..Default::default()
        };
        assert_eq!(user.require_id().unwrap(), UserId(8));
    }
}
