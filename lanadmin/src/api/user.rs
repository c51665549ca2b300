//! User API.

use std::sync::Arc;

use reqwest::Method;

use crate::{
    client::{AdminClientInner, NO_BODY},
    error::Result,
    models::{NewUser, PasswordChange, ProfileUpdate, ServerUser, StatusUpdate, UserId},
};

/// API for user operations.
pub struct UserApi {
    client: Arc<AdminClientInner>,
}

impl UserApi {
    pub(crate) fn new(client: Arc<AdminClientInner>) -> Self {
        Self { client }
    }

    /// Get the user owning the current token, or the guest marker.
    pub async fn current(&self) -> Result<ServerUser> {
        self.client.request_as(Method::GET, "/user", NO_BODY).await
    }

    /// Get user by ID.
    pub async fn get(&self, user_id: impl Into<UserId>) -> Result<ServerUser> {
        let path = format!("/user/{}", user_id.into());
        self.client.request_as(Method::GET, &path, NO_BODY).await
    }

    /// List all users.
    pub async fn list(&self) -> Result<Vec<ServerUser>> {
        self.client
            .request_as(Method::GET, "/user/list", NO_BODY)
            .await
    }

    /// Create a user. The service generates the initial password.
    pub async fn create(&self, user: &NewUser) -> Result<ServerUser> {
        self.client
            .request_as(Method::POST, "/user/create", Some(user))
            .await
    }

    /// Change the caller's own password.
    pub async fn change_password(&self, change: &PasswordChange) -> Result<()> {
        self.client
            .request(Method::POST, "/user/change-password", Some(change))
            .await
            .map(|_| ())
    }

    /// Update the caller's own details.
    pub async fn update_details(&self, update: &ProfileUpdate) -> Result<ServerUser> {
        self.client
            .request_as(Method::PATCH, "/user/details", Some(update))
            .await
    }

    /// Enable or disable a user.
    pub async fn set_status(&self, status: &StatusUpdate) -> Result<()> {
        self.client
            .request(Method::PATCH, "/user/status", Some(status))
            .await
            .map(|_| ())
    }

    /// Reset a user's password.
    pub async fn reset_password(&self, user_id: impl Into<UserId>) -> Result<()> {
        let path = format!("/user/{}/reset-password", user_id.into());
        self.client
            .request(Method::POST, &path, NO_BODY)
            .await
            .map(|_| ())
    }

    /// Delete a user.
    pub async fn delete(&self, user_id: impl Into<UserId>) -> Result<()> {
        let path = format!("/user/{}", user_id.into());
        self.client
            .request(Method::DELETE, &path, NO_BODY)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdminClient, SessionStore};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn authed_client(server: &MockServer) -> AdminClient {
        let session = SessionStore::in_memory();
        session.set_token("tok", false).await;
        AdminClient::builder()
            .base_url(server.uri())
            .session(session)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_decodes_users() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "userId": 1, "username": "admin", "displayName": "Admin", "admin": true, "disabled": false },
                { "userId": 3, "username": "user2", "displayName": "User 3", "admin": false, "disabled": true }
            ])))
            .mount(&server)
            .await;

        let users = authed_client(&server).await.users().list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].user_id, Some(UserId(3)));
        assert!(users[1].disabled);
    }

    #[tokio::test]
    async fn test_list_keeps_entries_with_null_display_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "userId": 1, "username": "admin", "displayName": "Admin", "admin": true },
                { "userId": 4, "username": "legacy", "displayName": null }
            ])))
            .mount(&server)
            .await;

        let users = authed_client(&server).await.users().list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username, "legacy");
        assert_eq!(users[1].display_name, "");
    }

    #[tokio::test]
    async fn test_current_guest_marker_with_null_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "userId": null, "username": null, "displayName": null, "admin": false
            })))
            .mount(&server)
            .await;

        let user = authed_client(&server).await.users().current().await.unwrap();
        assert_eq!(user, ServerUser::guest());
    }

    #[tokio::test]
    async fn test_paths_with_ids() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/7/reset-password"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/user/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client(&server).await;
        client.users().reset_password(7).await.unwrap();
        client.users().delete(UserId(7)).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_details_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/user/details"))
            .and(body_json(json!({ "userId": 2, "displayName": "New Name" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "userId": 2, "username": "u", "displayName": "New Name"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let updated = authed_client(&server)
            .await
            .users()
            .update_details(&ProfileUpdate {
                user_id: Some(UserId(2)),
                display_name: "New Name".into(),
            })
            .await
            .unwrap();
        assert_eq!(updated.display_name, "New Name");
    }

    #[tokio::test]
    async fn test_status_update_tolerates_empty_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/user/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        authed_client(&server)
            .await
            .users()
            .set_status(&StatusUpdate {
                user_id: UserId(1),
                disabled: false,
            })
            .await
            .unwrap();
    }
}
