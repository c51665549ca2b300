//! Data models for the user service.

mod ids;
mod payload;
mod requests;
mod user;

pub use ids::UserId;
pub use payload::Payload;
pub use requests::{AuthResult, Credentials, NewUser, PasswordChange, ProfileUpdate, StatusUpdate};
pub use user::{CurrentUser, ServerUser, GUEST_DISPLAY_NAME, GUEST_USERNAME};
