//! API modules.

mod auth;
mod user;

pub use auth::AuthApi;
pub use user::UserApi;
