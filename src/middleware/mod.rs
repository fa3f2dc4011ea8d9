pub mod auth;
pub mod error_handler;
pub mod request_id;

pub use auth::{
    hash_session_token, AdminIdentity, MySqlSessionStore, SessionAuth, SessionStore, UserRole,
};
pub use error_handler::ErrorHandler;
pub use request_id::RequestId;
