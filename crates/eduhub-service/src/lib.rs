//! # eduhub-service
//!
//! Business logic service layer for EduHub. Each service orchestrates
//! repositories, the upload storage provider, and authentication to
//! implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod content;
pub mod context;
pub mod upload;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use content::ContentService;
pub use context::RequestContext;
pub use upload::UploadService;
pub use user::UserService;
