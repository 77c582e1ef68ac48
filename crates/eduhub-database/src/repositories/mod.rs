//! Repository implementations for EduHub entities.

pub mod content;
pub mod user;

pub use content::ContentRepository;
pub use user::UserRepository;
