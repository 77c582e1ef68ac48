//! # eduhub-database
//!
//! SQLite connection management and concrete repository implementations
//! for EduHub users and content.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
