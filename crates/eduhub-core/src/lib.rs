//! # eduhub-core
//!
//! Core crate for EduHub. Contains configuration schemas, the storage
//! provider trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other EduHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
