//! Route handlers organized by domain.

pub mod auth;
pub mod content;
pub mod health;
pub mod multipart;
pub mod root;
pub mod upload;
