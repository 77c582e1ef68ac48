//! Per-user content items.

pub mod service;

pub use service::{ContentService, NewContent};
