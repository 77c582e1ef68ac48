//! Pass-through file uploads into the uploads directory.

pub mod service;

pub use service::{StoredFile, UploadParams, UploadService};
