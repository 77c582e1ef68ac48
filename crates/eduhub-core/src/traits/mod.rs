//! Core traits defined in `eduhub-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
