//! # eduhub-storage
//!
//! Upload storage for EduHub: the MIME and size policy applied to incoming
//! files, collision-resistant stored names, and the local filesystem
//! provider that backs `/uploads`.

pub mod naming;
pub mod policy;
pub mod providers;

pub use naming::generate_stored_name;
pub use policy::UploadPolicy;
pub use providers::LocalStorageProvider;
