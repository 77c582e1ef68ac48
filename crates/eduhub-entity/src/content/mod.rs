//! Content item domain entities.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::ContentKind;
pub use model::{Content, CreateContent};
pub use status::ContentStatus;
