//! Content entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::ContentKind;
use super::status::ContentStatus;

/// A teaching material item owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Content {
    /// Unique content identifier.
    pub id: Uuid,
    /// The user who created the item.
    pub owner_id: Uuid,
    /// Title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Material type.
    pub kind: ContentKind,
    /// School subject.
    pub subject: String,
    /// Grade level.
    pub grade: String,
    /// Publication status.
    pub status: ContentStatus,
    /// Public URL of an attached upload, if any.
    pub file_url: Option<String>,
    /// Original filename of the attached upload.
    pub file_name: Option<String>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Content {
    /// Check whether the given user owns this item.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

/// Data required to create a content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContent {
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub kind: ContentKind,
    pub subject: String,
    pub grade: String,
    pub status: ContentStatus,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}
