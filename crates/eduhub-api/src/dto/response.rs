//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eduhub_entity::content::Content;
use eduhub_entity::user::User;
use eduhub_service::auth::LoginResult;
use eduhub_service::upload::StoredFile;

/// `{ "data": ... }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{ "data": ..., "message": ... }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataMessageResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login and registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer access token.
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.token.access_token,
            token_type: "Bearer".to_string(),
            expires_at: result.token.expires_at,
            user: result.user.into(),
        }
    }
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Public view of a content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    pub grade: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Content> for ContentResponse {
    fn from(content: Content) -> Self {
        Self {
            id: content.id,
            title: content.title,
            description: content.description.unwrap_or_default(),
            kind: content.kind.to_string(),
            subject: content.subject,
            grade: content.grade,
            status: content.status.to_string(),
            file_url: content.file_url,
            file_name: content.file_name,
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}

/// Description of a stored upload, in the field naming the upload
/// endpoint has always used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFileResponse {
    pub filename: String,
    pub originalname: String,
    pub size: u64,
    pub mimetype: String,
    pub url: String,
}

impl From<StoredFile> for UploadedFileResponse {
    fn from(file: StoredFile) -> Self {
        Self {
            filename: file.filename,
            originalname: file.original_name,
            size: file.size,
            mimetype: file.mime_type,
            url: file.url,
        }
    }
}

/// Metadata fields echoed back by the upload endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Upload endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub file: UploadedFileResponse,
    pub metadata: UploadMetadata,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `ok` or `degraded`.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
    /// Database status.
    pub database: String,
    /// Upload storage status.
    pub storage: String,
}
