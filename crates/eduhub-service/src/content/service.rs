//! Content item creation, listing, and removal.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use eduhub_auth::rbac::RbacEnforcer;
use eduhub_core::error::AppError;
use eduhub_database::repositories::ContentRepository;
use eduhub_entity::content::{Content, ContentKind, ContentStatus, CreateContent};

use crate::context::RequestContext;
use crate::upload::{UploadParams, UploadService};

/// Raw content fields as submitted by a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewContent {
    pub title: String,
    pub description: Option<String>,
    /// Content type name: lesson, quiz, video, or document.
    pub kind: String,
    pub subject: String,
    pub grade: String,
    /// Status name; defaults to draft when absent or blank.
    pub status: Option<String>,
}

/// Manages the caller's content items.
#[derive(Debug, Clone)]
pub struct ContentService {
    content_repo: Arc<ContentRepository>,
    uploads: Arc<UploadService>,
    rbac: Arc<RbacEnforcer>,
}

impl ContentService {
    /// Creates a new content service.
    pub fn new(
        content_repo: Arc<ContentRepository>,
        uploads: Arc<UploadService>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            content_repo,
            uploads,
            rbac,
        }
    }

    /// Lists the caller's items, newest first.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<Content>, AppError> {
        self.content_repo.find_by_owner(ctx.user_id).await
    }

    /// Creates an item owned by the caller, optionally attaching a file.
    ///
    /// Fields are validated before the file is stored; a file stored for a
    /// row that then fails to insert is removed again.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        new: NewContent,
        file: Option<UploadParams>,
    ) -> Result<Content, AppError> {
        let mut data = validate_new_content(ctx, new)?;

        let stored = match file {
            Some(params) => Some(self.uploads.store(params).await?),
            None => None,
        };
        if let Some(stored) = &stored {
            data.file_url = Some(stored.url.clone());
            data.file_name = Some(stored.original_name.clone());
        }

        let content = match self.content_repo.create(&data).await {
            Ok(content) => content,
            Err(e) => {
                if let Some(stored) = &stored {
                    if let Err(cleanup) = self.uploads.remove(&stored.url).await {
                        warn!(url = %stored.url, error = %cleanup, "Failed to remove orphaned upload");
                    }
                }
                return Err(e);
            }
        };

        info!(
            content_id = %content.id,
            user_id = %ctx.user_id,
            kind = %content.kind,
            has_file = content.file_url.is_some(),
            "Content created"
        );

        Ok(content)
    }

    /// Fetches one item. Owner or admin only.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Content, AppError> {
        let content = self
            .content_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Content {id} not found")))?;

        self.rbac
            .require_owner_or_admin(ctx.user_id, &ctx.role, content.owner_id)?;

        Ok(content)
    }

    /// Deletes one item and its attached file. Owner or admin only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let content = self.get(ctx, id).await?;

        if !self.content_repo.delete(content.id).await? {
            return Err(AppError::not_found(format!("Content {id} not found")));
        }

        if let Some(url) = &content.file_url {
            if let Err(e) = self.uploads.remove(url).await {
                warn!(content_id = %id, url = %url, error = %e, "Failed to remove content file");
            }
        }

        info!(content_id = %id, user_id = %ctx.user_id, "Content deleted");
        Ok(())
    }
}

fn validate_new_content(ctx: &RequestContext, new: NewContent) -> Result<CreateContent, AppError> {
    let title = required(&new.title, "Title")?;
    let subject = required(&new.subject, "Subject")?;
    let grade = required(&new.grade, "Grade")?;
    if new.kind.trim().is_empty() {
        return Err(AppError::validation("Type is required"));
    }
    let kind: ContentKind = new.kind.parse()?;
    let status = match new.status.as_deref().map(str::trim) {
        None | Some("") => ContentStatus::default(),
        Some(s) => s.parse()?,
    };

    Ok(CreateContent {
        owner_id: ctx.user_id,
        title,
        description: Some(new.description.unwrap_or_default()),
        kind,
        subject,
        grade,
        status,
        file_url: None,
        file_name: None,
    })
}

fn required(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::validation(format!("{field} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}
