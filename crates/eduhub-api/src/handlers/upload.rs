//! Public pass-through upload.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};

use eduhub_core::error::AppError;

use crate::dto::response::{UploadMetadata, UploadResponse};
use crate::error::ApiError;
use crate::handlers::multipart::MultipartForm;
use crate::state::AppState;

/// POST /api/upload
///
/// Stores the `file` part and echoes any content metadata sent alongside it.
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut form = MultipartForm::read(multipart).await?;

    let file = form
        .file
        .take()
        .ok_or_else(|| AppError::validation("No file uploaded"))?;

    let stored = state.upload_service.store(file).await?;

    let metadata = UploadMetadata {
        title: form.take("title"),
        description: form.take("description"),
        kind: form.take("type"),
        subject: form.take("subject"),
        grade: form.take("grade"),
        status: form.take("status"),
    };

    Ok(Json(UploadResponse {
        success: true,
        message: "File uploaded successfully".to_string(),
        file: stored.into(),
        metadata,
    }))
}
