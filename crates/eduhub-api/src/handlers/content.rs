//! Content handlers: create, list own, get, delete.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use eduhub_service::content::NewContent;

use crate::dto::response::{ContentResponse, DataMessageResponse, DataResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::multipart::MultipartForm;
use crate::state::AppState;

/// POST /api/contents
pub async fn create_content(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<DataMessageResponse<ContentResponse>>), ApiError> {
    let mut form = MultipartForm::read(multipart).await?;

    let new = NewContent {
        title: form.take("title").unwrap_or_default(),
        description: form.take("description"),
        kind: form.take("type").unwrap_or_default(),
        subject: form.take("subject").unwrap_or_default(),
        grade: form.take("grade").unwrap_or_default(),
        status: form.take("status"),
    };

    let content = state
        .content_service
        .create(&auth, new, form.file.take())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataMessageResponse {
            data: content.into(),
            message: "Content created successfully".to_string(),
        }),
    ))
}

/// GET /api/contents/my-contents
pub async fn my_contents(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<DataResponse<Vec<ContentResponse>>>, ApiError> {
    let items = state.content_service.list_mine(&auth).await?;
    Ok(Json(DataResponse::new(
        items.into_iter().map(ContentResponse::from).collect(),
    )))
}

/// GET /api/contents/{id}
pub async fn get_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DataResponse<ContentResponse>>, ApiError> {
    let content = state.content_service.get(&auth, id).await?;
    Ok(Json(DataResponse::new(content.into())))
}

/// DELETE /api/contents/{id}
pub async fn delete_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.content_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Content deleted successfully")))
}
