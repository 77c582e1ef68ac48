//! Auth handlers: login, register, profile, password, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use eduhub_service::auth::{LoginRequest as SvcLogin, RegisterRequest as SvcRegister};
use eduhub_service::user::UpdateProfileRequest as SvcUpdateProfile;

use crate::dto::request::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
};
use crate::dto::response::{LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state
        .auth_service
        .login(SvcLogin {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(result.into()))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    let result = state
        .auth_service
        .register(SvcRegister {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.auth_service.profile(&auth).await?;
    Ok(Json(user.into()))
}

/// PUT /api/auth/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .update_profile(
            &auth,
            SvcUpdateProfile {
                name: req.name,
                email: req.email,
            },
        )
        .await?;

    Ok(Json(user.into()))
}

/// PUT /api/auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .user_service
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password changed successfully")))
}

/// POST /api/auth/logout
///
/// Tokens are not tracked server-side; the client drops its copy.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new("Logged out successfully"))
}
