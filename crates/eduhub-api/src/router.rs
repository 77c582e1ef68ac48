//! Route definitions for the EduHub HTTP API.
//!
//! All API routes are organized by domain and mounted under `/api`.
//! Uploaded files are served statically under the configured public prefix.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    http::StatusCode,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.storage.request_body_limit();
    let upload_dir = state.config.storage.upload_dir.clone();
    let public_prefix = normalize_prefix(&state.config.storage.public_prefix);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(root_routes())
        .merge(health_routes())
        .merge(auth_routes())
        .merge(upload_routes())
        .merge(content_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .nest_service(&public_prefix, ServeDir::new(upload_dir))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(request_timeout(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Requests that outlive `timeout` are answered with 408.
fn request_timeout(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Welcome message
fn root_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::root::welcome))
}

/// Liveness and dependency status
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Auth endpoints: login, register, profile, password, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route(
            "/auth/profile",
            get(handlers::auth::profile).put(handlers::auth::update_profile),
        )
        .route("/auth/password", put(handlers::auth::change_password))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Public pass-through upload
fn upload_routes() -> Router<AppState> {
    Router::new().route("/upload", post(handlers::upload::upload_file))
}

/// Content items
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/contents", post(handlers::content::create_content))
        .route("/contents/my-contents", get(handlers::content::my_contents))
        .route(
            "/contents/{id}",
            get(handlers::content::get_content).delete(handlers::content::delete_content),
        )
}

/// Ensure the static prefix starts with `/` and has no trailing slash.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/uploads".to_string()
    } else {
        format!("/{trimmed}")
    }
}
