//! In-process harness: the full router over a temp database and uploads
//! directory, driven with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header, request};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use eduhub_api::{AppState, build_app};
use eduhub_core::config::AppConfig;
use eduhub_entity::user::{User, UserRole};

/// Boundary used for hand-built multipart bodies.
const BOUNDARY: &str = "----eduhub-test-boundary";

/// Largest response body the helpers will buffer.
const MAX_RESPONSE_BYTES: usize = 16 * 1024 * 1024;

/// Test application context backed by a throwaway SQLite file and
/// uploads directory.
pub struct TestApp {
    pub router: Router,
    /// Shared state, for seeding data directly
    pub state: AppState,
    pub config: AppConfig,
    _dir: TempDir,
}

impl TestApp {
    /// Create a new test application with the default upload limit
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application with a custom maximum upload size
    pub async fn with_max_upload(bytes: u64) -> Self {
        Self::with_config(|config| config.storage.max_upload_size_bytes = bytes).await
    }

    async fn with_config(customize: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.database.url = format!("sqlite://{}", dir.path().join("test.db").display());
        config.storage.upload_dir = dir.path().join("uploads").display().to_string();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        customize(&mut config);

        let state = AppState::build(config.clone())
            .await
            .expect("Failed to build app state");
        let router = build_app(state.clone());

        Self {
            router,
            state,
            config,
            _dir: dir,
        }
    }

    /// Path of the uploads directory
    pub fn upload_dir(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.config.storage.upload_dir)
    }

    /// Number of files currently stored in the uploads directory
    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    /// Create a user directly through the user service
    pub async fn create_user(&self, email: &str, password: &str, role: UserRole) -> User {
        self.state
            .user_service
            .create_user("Test User", email, password, role)
            .await
            .expect("Failed to create test user")
    }

    /// Register through the API and return the access token
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        self.token_from("/api/auth/register", body, StatusCode::CREATED)
            .await
    }

    /// Login and return JWT access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({ "email": email, "password": password });
        self.token_from("/api/auth/login", body, StatusCode::OK).await
    }

    async fn token_from(&self, path: &str, body: Value, expected: StatusCode) -> String {
        let response = self.request("POST", path, Some(body), None).await;
        assert_eq!(response.status, expected, "{path}: {:?}", response.body);
        response.body["access_token"]
            .as_str()
            .expect("no access_token in response")
            .to_string()
    }

    /// JSON request; an absent body is sent as an empty one.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let payload = body.map(|b| b.to_string()).unwrap_or_default();
        let req = builder(method, path, token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload))
            .expect("request");
        self.send(req).await
    }

    /// `multipart/form-data` POST built from `parts` in order.
    pub async fn multipart(
        &self,
        path: &str,
        parts: &[Part<'_>],
        token: Option<&str>,
    ) -> TestResponse {
        let req = builder("POST", path, token)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .expect("request");
        self.send(req).await
    }

    /// Unauthenticated GET returning the body untouched, for static files.
    pub async fn get_raw(&self, path: &str) -> (StatusCode, Vec<u8>) {
        let req = builder("GET", path, None)
            .body(Body::empty())
            .expect("request");
        self.call(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let (status, bytes) = self.call(req).await;
        TestResponse {
            status,
            body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
        }
    }

    async fn call(&self, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(req).await.expect("router");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), MAX_RESPONSE_BYTES)
            .await
            .expect("body");
        (status, bytes.to_vec())
    }
}

fn builder(method: &str, path: &str, token: Option<&str>) -> request::Builder {
    let req = Request::builder().method(method).uri(path);
    match token {
        Some(token) => req.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => req,
    }
}

/// One part of a multipart form
pub enum Part<'a> {
    /// A plain text field
    Text(&'a str, &'a str),
    /// A file field
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Status plus JSON body; non-JSON bodies come back as `Value::Null`.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}
