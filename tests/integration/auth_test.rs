//! Integration tests for the authentication flow.

mod helpers;

use axum::http::StatusCode;
use eduhub_entity::user::UserRole;

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Ada Lovelace",
                "email": "Ada@Example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["token_type"], "Bearer");
    assert!(response.body["access_token"].as_str().is_some());
    assert_eq!(response.body["user"]["email"], "ada@example.com");
    assert_eq!(response.body["user"]["role"], "user");
    assert!(response.body["user"].get("password_hash").is_none());
    assert!(response.body["user"].get("createdAt").is_some());
}

#[tokio::test]
async fn test_register_duplicate_email_rejected() {
    let app = helpers::TestApp::new().await;
    app.register("Ada", "ada@example.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Other Ada",
                "email": "ADA@example.com",
                "password": "another1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT_ERROR");
    assert_eq!(response.body["message"], "User with this email already exists");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = helpers::TestApp::new().await;

    let bad_email = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Ada",
                "email": "not-an-email",
                "password": "secret1",
            })),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_email.body["error"], "VALIDATION_ERROR");
    assert!(bad_email.body["details"]["email"].is_array());

    let short_password = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "abc",
            })),
            None,
        )
        .await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);
    assert!(short_password.body["message"].as_str().is_some());
}

#[tokio::test]
async fn test_login_token_authorizes_profile() {
    let app = helpers::TestApp::new().await;
    app.create_user("teacher@example.com", "password123", UserRole::User)
        .await;

    let token = app.login("teacher@example.com", "password123").await;

    let response = app
        .request("GET", "/api/auth/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "teacher@example.com");
    assert_eq!(response.body["role"], "user");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = helpers::TestApp::new().await;
    app.create_user("teacher@example.com", "password123", UserRole::User)
        .await;

    for (email, password) in [
        ("teacher@example.com", "wrongpassword"),
        ("nobody@example.com", "password123"),
    ] {
        let response = app
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "AUTHENTICATION_ERROR");
        assert_eq!(response.body["message"], "Invalid email or password");
    }
}

#[tokio::test]
async fn test_profile_requires_valid_token() {
    let app = helpers::TestApp::new().await;

    let missing = app.request("GET", "/api/auth/profile", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/auth/profile", None, Some("not.a.token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.body["error"], "AUTHENTICATION_ERROR");
}

#[tokio::test]
async fn test_update_profile_and_change_password() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "secret1").await;

    let updated = app
        .request(
            "PUT",
            "/api/auth/profile",
            Some(serde_json::json!({ "name": "Ada King" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["name"], "Ada King");
    assert_eq!(updated.body["email"], "ada@example.com");

    let wrong_current = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(serde_json::json!({
                "current_password": "nope",
                "new_password": "secret2",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(wrong_current.status, StatusCode::UNAUTHORIZED);

    let changed = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(serde_json::json!({
                "current_password": "secret1",
                "new_password": "secret2",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(changed.status, StatusCode::OK);

    app.login("ada@example.com", "secret2").await;
}

#[tokio::test]
async fn test_logout_and_welcome() {
    let app = helpers::TestApp::new().await;

    let logout = app.request("POST", "/api/auth/logout", None, None).await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.body["message"], "Logged out successfully");

    let welcome = app.request("GET", "/api", None, None).await;
    assert_eq!(welcome.status, StatusCode::OK);
    assert!(welcome.body["message"].as_str().is_some());

    let health = app.request("GET", "/api/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert_eq!(health.body["database"], "connected");
}

#[tokio::test]
async fn test_register_body_over_limit_is_413() {
    let app = helpers::TestApp::with_max_upload(1024).await;
    let name = "a".repeat(app.config.storage.request_body_limit() + 4096);

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": name,
                "email": "big@example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["error"], "PAYLOAD_TOO_LARGE_ERROR");
    assert!(
        app.state
            .user_service
            .find_by_email("big@example.com")
            .await
            .unwrap()
            .is_none()
    );
}
