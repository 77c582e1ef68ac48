//! Integration tests for content items.

mod helpers;

use axum::http::StatusCode;
use eduhub_entity::user::UserRole;
use helpers::Part;

#[tokio::test]
async fn test_create_content_without_file() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "secret1").await;

    let response = app
        .multipart(
            "/api/contents",
            &[
                Part::Text("title", "Introduction to Algebra"),
                Part::Text("type", "lesson"),
                Part::Text("subject", "Mathematics"),
                Part::Text("grade", "7"),
            ],
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["message"], "Content created successfully");

    let data = &response.body["data"];
    assert_eq!(data["title"], "Introduction to Algebra");
    assert_eq!(data["type"], "lesson");
    assert_eq!(data["status"], "draft");
    assert_eq!(data["description"], "");
    assert!(data.get("fileUrl").is_none());
}

#[tokio::test]
async fn test_create_content_with_file_and_list() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "secret1").await;

    let created = app
        .multipart(
            "/api/contents",
            &[
                Part::Text("title", "Cell Biology"),
                Part::Text("description", "Slides"),
                Part::Text("type", "document"),
                Part::Text("subject", "Biology"),
                Part::Text("grade", "9"),
                Part::Text("status", "published"),
                Part::File {
                    name: "file",
                    filename: "cells.pdf",
                    content_type: "application/pdf",
                    data: b"%PDF-1.4",
                },
            ],
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.body["data"]["fileName"], "cells.pdf");
    let file_url = created.body["data"]["fileUrl"].as_str().unwrap().to_string();
    assert!(file_url.starts_with("/uploads/"));

    let (status, bytes) = app.get_raw(&file_url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"%PDF-1.4");

    app.multipart(
        "/api/contents",
        &[
            Part::Text("title", "Photosynthesis Quiz"),
            Part::Text("type", "quiz"),
            Part::Text("subject", "Biology"),
            Part::Text("grade", "9"),
        ],
        Some(&token),
    )
    .await;

    let list = app
        .request("GET", "/api/contents/my-contents", None, Some(&token))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    let items = list.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Photosynthesis Quiz");
    assert_eq!(items[1]["title"], "Cell Biology");
}

#[tokio::test]
async fn test_create_content_validation() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "secret1").await;

    let missing_title = app
        .multipart(
            "/api/contents",
            &[
                Part::Text("type", "lesson"),
                Part::Text("subject", "Mathematics"),
                Part::Text("grade", "7"),
            ],
            Some(&token),
        )
        .await;
    assert_eq!(missing_title.status, StatusCode::BAD_REQUEST);

    let bad_type = app
        .multipart(
            "/api/contents",
            &[
                Part::Text("title", "Essay"),
                Part::Text("type", "essay"),
                Part::Text("subject", "English"),
                Part::Text("grade", "10"),
                Part::File {
                    name: "file",
                    filename: "essay.pdf",
                    content_type: "application/pdf",
                    data: b"%PDF-1.4",
                },
            ],
            Some(&token),
        )
        .await;
    assert_eq!(bad_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_contents_require_authentication() {
    let app = helpers::TestApp::new().await;

    let list = app
        .request("GET", "/api/contents/my-contents", None, None)
        .await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);

    let create = app
        .multipart("/api/contents", &[Part::Text("title", "x")], None)
        .await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_content_access_is_owner_or_admin() {
    let app = helpers::TestApp::new().await;
    let owner = app.register("Ada", "ada@example.com", "secret1").await;
    let other = app.register("Bob", "bob@example.com", "secret1").await;
    app.create_user("admin@example.com", "admin123", UserRole::Admin)
        .await;
    let admin = app.login("admin@example.com", "admin123").await;

    let created = app
        .multipart(
            "/api/contents",
            &[
                Part::Text("title", "Private Notes"),
                Part::Text("type", "lesson"),
                Part::Text("subject", "History"),
                Part::Text("grade", "8"),
            ],
            Some(&owner),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    let path = format!("/api/contents/{id}");

    let own = app.request("GET", &path, None, Some(&owner)).await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["data"]["title"], "Private Notes");

    let foreign = app.request("GET", &path, None, Some(&other)).await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let others_list = app
        .request("GET", "/api/contents/my-contents", None, Some(&other))
        .await;
    assert_eq!(others_list.body["data"].as_array().unwrap().len(), 0);

    let by_admin = app.request("GET", &path, None, Some(&admin)).await;
    assert_eq!(by_admin.status, StatusCode::OK);

    let deleted = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, Some(&owner)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let unknown = app
        .request(
            "GET",
            &format!("/api/contents/{}", uuid::Uuid::new_v4()),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_content_removes_file() {
    let app = helpers::TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "secret1").await;

    let created = app
        .multipart(
            "/api/contents",
            &[
                Part::Text("title", "Volcano Video"),
                Part::Text("type", "video"),
                Part::Text("subject", "Geography"),
                Part::Text("grade", "6"),
                Part::File {
                    name: "file",
                    filename: "volcano.mp4",
                    content_type: "video/mp4",
                    data: b"\x00\x00\x00\x18ftypmp42",
                },
            ],
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(app.stored_file_count(), 1);

    let id = created.body["data"]["id"].as_str().unwrap();
    let deleted = app
        .request("DELETE", &format!("/api/contents/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(app.stored_file_count(), 0);
}
