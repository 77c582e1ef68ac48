//! Integration tests for the public upload endpoint and static serving.

mod helpers;

use axum::http::StatusCode;
use helpers::Part;

#[tokio::test]
async fn test_upload_stores_and_serves_file() {
    let app = helpers::TestApp::new().await;
    let data = b"%PDF-1.4 lesson plan";

    let response = app
        .multipart(
            "/api/upload",
            &[
                Part::Text("title", "Fractions"),
                Part::Text("type", "document"),
                Part::File {
                    name: "file",
                    filename: "Lesson Plan.PDF",
                    content_type: "application/pdf",
                    data,
                },
            ],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "File uploaded successfully");

    let file = &response.body["file"];
    assert_eq!(file["originalname"], "Lesson Plan.PDF");
    assert_eq!(file["mimetype"], "application/pdf");
    assert_eq!(file["size"], data.len());
    let filename = file["filename"].as_str().unwrap();
    assert!(filename.ends_with(".pdf"));
    assert_eq!(file["url"], format!("/uploads/{filename}"));

    assert_eq!(response.body["metadata"]["title"], "Fractions");
    assert_eq!(response.body["metadata"]["type"], "document");

    let (status, bytes) = app.get_raw(&format!("/uploads/{filename}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, data);
}

#[tokio::test]
async fn test_upload_rejects_disallowed_mime_type() {
    let app = helpers::TestApp::new().await;

    let response = app
        .multipart(
            "/api/upload",
            &[Part::File {
                name: "file",
                filename: "script.sh",
                content_type: "application/x-sh",
                data: b"#!/bin/sh\necho hi\n",
            }],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(response.body["error"], "UNSUPPORTED_MEDIA_TYPE_ERROR");
    assert_eq!(
        response.body["message"],
        "Invalid file type. Only images, videos, PDFs, and documents are allowed."
    );
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_upload_rejects_oversized_file() {
    let app = helpers::TestApp::with_max_upload(1024).await;
    let data = vec![0u8; 2048];

    let response = app
        .multipart(
            "/api/upload",
            &[Part::File {
                name: "file",
                filename: "big.png",
                content_type: "image/png",
                data: &data,
            }],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["error"], "PAYLOAD_TOO_LARGE_ERROR");
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_upload_overrunning_body_limit_is_413() {
    let app = helpers::TestApp::with_max_upload(1024).await;
    // Past the file cap plus the 1 MiB allowance for form framing, so the
    // body limit trips while the part is still being read.
    let oversized = app.config.storage.request_body_limit() + 4096;
    let data = vec![0u8; oversized];

    let response = app
        .multipart(
            "/api/upload",
            &[Part::File {
                name: "file",
                filename: "huge.png",
                content_type: "image/png",
                data: &data,
            }],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["error"], "PAYLOAD_TOO_LARGE_ERROR");
    assert_eq!(response.body["message"], "Request body is too large");
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_upload_accepts_file_at_limit() {
    let app = helpers::TestApp::with_max_upload(1024).await;
    let data = vec![7u8; 1024];

    let response = app
        .multipart(
            "/api/upload",
            &[Part::File {
                name: "file",
                filename: "exact.jpg",
                content_type: "image/jpeg",
                data: &data,
            }],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["file"]["size"], 1024);
}

#[tokio::test]
async fn test_upload_without_file() {
    let app = helpers::TestApp::new().await;

    let response = app
        .multipart("/api/upload", &[Part::Text("title", "Nothing")], None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "No file uploaded");
}

#[tokio::test]
async fn test_upload_burst_gets_distinct_names() {
    let app = helpers::TestApp::new().await;
    let parts = [Part::File {
        name: "file",
        filename: "photo.png",
        content_type: "image/png",
        data: b"\x89PNG",
    }];

    let responses = futures::future::join_all(
        (0..5).map(|_| app.multipart("/api/upload", &parts, None)),
    )
    .await;

    let mut names = std::collections::HashSet::new();
    for response in responses {
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        names.insert(response.body["file"]["filename"].as_str().unwrap().to_string());
    }

    assert_eq!(names.len(), 5);
    assert_eq!(app.stored_file_count(), 5);
}
