//! Buffered reading of multipart forms with one optional `file` part.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;

use eduhub_core::error::AppError;
use eduhub_service::upload::UploadParams;

use crate::error::ApiError;

/// Name of the form part carrying the file.
const FILE_FIELD: &str = "file";

/// MIME type assumed when a file part declares none.
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A fully read multipart form.
#[derive(Debug, Default)]
pub struct MultipartForm {
    /// Text fields by name. Repeated names keep the last value.
    pub fields: HashMap<String, String>,
    /// The `file` part, if one with content or a filename was sent.
    pub file: Option<UploadParams>,
}

impl MultipartForm {
    /// Removes and returns the text value of a field.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Reads every part of the request body.
    pub async fn read(
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Self, ApiError> {
        let mut multipart = multipart.map_err(rejection_error)?;
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(field_error)? {
            let name = field.name().unwrap_or_default().to_string();

            if name == FILE_FIELD {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_MIME_TYPE)
                    .to_string();
                let data = field.bytes().await.map_err(field_error)?;

                // Browsers send an empty unnamed part when no file was picked.
                if original_name.is_empty() && data.is_empty() {
                    continue;
                }

                form.file = Some(UploadParams {
                    original_name,
                    mime_type,
                    data,
                });
            } else if !name.is_empty() {
                let value = field.text().await.map_err(field_error)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }
}

fn rejection_error(rejection: MultipartRejection) -> ApiError {
    AppError::validation(rejection.body_text()).into()
}

fn field_error(error: MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large("Request body is too large").into()
    } else {
        AppError::validation(format!("Invalid multipart body: {}", error.body_text())).into()
    }
}
