//! `ValidatedJson` extractor: JSON body deserialization followed by
//! `validator` rules, with every failure mapped to the API error shape.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use eduhub_core::error::AppError;

use crate::error::ApiError;

/// A JSON body that has passed its `Validate` rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large("Request body is too large").into()
    } else {
        AppError::validation(rejection.body_text()).into()
    }
}

/// Turn field errors into a validation error whose message is the first
/// field message and whose details list every failing field.
fn validation_error(errors: ValidationErrors) -> ApiError {
    let mut fields = serde_json::Map::new();
    let mut first_message = None;

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
            .collect();
        if first_message.is_none() {
            first_message = messages.first().cloned();
        }
        fields.insert(field.to_string(), serde_json::json!(messages));
    }

    ApiError::with_details(
        AppError::validation(first_message.unwrap_or_else(|| "Invalid request body".to_string())),
        serde_json::Value::Object(fields),
    )
}
