//! Unified application error types for EduHub.
//!
//! Every crate reports failures as [`AppError`]; the HTTP layer picks the
//! status code from the [`ErrorKind`] alone.

use std::fmt;
use thiserror::Error;

/// Error category. Decides the HTTP status and whether the message may be
/// shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Unknown user, content item, or file.
    NotFound,
    /// Missing or bad credentials or token.
    Authentication,
    /// Authenticated, but not allowed to touch the resource.
    Authorization,
    /// Malformed or incomplete input.
    Validation,
    /// Duplicate email or stored name.
    Conflict,
    /// Upload above the configured size limit.
    PayloadTooLarge,
    /// Upload with a MIME type outside the allow-list.
    UnsupportedMediaType,
    Internal,
    Database,
    /// Upload directory I/O.
    Storage,
    Configuration,
    Serialization,
}

impl ErrorKind {
    /// Stable upper-case name used in logs.
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Authentication => "AUTHENTICATION",
            Self::Authorization => "AUTHORIZATION",
            Self::Validation => "VALIDATION",
            Self::Conflict => "CONFLICT",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::Internal => "INTERNAL",
            Self::Database => "DATABASE",
            Self::Storage => "STORAGE",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
        }
    }

    /// Whether the request itself was at fault.
    pub const fn is_client(self) -> bool {
        !matches!(
            self,
            Self::Internal
                | Self::Database
                | Self::Storage
                | Self::Configuration
                | Self::Serialization
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The error type returned by every fallible EduHub operation.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    pub kind: ErrorKind,
    /// Message safe to return to clients for client-side kinds.
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

macro_rules! kind_constructors {
    ($($(#[$doc:meta])* $name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(message: impl Into<String>) -> Self {
                Self::new(ErrorKind::$kind, message)
            }
        )*
    };
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a lower-level error, keeping it as the `source`.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    kind_constructors! {
        not_found => NotFound,
        authentication => Authentication,
        authorization => Authorization,
        validation => Validation,
        conflict => Conflict,
        payload_too_large => PayloadTooLarge,
        unsupported_media_type => UnsupportedMediaType,
        internal => Internal,
        database => Database,
        storage => Storage,
        configuration => Configuration,
    }

    /// Whether this error is the caller's fault rather than the server's.
    pub fn is_client_error(&self) -> bool {
        self.kind.is_client()
    }
}

/// Clones keep kind and message; the boxed source cannot be cloned.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self::new(self.kind, self.message.clone())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Serialization, format!("Invalid JSON: {err}"), err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(ErrorKind::Configuration, format!("Bad configuration: {err}"), err)
    }
}
