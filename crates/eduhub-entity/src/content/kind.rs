//! Content type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of teaching material a content item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A lesson plan or reading.
    Lesson,
    /// A quiz or assessment.
    Quiz,
    /// A video.
    Video,
    /// A standalone document.
    Document,
}

impl ContentKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Quiz => "quiz",
            Self::Video => "video",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = eduhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lesson" => Ok(Self::Lesson),
            "quiz" => Ok(Self::Quiz),
            "video" => Ok(Self::Video),
            "document" => Ok(Self::Document),
            _ => Err(eduhub_core::AppError::validation(format!(
                "Invalid content type: '{s}'. Expected one of: lesson, quiz, video, document"
            ))),
        }
    }
}
