use std::fmt;

use serde::{Deserialize, Serialize};

pub type SubmissionId = u64;

/// JSON body of `POST /submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitRequest {
    pub company: String,
    pub ingredients: String,
}

/// A decoded 2xx response body: either a recipe or a backend-reported error.
///
/// `error` takes precedence when a payload carries both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecipeResponse {
    Error { error: String },
    Recipe(RecipePayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipePayload {
    pub name: String,
    pub tagline: String,
    pub ingredients: Vec<String>,
    pub instructions: InstructionsPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum InstructionsPayload {
    Text(String),
    Steps(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmissionCompleted {
        submission_id: SubmissionId,
        result: Result<RecipeResponse, SubmitError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Encode,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Encode => write!(f, "request encoding failed"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "undecodable response"),
        }
    }
}
