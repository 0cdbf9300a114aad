//! Response types for ingestion and questions

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::session::Session;

/// Outcome of an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestStatus {
    Success,
    Error,
}

/// Body of `POST /upload` responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    pub status: IngestStatus,
    pub message: String,
}

impl IngestResponse {
    pub fn success() -> Self {
        Self {
            status: IngestStatus::Success,
            message: "PDF processed successfully!".to_string(),
        }
    }

    pub fn error(err: &Error) -> Self {
        Self {
            status: IngestStatus::Error,
            message: err.to_string(),
        }
    }
}

/// Body of `POST /ask` responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AskResponse {
    Answer { answer: String },
    Error { error: String },
}

impl AskResponse {
    pub fn answer(answer: String) -> Self {
        Self::Answer { answer }
    }

    pub fn error(err: &Error) -> Self {
        Self::Error {
            error: err.to_string(),
        }
    }
}

/// Summary of the active document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Number of indexed chunks
    pub chunks: usize,
    /// Embedding dimension of the index
    pub dimensions: usize,
    /// Model that embedded the chunks
    pub embedding_model: String,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            chunks: session.chunks().len(),
            dimensions: session.index().dimension(),
            embedding_model: session.embedder().model_name().to_string(),
        }
    }
}

/// Body of `GET /api/info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub embedding_model: String,
    pub generation_model: String,
    pub chunk_size: usize,
    pub top_k: usize,
    pub session: Option<SessionSummary>,
}
