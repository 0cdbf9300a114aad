//! Error types for the PDF assistant

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, Error>;

/// Assistant errors
#[derive(Debug, Error)]
pub enum Error {
    /// The uploaded bytes are not a readable PDF
    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    /// Bad chunk size, top_k, vector dimension or other parameter misuse
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Search on an index built from zero vectors
    #[error("Index is empty: the processed PDF contains no text")]
    EmptyIndex,

    /// Query before any successful ingestion
    #[error("PDF not processed yet")]
    IndexNotReady,

    /// External generative model call failed
    #[error("Answer generation failed: {0}")]
    GenerationFailed(String),

    /// External embedding model call failed
    #[error("Embedding generation failed: {0}")]
    EmbeddingFailed(String),

    /// Upload request carried no document
    #[error("No file provided")]
    MissingDocument,

    /// Another ingestion currently owns the session
    #[error("Another PDF is being processed, retry when it completes")]
    IngestionInProgress,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an unreadable document error
    pub fn unreadable(message: impl Into<String>) -> Self {
        Self::UnreadableDocument(message.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::EmbeddingFailed(message.into())
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::GenerationFailed(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error maps to at the request boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::UnreadableDocument(_)
            | Error::InvalidArgument(_)
            | Error::IndexNotReady
            | Error::MissingDocument => StatusCode::BAD_REQUEST,
            Error::EmptyIndex => StatusCode::UNPROCESSABLE_ENTITY,
            Error::IngestionInProgress => StatusCode::CONFLICT,
            Error::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
            Error::EmbeddingFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Config(_) | Error::Io(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable error kind
    pub fn error_type(&self) -> &'static str {
        match self {
            Error::UnreadableDocument(_) => "unreadable_document",
            Error::InvalidArgument(_) => "invalid_argument",
            Error::EmptyIndex => "empty_index",
            Error::IndexNotReady => "index_not_ready",
            Error::GenerationFailed(_) => "generation_failed",
            Error::EmbeddingFailed(_) => "embedding_failed",
            Error::MissingDocument => "missing_document",
            Error::IngestionInProgress => "ingestion_in_progress",
            Error::Config(_) => "config_error",
            Error::Io(_) => "io_error",
            Error::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
            "type": self.error_type(),
        }));

        (self.status_code(), body).into_response()
    }
}
