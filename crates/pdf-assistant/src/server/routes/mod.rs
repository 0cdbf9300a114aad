//! Routes for upload, questions and service info

pub mod ingest;
pub mod query;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;
use crate::types::{InfoResponse, SessionSummary};

/// Build the upload, question and info routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Upload - with larger body limit for PDFs
        .route(
            "/upload",
            post(ingest::upload_pdf).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/ask", post(query::ask))
        .route("/api/info", get(info))
}

/// GET /api/info - Service configuration and active document summary
async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let config = state.config();
    let session = state.sessions().current();

    Json(InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        embedding_model: config.embeddings.model.clone(),
        generation_model: state.generator().provider().model().to_string(),
        chunk_size: config.chunking.chunk_size,
        top_k: config.retrieval.top_k,
        session: session.as_deref().map(SessionSummary::from),
    })
}
