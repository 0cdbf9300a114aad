//! Question answering endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::time::Instant;

use crate::error::Error;
use crate::server::state::AppState;
use crate::types::{AskRequest, AskResponse};

/// POST /ask - Answer a question about the active document
pub async fn ask(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AskRequest>, JsonRejection>,
) -> (StatusCode, Json<AskResponse>) {
    let start = Instant::now();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let err = Error::invalid_argument(rejection.body_text());
            return (err.status_code(), Json(AskResponse::error(&err)));
        }
    };

    let result = match request.question() {
        Ok(question) => {
            tracing::info!("Question: \"{}\"", question);
            state.answer(question).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(answer) => {
            tracing::info!("Answered in {:?}", start.elapsed());
            (StatusCode::OK, Json(AskResponse::answer(answer)))
        }
        Err(e) => {
            tracing::warn!("Question failed: {}", e);
            (e.status_code(), Json(AskResponse::error(&e)))
        }
    }
}
