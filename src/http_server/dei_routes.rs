//! DEI HTTP Routes
//!
//! Endpoints for computing the index, listing past computations, and
//! clearing the history.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::dei::{DeiInput, DeiRecord, DeiService};
use crate::observability::Logger;

// ==================
// Shared State
// ==================

/// DEI state shared across handlers
pub struct DeiState {
    pub service: DeiService,
}

impl DeiState {
    pub fn new() -> Self {
        Self {
            service: DeiService::new(),
        }
    }
}

impl Default for DeiState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Response Types
// ==================

/// Rejection body, `{"detail": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// DEI Routes
// ==================

/// Create DEI routes
pub fn dei_routes(state: Arc<DeiState>) -> Router {
    Router::new()
        .route("/compute", post(compute_handler))
        .route("/history", get(history_handler))
        .route("/reset", post(reset_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn compute_handler(
    State(state): State<Arc<DeiState>>,
    Json(input): Json<DeiInput>,
) -> Result<Json<DeiRecord>, (StatusCode, Json<ErrorDetail>)> {
    match state.service.compute(input) {
        Ok(record) => {
            let dei = record.dei.to_string();
            let history_len = state.service.history_len().to_string();
            Logger::info(
                "DEI_COMPUTE",
                &[("dei", dei.as_str()), ("history_len", history_len.as_str())],
            );
            Ok(Json(record))
        }
        Err(err) => {
            let reason = err.to_string();
            Logger::warn("DEI_COMPUTE_REJECTED", &[("reason", reason.as_str())]);
            Err((StatusCode::BAD_REQUEST, Json(ErrorDetail { detail: reason })))
        }
    }
}

async fn history_handler(State(state): State<Arc<DeiState>>) -> Json<Vec<DeiRecord>> {
    Json(state.service.history())
}

async fn reset_handler(State(state): State<Arc<DeiState>>) -> Json<MessageResponse> {
    state.service.reset();
    Logger::info("DEI_HISTORY_RESET", &[]);

    Json(MessageResponse {
        message: "History cleared".to_string(),
    })
}
