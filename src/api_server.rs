// Axum API Server Module
//
// Purpose: HTTP adapter around the receipt scorer and score store
// Endpoints: POST /receipts/process, GET /receipts/:id/points, GET /health

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{ScoringError, StoreError};
use crate::receipt::Receipt;
use crate::scorer::ReceiptScorer;
use crate::store::ScoreStore;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<ReceiptScorer>,
    /// The single score store for this process
    pub store: Arc<ScoreStore>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        tracing::info!("Initializing receipt scorer ({} field policy)...", config.scoring_policy);
        let scorer = ReceiptScorer::new(config.scoring_policy);

        tracing::info!("Initializing score store...");
        Self::with_parts(scorer, ScoreStore::new())
    }

    /// Build state from an existing scorer and store (e.g. one with a custom id generator)
    pub fn with_parts(scorer: ReceiptScorer, store: ScoreStore) -> Self {
        Self {
            scorer: Arc::new(scorer),
            store: Arc::new(store),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Receipt endpoints
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))

        // Middleware
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "receipts_stored": state.store.len(),
    }))
}

async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    let Json(receipt) = payload
        .map_err(|e| AppError::BadRequest(format!("Invalid receipt format: {}", e.body_text())))?;

    let score = state.scorer.score(&receipt)?;
    let id = state.store.put(score.points)?;

    tracing::info!("Processed receipt {} from {:?}: {} points", id, receipt.retailer, score.points);

    Ok(Json(ProcessResponse { id: id.to_string() }))
}

async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    tracing::debug!("Fetching points for receipt {}", id);
    let points = state.store.get(&id)?;
    Ok(Json(PointsResponse { points }))
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ScoringError> for AppError {
    fn from(e: ScoringError) -> Self {
        AppError::BadRequest(format!("Invalid receipt: {}", e))
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => AppError::NotFound(e.to_string()),
            StoreError::IdSpaceExhausted(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
