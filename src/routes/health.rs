//! Health check

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// `GET /health`: liveness plus whether booking mail can be sent
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "resend_configured": state.mailer.is_some(),
        "cache": state.cache.stats(),
    }))
}
