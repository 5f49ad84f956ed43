//! Liveness endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub doctors: usize,
    pub patients: usize,
    pub appointments: usize,
}

/// `GET /api/health` — service status and entity counts.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let store = ctx.read_store()?;
    Ok(Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
        doctors: store.doctors().len(),
        patients: store.patients().len(),
        appointments: store.appointments().len(),
    }))
}
