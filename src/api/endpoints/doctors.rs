//! Doctor endpoints.
//!
//! - `GET    /api/doctors`     — list
//! - `POST   /api/doctors`     — create
//! - `GET    /api/doctors/:id` — detail
//! - `PUT    /api/doctors/:id` — partial update
//! - `DELETE /api/doctors/:id` — delete with appointment cascade

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, DeleteResponse, MutationResponse};
use crate::models::{DoctorPatch, NewDoctor};
use crate::service::doctors::{self, DoctorView};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<DoctorView>>, ApiError> {
    let store = ctx.read_store()?;
    Ok(Json(doctors::list(&store)))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<Json<DoctorView>, ApiError> {
    let store = ctx.read_store()?;
    Ok(Json(doctors::get(&store, id)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(new): Json<NewDoctor>,
) -> Result<(StatusCode, Json<MutationResponse<DoctorView>>), ApiError> {
    let mut store = ctx.write_store()?;
    let view = doctors::create(&mut store, new)?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "Doctor created successfully".into(),
            data: view,
        }),
    ))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
    Json(patch): Json<DoctorPatch>,
) -> Result<Json<MutationResponse<DoctorView>>, ApiError> {
    let mut store = ctx.write_store()?;
    let view = doctors::update(&mut store, id, patch)?;
    Ok(Json(MutationResponse {
        message: "Doctor updated successfully".into(),
        data: view,
    }))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut store = ctx.write_store()?;
    let doctor = doctors::delete(&mut store, id)?;
    Ok(Json(DeleteResponse {
        message: format!("Dr. {} deleted successfully", doctor.name),
    }))
}
