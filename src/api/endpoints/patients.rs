//! Patient endpoints. Same surface as `doctors`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, DeleteResponse, MutationResponse};
use crate::models::{NewPatient, PatientPatch};
use crate::service::patients::{self, PatientView};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<PatientView>>, ApiError> {
    let store = ctx.read_store()?;
    Ok(Json(patients::list(&store)))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<Json<PatientView>, ApiError> {
    let store = ctx.read_store()?;
    Ok(Json(patients::get(&store, id)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(new): Json<NewPatient>,
) -> Result<(StatusCode, Json<MutationResponse<PatientView>>), ApiError> {
    let mut store = ctx.write_store()?;
    let view = patients::create(&mut store, new)?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "Patient created successfully".into(),
            data: view,
        }),
    ))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
    Json(patch): Json<PatientPatch>,
) -> Result<Json<MutationResponse<PatientView>>, ApiError> {
    let mut store = ctx.write_store()?;
    let view = patients::update(&mut store, id, patch)?;
    Ok(Json(MutationResponse {
        message: "Patient updated successfully".into(),
        data: view,
    }))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut store = ctx.write_store()?;
    let patient = patients::delete(&mut store, id)?;
    Ok(Json(DeleteResponse {
        message: format!("Patient {} deleted successfully", patient.name),
    }))
}
