//! Appointment endpoints.
//!
//! Create and update run the booking rules (doctor/patient must exist,
//! no double-booked slot) inside a single write-lock section, so two
//! concurrent creates for the same slot cannot both pass the check.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, DeleteResponse, MutationResponse};
use crate::models::{AppointmentPatch, NewAppointment};
use crate::service::appointments::{self, AppointmentView};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<AppointmentView>>, ApiError> {
    let store = ctx.read_store()?;
    Ok(Json(appointments::list(&store)))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<Json<AppointmentView>, ApiError> {
    let store = ctx.read_store()?;
    Ok(Json(appointments::get(&store, id)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(new): Json<NewAppointment>,
) -> Result<(StatusCode, Json<MutationResponse<AppointmentView>>), ApiError> {
    let mut store = ctx.write_store()?;
    let view = appointments::create(&mut store, new)?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "Appointment booked successfully".into(),
            data: view,
        }),
    ))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
    Json(patch): Json<AppointmentPatch>,
) -> Result<Json<MutationResponse<AppointmentView>>, ApiError> {
    let mut store = ctx.write_store()?;
    let view = appointments::update(&mut store, id, patch)?;
    Ok(Json(MutationResponse {
        message: "Appointment updated successfully".into(),
        data: view,
    }))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut store = ctx.write_store()?;
    appointments::delete(&mut store, id)?;
    Ok(Json(DeleteResponse {
        message: "Appointment deleted successfully".into(),
    }))
}
