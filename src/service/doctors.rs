//! Doctor CRUD operations.
//!
//! Deleting a doctor cascades to every appointment referencing them;
//! this is the only legal way to remove a referenced doctor.

use serde::Serialize;

use crate::models::{Doctor, DoctorPatch, NewDoctor};
use crate::service::{require_filled, ServiceError};
use crate::store::ClinicStore;

/// Doctor record enriched with the specialization's display label.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorView {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub specialization_display: &'static str,
}

impl DoctorView {
    fn from_record(doctor: &Doctor) -> Self {
        Self {
            doctor: doctor.clone(),
            specialization_display: doctor.specialization.display_name(),
        }
    }
}

pub fn list(store: &ClinicStore) -> Vec<DoctorView> {
    store.doctors().iter().map(DoctorView::from_record).collect()
}

pub fn get(store: &ClinicStore, id: u64) -> Result<DoctorView, ServiceError> {
    store
        .doctor(id)
        .map(DoctorView::from_record)
        .ok_or(ServiceError::NotFound {
            entity: "Doctor",
            id,
        })
}

pub fn create(store: &mut ClinicStore, new: NewDoctor) -> Result<DoctorView, ServiceError> {
    require_filled("name", &new.name)?;
    require_filled("phone", &new.phone)?;
    require_filled("email", &new.email)?;

    let doctor = store.insert_doctor(new);
    tracing::info!(id = doctor.id, "Doctor created");
    Ok(DoctorView::from_record(doctor))
}

pub fn update(
    store: &mut ClinicStore,
    id: u64,
    patch: DoctorPatch,
) -> Result<DoctorView, ServiceError> {
    if store.doctor(id).is_none() {
        return Err(ServiceError::NotFound {
            entity: "Doctor",
            id,
        });
    }
    if let Some(name) = &patch.name {
        require_filled("name", name)?;
    }
    if let Some(phone) = &patch.phone {
        require_filled("phone", phone)?;
    }
    if let Some(email) = &patch.email {
        require_filled("email", email)?;
    }

    let doctor = store
        .update_doctor(id, patch)
        .ok_or(ServiceError::NotFound {
            entity: "Doctor",
            id,
        })?;
    Ok(DoctorView::from_record(doctor))
}

/// Remove the doctor and cascade-delete their appointments.
/// Returns the removed record so the caller can render a confirmation.
pub fn delete(store: &mut ClinicStore, id: u64) -> Result<Doctor, ServiceError> {
    let doctor = store.remove_doctor(id).ok_or(ServiceError::NotFound {
        entity: "Doctor",
        id,
    })?;
    let cascaded = store.remove_appointments_for_doctor(id);
    tracing::info!(id, cascaded, "Doctor deleted");
    Ok(doctor)
}
