//! Patient CRUD operations. Symmetric to `doctors`, including the
//! cascade delete of the patient's appointments.

use serde::Serialize;

use crate::models::{NewPatient, Patient, PatientPatch};
use crate::service::{require_filled, ServiceError};
use crate::store::ClinicStore;

/// Patient record enriched with the gender's display label.
#[derive(Debug, Clone, Serialize)]
pub struct PatientView {
    #[serde(flatten)]
    pub patient: Patient,
    pub gender_display: &'static str,
}

impl PatientView {
    fn from_record(patient: &Patient) -> Self {
        Self {
            patient: patient.clone(),
            gender_display: patient.gender.display_name(),
        }
    }
}

pub fn list(store: &ClinicStore) -> Vec<PatientView> {
    store.patients().iter().map(PatientView::from_record).collect()
}

pub fn get(store: &ClinicStore, id: u64) -> Result<PatientView, ServiceError> {
    store
        .patient(id)
        .map(PatientView::from_record)
        .ok_or(ServiceError::NotFound {
            entity: "Patient",
            id,
        })
}

pub fn create(store: &mut ClinicStore, new: NewPatient) -> Result<PatientView, ServiceError> {
    require_filled("name", &new.name)?;
    require_filled("phone", &new.phone)?;
    require_filled("email", &new.email)?;

    let patient = store.insert_patient(new);
    tracing::info!(id = patient.id, "Patient created");
    Ok(PatientView::from_record(patient))
}

pub fn update(
    store: &mut ClinicStore,
    id: u64,
    patch: PatientPatch,
) -> Result<PatientView, ServiceError> {
    if store.patient(id).is_none() {
        return Err(ServiceError::NotFound {
            entity: "Patient",
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

    let patient = store
        .update_patient(id, patch)
        .ok_or(ServiceError::NotFound {
            entity: "Patient",
            id,
        })?;
    Ok(PatientView::from_record(patient))
}

/// Remove the patient and cascade-delete their appointments.
pub fn delete(store: &mut ClinicStore, id: u64) -> Result<Patient, ServiceError> {
    let patient = store.remove_patient(id).ok_or(ServiceError::NotFound {
        entity: "Patient",
        id,
    })?;
    let cascaded = store.remove_appointments_for_patient(id);
    tracing::info!(id, cascaded, "Patient deleted");
    Ok(patient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, NewAppointment};

    fn new_patient(name: &str) -> NewPatient {
        NewPatient {
            name: name.into(),
            age: 30,
            gender: Gender::Male,
            phone: "2".into(),
            email: "b@x.com".into(),
            address: None,
        }
    }

    #[test]
    fn create_assigns_id_and_defaults_address() {
        let mut store = ClinicStore::new();
        let view = create(&mut store, new_patient("B")).unwrap();
        assert_eq!(view.patient.id, 1);
        assert_eq!(view.patient.address, "");
        assert_eq!(view.gender_display, "Male");
    }

    #[test]
    fn create_rejects_blank_phone() {
        let mut store = ClinicStore::new();
        let err = create(
            &mut store,
            NewPatient {
                phone: " ".into(),
                ..new_patient("B")
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { field: "phone", .. }));
        assert!(store.patients().is_empty());
    }

    #[test]
    fn update_can_change_address_and_age() {
        let mut store = ClinicStore::new();
        create(&mut store, new_patient("B")).unwrap();
        let view = update(
            &mut store,
            1,
            PatientPatch {
                age: Some(31),
                address: Some("12 High St".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(view.patient.age, 31);
        assert_eq!(view.patient.address, "12 High St");
        assert_eq!(view.patient.name, "B");
    }

    #[test]
    fn delete_cascades_to_own_appointments_only() {
        let mut store = ClinicStore::new();
        create(&mut store, new_patient("B")).unwrap();
        create(&mut store, new_patient("C")).unwrap();
        for (patient, time) in [(1, "09:00"), (2, "10:00")] {
            store.insert_appointment(NewAppointment {
                doctor: 1,
                patient,
                date: "2026-01-01".into(),
                time: time.into(),
                status: None,
                notes: None,
            });
        }

        let removed = delete(&mut store, 1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(store.appointments().len(), 1);
        assert_eq!(store.appointments()[0].patient, 2);
    }

    #[test]
    fn get_and_delete_missing_are_not_found() {
        let mut store = ClinicStore::new();
        assert!(matches!(
            get(&store, 5).unwrap_err(),
            ServiceError::NotFound { entity: "Patient", id: 5 }
        ));
        assert!(matches!(
            delete(&mut store, 5).unwrap_err(),
            ServiceError::NotFound { .. }
        ));
    }
}
