//! Appointment booking: CRUD plus the referential integrity rules.
//!
//! Create and update validate against current store state:
//! 1. the referenced doctor and patient must exist,
//! 2. the effective (doctor, date, time) triple must not collide with
//!    any other appointment (the record being updated is excluded, so
//!    a booking never conflicts with its own slot).
//! Only when both checks pass does the mutation proceed.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::models::{Appointment, AppointmentPatch, NewAppointment};
use crate::service::{ServiceError, UNKNOWN_NAME};
use crate::store::ClinicStore;

/// Appointment record enriched with display names looked up from the
/// referenced doctor and patient. `doctor_specialization` is populated
/// by the list operation only; a list row whose doctor cannot be
/// resolved carries an empty string there.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub doctor_name: String,
    pub patient_name: String,
    pub status_display: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_specialization: Option<&'static str>,
}

fn enrich(store: &ClinicStore, appointment: &Appointment, with_specialization: bool) -> AppointmentView {
    let doctor = store.doctor(appointment.doctor);
    let patient = store.patient(appointment.patient);
    AppointmentView {
        appointment: appointment.clone(),
        doctor_name: doctor
            .map(|d| d.name.clone())
            .unwrap_or_else(|| UNKNOWN_NAME.into()),
        patient_name: patient
            .map(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_NAME.into()),
        status_display: appointment.status.display_name(),
        doctor_specialization: if with_specialization {
            Some(doctor.map(|d| d.specialization.as_str()).unwrap_or(""))
        } else {
            None
        },
    }
}

fn validate_date(date: &str) -> Result<(), ServiceError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ServiceError::Validation {
            field: "date",
            reason: format!("'{date}' is not a YYYY-MM-DD date"),
        })
}

fn validate_time(time: &str) -> Result<(), ServiceError> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map(|_| ())
        .map_err(|_| ServiceError::Validation {
            field: "time",
            reason: format!("'{time}' is not an HH:MM time"),
        })
}

fn check_references(store: &ClinicStore, doctor: u64, patient: u64) -> Result<(), ServiceError> {
    if store.doctor(doctor).is_none() {
        return Err(ServiceError::ReferenceNotFound {
            entity: "Doctor",
            id: doctor,
        });
    }
    if store.patient(patient).is_none() {
        return Err(ServiceError::ReferenceNotFound {
            entity: "Patient",
            id: patient,
        });
    }
    Ok(())
}

pub fn list(store: &ClinicStore) -> Vec<AppointmentView> {
    store
        .appointments()
        .iter()
        .map(|a| enrich(store, a, true))
        .collect()
}

pub fn get(store: &ClinicStore, id: u64) -> Result<AppointmentView, ServiceError> {
    store
        .appointment(id)
        .map(|a| enrich(store, a, false))
        .ok_or(ServiceError::NotFound {
            entity: "Appointment",
            id,
        })
}

pub fn create(store: &mut ClinicStore, new: NewAppointment) -> Result<AppointmentView, ServiceError> {
    validate_date(&new.date)?;
    validate_time(&new.time)?;
    check_references(store, new.doctor, new.patient)?;

    if store.slot_taken(new.doctor, &new.date, &new.time, None) {
        return Err(ServiceError::SchedulingConflict {
            doctor: new.doctor,
            date: new.date,
            time: new.time,
        });
    }

    let appointment = store.insert_appointment(new).clone();
    tracing::info!(
        id = appointment.id,
        doctor = appointment.doctor,
        patient = appointment.patient,
        "Appointment booked"
    );
    Ok(enrich(store, &appointment, false))
}

/// Partial update. Reference and conflict checks run against the
/// effective post-merge record, so changing only the time re-checks
/// the slot under the existing doctor and date.
pub fn update(
    store: &mut ClinicStore,
    id: u64,
    patch: AppointmentPatch,
) -> Result<AppointmentView, ServiceError> {
    let current = store
        .appointment(id)
        .cloned()
        .ok_or(ServiceError::NotFound {
            entity: "Appointment",
            id,
        })?;

    if let Some(date) = &patch.date {
        validate_date(date)?;
    }
    if let Some(time) = &patch.time {
        validate_time(time)?;
    }

    let doctor = patch.doctor.unwrap_or(current.doctor);
    let patient = patch.patient.unwrap_or(current.patient);
    let date = patch.date.as_deref().unwrap_or(&current.date);
    let time = patch.time.as_deref().unwrap_or(&current.time);

    check_references(store, doctor, patient)?;

    if store.slot_taken(doctor, date, time, Some(id)) {
        return Err(ServiceError::SchedulingConflict {
            doctor,
            date: date.into(),
            time: time.into(),
        });
    }

    let appointment = store
        .update_appointment(id, patch)
        .ok_or(ServiceError::NotFound {
            entity: "Appointment",
            id,
        })?
        .clone();
    Ok(enrich(store, &appointment, false))
}

/// Plain removal; appointments have no dependents to cascade.
pub fn delete(store: &mut ClinicStore, id: u64) -> Result<Appointment, ServiceError> {
    let appointment = store.remove_appointment(id).ok_or(ServiceError::NotFound {
        entity: "Appointment",
        id,
    })?;
    tracing::info!(id, "Appointment deleted");
    Ok(appointment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentStatus, Gender, NewDoctor, NewPatient, Specialization};

    /// Store with doctors 1-2 and patient 1.
    fn clinic() -> ClinicStore {
        let mut store = ClinicStore::new();
        for name in ["A", "B"] {
            store.insert_doctor(NewDoctor {
                name: name.into(),
                specialization: Specialization::General,
                phone: "1".into(),
                email: "a@x.com".into(),
            });
        }
        store.insert_patient(NewPatient {
            name: "P".into(),
            age: 30,
            gender: Gender::Male,
            phone: "2".into(),
            email: "b@x.com".into(),
            address: None,
        });
        store
    }

    fn booking(doctor: u64, date: &str, time: &str) -> NewAppointment {
        NewAppointment {
            doctor,
            patient: 1,
            date: date.into(),
            time: time.into(),
            status: None,
            notes: None,
        }
    }

    #[test]
    fn create_defaults_to_scheduled() {
        let mut store = clinic();
        let view = create(&mut store, booking(1, "2026-01-01", "09:00")).unwrap();
        assert_eq!(view.appointment.id, 1);
        assert_eq!(view.appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(view.doctor_name, "A");
        assert_eq!(view.patient_name, "P");
    }

    #[test]
    fn create_with_missing_doctor_fails_without_mutation() {
        let mut store = clinic();
        let err = create(&mut store, booking(99, "2026-01-01", "09:00")).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::ReferenceNotFound { entity: "Doctor", id: 99 }
        ));
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn create_with_missing_patient_fails() {
        let mut store = clinic();
        let err = create(
            &mut store,
            NewAppointment {
                patient: 99,
                ..booking(1, "2026-01-01", "09:00")
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::ReferenceNotFound { entity: "Patient", id: 99 }
        ));
    }

    #[test]
    fn double_booking_same_slot_conflicts() {
        let mut store = clinic();
        create(&mut store, booking(1, "2026-01-01", "09:00")).unwrap();
        let err = create(&mut store, booking(1, "2026-01-01", "09:00")).unwrap_err();
        assert!(matches!(err, ServiceError::SchedulingConflict { .. }));
        assert_eq!(store.appointments().len(), 1);
    }

    #[test]
    fn different_doctor_or_slot_books_fine() {
        let mut store = clinic();
        create(&mut store, booking(1, "2026-01-01", "09:00")).unwrap();
        create(&mut store, booking(2, "2026-01-01", "09:00")).unwrap();
        create(&mut store, booking(1, "2026-01-01", "09:30")).unwrap();
        create(&mut store, booking(1, "2026-01-02", "09:00")).unwrap();
        assert_eq!(store.appointments().len(), 4);
    }

    #[test]
    fn create_rejects_malformed_date_and_time() {
        let mut store = clinic();
        let err = create(&mut store, booking(1, "01/01/2026", "09:00")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation { field: "date", .. }));
        let err = create(&mut store, booking(1, "2026-01-01", "9am")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation { field: "time", .. }));
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn update_excludes_self_from_conflict_scan() {
        let mut store = clinic();
        let id = create(&mut store, booking(1, "2026-01-01", "09:00"))
            .unwrap()
            .appointment
            .id;
        // Re-asserting its own slot is not a conflict
        let view = update(
            &mut store,
            id,
            AppointmentPatch {
                time: Some("09:00".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(view.appointment.time, "09:00");
    }

    #[test]
    fn update_into_taken_slot_conflicts() {
        let mut store = clinic();
        create(&mut store, booking(1, "2026-01-01", "09:00")).unwrap();
        let id = create(&mut store, booking(1, "2026-01-01", "10:00"))
            .unwrap()
            .appointment
            .id;
        let err = update(
            &mut store,
            id,
            AppointmentPatch {
                time: Some("09:00".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::SchedulingConflict { .. }));
        assert_eq!(store.appointment(id).unwrap().time, "10:00");
    }

    #[test]
    fn update_checks_effective_doctor_reference() {
        let mut store = clinic();
        let id = create(&mut store, booking(1, "2026-01-01", "09:00"))
            .unwrap()
            .appointment
            .id;
        let err = update(
            &mut store,
            id,
            AppointmentPatch {
                doctor: Some(99),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::ReferenceNotFound { .. }));
        assert_eq!(store.appointment(id).unwrap().doctor, 1);
    }

    #[test]
    fn status_moves_freely_between_values() {
        let mut store = clinic();
        let id = create(&mut store, booking(1, "2026-01-01", "09:00"))
            .unwrap()
            .appointment
            .id;
        for status in [
            AppointmentStatus::Completed,
            AppointmentStatus::Scheduled,
            AppointmentStatus::NoShow,
            AppointmentStatus::Cancelled,
        ] {
            let view = update(
                &mut store,
                id,
                AppointmentPatch {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .unwrap();
            assert_eq!(view.appointment.status, status);
        }
    }

    #[test]
    fn list_carries_specialization_but_get_does_not() {
        let mut store = clinic();
        create(&mut store, booking(1, "2026-01-01", "09:00")).unwrap();

        let listed = list(&store);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].doctor_specialization, Some("general"));

        let fetched = get(&store, 1).unwrap();
        assert!(fetched.doctor_specialization.is_none());
        let json = serde_json::to_value(&fetched).unwrap();
        assert!(json.get("doctor_specialization").is_none());
        assert_eq!(json["doctor_name"], "A");
        assert_eq!(json["status_display"], "Scheduled");
    }

    #[test]
    fn dangling_reference_renders_unknown() {
        let mut store = clinic();
        create(&mut store, booking(1, "2026-01-01", "09:00")).unwrap();
        // Bypass the cascade path deliberately to exercise the fallback.
        store.remove_doctor(1).unwrap();
        let view = get(&store, 1).unwrap();
        assert_eq!(view.doctor_name, "Unknown");
    }

    #[test]
    fn dangling_reference_lists_empty_specialization() {
        let mut store = clinic();
        create(&mut store, booking(1, "2026-01-01", "09:00")).unwrap();
        store.remove_doctor(1).unwrap();

        let listed = list(&store);
        assert_eq!(listed[0].doctor_specialization, Some(""));
        let json = serde_json::to_value(&listed[0]).unwrap();
        assert_eq!(json["doctor_specialization"], "");
        assert_eq!(json["doctor_name"], "Unknown");
    }

    #[test]
    fn delete_removes_only_the_record() {
        let mut store = clinic();
        create(&mut store, booking(1, "2026-01-01", "09:00")).unwrap();
        create(&mut store, booking(1, "2026-01-01", "10:00")).unwrap();
        let removed = delete(&mut store, 1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(store.appointments().len(), 1);
        assert!(matches!(
            delete(&mut store, 1).unwrap_err(),
            ServiceError::NotFound { .. }
        ));
    }
}
