//! CRUD operations per entity, enforcing the clinic's integrity rules.
//!
//! Each submodule exposes `list / get / create / update / delete` for
//! one entity type. Operations validate against current store state
//! before mutating; on any error the store is left untouched. Reads
//! return enriched views (records plus display-only fields computed
//! from related entities), never cached snapshots.

pub mod appointments;
pub mod doctors;
pub mod patients;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The requested record does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// An appointment references a doctor or patient that does not exist.
    #[error("{entity} not found")]
    ReferenceNotFound { entity: &'static str, id: u64 },

    /// The (doctor, date, time) slot is already booked.
    #[error("This doctor already has an appointment at this date and time.")]
    SchedulingConflict {
        doctor: u64,
        date: String,
        time: String,
    },

    /// A required field is missing or malformed.
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },
}

/// Fallback display name when an appointment's doctor or patient
/// reference cannot be resolved.
pub(crate) const UNKNOWN_NAME: &str = "Unknown";

/// Require a non-empty value for `field`.
pub(crate) fn require_filled(field: &'static str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation {
            field,
            reason: "must not be empty".into(),
        });
    }
    Ok(())
}
