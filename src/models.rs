//! Entity records, enumerated field domains, and request payload types.
//!
//! Three entities: Doctor, Patient, Appointment (FK → Doctor, FK → Patient).
//! `New*` payloads carry the required field set for create; `*Patch`
//! payloads are all-optional partial merges applied on update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Enumerated domains ───────────────────────────────────────────────────────

/// Doctor specialization. Wire values are lowercase identifiers;
/// `display_name` carries the human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialization {
    General,
    Cardiology,
    Dermatology,
    Neurology,
    Orthopedics,
    Pediatrics,
    Psychiatry,
    Surgery,
}

impl Specialization {
    /// Wire identifier, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialization::General => "general",
            Specialization::Cardiology => "cardiology",
            Specialization::Dermatology => "dermatology",
            Specialization::Neurology => "neurology",
            Specialization::Orthopedics => "orthopedics",
            Specialization::Pediatrics => "pediatrics",
            Specialization::Psychiatry => "psychiatry",
            Specialization::Surgery => "surgery",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Specialization::General => "General Practice",
            Specialization::Cardiology => "Cardiology",
            Specialization::Dermatology => "Dermatology",
            Specialization::Neurology => "Neurology",
            Specialization::Orthopedics => "Orthopedics",
            Specialization::Pediatrics => "Pediatrics",
            Specialization::Psychiatry => "Psychiatry",
            Specialization::Surgery => "Surgery",
        }
    }
}

/// Patient gender. Single-letter wire values, matching the intake forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Appointment status. A flexible enumerated field: any value may be set
/// to any other via update, there is no enforced transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No Show",
        }
    }
}

// ─── Entity records ───────────────────────────────────────────────────────────

/// A doctor in the clinic. `id` and `created_at` are immutable after
/// insertion; `updated_at` is refreshed on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    pub specialization: Specialization,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A patient in the clinic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An appointment between one doctor and one patient.
///
/// `doctor` and `patient` are foreign references validated at
/// create/update time. `date` is `YYYY-MM-DD`, `time` is `HH:MM`;
/// both are kept as strings (the wire format) and format-checked by
/// the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub doctor: u64,
    pub patient: u64,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ─── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: Specialization,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorPatch {
    pub name: Option<String>,
    pub specialization: Option<Specialization>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAppointment {
    pub doctor: u64,
    pub patient: u64,
    pub date: String,
    pub time: String,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentPatch {
    pub doctor: Option<u64>,
    pub patient: Option<u64>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}
