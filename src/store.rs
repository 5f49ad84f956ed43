//! In-memory entity store: the canonical owner of all records.
//!
//! `ClinicStore` holds the three entity collections plus per-entity id
//! counters. It is constructed explicitly and injected into the service
//! layer (never a global), so tests get a fresh store per case. Ids are
//! assigned sequentially starting above any seeded value and are never
//! reused within a process lifetime.
//!
//! The store does not enforce referential integrity itself; that is the
//! service layer's job. Callers serialize access through a single lock
//! (see `api::types::ApiContext`), so every validate-then-mutate
//! sequence is one critical section.

use chrono::Utc;

use crate::models::{
    Appointment, AppointmentPatch, AppointmentStatus, Doctor, DoctorPatch, Gender, NewAppointment,
    NewDoctor, NewPatient, Patient, PatientPatch, Specialization,
};

#[derive(Debug)]
pub struct ClinicStore {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
    next_doctor_id: u64,
    next_patient_id: u64,
    next_appointment_id: u64,
}

impl ClinicStore {
    /// Empty store; first id of each entity type is 1.
    pub fn new() -> Self {
        Self {
            doctors: Vec::new(),
            patients: Vec::new(),
            appointments: Vec::new(),
            next_doctor_id: 1,
            next_patient_id: 1,
            next_appointment_id: 1,
        }
    }

    // ── Read primitives ─────────────────────────────────────

    /// All doctors in insertion order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn doctor(&self, id: u64) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn patient(&self, id: u64) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn appointment(&self, id: u64) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Whether any appointment other than `exclude` occupies the
    /// (doctor, date, time) slot. `exclude` is the record being
    /// updated, so a record never conflicts with itself.
    pub fn slot_taken(&self, doctor: u64, date: &str, time: &str, exclude: Option<u64>) -> bool {
        self.appointments.iter().any(|a| {
            Some(a.id) != exclude && a.doctor == doctor && a.date == date && a.time == time
        })
    }

    // ── Doctor mutations ────────────────────────────────────

    pub fn insert_doctor(&mut self, new: NewDoctor) -> &Doctor {
        let now = Utc::now();
        let doctor = Doctor {
            id: self.next_doctor_id,
            name: new.name,
            specialization: new.specialization,
            phone: new.phone,
            email: new.email,
            created_at: now,
            updated_at: now,
        };
        self.next_doctor_id += 1;
        self.doctors.push(doctor);
        self.doctors.last().expect("just pushed")
    }

    /// Merge `patch` over the doctor with `id`. Id and `created_at`
    /// are preserved; `updated_at` is refreshed even for an empty patch.
    pub fn update_doctor(&mut self, id: u64, patch: DoctorPatch) -> Option<&Doctor> {
        let doctor = self.doctors.iter_mut().find(|d| d.id == id)?;
        if let Some(name) = patch.name {
            doctor.name = name;
        }
        if let Some(specialization) = patch.specialization {
            doctor.specialization = specialization;
        }
        if let Some(phone) = patch.phone {
            doctor.phone = phone;
        }
        if let Some(email) = patch.email {
            doctor.email = email;
        }
        doctor.updated_at = Utc::now();
        Some(doctor)
    }

    pub fn remove_doctor(&mut self, id: u64) -> Option<Doctor> {
        let index = self.doctors.iter().position(|d| d.id == id)?;
        Some(self.doctors.remove(index))
    }

    /// Cascade primitive: drop every appointment referencing the doctor.
    /// Returns the number removed.
    pub fn remove_appointments_for_doctor(&mut self, doctor_id: u64) -> usize {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.doctor != doctor_id);
        before - self.appointments.len()
    }

    // ── Patient mutations ───────────────────────────────────

    pub fn insert_patient(&mut self, new: NewPatient) -> &Patient {
        let now = Utc::now();
        let patient = Patient {
            id: self.next_patient_id,
            name: new.name,
            age: new.age,
            gender: new.gender,
            phone: new.phone,
            email: new.email,
            address: new.address.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.next_patient_id += 1;
        self.patients.push(patient);
        self.patients.last().expect("just pushed")
    }

    pub fn update_patient(&mut self, id: u64, patch: PatientPatch) -> Option<&Patient> {
        let patient = self.patients.iter_mut().find(|p| p.id == id)?;
        if let Some(name) = patch.name {
            patient.name = name;
        }
        if let Some(age) = patch.age {
            patient.age = age;
        }
        if let Some(gender) = patch.gender {
            patient.gender = gender;
        }
        if let Some(phone) = patch.phone {
            patient.phone = phone;
        }
        if let Some(email) = patch.email {
            patient.email = email;
        }
        if let Some(address) = patch.address {
            patient.address = address;
        }
        patient.updated_at = Utc::now();
        Some(patient)
    }

    pub fn remove_patient(&mut self, id: u64) -> Option<Patient> {
        let index = self.patients.iter().position(|p| p.id == id)?;
        Some(self.patients.remove(index))
    }

    pub fn remove_appointments_for_patient(&mut self, patient_id: u64) -> usize {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.patient != patient_id);
        before - self.appointments.len()
    }

    // ── Appointment mutations ───────────────────────────────

    pub fn insert_appointment(&mut self, new: NewAppointment) -> &Appointment {
        let now = Utc::now();
        let appointment = Appointment {
            id: self.next_appointment_id,
            doctor: new.doctor,
            patient: new.patient,
            date: new.date,
            time: new.time,
            status: new.status.unwrap_or(AppointmentStatus::Scheduled),
            notes: new.notes.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.next_appointment_id += 1;
        self.appointments.push(appointment);
        self.appointments.last().expect("just pushed")
    }

    pub fn update_appointment(&mut self, id: u64, patch: AppointmentPatch) -> Option<&Appointment> {
        let appointment = self.appointments.iter_mut().find(|a| a.id == id)?;
        if let Some(doctor) = patch.doctor {
            appointment.doctor = doctor;
        }
        if let Some(patient) = patch.patient {
            appointment.patient = patient;
        }
        if let Some(date) = patch.date {
            appointment.date = date;
        }
        if let Some(time) = patch.time {
            appointment.time = time;
        }
        if let Some(status) = patch.status {
            appointment.status = status;
        }
        if let Some(notes) = patch.notes {
            appointment.notes = notes;
        }
        appointment.updated_at = Utc::now();
        Some(appointment)
    }

    pub fn remove_appointment(&mut self, id: u64) -> Option<Appointment> {
        let index = self.appointments.iter().position(|a| a.id == id)?;
        Some(self.appointments.remove(index))
    }
}

impl Default for ClinicStore {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Demo seed data ───────────────────────────────────────────────────────────

impl ClinicStore {
    /// Store pre-loaded with the demo data set: four doctors, three
    /// patients and three booked appointments. Id counters continue
    /// above the seeded maxima.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        store.insert_doctor(NewDoctor {
            name: "Sarah Johnson".into(),
            specialization: Specialization::Cardiology,
            phone: "(555) 101-2001".into(),
            email: "sarah.johnson@clinic.com".into(),
        });
        store.insert_doctor(NewDoctor {
            name: "Michael Chen".into(),
            specialization: Specialization::Neurology,
            phone: "(555) 101-2002".into(),
            email: "michael.chen@clinic.com".into(),
        });
        store.insert_doctor(NewDoctor {
            name: "Emily Rodriguez".into(),
            specialization: Specialization::Pediatrics,
            phone: "(555) 101-2003".into(),
            email: "emily.rodriguez@clinic.com".into(),
        });
        store.insert_doctor(NewDoctor {
            name: "David Kim".into(),
            specialization: Specialization::Orthopedics,
            phone: "(555) 101-2004".into(),
            email: "david.kim@clinic.com".into(),
        });

        store.insert_patient(NewPatient {
            name: "Alice Thompson".into(),
            age: 34,
            gender: Gender::Female,
            phone: "(555) 201-3001".into(),
            email: "alice.t@email.com".into(),
            address: Some("123 Main St, Springfield".into()),
        });
        store.insert_patient(NewPatient {
            name: "Bob Martinez".into(),
            age: 45,
            gender: Gender::Male,
            phone: "(555) 201-3002".into(),
            email: "bob.m@email.com".into(),
            address: Some("456 Oak Ave, Riverside".into()),
        });
        store.insert_patient(NewPatient {
            name: "Carol Davis".into(),
            age: 8,
            gender: Gender::Female,
            phone: "(555) 201-3003".into(),
            email: "carol.d@email.com".into(),
            address: Some("789 Pine Rd, Lakewood".into()),
        });

        store.insert_appointment(NewAppointment {
            doctor: 1,
            patient: 1,
            date: "2026-02-15".into(),
            time: "09:00".into(),
            status: Some(AppointmentStatus::Scheduled),
            notes: Some("Regular cardiology checkup".into()),
        });
        store.insert_appointment(NewAppointment {
            doctor: 2,
            patient: 2,
            date: "2026-02-16".into(),
            time: "14:30".into(),
            status: Some(AppointmentStatus::Scheduled),
            notes: Some("Follow-up consultation".into()),
        });
        store.insert_appointment(NewAppointment {
            doctor: 3,
            patient: 3,
            date: "2026-02-14".into(),
            time: "10:00".into(),
            status: Some(AppointmentStatus::Completed),
            notes: Some("Pediatric wellness visit".into()),
        });

        store
    }
}
