//! Shared types for the API layer.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::api::error::ApiError;
use crate::store::ClinicStore;

/// Shared context for all API routes.
///
/// The store is behind a single `RwLock`: reads run concurrently, and
/// every mutating handler holds the write lock from validation through
/// mutation, so integrity checks and the mutation they guard are one
/// critical section. Nothing awaits while a guard is held.
#[derive(Clone)]
pub struct ApiContext {
    store: Arc<RwLock<ClinicStore>>,
}

impl ApiContext {
    pub fn new(store: ClinicStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, ClinicStore>, ApiError> {
        self.store
            .read()
            .map_err(|_| ApiError::Internal("store lock poisoned".into()))
    }

    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, ClinicStore>, ApiError> {
        self.store
            .write()
            .map_err(|_| ApiError::Internal("store lock poisoned".into()))
    }
}

/// Response body for create/update: a confirmation message plus the
/// enriched record.
#[derive(Debug, Serialize)]
pub struct MutationResponse<T> {
    pub message: String,
    pub data: T,
}

/// Response body for delete: a confirmation referencing the removed
/// entity's name.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
