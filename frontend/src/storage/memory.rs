//! In-memory [`BillStore`], used offline and as the test double.
//!
//! Failures can be scripted per capability so callers can exercise the
//! `Erreur 404` / `Erreur 500` paths without a server.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use shared::{Bill, NewUpload, UploadReceipt};
use tracing::debug;
use uuid::Uuid;

use super::traits::BillStore;
use crate::errors::StoreError;

#[derive(Default)]
struct MemoryState {
    bills: Vec<Bill>,
    open_keys: HashSet<String>,
    uploads: Vec<NewUpload>,
    updates: Vec<(String, Bill)>,
    list_failure: Option<u16>,
    create_failure: Option<u16>,
    update_failure: Option<u16>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with bills, returned by `list` in this order
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        let store = Self::new();
        store.lock().bills = bills;
        store
    }

    /// Make every subsequent `list` call fail with this HTTP status
    pub fn fail_list_with(&self, status: u16) {
        self.lock().list_failure = Some(status);
    }

    pub fn fail_create_with(&self, status: u16) {
        self.lock().create_failure = Some(status);
    }

    pub fn fail_update_with(&self, status: u16) {
        self.lock().update_failure = Some(status);
    }

    /// Uploads received so far
    pub fn uploads(&self) -> Vec<NewUpload> {
        self.lock().uploads.clone()
    }

    /// `(key, bill)` pairs received by `update` so far
    pub fn updates(&self) -> Vec<(String, Bill)> {
        self.lock().updates.clone()
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.lock().bills.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BillStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let state = self.lock();
        if let Some(status) = state.list_failure {
            return Err(StoreError::Status(status));
        }
        Ok(state.bills.clone())
    }

    async fn create(&self, upload: NewUpload) -> Result<UploadReceipt, StoreError> {
        let mut state = self.lock();
        state.uploads.push(upload.clone());
        if let Some(status) = state.create_failure {
            return Err(StoreError::Status(status));
        }

        let key = Uuid::new_v4().to_string();
        let receipt = UploadReceipt {
            file_url: format!("https://test.storage.tld/{}/{}", key, upload.file_name),
            file_name: upload.file_name,
            key: key.clone(),
        };
        state.open_keys.insert(key);
        debug!(key = %receipt.key, "memory store accepted upload");
        Ok(receipt)
    }

    async fn update(&self, key: &str, bill: &Bill) -> Result<Bill, StoreError> {
        let mut state = self.lock();
        state.updates.push((key.to_string(), bill.clone()));
        if let Some(status) = state.update_failure {
            return Err(StoreError::Status(status));
        }

        let mut stored = bill.clone();
        stored.id = Some(key.to_string());

        if let Some(existing) = state
            .bills
            .iter_mut()
            .find(|b| b.id.as_deref() == Some(key))
        {
            *existing = stored.clone();
        } else if state.open_keys.remove(key) {
            state.bills.push(stored.clone());
        } else {
            return Err(StoreError::NotFound(key.to_string()));
        }
        Ok(stored)
    }
}
