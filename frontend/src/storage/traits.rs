//! # Storage Traits
//!
//! Abstractions over the remote bill store and the local session so the
//! containers can run against the HTTP API in production and against
//! in-memory doubles in tests.

use async_trait::async_trait;
use shared::{Bill, NewUpload, SessionUser, UploadReceipt};

use crate::errors::{SessionError, StoreError};

/// Remote persistence and upload service for bills
#[async_trait]
pub trait BillStore: Send + Sync {
    /// List every bill visible to the current user, in store order
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Upload a receipt file and open a new bill record for it
    async fn create(&self, upload: NewUpload) -> Result<UploadReceipt, StoreError>;

    /// Persist the full record under the key returned by [`BillStore::create`]
    async fn update(&self, key: &str, bill: &Bill) -> Result<Bill, StoreError>;
}

/// Synchronous key-value session state (the browser's local storage)
pub trait SessionStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Decode the `user` entry
    fn current_user(&self) -> Result<SessionUser, SessionError> {
        let raw = self.get_item("user").ok_or(SessionError::NoUser)?;
        serde_json::from_str(&raw).map_err(|source| SessionError::InvalidEntry {
            key: "user".to_string(),
            source,
        })
    }

    /// Bearer token for the API, if the login flow stored one
    fn token(&self) -> Option<String> {
        self.get_item("jwt").filter(|t| !t.is_empty())
    }
}
