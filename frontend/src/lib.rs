//! Employee side of the Billed expense-report client.
//!
//! - [`domain::BillsContainer`] lists and formats bills and drives the
//!   attachment preview modal.
//! - [`domain::NewBillContainer`] validates and uploads a receipt, then
//!   persists the completed bill.
//!
//! The remote store, session and navigation are reached through the traits
//! in [`storage::traits`] and [`services::navigation`].

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod storage;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::AppConfig;
pub use errors::{ConfigError, FormatError, NewBillError, SessionError, StoreError};
