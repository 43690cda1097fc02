//! New bill creation pipeline.
//!
//! ```text
//! Idle --valid file, upload ok--> FileStaged --submit--> Submitted --> bills page
//!   ^                                 |
//!   +------- invalid file ------------+
//! ```
//!
//! The receipt is uploaded as soon as a valid file is picked; the form
//! submit then completes the record the store opened for it. Both
//! operations take `&mut self`, so a submit cannot run while an upload is
//! still in flight on the same container.

use std::sync::Arc;

use shared::{Bill, BillStatus, NewUpload, RoutePath, UploadReceipt};
use tracing::{error, info, warn};

use crate::errors::NewBillError;
use crate::services::navigation::Navigator;
use crate::storage::traits::{BillStore, SessionStore};
use crate::ui::state::NewBillFormState;

/// Receipt extensions accepted by the file input (compared case-insensitively)
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// VAT percentage used when the form leaves it empty or zero
pub const DEFAULT_PCT: i64 = 20;

pub fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(stem, ext)| {
            !stem.is_empty()
                && ALLOWED_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// File picked in the form's file input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Raw values of the new-bill form fields, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl NewBillForm {
    fn into_bill(self, email: String, receipt: &UploadReceipt) -> Bill {
        let bill = Bill {
            id: None,
            email,
            expense_type: self.expense_type,
            name: self.name,
            amount: parse_leading_int(&self.amount).unwrap_or(0),
            date: self.date,
            vat: self.vat,
            pct: Some(
                parse_leading_int(&self.pct)
                    .filter(|pct| *pct != 0)
                    .unwrap_or(DEFAULT_PCT),
            ),
            commentary: self.commentary,
            file_url: Some(receipt.file_url.clone()),
            file_name: Some(receipt.file_name.clone()),
            status: BillStatus::Pending,
            comment_admin: None,
        };
        debug_assert!(bill.attachment_is_consistent());
        bill
    }
}

/// Integer at the start of `input` (`"42.50 €"` → 42), ignoring surrounding spaces
fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[derive(Debug, Clone, PartialEq)]
pub enum NewBillState {
    /// No uploaded file to attach
    Idle,
    /// Receipt uploaded, waiting for the form
    FileStaged(UploadReceipt),
    /// Record sent to the store
    Submitted(Bill),
}

/// Outcome of picking a file
#[derive(Debug, Clone, PartialEq)]
pub enum FileSelection {
    /// Extension not allowed; input reset, nothing uploaded
    Rejected,
    Staged(UploadReceipt),
}

pub struct NewBillContainer {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    session: Arc<dyn SessionStore>,
    state: NewBillState,
    form_state: NewBillFormState,
}

impl NewBillContainer {
    pub fn new(
        store: Arc<dyn BillStore>,
        navigator: Arc<dyn Navigator>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            store,
            navigator,
            session,
            state: NewBillState::Idle,
            form_state: NewBillFormState::new(),
        }
    }

    pub fn state(&self) -> &NewBillState {
        &self.state
    }

    pub fn form_state(&self) -> &NewBillFormState {
        &self.form_state
    }

    /// Validate the picked file and upload it.
    ///
    /// The extension check runs before anything touches the network. Upload
    /// failures are logged and returned; the container stays `Idle` and the
    /// file input is reset.
    pub async fn handle_change_file(
        &mut self,
        file: SelectedFile,
    ) -> Result<FileSelection, NewBillError> {
        self.state = NewBillState::Idle;

        if !has_allowed_extension(&file.name) {
            warn!(file_name = %file.name, "rejected receipt with unsupported extension");
            self.form_state.reject_file();
            return Ok(FileSelection::Rejected);
        }
        self.form_state.clear();

        let email = self.session.current_user()?.email;
        let upload = NewUpload {
            file_name: file.name,
            content: file.content,
            email,
        };

        match self.store.create(upload).await {
            Ok(receipt) => {
                info!(key = %receipt.key, file_name = %receipt.file_name, "receipt uploaded");
                self.form_state.accept_file(&receipt.file_name);
                self.state = NewBillState::FileStaged(receipt.clone());
                Ok(FileSelection::Staged(receipt))
            }
            Err(e) => {
                error!(error = %e, "receipt upload failed");
                Err(e.into())
            }
        }
    }

    /// Complete and persist the bill, then go back to the bills page.
    ///
    /// Navigation happens whether or not the store accepts the record; a
    /// store failure is still returned to the caller. Without a staged
    /// upload nothing is sent and the page does not change.
    pub async fn handle_submit(&mut self, form: NewBillForm) -> Result<Bill, NewBillError> {
        let receipt = match &self.state {
            NewBillState::FileStaged(receipt) => receipt.clone(),
            _ => {
                warn!("bill submitted without an uploaded receipt");
                return Err(NewBillError::NoUploadedFile);
            }
        };

        let email = self.session.current_user()?.email;
        let bill = form.into_bill(email, &receipt);
        let result = self.store.update(&receipt.key, &bill).await;

        self.state = NewBillState::Submitted(bill);
        self.form_state.clear();
        self.navigator.navigate(RoutePath::Bills);

        match result {
            Ok(stored) => {
                info!(key = %receipt.key, "new bill saved");
                Ok(stored)
            }
            Err(e) => {
                error!(key = %receipt.key, error = %e, "failed to save new bill");
                Err(e.into())
            }
        }
    }
}
