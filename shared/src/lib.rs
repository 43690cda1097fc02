use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Workflow state of a bill. Only the admin surface moves a bill out of `Pending`.
///
/// Raw values the store sends that are not one of the three known states are
/// kept as `Unknown` so that a single bad record does not fail a whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
    Unknown(String),
}

impl BillStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
            BillStatus::Unknown(raw) => raw,
        }
    }
}

impl From<String> for BillStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => BillStatus::Pending,
            "accepted" => BillStatus::Accepted,
            "refused" => BillStatus::Refused,
            _ => BillStatus::Unknown(raw),
        }
    }
}

impl From<BillStatus> for String {
    fn from(status: BillStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Null and missing fields both decode to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn missing_status() -> BillStatus {
    BillStatus::Unknown(String::new())
}

fn status_or_missing<'de, D>(deserializer: D) -> Result<BillStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(BillStatus::from)
        .unwrap_or_else(missing_status))
}

/// A persisted expense submission, in the shape the store sends it.
///
/// The store opens a record when its receipt is uploaded and fills the rest
/// on submit, so a record abandoned in between has null fields. Those decode
/// to empty values instead of failing the list they arrive in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Assigned by the store; absent before creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Expense category (free text, e.g. "Transports")
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub expense_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: i64,
    /// Stored as `YYYY-MM-DD`; demo data is not guaranteed to be well-formed
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vat: String,
    #[serde(default)]
    pub pct: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    /// `Unknown("")` when the store has not set one yet
    #[serde(default = "missing_status", deserialize_with = "status_or_missing")]
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

impl Bill {
    /// `fileUrl` and `fileName` are set together or not at all
    pub fn attachment_is_consistent(&self) -> bool {
        self.file_url.is_some() == self.file_name.is_some()
    }
}

/// Formatting-only projection of a [`Bill`], never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBill {
    pub id: Option<String>,
    pub email: String,
    pub expense_type: String,
    pub name: String,
    pub amount: i64,
    /// Human-readable date, or the raw date when it could not be formatted
    pub date: String,
    /// Date as stored, used by the view for ordering
    pub raw_date: String,
    /// False when the record went through the degraded path
    pub date_formatted: bool,
    pub vat: String,
    pub pct: Option<i64>,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: String,
    pub comment_admin: Option<String>,
}

/// File content handed to the store's upload capability
#[derive(Debug, Clone, PartialEq)]
pub struct NewUpload {
    pub file_name: String,
    pub content: Vec<u8>,
    pub email: String,
}

/// Result of a successful upload, retained until the form is submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub file_url: String,
    pub file_name: String,
    /// Record key the store assigned to the in-progress bill
    pub key: String,
}

/// The `user` entry of the session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub user_type: String,
    #[serde(default)]
    pub email: String,
}

/// Client-side routes the containers navigate between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutePath {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl RoutePath {
    pub fn path(&self) -> &'static str {
        match self {
            RoutePath::Login => "/",
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
            RoutePath::Dashboard => "#admin/dashboard",
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
