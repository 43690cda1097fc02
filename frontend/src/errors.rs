//! Error types for the bill containers and their collaborators.

use thiserror::Error;

/// Failure reported by a [`crate::storage::traits::BillStore`].
///
/// The `Display` text of a status failure is what the bills page shows,
/// so it keeps the `Erreur <code>` shape the store uses.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Erreur {0}")]
    Status(u16),

    #[error("Erreur réseau: {0}")]
    Transport(String),

    #[error("Réponse invalide: {0}")]
    Decode(String),

    #[error("Bill not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// HTTP status carried by the failure, if it came from the server
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StoreError::Status(code) => Some(*code),
            StoreError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            StoreError::Status(status.as_u16())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

/// Raised when a stored value cannot be turned into a display string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("malformed date: {0:?}")]
    MalformedDate(String),

    #[error("unknown status: {0:?}")]
    UnknownStatus(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no user in session")]
    NoUser,

    #[error("session entry {key:?} is not valid JSON: {source}")]
    InvalidEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum NewBillError {
    /// Submit was attempted before an upload completed
    #[error("no uploaded file to attach to the bill")]
    NoUploadedFile,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
