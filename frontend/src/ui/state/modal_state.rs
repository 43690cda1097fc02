//! # Modal State Module
//!
//! The bills page has a single attachment-preview modal shared by every
//! row. Clicking any row's eye icon repoints it and opens it; the view
//! renders from this value instead of mutating a DOM node.

/// Visibility and target of the attachment-preview modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    /// Whether the modal is visible
    pub open: bool,

    /// Attachment URL shown in the modal's image
    pub url: Option<String>,
}

impl ModalState {
    /// Create a closed modal with no image
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the modal at `url` and open it
    pub fn show(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
        self.open = true;
    }

    /// Hide the modal, keeping the last image so reopening is instant
    pub fn hide(&mut self) {
        self.open = false;
    }

    /// CSS `display` value for the modal container
    pub fn display(&self) -> &'static str {
        if self.open {
            "block"
        } else {
            "none"
        }
    }

    /// `src` of the modal's image
    pub fn image_src(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
