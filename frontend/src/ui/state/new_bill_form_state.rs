//! View state of the new-bill form's file input.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillFormState {
    /// Name shown in the file input; `None` once the input has been reset
    pub selected_file_name: Option<String>,

    /// Inline "invalid file type" indicator next to the input
    pub file_error: bool,
}

impl NewBillFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the input and show the inline error
    pub fn reject_file(&mut self) {
        self.selected_file_name = None;
        self.file_error = true;
    }

    pub fn accept_file(&mut self, file_name: impl Into<String>) {
        self.selected_file_name = Some(file_name.into());
        self.file_error = false;
    }

    pub fn clear(&mut self) {
        self.selected_file_name = None;
        self.file_error = false;
    }
}
