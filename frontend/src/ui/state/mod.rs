pub mod modal_state;
pub mod new_bill_form_state;

pub use modal_state::ModalState;
pub use new_bill_form_state::NewBillFormState;
