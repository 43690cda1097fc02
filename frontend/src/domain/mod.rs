//! Containers sitting between the employee pages and the bill store.

pub mod bill_formatter;
pub mod bills_container;
pub mod new_bill_container;

pub use bills_container::{BillsContainer, EyeIcon};
pub use new_bill_container::{FileSelection, NewBillContainer, NewBillForm, NewBillState, SelectedFile};
