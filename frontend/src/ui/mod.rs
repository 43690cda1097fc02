pub mod bills_page;
pub mod state;

pub use bills_page::BillsPage;
