//! Storage layer: the remote bill store and the local session.

pub mod memory;
pub mod session;
pub mod traits;

pub use memory::MemoryStore;
pub use session::{FileSession, MemorySession};
pub use traits::{BillStore, SessionStore};
