//! In-Memory Storage Adapters
//!
//! Implementations of the store ports backed by in-process hash maps.
//!
//! ## Available Adapters
//!
//! - **InMemoryUserStore** - User aggregates keyed by user ID
//! - **InMemoryPaymentRecordStore** - Payment records keyed by record ID
//!
//! ## Usage
//!
//! ```ignore
//! use coursekit::adapters::memory::{InMemoryPaymentRecordStore, InMemoryUserStore};
//!
//! let users = InMemoryUserStore::new();
//! let records = InMemoryPaymentRecordStore::new();
//! ```

mod in_memory_payment_record_store;
mod in_memory_user_store;

pub use in_memory_payment_record_store::InMemoryPaymentRecordStore;
pub use in_memory_user_store::InMemoryUserStore;
