//! Database layer for data persistence and access.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (api::handlers - HTTP request handlers)
//! └──────┬──────┘
//!        │  Arc<dyn Store>
//!        ↓
//! ┌─────────────┐
//! │    Store    │  (db::store - PostgresStore, or InMemoryStore in tests)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries over a pooled connection)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! The schema (`customers`, `invoices`) is owned outside this service; nothing here creates or
//! migrates tables.
//!
//! - [`store`]: the [`store::Store`] trait handed to handlers and its PostgreSQL implementation
//! - [`handlers`]: repository implementations
//! - [`models`]: database record structures
//! - [`errors`]: database-specific error types
//! - `in_memory`: test double (with the `test-utils` feature)

pub mod errors;
pub mod handlers;
#[cfg(any(test, feature = "test-utils"))]
pub mod in_memory;
pub mod models;
pub mod store;

pub use store::{PostgresStore, Store};
