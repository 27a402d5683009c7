//! In-memory store backend.
//!
//! Keeps every record in a `HashMap` behind an `Arc<RwLock<_>>`. Nothing is
//! persisted; useful for tests and for running the service without DynamoDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use entities::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! // Use store for testing...
//! ```

mod store;

pub use store::InMemoryStore;
