//! Functional core for the entities service.
//!
//! Everything in this crate is pure: key derivation, record shapes, response
//! projection, request validation and the storage contract. The I/O lives in
//! the `entities` binary crate.

pub mod entity;
pub mod request;
pub mod serde;
pub mod storage;
