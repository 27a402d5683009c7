//! DynamoDB store backend.
//!
//! Single-table layout: every entity is one item whose `PK` and `SK` both hold
//! the canonical `ent#<id>` key. Built on `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod keys;
mod store;

pub use store::DynamoDbStore;
