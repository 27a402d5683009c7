//! Store backend implementations.
//!
//! This module provides concrete implementations of the `EntityStore` trait
//! defined in `entities_core::storage`. The backend is picked at startup from
//! [`StoreConfig`]; the DynamoDB backend is only compiled with the `dynamodb`
//! feature (enabled by default).
//!
//! # Examples
//!
//! Build without DynamoDB support (in-memory store only):
//! ```bash
//! cargo build -p entities --no-default-features
//! ```

use std::sync::Arc;

use entities_core::storage::EntityStore;

use crate::config::{StoreBackend, StoreConfig};

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(test)]
pub mod testing;

pub use inmemory::InMemoryStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;

/// Build the store selected by the configuration.
pub async fn build_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn EntityStore>> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store");
            Ok(Arc::new(InMemoryStore::new()))
        }
        #[cfg(feature = "dynamodb")]
        StoreBackend::DynamoDb => {
            let store = DynamoDbStore::from_config(config).await;
            tracing::info!(
                table = %store.table_name(),
                target = %config.endpoint(),
                "Using DynamoDB store"
            );
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "dynamodb"))]
        StoreBackend::DynamoDb => anyhow::bail!(
            "DynamoDB backend requested but entities was built without the 'dynamodb' feature. \
            Set STORE_BACKEND=memory or rebuild with --features dynamodb"
        ),
    }
}
