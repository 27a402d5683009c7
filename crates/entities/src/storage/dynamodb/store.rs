//! DynamoDB store implementation.
//!
//! Implements `EntityStore` from `entities_core::storage` with one SDK call per
//! operation and no conditions, retries or pagination of its own.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::delete_item::builders::DeleteItemFluentBuilder;
use aws_sdk_dynamodb::operation::put_item::builders::PutItemFluentBuilder;
use aws_sdk_dynamodb::types::ReturnConsumedCapacity;
use aws_sdk_dynamodb::Client;

use entities_core::entity::{EntityKey, EntityRecord};
use entities_core::storage::{EntityStore, Result};

use super::client::create_client;
use super::conversions::{item_to_record, record_to_item};
use super::error::{map_delete_item_error, map_put_item_error, map_query_error, map_scan_error};
use super::keys::{exact_key_values, key_attributes, EXACT_KEY_CONDITION};
use crate::config::StoreConfig;

/// DynamoDB-based entity store.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new store from the resolved store configuration.
    pub async fn from_config(config: &StoreConfig) -> Self {
        let client = create_client(config).await;
        Self::new(client, config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Unconditional PutItem, asking for the consumed capacity so the ack can
    /// be logged.
    fn put_request(&self, record: &EntityRecord) -> PutItemFluentBuilder {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .return_consumed_capacity(ReturnConsumedCapacity::Total)
    }

    /// Unconditional DeleteItem on the exact key.
    fn delete_request(&self, key: &EntityKey) -> DeleteItemFluentBuilder {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_attributes(key)))
            .return_consumed_capacity(ReturnConsumedCapacity::Total)
    }
}

#[async_trait]
impl EntityStore for DynamoDbStore {
    async fn put_item(&self, record: &EntityRecord) -> Result<()> {
        let output = self
            .put_request(record)
            .send()
            .await
            .map_err(map_put_item_error)?;

        tracing::debug!(
            key = %record.key,
            consumed_capacity = ?output.consumed_capacity(),
            "PutItem acknowledged"
        );

        Ok(())
    }

    async fn delete_item(&self, key: &EntityKey) -> Result<()> {
        let output = self
            .delete_request(key)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        tracing::debug!(
            key = %key,
            consumed_capacity = ?output.consumed_capacity(),
            "DeleteItem acknowledged"
        );

        Ok(())
    }

    async fn query_exact(&self, key: &EntityKey) -> Result<Vec<EntityRecord>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression(EXACT_KEY_CONDITION)
            .set_expression_attribute_values(Some(exact_key_values(key)))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_record).collect()
    }

    async fn scan_all(&self) -> Result<Vec<EntityRecord>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        // Only the first page is returned; callers get a truncated listing.
        if result.last_evaluated_key.is_some() {
            tracing::warn!(
                table = %self.table_name,
                scanned = ?result.scanned_count,
                "Scan result truncated, further pages are not fetched"
            );
        }

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_record).collect()
    }
}
