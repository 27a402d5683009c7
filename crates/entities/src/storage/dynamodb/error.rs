//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `entities_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use entities_core::storage::StoreError;

/// Map failures that never reached the service.
fn transport_error<E, R>(err: &SdkError<E, R>) -> Option<StoreError> {
    match err {
        SdkError::DispatchFailure(failure) => Some(StoreError::ConnectionFailed(format!(
            "Dispatch failure: {failure:?}"
        ))),
        SdkError::TimeoutError(_) => Some(StoreError::ConnectionFailed(
            "Request timed out".to_string(),
        )),
        _ => None,
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            StoreError::OperationFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::OperationFailed("Throughput exceeded".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::OperationFailed("Request limit exceeded".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::OperationFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StoreError::OperationFailed("Transaction conflict".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::OperationFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::OperationFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            StoreError::OperationFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::OperationFailed("Throughput exceeded".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            StoreError::OperationFailed("Request limit exceeded".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            StoreError::OperationFailed("Transaction conflict".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            StoreError::OperationFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::OperationFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to StoreError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(err: SdkError<QueryError, R>) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            StoreError::OperationFailed("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            StoreError::OperationFailed("Throughput exceeded".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            StoreError::OperationFailed("Request limit exceeded".to_string())
        }
        QueryError::InternalServerError(_) => {
            StoreError::OperationFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::OperationFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    if let Some(transport) = transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            StoreError::OperationFailed("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            StoreError::OperationFailed("Throughput exceeded".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            StoreError::OperationFailed("Request limit exceeded".to_string())
        }
        ScanError::InternalServerError(_) => {
            StoreError::OperationFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::OperationFailed(format!("Scan failed: {:?}", err)),
    }
}
