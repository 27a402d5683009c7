//! AWS SDK client setup.

use aws_sdk_dynamodb::Client;

use crate::config::{StoreConfig, StoreEndpoint};

/// Creates a DynamoDB client for the configured endpoint.
///
/// The region always comes from the configuration; a local endpoint only
/// overrides the URL the requests go to.
pub async fn create_client(config: &StoreConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let StoreEndpoint::Local { url } = config.endpoint() {
        sdk_config_loader = sdk_config_loader.endpoint_url(url);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}
