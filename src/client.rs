//! Top-level client
//!
//! Bundles the per-area clients over one shared transport.

use crate::app::AppClient;
use crate::bulk::BulkClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::file::FileClient;
use crate::http::{HttpClient, HttpClientConfig, Transport};
use crate::record::RecordClient;
use crate::space::SpaceClient;
use std::sync::Arc;
use tracing::info;

/// Entry point to the REST API
#[derive(Clone, Debug)]
pub struct Client {
    /// Record retrieval, writes, cursors, comments and statuses
    pub record: RecordClient,
    /// App settings
    pub app: AppClient,
    /// Bulk requests
    pub bulk: BulkClient,
    /// Attachments
    pub file: FileClient,
    /// Spaces and threads
    pub space: SpaceClient,
}

impl Client {
    /// Create a client over the default HTTP transport
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        info!(
            base_url = %config.base_url,
            guest_space = ?config.guest_space_id,
            "creating client"
        );
        let http = HttpClient::with_config(config)?;
        Ok(Self::with_transport(Arc::new(http)))
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::new(config.into_http_config()?)
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            record: RecordClient::new(Arc::clone(&transport)),
            app: AppClient::new(Arc::clone(&transport)),
            bulk: BulkClient::new(Arc::clone(&transport)),
            file: FileClient::new(Arc::clone(&transport)),
            space: SpaceClient::new(transport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthConfig;
    use crate::error::Error;
    use crate::http::mock::{MockTransport, Reply};
    use crate::types::Method;
    use serde_json::json;

    #[test]
    fn test_new_requires_base_url() {
        let err = Client::new(HttpClientConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            base_url: "https://example.cybozu.com".to_string(),
            auth: AuthConfig::api_token("t"),
            ..Default::default()
        };
        assert!(Client::from_config(config).is_ok());
    }

    #[tokio::test]
    async fn test_clients_share_transport() {
        let mock = MockTransport::new(|call, _| {
            if call.is(Method::POST, "bulkRequest") {
                Reply::Json(json!({ "results": [{}] }))
            } else if call.is(Method::POST, "file") {
                Reply::Json(json!({ "fileKey": "fk" }))
            } else {
                Reply::Json(json!({ "records": [] }))
            }
        });
        let client = Client::with_transport(mock.clone());

        let page = client
            .record
            .get_records::<crate::types::Record>(&crate::record::GetRecordsParams::new("1"))
            .await
            .unwrap();
        assert!(page.is_empty());

        let request = client
            .bulk
            .request(Method::PUT, "record", &json!({ "app": "1", "id": "1", "record": {} }))
            .unwrap();
        client.bulk.send(vec![request]).await.unwrap();
        client.file.upload("a.txt", "a").await.unwrap();

        assert_eq!(mock.calls().len(), 3);
    }
}
