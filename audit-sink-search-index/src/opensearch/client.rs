//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `DocumentIndexer`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    http::{
        headers::HeaderMap,
        transport::{SingleNodeConnectionPool, TransportBuilder},
        Method,
    },
    params::Refresh,
    IndexParts, OpenSearch,
};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::SearchIndexConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::DocumentIndexer;
use crate::types::{IndexRequest, IndexResponse};

/// OpenSearch client implementation.
///
/// The underlying `OpenSearch` handle pools connections and is safe to share
/// between tasks, so a single `OpenSearchClient` is normally created at
/// startup and wrapped in an `Arc`.
///
/// # Example
///
/// ```ignore
/// use audit_sink_search_index::{IndexRequest, OpenSearchClient, SearchIndexConfig};
/// let config = SearchIndexConfig::new("http://localhost:9200");
/// let client = OpenSearchClient::new(&config).await?;
///
/// let request = IndexRequest {
///     index: "audit-events".to_string(),
///     document_id: "8bb395bb...".to_string(),
///     body: br#"{"event_type":"login"}"#.to_vec(),
///     refresh: true,
/// };
/// let response = client.index_document(&request).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client from the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchIndexError)` - If the URL is invalid or the transport
    ///   cannot be built
    pub async fn new(config: &SearchIndexConfig) -> Result<Self, SearchIndexError> {
        let parsed_url =
            Url::parse(&config.url).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();

        if let Some((username, password)) = config.basic_auth() {
            builder = builder.auth(Credentials::Basic(
                username.to_string(),
                password.to_string(),
            ));
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let transport = builder
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        info!(
            url = %config.url,
            auth = config.basic_auth().is_some(),
            "Created OpenSearch client"
        );

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }
}

#[async_trait]
impl DocumentIndexer for OpenSearchClient {
    /// Index a document under an explicit ID, replacing any existing
    /// document with that ID.
    ///
    /// The body goes out byte for byte, so the stored document is exactly
    /// what the ID was computed over. The typed `index()` builder would
    /// re-serialize it.
    ///
    /// The response body is read to completion before returning, whatever
    /// the status. `Response::text` consumes the response, which releases
    /// the connection back to the pool on both the success and the error
    /// path.
    #[instrument(skip(self, request), fields(index = %request.index, document_id = %request.document_id))]
    async fn index_document(&self, request: &IndexRequest) -> Result<IndexResponse, SearchIndexError> {
        let path = IndexParts::IndexId(&request.index, &request.document_id).url();
        let refresh = if request.refresh {
            Refresh::True
        } else {
            Refresh::False
        };
        let query = [("refresh", refresh)];

        // API reference: https://docs.opensearch.org/latest/api-reference/document-apis/index-document/
        let response = self
            .client
            .transport()
            .send(
                Method::Post,
                &path,
                HeaderMap::new(),
                Some(&query),
                Some(request.body.as_slice()),
                None,
            )
            .await
            .map_err(|e| SearchIndexError::transport(e.to_string()))?;

        let status = response.status_code();
        let body = response
            .text()
            .await
            .map_err(|e| SearchIndexError::response(e.to_string()))?
            .into_bytes();

        debug!(status = %status, body_len = body.len(), "Index request completed");
        Ok(IndexResponse::new(status, body))
    }

    async fn health_check(&self) -> Result<bool, SearchIndexError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| SearchIndexError::transport(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            warn!(status = %status, "OpenSearch ping returned error status");
        }
        Ok(status.is_success())
    }
}
