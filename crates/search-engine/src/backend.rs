use shared_types::{SearchEnvelope, SearchError, SearchRequest, SearchResponseBody};
use std::future::Future;

/// The remote search endpoint as seen by the orchestrator.
pub trait SearchBackend {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<SearchResponseBody, SearchError>>;
}

/// `POST`s the request as JSON to a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSearchBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchBackend {
    #[tracing::instrument(skip(self, request), fields(endpoint = %self.endpoint, query = %request.input_query))]
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponseBody, SearchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SearchError::transport(format!("Search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::http_status(
                status.as_u16(),
                status.canonical_reason(),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| SearchError::transport(format!("Failed to read search response: {}", e)))?;

        let envelope: SearchEnvelope = serde_json::from_str(&text).map_err(|e| {
            SearchError::malformed(format!("Invalid response format from API: {}", e))
        })?;

        envelope.into_body()
    }
}
