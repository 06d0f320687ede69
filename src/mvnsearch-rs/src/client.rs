use crate::{ClientError, Result};
use futures::future::join_all;
use mvnsearch_core::request::GAV_CORE;
use mvnsearch_core::{decode_slice, Artifact, ClientConfig, SearchRequest, SearchResponse, Version};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Search endpoint client
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    client: HttpClient,
}

/// Outcome of one request in a batch, tagged with the request's query key
#[derive(Debug)]
pub struct BatchResult<D> {
    pub query_key: Option<String>,
    pub result: Result<SearchResponse<D>>,
}

impl Client {
    /// Create a new client for the given select endpoint URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: HttpClient::new(),
        }
    }

    /// Create a client with the timeout and user agent from `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full GET URL for `request`
    pub fn request_url(&self, request: &SearchRequest) -> String {
        format!("{}?{}", self.base_url, request.render())
    }

    /// Run a search and decode hits as `D`
    pub async fn search<D: DeserializeOwned>(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse<D>> {
        let url = self.request_url(request);
        tracing::debug!(url = %url, query_key = ?request.get_query_key(), "search request");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::warn!(status, url = %url, "search request rejected");
            return Err(ClientError::Server {
                status,
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.bytes().await?;
        Ok(decode_slice(&body)?)
    }

    /// Search the artifact core
    pub async fn search_artifacts(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse<Artifact>> {
        self.search(request).await
    }

    /// Search individual versions. Uses the `gav` core unless `request`
    /// names another one.
    pub async fn search_versions(&self, request: SearchRequest) -> Result<SearchResponse<Version>> {
        let request = if request.has_core() {
            request
        } else {
            request.core(GAV_CORE)
        };
        self.search(&request).await
    }

    /// Run all `requests` concurrently. Results come back in input order.
    pub async fn search_batch<D: DeserializeOwned>(
        &self,
        requests: &[SearchRequest],
    ) -> Vec<BatchResult<D>> {
        let searches = requests.iter().map(|request| async move {
            BatchResult {
                query_key: request.get_query_key().map(str::to_string),
                result: self.search(request).await,
            }
        });

        let results = join_all(searches).await;
        tracing::debug!(
            total = results.len(),
            failed = results.iter().filter(|r| r.result.is_err()).count(),
            "search batch complete"
        );
        results
    }
}
