//! Upstream page fetching.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::UpstreamConfig;
use crate::utils::http::create_async_client;

/// A single GET against the upstream site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub url: Url,
    pub query: Vec<(String, String)>,
}

impl UpstreamRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            query: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Full URL including the query string.
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        url
    }
}

/// Source of upstream markup.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a page and return its body.
    ///
    /// Any status other than 200 OK is an [`AppError::Upstream`].
    async fn fetch(&self, request: &UpstreamRequest) -> Result<String>;
}

/// Fetcher backed by a `reqwest` client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a fetcher with a client configured from upstream settings.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        Ok(Self::new(create_async_client(config)?))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<String> {
        let url = request.full_url();
        log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Upstream returned {} for {}", status, url);
            return Err(AppError::upstream(status.as_u16(), url.as_str()));
        }

        Ok(response.text().await?)
    }
}
