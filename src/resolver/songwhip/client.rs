//! Songwhip HTTP client
//!
//! `POST {base}/` with `{"url": ..., "country": ...}` creates (or fetches)
//! the Songwhip page for a streaming URL and returns its links.

use std::time::Duration;

use super::{adapter, dto};
use crate::config::SongwhipConfig;
use crate::resolver::domain::{AggregatorResult, ResolverError};
use crate::resolver::http;

/// Songwhip API client
pub struct SongwhipClient {
    http_client: reqwest::Client,
    base_url: String,
    country: String,
}

impl SongwhipClient {
    /// Create a new client from configuration
    pub fn new(config: &SongwhipConfig, user_agent: Option<&str>) -> Result<Self, ResolverError> {
        let country = config.country.trim();
        Ok(Self {
            http_client: http::build_client(user_agent)?,
            base_url: http::trim_base(&config.base_url),
            country: if country.is_empty() { "US".to_string() } else { country.to_uppercase() },
        })
    }

    /// Resolve a streaming URL into a Songwhip page and platform links
    pub async fn lookup(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<AggregatorResult, ResolverError> {
        if url.trim().is_empty() {
            return Err(ResolverError::InvalidInput("empty URL".to_string()));
        }

        let response = self.send_create_request(url.trim(), timeout).await?;
        Ok(adapter::to_result(response, &self.base_url, &self.country))
    }

    async fn send_create_request(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<dto::ItemResponse, ResolverError> {
        let body = dto::CreateRequest {
            url,
            country: &self.country,
        };
        tracing::debug!(url, country = %self.country, "querying Songwhip");

        let response = self
            .http_client
            .post(format!("{}/", self.base_url))
            .json(&body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| http::send_error(e, timeout))?;

        let response = http::ensure_success(response).await?;
        http::decode_json(response, timeout).await
    }
}
