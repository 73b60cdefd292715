//! Odesli HTTP client
//!
//! Handles communication with the song.link `links` endpoint.
//! See: https://linktr.ee/odesli
//!
//! ## Request
//! `GET {base}/links?url=<encoded>[&userCountry=XX][&key=K]`
//!
//! The API key is optional; without one the public rate limit applies.
//! The query string is built by hand with `urlencoding`, matching the
//! other clients in this crate.

use std::time::Duration;

use super::{adapter, dto};
use crate::config::OdesliConfig;
use crate::resolver::domain::{AggregatorResult, ResolverError};
use crate::resolver::http;

/// Odesli API client
pub struct OdesliClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    user_country: Option<String>,
}

impl OdesliClient {
    /// Create a new client from configuration
    pub fn new(config: &OdesliConfig, user_agent: Option<&str>) -> Result<Self, ResolverError> {
        Ok(Self {
            http_client: http::build_client(user_agent)?,
            base_url: http::trim_base(&config.base_url),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            user_country: config.user_country.clone().filter(|c| !c.trim().is_empty()),
        })
    }

    /// Resolve a streaming URL into metadata and platform links
    pub async fn lookup(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<AggregatorResult, ResolverError> {
        if url.trim().is_empty() {
            return Err(ResolverError::InvalidInput("empty URL".to_string()));
        }

        let response = self.send_links_request(url.trim(), timeout).await?;
        Ok(adapter::to_result(response))
    }

    fn request_url(&self, url: &str) -> String {
        let mut request = format!("{}/links?url={}", self.base_url, urlencoding::encode(url));
        if let Some(country) = &self.user_country {
            request.push_str("&userCountry=");
            request.push_str(&urlencoding::encode(country));
        }
        if let Some(key) = &self.api_key {
            request.push_str("&key=");
            request.push_str(&urlencoding::encode(key));
        }
        request
    }

    async fn send_links_request(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<dto::LinksResponse, ResolverError> {
        let request_url = self.request_url(url);
        tracing::debug!(url, "querying Odesli");

        let response = self
            .http_client
            .get(&request_url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| http::send_error(e, timeout))?;

        let response = http::ensure_success(response).await?;
        http::decode_json(response, timeout).await
    }
}
