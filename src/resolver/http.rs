//! HTTP plumbing shared by the aggregator clients.

use std::time::Duration;

use serde::Deserialize;

use crate::resolver::domain::ResolverError;

/// Default User-Agent sent to both aggregators
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a client that accepts gzip and identifies the application
pub fn build_client(user_agent: Option<&str>) -> Result<reqwest::Client, ResolverError> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(user_agent.unwrap_or(USER_AGENT))
        .build()
        .map_err(|e| ResolverError::Network(format!("failed to build HTTP client: {e}")))
}

/// Map a transport error, separating timeouts from everything else
pub fn send_error(error: reqwest::Error, timeout: Duration) -> ResolverError {
    if error.is_timeout() {
        ResolverError::Timeout(timeout)
    } else {
        ResolverError::Network(error.to_string())
    }
}

/// Deserialize an explicit `null` the same as a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Reject any non-2xx response, keeping a short body excerpt for the logs
pub async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ResolverError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ResolverError::RateLimited);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ResolverError::Status {
        status: status.as_u16(),
        body: body.chars().take(200).collect(),
    })
}

/// Decode a JSON body; a body that is not JSON is a parse failure
pub async fn decode_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    timeout: Duration,
) -> Result<T, ResolverError> {
    let bytes = response.bytes().await.map_err(|e| send_error(e, timeout))?;
    serde_json::from_slice(&bytes).map_err(|e| ResolverError::Parse(e.to_string()))
}

/// Trim a configured base URL so paths can be appended with `/`
pub fn trim_base(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
