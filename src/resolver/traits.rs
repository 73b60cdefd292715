//! Trait definitions for aggregator clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses [`OdesliClient`] and [`SongwhipClient`], while tests
//! substitute the mocks below.
//!
//! The trait is the failure boundary: implementations never return an
//! error, only [`Resolution::Unavailable`].

use std::time::Duration;

use async_trait::async_trait;

use super::domain::{AggregatorSource, Resolution};
use super::odesli::OdesliClient;
use super::songwhip::SongwhipClient;

/// A link-aggregation backend.
#[async_trait]
pub trait LinkAggregator: Send + Sync {
    /// Which backend this is
    fn source(&self) -> AggregatorSource;

    /// Resolve one URL; exactly one upstream attempt, bounded by `timeout`.
    async fn resolve(&self, url: &str, timeout: Duration) -> Resolution;
}

#[async_trait]
impl LinkAggregator for OdesliClient {
    fn source(&self) -> AggregatorSource {
        AggregatorSource::Odesli
    }

    async fn resolve(&self, url: &str, timeout: Duration) -> Resolution {
        Resolution::from_result(self.source(), self.lookup(url, timeout).await)
    }
}

#[async_trait]
impl LinkAggregator for SongwhipClient {
    fn source(&self) -> AggregatorSource {
        AggregatorSource::Songwhip
    }

    async fn resolve(&self, url: &str, timeout: Duration) -> Resolution {
        Resolution::from_result(self.source(), self.lookup(url, timeout).await)
    }
}
