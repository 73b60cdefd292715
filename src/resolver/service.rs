//! Resolver service - orchestrates one resolution per detected link
//!
//! 1. Ask Odesli and Songwhip concurrently, each bounded by the timeout
//! 2. Treat any failure as "unavailable" and keep going with the other
//! 3. Merge the links (Odesli first) and keep both metadata records
//!
//! Nothing is cached or retried; each call is independent.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::links::DetectedLink;
use crate::resolver::{
    domain::{Resolution, ResolutionResult, ResolverError},
    merge::merge_links,
    odesli::OdesliClient,
    songwhip::SongwhipClient,
    traits::LinkAggregator,
};

/// Default per-aggregator timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Service that turns a detected link into a [`ResolutionResult`]
pub struct ResolverService {
    primary: Arc<dyn LinkAggregator>,
    secondary: Arc<dyn LinkAggregator>,
    timeout: Duration,
}

impl ResolverService {
    /// Build the production service from configuration
    pub fn new(config: &Config) -> Result<Self, ResolverError> {
        let user_agent = config.resolver.user_agent.as_deref();
        let odesli = OdesliClient::new(&config.odesli, user_agent)?;
        let songwhip = SongwhipClient::new(&config.songwhip, user_agent)?;

        Ok(Self::with_aggregators(
            Arc::new(odesli),
            Arc::new(songwhip),
            config.resolver.timeout(),
        ))
    }

    /// Build a service over arbitrary aggregators (primary takes precedence)
    pub fn with_aggregators(
        primary: Arc<dyn LinkAggregator>,
        secondary: Arc<dyn LinkAggregator>,
        timeout: Duration,
    ) -> Self {
        Self {
            primary,
            secondary,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve one link through both aggregators.
    ///
    /// Both calls run concurrently; total latency is bounded by the slower
    /// one. Dropping the future abandons both requests.
    pub async fn resolve(&self, link: &DetectedLink) -> ResolutionResult {
        let url = link.url.as_str();
        tracing::debug!(platform = link.platform, url, "resolving link");

        let (primary, secondary) = tokio::join!(
            bounded(self.primary.as_ref(), url, self.timeout),
            bounded(self.secondary.as_ref(), url, self.timeout),
        );

        for resolution in [&primary, &secondary] {
            if let Resolution::Unavailable { source, reason } = resolution {
                tracing::warn!(%source, error = %reason, url, "aggregator unavailable");
            }
        }
        let available = usize::from(primary.is_available()) + usize::from(secondary.is_available());

        let (primary_meta, primary_links) = primary.into_parts();
        let (secondary_meta, secondary_links) = secondary.into_parts();
        let links = merge_links(&primary_links, &secondary_links);

        tracing::debug!(
            available,
            primary_links = primary_links.len(),
            secondary_links = secondary_links.len(),
            merged = links.len(),
            "resolution finished"
        );

        ResolutionResult {
            primary: primary_meta,
            secondary: secondary_meta,
            links,
        }
    }
}

/// Enforce the timeout even if an aggregator ignores it
async fn bounded(
    aggregator: &dyn LinkAggregator,
    url: &str,
    timeout: Duration,
) -> Resolution {
    // Small grace period so the client's own timeout reports first
    let budget = timeout + Duration::from_millis(250);
    match tokio::time::timeout(budget, aggregator.resolve(url, timeout)).await {
        Ok(resolution) => resolution,
        Err(_) => Resolution::from_result(aggregator.source(), Err(ResolverError::Timeout(timeout))),
    }
}
