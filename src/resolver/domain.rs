//! Internal domain models for link resolution.
//!
//! These types are OUR types - they don't change when the aggregator APIs change.
//! Odesli and Songwhip responses get converted into these types via adapters.

use std::fmt;

/// Which aggregator backend produced a piece of data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregatorSource {
    Odesli,
    Songwhip,
}

impl AggregatorSource {
    /// Human-readable name used in replies ("View on Odesli")
    pub fn label(self) -> &'static str {
        match self {
            Self::Odesli => "Odesli",
            Self::Songwhip => "Songwhip",
        }
    }
}

impl fmt::Display for AggregatorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Track metadata reported by one aggregator.
///
/// Every field is optional; two aggregators are not guaranteed to agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    /// Where this metadata came from
    pub source: AggregatorSource,
    /// Track, album or playlist title
    pub title: Option<String>,
    /// Artist name
    pub artist: Option<String>,
    /// The aggregator's own page listing every resolved link
    pub page_url: Option<String>,
}

/// A link to the same item on one streaming platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLink {
    /// Platform identifier (raw from an adapter, display form after merging)
    pub platform: String,
    pub url: String,
}

impl PlatformLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

/// Everything one aggregator returned for a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorResult {
    pub metadata: TrackMetadata,
    pub links: Vec<PlatformLink>,
}

/// Outcome of asking one aggregator.
///
/// Failures are values here, not errors - the caller always proceeds
/// with whatever the other aggregator produced.
#[derive(Debug, Clone)]
pub enum Resolution {
    Available(AggregatorResult),
    Unavailable {
        source: AggregatorSource,
        reason: ResolverError,
    },
}

impl Resolution {
    pub fn from_result(
        source: AggregatorSource,
        result: Result<AggregatorResult, ResolverError>,
    ) -> Self {
        match result {
            Ok(found) => Self::Available(found),
            Err(reason) => Self::Unavailable { source, reason },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Split into metadata and links; unavailable yields neither
    pub fn into_parts(self) -> (Option<TrackMetadata>, Vec<PlatformLink>) {
        match self {
            Self::Available(found) => (Some(found.metadata), found.links),
            Self::Unavailable { .. } => (None, Vec::new()),
        }
    }
}

/// Aggregate of one resolution attempt, consumed by the formatter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionResult {
    /// Metadata from Odesli, if it responded
    pub primary: Option<TrackMetadata>,
    /// Metadata from Songwhip, if it responded
    pub secondary: Option<TrackMetadata>,
    /// Merged, deduplicated, alphabetically ordered links
    pub links: Vec<PlatformLink>,
}

impl ResolutionResult {
    fn sources(&self) -> impl Iterator<Item = &TrackMetadata> {
        self.primary.iter().chain(self.secondary.iter())
    }

    /// Title from the first aggregator that supplied one
    pub fn title(&self) -> Option<&str> {
        self.sources().find_map(|m| non_blank(m.title.as_deref()))
    }

    /// Artist from the first aggregator that supplied one
    pub fn artist(&self) -> Option<&str> {
        self.sources().find_map(|m| non_blank(m.artist.as_deref()))
    }

    /// Canonical pages in primary-then-secondary order
    pub fn canonical_pages(&self) -> Vec<(AggregatorSource, &str)> {
        self.sources()
            .filter_map(|m| non_blank(m.page_url.as_deref()).map(|url| (m.source, url)))
            .collect()
    }

    /// True when there is no link and no canonical page to show
    pub fn is_unresolved(&self) -> bool {
        self.links.is_empty() && self.canonical_pages().is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Errors that can occur while talking to an aggregator
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
