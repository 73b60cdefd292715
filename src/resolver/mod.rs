//! Cross-platform link resolution.
//!
//! # Architecture
//!
//! Same split as any external-API integration here:
//! - **Domain models** (`domain.rs`) - our types, independent of either API
//! - **API DTOs** (`odesli/dto.rs`, `songwhip/dto.rs`) - exact response shapes
//! - **Adapters** - convert DTOs to domain models, never fail
//! - **Clients** - one HTTP request each, errors mapped to [`ResolverError`]
//! - **Traits** (`traits.rs`) - the [`LinkAggregator`] seam where errors become
//!   [`Resolution::Unavailable`]
//! - **Merge** / **Format** - pure functions over domain types
//! - **Service** - concurrent fan-out to both aggregators
//!
//! # Usage
//!
//! ```ignore
//! let service = ResolverService::new(&config)?;
//! if let Some(link) = links::classify(text) {
//!     let result = service.resolve(&link).await;
//!     if let Some(reply) = render_reply(&result, &Attribution::new(Some(42), "Alice")) {
//!         println!("{reply}");
//!     }
//! }
//! ```

pub mod domain;
pub mod format;
mod http;
pub mod merge;
pub mod odesli;
pub mod service;
pub mod songwhip;
pub mod traits;

pub use domain::{
    AggregatorResult, AggregatorSource, PlatformLink, Resolution, ResolutionResult, ResolverError,
    TrackMetadata,
};
pub use format::{Attribution, render_reply};
pub use merge::{merge_links, normalize_platform};
pub use service::{DEFAULT_TIMEOUT, ResolverService};
pub use traits::LinkAggregator;
