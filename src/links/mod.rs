//! Music link detection.
//!
//! A fixed table of per-platform patterns ([`patterns`]) and a line-by-line
//! scanner over it ([`classifier`]). Knowing which entry matched tells us
//! the platform without re-parsing the URL.

pub mod classifier;
pub mod patterns;

pub use classifier::{DetectedLink, classify, classify_with};
pub use patterns::{PLATFORM_PATTERNS, PlatformPattern};
