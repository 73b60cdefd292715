//! Songwhip API Data Transfer Objects
//!
//! These types match what `POST https://songwhip.com/` returns.
//! DO NOT use these types outside the songwhip module - convert to domain types.
//!
//! Example response (trimmed):
//! ```json
//! {
//!   "type": "track",
//!   "name": "Song",
//!   "url": "https://songwhip.com/artist/song",
//!   "artists": [{"name": "Artist"}],
//!   "links": {
//!     "youtubeMusic": [{"link": "https://music.youtube.com/watch?v=xyz", "countries": ["US"]}]
//!   }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Request body
#[derive(Debug, Clone, Serialize)]
pub struct CreateRequest<'a> {
    pub url: &'a str,
    pub country: &'a str,
}

/// Top-level response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ItemResponse {
    /// "track", "album" or "artist"
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub name: Option<String>,
    /// Songwhip page; sometimes a path relative to songwhip.com
    pub url: Option<String>,
    #[serde(default, deserialize_with = "crate::resolver::http::null_as_default")]
    pub artists: Vec<Artist>,
    /// Platform key -> link entries
    #[serde(default, deserialize_with = "crate::resolver::http::null_as_default")]
    pub links: HashMap<String, LinkEntries>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Artist {
    pub name: Option<String>,
}

/// Entries for one platform.
///
/// Older responses carry `true` instead of a list; anything that is not a
/// list is kept opaque and yields no links.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LinkEntries {
    List(Vec<LinkEntry>),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LinkEntry {
    pub link: Option<String>,
    #[serde(default, deserialize_with = "crate::resolver::http::null_as_default")]
    pub countries: Vec<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
