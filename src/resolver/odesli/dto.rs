//! Odesli (song.link) API Data Transfer Objects
//!
//! These types match what the Odesli `links` endpoint returns.
//! DO NOT use these types outside the odesli module - convert to domain types.
//!
//! API Reference: https://linktr.ee/odesli
//!
//! Example response (trimmed):
//! ```json
//! {
//!   "entityUniqueId": "SPOTIFY_SONG::abc123",
//!   "pageUrl": "https://song.link/s/abc123",
//!   "entitiesByUniqueId": {
//!     "SPOTIFY_SONG::abc123": {"title": "Song", "artistName": "Artist", "type": "song"}
//!   },
//!   "linksByPlatform": {
//!     "spotify": {"url": "https://open.spotify.com/track/abc123", "entityUniqueId": "SPOTIFY_SONG::abc123"}
//!   }
//! }
//! ```
//!
//! Every field is optional. A response missing all of them still parses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level `links` response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksResponse {
    /// Unique id of the entity the input URL pointed at
    pub entity_unique_id: Option<String>,
    /// Odesli's own page for this item
    pub page_url: Option<String>,
    #[serde(default, deserialize_with = "crate::resolver::http::null_as_default")]
    pub entities_by_unique_id: HashMap<String, Entity>,
    /// Platform key (e.g. `appleMusic`) -> link
    #[serde(default, deserialize_with = "crate::resolver::http::null_as_default")]
    pub links_by_platform: HashMap<String, PlatformEntry>,
}

/// One catalog entity (song or album) on one platform
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: Option<String>,
    /// "song" or "album"
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    pub title: Option<String>,
    pub artist_name: Option<String>,
    pub api_provider: Option<String>,
}

/// Link for one platform
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformEntry {
    pub url: Option<String>,
    pub entity_unique_id: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let response: LinksResponse =
            serde_json::from_str(crate::test_utils::ODESLI_RESPONSE).expect("Should parse");

        assert_eq!(
            response.entity_unique_id.as_deref(),
            Some("SPOTIFY_SONG::abc123")
        );
        assert_eq!(response.page_url.as_deref(), Some("https://song.link/s/abc123"));
        let entity = &response.entities_by_unique_id["SPOTIFY_SONG::abc123"];
        assert_eq!(entity.title.as_deref(), Some("Song"));
        assert_eq!(entity.artist_name.as_deref(), Some("Artist"));
        assert_eq!(entity.entity_type.as_deref(), Some("song"));
        assert!(response.links_by_platform.contains_key("appleMusic"));
    }

    #[test]
    fn test_parse_empty_object() {
        let response: LinksResponse = serde_json::from_str("{}").expect("Should parse {}");
        assert!(response.page_url.is_none());
        assert!(response.entities_by_unique_id.is_empty());
        assert!(response.links_by_platform.is_empty());
    }

    #[test]
    fn test_parse_null_collections() {
        let json = r#"{"pageUrl": "https://song.link/x", "entitiesByUniqueId": null, "linksByPlatform": null}"#;
        let response: LinksResponse = serde_json::from_str(json).expect("Should parse nulls");
        assert_eq!(response.page_url.as_deref(), Some("https://song.link/x"));
        assert!(response.entities_by_unique_id.is_empty());
        assert!(response.links_by_platform.is_empty());
    }

    #[test]
    fn test_parse_platform_without_url() {
        let json = r#"{"linksByPlatform": {"tidal": {"entityUniqueId": "TIDAL_SONG::1"}}}"#;
        let response: LinksResponse = serde_json::from_str(json).expect("Should parse");
        assert!(response.links_by_platform["tidal"].url.is_none());
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let json = r#"{"userCountry": "US", "pageUrl": "https://song.link/x", "extra": [1, 2]}"#;
        let response: LinksResponse = serde_json::from_str(json).expect("Should parse");
        assert_eq!(response.page_url.as_deref(), Some("https://song.link/x"));
    }
}
