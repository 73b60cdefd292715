//! Adapter layer: Convert Odesli DTOs to domain models

use super::dto;
use crate::resolver::domain::{AggregatorResult, AggregatorSource, PlatformLink, TrackMetadata};

/// Convert a `links` response into domain metadata and platform links
pub fn to_result(response: dto::LinksResponse) -> AggregatorResult {
    let entity = primary_entity(&response);

    let metadata = TrackMetadata {
        source: AggregatorSource::Odesli,
        title: entity.and_then(|e| e.title.clone()),
        artist: entity.and_then(|e| e.artist_name.clone()),
        page_url: response.page_url.clone(),
    };

    let mut links: Vec<PlatformLink> = response
        .links_by_platform
        .into_iter()
        .filter_map(|(platform, entry)| {
            let url = entry.url?;
            (!url.trim().is_empty()).then(|| PlatformLink::new(platform, url))
        })
        .collect();
    // HashMap order is random; keep adapter output stable
    links.sort_by(|a, b| a.platform.cmp(&b.platform));

    AggregatorResult { metadata, links }
}

/// The entity named by `entityUniqueId`, else whichever entity has a title
fn primary_entity(response: &dto::LinksResponse) -> Option<&dto::Entity> {
    response
        .entity_unique_id
        .as_ref()
        .and_then(|id| response.entities_by_unique_id.get(id))
        .or_else(|| {
            let mut ids: Vec<_> = response.entities_by_unique_id.keys().collect();
            ids.sort();
            ids.into_iter()
                .filter_map(|id| response.entities_by_unique_id.get(id))
                .find(|e| e.title.is_some())
        })
}
