//! Adapter layer: Convert Songwhip DTOs to domain models

use super::dto;
use crate::resolver::domain::{AggregatorResult, AggregatorSource, PlatformLink, TrackMetadata};

/// Convert a response into domain metadata and platform links.
///
/// `base_url` resolves relative page URLs; `country` picks between
/// several regional links for the same platform.
pub fn to_result(response: dto::ItemResponse, base_url: &str, country: &str) -> AggregatorResult {
    let page_url = response
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(|u| absolute_url(u, base_url));

    let artist = response
        .artists
        .iter()
        .find_map(|a| a.name.clone().filter(|n| !n.trim().is_empty()));

    let metadata = TrackMetadata {
        source: AggregatorSource::Songwhip,
        title: response.name,
        artist,
        page_url,
    };

    let mut links: Vec<PlatformLink> = response
        .links
        .into_iter()
        .filter_map(|(platform, entries)| match entries {
            dto::LinkEntries::List(entries) => {
                pick_link(&entries, country).map(|url| PlatformLink::new(platform, url))
            }
            dto::LinkEntries::Other(_) => None,
        })
        .collect();
    links.sort_by(|a, b| a.platform.cmp(&b.platform));

    AggregatorResult { metadata, links }
}

/// First usable link, preferring one available in `country`
fn pick_link(entries: &[dto::LinkEntry], country: &str) -> Option<String> {
    let usable = || {
        entries
            .iter()
            .filter_map(|e| e.link.as_deref().map(str::trim).filter(|l| !l.is_empty()).map(|l| (e, l)))
    };

    usable()
        .find(|(e, _)| e.countries.iter().any(|c| c.eq_ignore_ascii_case(country)))
        .or_else(|| usable().next())
        .map(|(_, link)| link.to_string())
}

fn absolute_url(url: &str, base_url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), url.trim_start_matches('/'))
    }
}
