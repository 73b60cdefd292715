//! Merging platform links from both aggregators.
//!
//! Links are keyed by a normalized platform identifier. The first occurrence
//! of a key wins, so the primary aggregator's links take precedence over the
//! secondary's. Output is ordered alphabetically by key.

use std::collections::BTreeMap;

use super::domain::PlatformLink;

/// A platform identifier in comparable and displayable form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformName {
    /// Lowercase words with no separator (`applemusic`)
    pub key: String,
    /// Title-cased words (`Apple Music`)
    pub display: String,
}

/// Normalize a raw platform identifier.
///
/// API tokens like `appleMusic` are split at camelCase boundaries for
/// display; names that already contain spaces are left as written. `_` and
/// `-` separate words. The key ignores word boundaries, so `SoundCloud` and
/// `soundcloud` collide. Returns `None` for a blank identifier.
pub fn normalize_platform(raw: &str) -> Option<PlatformName> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let spaced = if trimmed.contains(char::is_whitespace) {
        trimmed.to_string()
    } else {
        split_camel_case(trimmed)
    };

    let words: Vec<&str> = spaced
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return None;
    }

    let key: String = words.iter().map(|w| w.to_lowercase()).collect();
    let display = words.iter().map(|w| title_case(w)).collect::<Vec<_>>().join(" ");

    Some(PlatformName { key, display })
}

fn split_camel_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 4);
    let mut prev_lower = false;
    for c in token.chars() {
        if c.is_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.push(c);
    }
    out
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Merge primary and secondary links into one deduplicated, sorted list.
///
/// Platforms are renamed to their display form. Links with a blank
/// platform or URL are dropped.
pub fn merge_links(primary: &[PlatformLink], secondary: &[PlatformLink]) -> Vec<PlatformLink> {
    let mut merged: BTreeMap<String, PlatformLink> = BTreeMap::new();

    for link in primary.iter().chain(secondary) {
        let url = link.url.trim();
        if url.is_empty() {
            continue;
        }
        let Some(name) = normalize_platform(&link.platform) else {
            continue;
        };
        merged
            .entry(name.key)
            .or_insert_with(|| PlatformLink::new(name.display, url));
    }

    merged.into_values().collect()
}
