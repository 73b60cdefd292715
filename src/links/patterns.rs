//! Per-platform URL patterns.
//!
//! Table order is classification priority: within a line the first entry
//! that matches wins, even if a later entry would also match.

use std::sync::LazyLock;

use regex::Regex;

/// One entry in the platform table
#[derive(Debug)]
pub struct PlatformPattern {
    /// Platform identifier reported on a match
    pub platform: &'static str,
    pub regex: Regex,
}

/// Raw patterns in priority order
const PATTERNS: &[(&str, &str)] = &[
    ("spotify", r"https?://open\.spotify\.com/(?:album|track|playlist)/[a-zA-Z0-9]+(?:/\S*)?"),
    (
        "itunes",
        r"https?://itunes\.apple\.com/(?:[a-z]{2}/)?(?:album/[^/?#\s]+|artist/[^/?#\s]+/[^/?#\s]+|playlist/[^/?#\s]+)",
    ),
    (
        "appleMusic",
        r"https?://music\.apple\.com/(?:[a-z]{2}/)?(?:album/[^/?#\s]+|artist/[^/?#\s]+/[^/?#\s]+|playlist/[^/?#\s]+)?",
    ),
    (
        "youtubeMusic",
        r"https?://music\.youtube\.com/watch\?v=[a-zA-Z0-9_-]+(?:&list=[a-zA-Z0-9_-]+)?",
    ),
    (
        "youtube",
        r"https?://www\.youtube\.com/watch\?v=[a-zA-Z0-9_-]+(?:&list=[a-zA-Z0-9_-]+)?",
    ),
    (
        "google",
        r"https?://www\.google\.com/search\?\S*&(?:source=lnms&tbm=isch&q=)?spotify\+[^&\s]*(?:&[^&\s]*)*",
    ),
    ("googleStore", r"https?://play\.google\.com/store/music/album/[^/?#\s]+/[^/?#\s]+"),
    ("pandora", r"https?://www\.pandora\.com/artist/[^/?#\s]+/[^/?#\s]+"),
    ("deezer", r"https?://www\.deezer\.com/(?:[a-z]{2}/)?(?:album|track|playlist)/[0-9]+"),
    ("tidal", r"https?://listen\.tidal\.com/(?:album|track|playlist)/[0-9]+"),
    ("amazonStore", r"https?://www\.amazon\.(?:com|co\.uk|de|fr|ca)/gp/product/[^/?#\s]+"),
    (
        "amazonMusic",
        r"https?://music\.amazon\.(?:com|co\.uk|de|fr|ca)/(?:albums|artists|playlists)/[^/?#\s]+",
    ),
    ("soundcloud", r"https?://soundcloud\.com/(?:[^/?#\s]+/)?[^/?#\s]+"),
    ("napster", r"https?://us\.napster\.com/(?:artist|album|track)/[^/?#\s]+"),
    ("yandex", r"https?://music\.yandex\.ru/(?:album|track|playlist)/[0-9]+"),
    ("spinrilla", r"https?://spinrilla\.com/songs/[^/?#\s]+"),
    ("audius", r"https?://audius\.co/(?:artist|track|playlist)/[^/?#\s]+"),
    ("anghami", r"https?://(?:www\.)?anghami\.com/\S*"),
    ("boomplay", r"https?://(?:www\.)?boomplay\.com/songs/[0-9]+"),
    ("audiomack", r"https?://audiomack\.com/[^/?#\s]+/song/[^/?#\s]+"),
];

/// The compiled table, built once on first use
pub static PLATFORM_PATTERNS: LazyLock<Vec<PlatformPattern>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|&(platform, pattern)| PlatformPattern {
            platform,
            regex: Regex::new(pattern).expect("platform pattern is a valid regex"),
        })
        .collect()
});
