//! Finding the first music link in a message.

use super::patterns::{PLATFORM_PATTERNS, PlatformPattern};

/// A streaming URL found in message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedLink {
    /// Identifier of the pattern that matched
    pub platform: &'static str,
    /// The matched substring
    pub url: String,
}

/// Classify message text using the built-in platform table.
///
/// Lines are scanned in order; in the first line with any match, the
/// earliest table entry wins. `None` means "not a music link".
pub fn classify(text: &str) -> Option<DetectedLink> {
    classify_with(text, &PLATFORM_PATTERNS)
}

/// Classify against an explicit table
pub fn classify_with(text: &str, table: &[PlatformPattern]) -> Option<DetectedLink> {
    text.lines().find_map(|line| {
        table.iter().find_map(|entry| {
            entry.regex.find(line).map(|m| DetectedLink {
                platform: entry.platform,
                url: m.as_str().to_string(),
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_inline_url() {
        let link = classify("check this out https://open.spotify.com/track/abc123").unwrap();
        assert_eq!(link.platform, "spotify");
        assert_eq!(link.url, "https://open.spotify.com/track/abc123");
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify("just chatting, see https://example.com/page"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_first_matching_line_wins() {
        let text = "nothing here\nhttps://www.deezer.com/track/42 then\nhttps://open.spotify.com/track/abc";
        let link = classify(text).unwrap();
        assert_eq!(link.platform, "deezer");
        assert_eq!(link.url, "https://www.deezer.com/track/42");
    }

    #[test]
    fn test_table_order_beats_position_in_line() {
        // Deezer is earlier in the line, but Spotify is earlier in the table
        let text = "https://www.deezer.com/track/42 and https://open.spotify.com/album/xyz";
        let link = classify(text).unwrap();
        assert_eq!(link.platform, "spotify");
        assert_eq!(link.url, "https://open.spotify.com/album/xyz");
    }

    #[test]
    fn test_url_stops_at_whitespace() {
        let link = classify("https://soundcloud.com/artist/track great tune").unwrap();
        assert_eq!(link.platform, "soundcloud");
        assert_eq!(link.url, "https://soundcloud.com/artist/track");
    }

    #[test]
    fn test_youtube_music_with_playlist() {
        let link = classify("https://music.youtube.com/watch?v=abc_1&list=PL-2").unwrap();
        assert_eq!(link.platform, "youtubeMusic");
        assert_eq!(link.url, "https://music.youtube.com/watch?v=abc_1&list=PL-2");
    }

    #[test]
    fn test_crlf_lines() {
        let link = classify("hi\r\nhttps://listen.tidal.com/track/99\r\n").unwrap();
        assert_eq!(link.url, "https://listen.tidal.com/track/99");
    }

    fn filler() -> impl Strategy<Value = String> {
        // No "http", so filler can never form a URL by itself
        prop::string::string_regex("[a-g ,.!]{0,30}").unwrap()
    }

    proptest! {
        /// A lone URL surrounded by plain text is found exactly
        #[test]
        fn finds_url_in_filler(before in filler(), after in filler(), id in "[a-zA-Z0-9]{1,22}") {
            let url = format!("https://open.spotify.com/track/{id}");
            let text = format!("{before} {url} {after}");
            let link = classify(&text).unwrap();
            prop_assert_eq!(link.platform, "spotify");
            prop_assert_eq!(link.url, url);
        }

        /// Text with no URL never matches
        #[test]
        fn filler_never_matches(text in filler()) {
            prop_assert!(classify(&text).is_none());
        }
    }
}
