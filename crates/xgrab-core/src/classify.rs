//! Platform media URL classification.
//!
//! Pure string/URL heuristics: decides whether a candidate URL points at
//! platform-hosted media and whether that media is an animated GIF the
//! platform serves as a muted video. Consulted by both the media locator
//! and the original-asset resolver.

use url::Url;

/// Media kind attached to a located descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Gif,
}

/// Result of classifying a candidate URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaClass {
    /// URL is hosted on the platform's media/content domains.
    pub is_platform_media: bool,
    /// Media is an animated GIF served as video.
    pub is_animated: bool,
}

/// Hosts that serve platform media (the content CDN plus the site domains
/// card thumbnails are addressed under).
const PLATFORM_HOSTS: [&str; 3] = ["twimg.com", "twitter.com", "x.com"];

/// Filename markers the feed uses for legacy animated uploads.
const ANIMATED_MARKERS: [&str; 3] = ["animated.gif", "tweet_video.gif", "tweet_animation.gif"];

/// Static image extensions that veto the `/gif/` path heuristic.
const STATIC_IMAGE_EXTS: [&str; 4] = [".jpg", ".jpeg", ".png", ".webp"];

/// Classifies a candidate URL. Never fails: malformed URLs classify as
/// non-animated.
pub fn classify_media(url: &str) -> MediaClass {
    MediaClass {
        is_platform_media: is_platform_media(url),
        is_animated: is_animated(url),
    }
}

/// True if the URL is hosted on one of the platform's media domains.
pub fn is_platform_media(url: &str) -> bool {
    !url.is_empty() && PLATFORM_HOSTS.iter().any(|host| url.contains(host))
}

/// True for profile avatar and banner paths. These share the media host
/// but are not downloadable content media.
pub fn is_profile_asset(url: &str) -> bool {
    url.contains("profile_images") || url.contains("profile_banners")
}

/// True if the URL points at an animated GIF served as video.
///
/// Animated iff any of: a `.gif`/`gifv`/`/gif/` substring, a known animated
/// filename marker, a `format=gif` query parameter, or a `/gif/` path that
/// does not end in a static image extension. The last rule is a preserved
/// heuristic and may overmatch. Parse failures are treated as non-animated.
pub fn is_animated(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let lower = url.to_ascii_lowercase();
    if lower.contains(".gif") || lower.contains("gifv") || lower.contains("/gif/") {
        return true;
    }
    if ANIMATED_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return true;
    }

    match Url::parse(url) {
        Ok(parsed) => {
            if parsed.query_pairs().any(|(k, v)| k == "format" && v == "gif") {
                return true;
            }
            let path = parsed.path().to_ascii_lowercase();
            path.contains("/gif/") && !STATIC_IMAGE_EXTS.iter().any(|ext| path.ends_with(ext))
        }
        Err(err) => {
            tracing::debug!(url, error = %err, "unparseable URL, treating as non-animated");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_hosts() {
        assert!(is_platform_media("https://pbs.twimg.com/media/ABC123.jpg"));
        assert!(is_platform_media("https://video.twimg.com/tweet_video/x.mp4"));
        assert!(is_platform_media("https://x.com/i/card/thumb"));
        assert!(!is_platform_media("https://example.com/cat.gif"));
        assert!(!is_platform_media(""));
    }

    #[test]
    fn profile_assets_detected() {
        assert!(is_profile_asset(
            "https://pbs.twimg.com/profile_images/123/me_400x400.jpg"
        ));
        assert!(is_profile_asset(
            "https://pbs.twimg.com/profile_banners/123/1600"
        ));
        assert!(!is_profile_asset("https://pbs.twimg.com/media/ABC123.jpg"));
    }

    #[test]
    fn format_gif_query_is_animated_without_path_extension() {
        // The dominant feed-thumbnail shape: no extension in the path.
        assert!(is_animated(
            "https://pbs.twimg.com/tweet_video_thumb/ABC123?format=gif&name=small"
        ));
        let class = classify_media("https://pbs.twimg.com/tweet_video_thumb/ABC123?format=gif");
        assert!(class.is_platform_media);
        assert!(class.is_animated);
    }

    #[test]
    fn gif_substrings_are_animated() {
        assert!(is_animated("https://video.twimg.com/tweet_video/x.GIF"));
        assert!(is_animated("https://example.com/clip.gifv"));
        assert!(is_animated("https://video.twimg.com/gif/abc"));
        assert!(is_animated(
            "https://pbs.twimg.com/tweet_video_thumb/tweet_video.gif"
        ));
    }

    #[test]
    fn static_images_are_not_animated() {
        assert!(!is_animated("https://pbs.twimg.com/media/ABC123.jpg"));
        assert!(!is_animated(
            "https://pbs.twimg.com/media/ABC123?format=jpg&name=orig"
        ));
        assert!(!is_animated(""));
    }

    #[test]
    fn malformed_url_never_panics_and_is_not_animated() {
        assert!(!is_animated("not a url"));
        let class = classify_media("not a url");
        assert!(!class.is_platform_media);
        assert!(!class.is_animated);
        // Platform-looking but unparseable (no scheme).
        assert!(!is_animated("twimg.com/media/ABC123?format=png"));
    }
}
