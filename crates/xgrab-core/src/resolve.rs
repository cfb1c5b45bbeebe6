//! Original-asset resolution.
//!
//! Rewrites a feed thumbnail URL into the URL of the highest-quality
//! original asset by forcing `name=orig` (and `format=mp4` for animated
//! media) onto the query string. Total over its input: non-media hosts and
//! unparseable URLs come back unchanged, never as an error.

use url::Url;

use crate::classify::MediaType;

/// Host substring whose URLs we know how to rewrite.
const MEDIA_HOST: &str = "twimg.com";

/// Rewrites `url` to request the original asset for `media_type`.
///
/// Idempotent: resolving an already-resolved URL yields the same URL.
pub fn resolve_original(url: &str, media_type: MediaType) -> String {
    if !url.contains(MEDIA_HOST) {
        return url.to_string();
    }
    resolve_media(url, media_type).unwrap_or_else(|| url.to_string())
}

fn resolve_media(url: &str, media_type: MediaType) -> Option<String> {
    let mut parsed = Url::parse(url)
        .map_err(|err| tracing::debug!(url, error = %err, "unparseable media URL, leaving unchanged"))
        .ok()?;

    // Animated assets are served as a muted video; the canonical original
    // is always requested as mp4, overriding any existing parameters.
    if media_type == MediaType::Gif {
        set_query_param(&mut parsed, "format", "mp4");
        set_query_param(&mut parsed, "name", "orig");
        return Some(parsed.to_string());
    }

    if has_query_param(&parsed, "name") || has_query_param(&parsed, "format") {
        set_query_param(&mut parsed, "name", "orig");
        return Some(parsed.to_string());
    }

    if parsed.query().map_or(true, str::is_empty) {
        // Extension embedded in the path: move it into the query string.
        let (base, ext) = split_path_extension(parsed.path());
        let base = base.to_string();
        let ext = ext.unwrap_or_else(|| "jpg".to_string());
        parsed.set_path(&base);
        set_query_param(&mut parsed, "format", &ext);
        set_query_param(&mut parsed, "name", "orig");
        return Some(parsed.to_string());
    }

    // Query present but neither name nor format: request the original
    // unless the URL already carries an explicit `:orig` marker.
    if !url.contains(":orig") {
        set_query_param(&mut parsed, "name", "orig");
        return Some(parsed.to_string());
    }
    None
}

fn has_query_param(url: &Url, key: &str) -> bool {
    url.query_pairs().any(|(k, _)| k == key)
}

/// Sets `key=value`, replacing the first existing occurrence in place and
/// dropping duplicates, appending when absent. Other pairs keep their order.
fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some(pair) => pair.1 = value.to_string(),
        None => pairs.push((key.to_string(), value.to_string())),
    }
    let mut seen = false;
    pairs.retain(|(k, _)| {
        if k == key {
            if seen {
                return false;
            }
            seen = true;
        }
        true
    });
    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
}

/// Splits a trailing lowercase-alphabetic extension off a URL path, the
/// same shape the thumbnail paths use (`/media/ABC123.jpg`).
fn split_path_extension(path: &str) -> (&str, Option<String>) {
    if let Some(idx) = path.rfind('.') {
        let ext = &path[idx + 1..];
        if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_lowercase()) {
            return (&path[..idx], Some(ext.to_string()));
        }
    }
    (path, None)
}
