//! Filename derivation for downloads.
//!
//! Maps a resolved asset URL to a local filename: the last path segment,
//! with the extension forced to `.mp4` for animated media and a
//! format-hint extension appended for extension-less images. The result is
//! sanitized for Linux filesystems.

use url::Url;

use crate::classify::MediaType;

/// Fallback when the URL has no usable path segment.
const DEFAULT_STEM: &str = "download";

/// Derives the filename to save `resolved_url` under.
pub fn derive_filename(resolved_url: &str, media_type: MediaType) -> String {
    let segment = last_path_segment(resolved_url).unwrap_or_else(|| DEFAULT_STEM.to_string());
    let named = match media_type {
        MediaType::Gif => force_mp4(&segment),
        MediaType::Image => ensure_image_extension(&segment, resolved_url),
    };
    sanitize(&named)
}

fn last_path_segment(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    Some(segment.to_string())
}

/// Animated media is always saved as mp4: strip any existing alphabetic
/// extension and append `.mp4`.
fn force_mp4(segment: &str) -> String {
    if segment.to_ascii_lowercase().ends_with(".mp4") {
        return segment.to_string();
    }
    let stem = match segment.rfind('.') {
        Some(idx)
            if !segment[idx + 1..].is_empty()
                && segment[idx + 1..].chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            &segment[..idx]
        }
        _ => segment,
    };
    format!("{stem}.mp4")
}

fn ensure_image_extension(segment: &str, url: &str) -> String {
    let has_extension = segment.rsplit_once('.').map_or(false, |(_, ext)| {
        !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())
    });
    if has_extension {
        return segment.to_string();
    }
    format!("{segment}{}", extension_hint(url))
}

/// Extension implied by the resolved URL: the `format` query parameter
/// first, then raw substring hints, defaulting to `.jpg`.
fn extension_hint(url: &str) -> &'static str {
    if let Ok(parsed) = Url::parse(url) {
        if let Some((_, format)) = parsed.query_pairs().find(|(k, _)| k == "format") {
            match format.as_ref() {
                "jpg" | "jpeg" => return ".jpg",
                "png" => return ".png",
                "webp" => return ".webp",
                _ => {}
            }
        }
    }
    if url.contains(".jpg") || url.contains(".jpeg") {
        ".jpg"
    } else if url.contains(".png") {
        ".png"
    } else if url.contains(".webp") {
        ".webp"
    } else {
        ".jpg"
    }
}

/// Minimal Linux sanitization: path separators, NUL, and control
/// characters become `_`; leading/trailing dots and spaces are trimmed.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c == '\0' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c == ' ');
    if trimmed.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}
