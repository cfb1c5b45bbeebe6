//! Preview overlay state machine.
//!
//! Pure UI state: Hidden → Loading on hover over located media (no
//! debounce), Loading → Shown when the asset loads, back to Hidden on load
//! failure, close, or pointer leave. The host shell owns the actual
//! overlay surface; this tracks what it should display and where.

use crate::classify::MediaType;
use crate::filename::derive_filename;
use crate::resolve::resolve_original;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Loading,
    Shown,
}

/// The asset the overlay is currently previewing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTarget {
    pub media_type: MediaType,
    /// Source URL as found in markup.
    pub src: String,
    /// Original-asset URL the shell loads and downloads.
    pub resolved: String,
}

#[derive(Debug)]
pub struct PreviewOverlay {
    state: OverlayState,
    enabled: bool,
    pointer: (i32, i32),
    target: Option<PreviewTarget>,
}

impl Default for PreviewOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewOverlay {
    pub fn new() -> Self {
        Self {
            state: OverlayState::Hidden,
            enabled: true,
            pointer: (0, 0),
            target: None,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last pointer position the overlay was anchored at.
    pub fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    pub fn target(&self) -> Option<&PreviewTarget> {
        self.target.as_ref()
    }

    /// Toggle the preview feature. Disabling hides any open overlay.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if !self.enabled {
            self.hide();
        }
        self.enabled
    }

    /// Hover over located media: anchor at the pointer, clear the previous
    /// asset, enter Loading, and return the URL the shell should start
    /// loading. A new hover supersedes any in-flight load (last-event-wins,
    /// no cancellation of the superseded load).
    pub fn hover(&mut self, media_type: MediaType, src: &str, x: i32, y: i32) -> Option<String> {
        if !self.enabled || src.is_empty() {
            return None;
        }
        let resolved = resolve_original(src, media_type);
        if resolved.is_empty() {
            return None;
        }
        self.pointer = (x, y);
        self.target = Some(PreviewTarget {
            media_type,
            src: src.to_string(),
            resolved: resolved.clone(),
        });
        self.state = OverlayState::Loading;
        Some(resolved)
    }

    /// An asset load completed. Completions arriving after the overlay hid
    /// are ignored.
    pub fn loaded(&mut self) {
        if self.state == OverlayState::Loading {
            self.state = OverlayState::Shown;
        }
    }

    /// The asset failed to load: terminal for this hover session, no retry.
    pub fn load_failed(&mut self) {
        if self.state == OverlayState::Loading {
            self.hide();
        }
    }

    pub fn close(&mut self) {
        self.hide();
    }

    pub fn pointer_left(&mut self) {
        self.hide();
    }

    /// `"<type label> | <filename>"` info line for the current target.
    pub fn info_label(&self) -> Option<String> {
        let target = self.target.as_ref()?;
        let filename = derive_filename(&target.resolved, target.media_type);
        let label = match target.media_type {
            MediaType::Image => "image",
            MediaType::Gif => "GIF",
        };
        Some(format!("{label} | {filename}"))
    }

    fn hide(&mut self) {
        self.state = OverlayState::Hidden;
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_URL: &str = "https://pbs.twimg.com/media/ABC123.jpg";
    const GIF_URL: &str = "https://video.twimg.com/tweet_video/XYZ.mp4";

    #[test]
    fn hover_enters_loading_at_pointer() {
        let mut overlay = PreviewOverlay::new();
        let resolved = overlay.hover(MediaType::Image, IMAGE_URL, 40, 60).unwrap();
        assert_eq!(resolved, "https://pbs.twimg.com/media/ABC123?format=jpg&name=orig");
        assert_eq!(overlay.state(), OverlayState::Loading);
        assert_eq!(overlay.pointer(), (40, 60));
    }

    #[test]
    fn load_success_shows_and_labels() {
        let mut overlay = PreviewOverlay::new();
        overlay.hover(MediaType::Image, IMAGE_URL, 0, 0);
        overlay.loaded();
        assert_eq!(overlay.state(), OverlayState::Shown);
        assert_eq!(overlay.info_label().as_deref(), Some("image | ABC123.jpg"));
    }

    #[test]
    fn gif_label_forces_mp4_filename() {
        let mut overlay = PreviewOverlay::new();
        overlay.hover(MediaType::Gif, GIF_URL, 0, 0);
        overlay.loaded();
        assert_eq!(overlay.info_label().as_deref(), Some("GIF | XYZ.mp4"));
    }

    #[test]
    fn load_failure_hides_without_retry() {
        let mut overlay = PreviewOverlay::new();
        overlay.hover(MediaType::Image, IMAGE_URL, 0, 0);
        overlay.load_failed();
        assert_eq!(overlay.state(), OverlayState::Hidden);
        assert!(overlay.target().is_none());
        assert!(overlay.info_label().is_none());
    }

    #[test]
    fn new_hover_supersedes_in_flight_load() {
        let mut overlay = PreviewOverlay::new();
        overlay.hover(MediaType::Image, IMAGE_URL, 10, 10);
        overlay.hover(MediaType::Gif, GIF_URL, 20, 20);
        assert_eq!(overlay.state(), OverlayState::Loading);
        assert_eq!(overlay.pointer(), (20, 20));
        assert_eq!(overlay.target().unwrap().media_type, MediaType::Gif);
        // The stale load's completion drives whatever is loading now.
        overlay.loaded();
        assert_eq!(overlay.state(), OverlayState::Shown);
    }

    #[test]
    fn stale_completion_after_close_is_ignored() {
        let mut overlay = PreviewOverlay::new();
        overlay.hover(MediaType::Image, IMAGE_URL, 0, 0);
        overlay.close();
        overlay.loaded();
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }

    #[test]
    fn pointer_leave_hides_from_shown() {
        let mut overlay = PreviewOverlay::new();
        overlay.hover(MediaType::Image, IMAGE_URL, 0, 0);
        overlay.loaded();
        overlay.pointer_left();
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }

    #[test]
    fn disabled_overlay_ignores_hover() {
        let mut overlay = PreviewOverlay::new();
        assert!(!overlay.toggle());
        assert!(overlay.hover(MediaType::Image, IMAGE_URL, 0, 0).is_none());
        assert_eq!(overlay.state(), OverlayState::Hidden);
        assert!(overlay.toggle());
        assert!(overlay.hover(MediaType::Image, IMAGE_URL, 0, 0).is_some());
    }

    #[test]
    fn toggle_off_hides_open_overlay() {
        let mut overlay = PreviewOverlay::new();
        overlay.hover(MediaType::Image, IMAGE_URL, 0, 0);
        overlay.loaded();
        overlay.toggle();
        assert_eq!(overlay.state(), OverlayState::Hidden);
        assert!(overlay.target().is_none());
    }
}
