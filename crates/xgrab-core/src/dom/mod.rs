//! Feed-page DOM logic.
//!
//! `locate` walks outward from a hover target to the nearest qualifying
//! media element; `scan` keeps the hover-eligible set current as the feed
//! infinite-scrolls.

mod locate;
mod scan;

pub use locate::{locate, MediaDescriptor};
pub use scan::{scan_document, scan_subtree, HoverSet};
