//! Feed re-tagging for infinite scroll.
//!
//! The mutation-observer shell calls [`HoverSet::on_inserted`] for each
//! element added to the page body; the core tagging logic is a pure
//! function from a DOM subtree to the platform-media images inside it.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

use crate::classify;

/// Platform-media `<img>` elements in a subtree, the root included.
/// Pure and idempotent: re-scanning yields the same set.
pub fn scan_subtree(root: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let img_sel = Selector::parse("img").expect("img selector");
    let mut tagged = Vec::new();
    if is_platform_image(&root) {
        tagged.push(root);
    }
    for img in root.select(&img_sel) {
        if is_platform_image(&img) {
            tagged.push(img);
        }
    }
    tagged
}

/// Initial full-page pass over an already-parsed document.
pub fn scan_document(document: &Html) -> Vec<ElementRef<'_>> {
    scan_subtree(document.root_element())
}

fn is_platform_image(el: &ElementRef<'_>) -> bool {
    el.value().name() == "img"
        && el
            .value()
            .attr("src")
            .map_or(false, classify::is_platform_media)
}

/// Hover-eligible node set maintained across feed mutations.
#[derive(Debug, Default)]
pub struct HoverSet {
    ids: HashSet<NodeId>,
}

impl HoverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-tag an inserted element and its descendants. Re-tagging an
    /// already-tagged node is a no-op.
    pub fn on_inserted(&mut self, node: ElementRef<'_>) {
        for el in scan_subtree(node) {
            self.ids.insert(el.id());
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
