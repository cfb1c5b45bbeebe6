//! `xgrab scan` – list downloadable media in a saved feed page.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use scraper::Html;
use xgrab_core::classify::MediaType;
use xgrab_core::dom::{locate, scan_document};
use xgrab_core::resolve::resolve_original;

pub fn run_scan(path: &Path) -> Result<()> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document = Html::parse_document(&html);

    let mut found = 0usize;
    for img in scan_document(&document) {
        let Some(descriptor) = locate(img) else {
            continue;
        };
        found += 1;
        let kind = match descriptor.media_type {
            MediaType::Image => "image",
            MediaType::Gif => "gif",
        };
        println!(
            "{:<6} {}",
            kind,
            resolve_original(&descriptor.src, descriptor.media_type)
        );
    }
    if found == 0 {
        println!("No downloadable media found.");
    }
    Ok(())
}
