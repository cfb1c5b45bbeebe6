//! `xgrab resolve` – print the original-asset URL.

use anyhow::Result;
use xgrab_core::classify::{self, MediaType};
use xgrab_core::resolve::resolve_original;

pub fn run_resolve(url: &str, gif: bool) -> Result<()> {
    let media_type = if gif || classify::is_animated(url) {
        MediaType::Gif
    } else {
        MediaType::Image
    };
    println!("{}", resolve_original(url, media_type));
    Ok(())
}
