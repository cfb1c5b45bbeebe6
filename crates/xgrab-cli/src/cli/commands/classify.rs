//! `xgrab classify` – classify a candidate media URL.

use anyhow::Result;
use xgrab_core::classify::classify_media;

pub fn run_classify(url: &str) -> Result<()> {
    let class = classify_media(url);
    println!("platform media: {}", class.is_platform_media);
    println!("animated:       {}", class.is_animated);
    Ok(())
}
