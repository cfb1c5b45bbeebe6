//! `xgrab grab` – download the original asset for a media URL.

use std::path::PathBuf;

use anyhow::Result;
use xgrab_core::classify::{self, MediaType};
use xgrab_core::config::Settings;
use xgrab_core::dispatch;
use xgrab_core::fetch::FetchSink;
use xgrab_core::messages::{Background, Message};
use xgrab_core::stats::StatsStore;

use super::CliHost;

pub fn run_grab(url: &str, gif: bool, dir: Option<PathBuf>, settings: &Settings) -> Result<()> {
    let class = classify::classify_media(url);
    if !class.is_platform_media {
        anyhow::bail!("not a platform media URL: {url}");
    }
    let media_type = if gif || class.is_animated {
        MediaType::Gif
    } else {
        MediaType::Image
    };

    let base_dir = dir
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let sink = FetchSink::new(base_dir);

    let request = dispatch::download(url, media_type, &settings.save_path, &sink)?;
    println!("saved {}", sink.target_path(&request).display());

    // Count it the way the background does on download completion.
    let background = Background::new(StatsStore::open_default()?, CliHost);
    background.handle(Message::DownloadComplete);
    Ok(())
}
