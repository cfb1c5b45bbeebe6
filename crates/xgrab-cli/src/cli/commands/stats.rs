//! `xgrab stats` – show the download counter.

use anyhow::Result;
use xgrab_core::messages::{Background, Message, Reply};
use xgrab_core::stats::StatsStore;

use super::CliHost;

pub fn run_stats() -> Result<()> {
    let background = Background::new(StatsStore::open_default()?, CliHost);
    background.install()?;
    match background.handle(Message::GetStats) {
        Some(Reply::Stats { count }) => println!("{count} downloads"),
        _ => println!("0 downloads"),
    }
    Ok(())
}
