//! `xgrab reset-stats` – zero the download counter.

use anyhow::Result;
use xgrab_core::messages::{Background, Message, Reply};
use xgrab_core::stats::StatsStore;

use super::CliHost;

pub fn run_reset_stats() -> Result<()> {
    let background = Background::new(StatsStore::open_default()?, CliHost);
    match background.handle(Message::ResetStats) {
        Some(Reply::Ack { success: true }) => {
            println!("download counter reset");
            Ok(())
        }
        _ => anyhow::bail!("failed to reset download counter"),
    }
}
