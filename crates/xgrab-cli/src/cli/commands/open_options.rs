//! `xgrab open-options` – point at the settings surface.

use anyhow::Result;
use xgrab_core::messages::{Background, Message};
use xgrab_core::stats::StatsStore;

use super::CliHost;

pub fn run_open_options() -> Result<()> {
    let background = Background::new(StatsStore::open_default()?, CliHost);
    background.handle(Message::OpenOptions);
    Ok(())
}
