mod classify;
mod grab;
mod open_options;
mod reset_stats;
mod resolve;
mod scan;
mod stats;

pub use classify::run_classify;
pub use grab::run_grab;
pub use open_options::run_open_options;
pub use reset_stats::run_reset_stats;
pub use resolve::run_resolve;
pub use scan::run_scan;
pub use stats::run_stats;

use anyhow::Result;
use xgrab_core::config;
use xgrab_core::messages::{HostActions, Message};

/// Host seam for the CLI surface: options live in a file, and there is no
/// content page to relay to.
pub(crate) struct CliHost;

impl HostActions for CliHost {
    fn open_options(&self) -> Result<()> {
        let path = config::config_path()?;
        println!("settings file: {}", path.display());
        Ok(())
    }

    fn send_to_content(&self, _message: Message) -> Result<()> {
        anyhow::bail!("no content receiver in CLI mode")
    }
}
