//! Background message plumbing.
//!
//! The control messages relayed between the popup/CLI surface and the
//! content side, and the background handler that owns the persisted
//! download counter. Messages serialize as externally tagged objects
//! (`{"type": "GET_STATS"}`) to match the wire shape.

use serde::{Deserialize, Serialize};

use crate::stats::StatsStore;

/// Control message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    /// A download finished; increment the counter and report it.
    DownloadComplete,
    /// Read the counter.
    GetStats,
    /// Zero the counter.
    ResetStats,
    /// Open the settings surface.
    OpenOptions,
    /// Toggle the hover preview on the content side.
    TogglePreview,
}

/// Reply to a control message. Fire-and-forget messages have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Counted { success: bool, count: u64 },
    Stats { count: u64 },
    Ack { success: bool },
}

/// Actions the background cannot perform itself and delegates to the host.
pub trait HostActions {
    /// Open the settings surface.
    fn open_options(&self) -> anyhow::Result<()>;
    /// Forward a message to the content side of the active page. Fails
    /// when the page has no content receiver.
    fn send_to_content(&self, message: Message) -> anyhow::Result<()>;
}

/// Background collaborator: owns the persisted counter and relays control
/// messages between the popup surface and the content side.
pub struct Background<H: HostActions> {
    stats: StatsStore,
    host: H,
}

impl<H: HostActions> Background<H> {
    pub fn new(stats: StatsStore, host: H) -> Self {
        Self { stats, host }
    }

    pub fn stats(&self) -> &StatsStore {
        &self.stats
    }

    /// First-install hook for the counter key. Settings are initialized by
    /// [`crate::config::load_or_init`].
    pub fn install(&self) -> anyhow::Result<()> {
        self.stats.init_if_missing()
    }

    /// Platform downloads-changed hook: a download reached the complete
    /// state. Fire-and-forget; persistence errors are logged only.
    pub fn on_download_completed(&self) {
        match self.stats.increment() {
            Ok(count) => tracing::debug!(count, "download counted"),
            Err(err) => tracing::warn!(error = %err, "failed to persist download count"),
        }
    }

    /// Dispatch one control message; `None` for fire-and-forget messages.
    /// No message is fatal: every failure degrades to a logged no-op.
    pub fn handle(&self, message: Message) -> Option<Reply> {
        match message {
            Message::DownloadComplete => match self.stats.increment() {
                Ok(count) => Some(Reply::Counted {
                    success: true,
                    count,
                }),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to persist download count");
                    Some(Reply::Counted {
                        success: false,
                        count: self.stats.get(),
                    })
                }
            },
            Message::GetStats => Some(Reply::Stats {
                count: self.stats.get(),
            }),
            Message::ResetStats => match self.stats.reset() {
                Ok(()) => Some(Reply::Ack { success: true }),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to reset download count");
                    Some(Reply::Ack { success: false })
                }
            },
            Message::OpenOptions => {
                if let Err(err) = self.host.open_options() {
                    tracing::warn!(error = %err, "failed to open options surface");
                }
                None
            }
            Message::TogglePreview => {
                // A page without the content side is a non-fatal miss.
                if let Err(err) = self.host.send_to_content(Message::TogglePreview) {
                    tracing::debug!(error = %err, "no content receiver for preview toggle");
                }
                None
            }
        }
    }
}
