//! CLI for the xgrab media downloader.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use xgrab_core::config;

use commands::{
    run_classify, run_grab, run_open_options, run_reset_stats, run_resolve, run_scan, run_stats,
};

/// Top-level CLI for the xgrab media downloader.
#[derive(Debug, Parser)]
#[command(name = "xgrab")]
#[command(about = "xgrab: original-quality media downloads from the X/Twitter feed", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a URL: platform media? animated?
    Classify {
        /// Candidate media URL.
        url: String,
    },

    /// Print the original-asset URL for a media URL.
    Resolve {
        /// Thumbnail or media URL.
        url: String,

        /// Treat the media as an animated GIF served as video.
        #[arg(long)]
        gif: bool,
    },

    /// Scan a saved feed page (HTML file) and list downloadable media.
    Scan {
        /// Path to the HTML file.
        path: PathBuf,
    },

    /// Download the original asset for a media URL.
    Grab {
        /// Thumbnail or media URL.
        url: String,

        /// Treat the media as an animated GIF served as video.
        #[arg(long)]
        gif: bool,

        /// Base directory; defaults to the user download directory.
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Show the download counter.
    Stats,

    /// Zero the download counter.
    ResetStats,

    /// Show where the settings surface lives.
    OpenOptions,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Settings are created with defaults on first run.
        let settings = config::load_or_init()?;
        tracing::debug!(?settings, "loaded settings");

        match cli.command {
            CliCommand::Classify { url } => run_classify(&url),
            CliCommand::Resolve { url, gif } => run_resolve(&url, gif),
            CliCommand::Scan { path } => run_scan(&path),
            CliCommand::Grab { url, gif, dir } => run_grab(&url, gif, dir, &settings),
            CliCommand::Stats => run_stats(),
            CliCommand::ResetStats => run_reset_stats(),
            CliCommand::OpenOptions => run_open_options(),
        }
    }
}
