//! Command line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments. Every option overrides its config file value.
#[derive(Debug, Parser)]
#[command(
    name = "feedcache",
    version,
    about = "Pre-warms the on-disk image cache for stored feed content",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// JSON snapshot of stored feed items.
    #[arg(long, value_name = "PATH")]
    pub items_file: Option<PathBuf>,

    /// Directory holding gzip-compressed article blobs.
    #[arg(long, value_name = "PATH")]
    pub article_dir: Option<PathBuf>,

    /// Disk image cache directory.
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Only pre-cache images on unmetered connections.
    #[arg(long)]
    pub wifi_only: Option<bool>,

    /// Treat the current connection as metered.
    #[arg(long, env = "FEEDCACHE_METERED")]
    pub metered: bool,
}
