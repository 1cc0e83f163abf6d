use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Parser, Debug)]
#[clap(
    name = "roku-term",
    version,
    about = "A terminal remote control for Roku devices"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,

    #[clap(long, help = "Path to the config file", default_value = "")]
    pub config_file: String,

    #[clap(
        long,
        help = "Device address to use for this run, without persisting it",
        default_value = ""
    )]
    pub address: String,

    #[clap(long, help = "Log level filter", default_value = "")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Line-based command prompt instead of the full-screen remote
    Repl,
    /// Interactive device setup, re-runnable at any time
    Setup,
}

/// Logs go to a file under the cache directory; the TUI owns stdout. The
/// returned guard must stay alive for the log writer to flush.
pub fn init_logging() -> Result<WorkerGuard> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("roku-term");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "roku-term.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_new(Config::get(ConfigKey::LogLevel))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    return Ok(guard);
}
