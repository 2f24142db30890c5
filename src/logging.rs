//! Debug log file setup.
//!
//! The terminal is owned by the UI, so events never go to stdout/stderr.
//! When enabled they are appended to `~/.portfolio/debug/portfolio.log`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::{ensure_private_dir, Settings};
use crate::error::{PortfolioError, Result};

const LOG_FILE: &str = "portfolio.log";
const DEFAULT_LEVEL: &str = "portfolio=debug";

/// Logging is on when `PORTFOLIO_DEBUG=1` or `RUST_LOG` is set.
pub fn is_enabled(debug_flag: Option<&str>, rust_log: Option<&str>) -> bool {
    debug_flag == Some("1") || rust_log.is_some_and(|v| !v.is_empty())
}

fn env_enabled() -> bool {
    let debug_flag = std::env::var("PORTFOLIO_DEBUG").ok();
    let rust_log = std::env::var("RUST_LOG").ok();
    is_enabled(debug_flag.as_deref(), rust_log.as_deref())
}

/// Installs the global subscriber if logging is enabled.
/// Returns the log file path when one was opened.
pub fn init() -> Result<Option<PathBuf>> {
    if !env_enabled() {
        return Ok(None);
    }
    let dir = Settings::debug_dir().ok_or(PortfolioError::NoConfigDir)?;
    init_in(&dir).map(Some)
}

fn init_in(dir: &Path) -> Result<PathBuf> {
    ensure_private_dir(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    // A subscriber may already be installed (tests); keep that one.
    let _ = Registry::default().with(env_filter).with(file_layer).try_init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "portfolio starting");
    Ok(path)
}
