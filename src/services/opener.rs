//! Hands external links to the desktop's URL opener.

use std::process::{Command, Stdio};

use crate::error::Result;

/// Platform command that opens a URL in the default browser.
fn opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Only web links leave the terminal.
pub fn is_web_link(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Opens `url` without waiting for the browser. The opener's output is
/// discarded so it cannot scribble over the screen.
pub fn open_url(url: &str) -> Result<()> {
    if !is_web_link(url) {
        tracing::warn!(url, "refusing to open non-web link");
        return Ok(());
    }
    Command::new(opener())
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    tracing::info!(url, "opened external link");
    Ok(())
}
