// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use clap::Parser;

/// Drive the links2 text-mode browser programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "linksctl", version, about)]
pub struct Config {
    /// Address to navigate to after the browser starts. Without one, the
    /// binary just runs the browser to exit.
    #[arg(value_name = "ADDRESS")]
    pub address: Option<String>,

    /// Browser binary to spawn.
    #[arg(long, env = "LINKSCTL_PROGRAM", default_value = "links2")]
    pub program: String,

    /// Terminal columns for the PTY.
    #[arg(long, env = "LINKSCTL_COLS", default_value = "132")]
    pub cols: u16,

    /// Terminal rows for the PTY.
    #[arg(long, env = "LINKSCTL_ROWS", default_value = "43")]
    pub rows: u16,

    /// TERM environment variable for the browser subprocess.
    #[arg(long, env = "LINKSCTL_TERM", default_value = "xterm")]
    pub term: String,

    /// Observation window size in bytes for pattern matching.
    #[arg(long, env = "LINKSCTL_SCAN_SIZE", default_value = "262144")]
    pub scan_size: usize,

    /// How long to wait for the overwrite prompt after a save, in
    /// milliseconds. The prompt can legitimately take a while to render,
    /// so keep this generous.
    #[arg(long, env = "LINKSCTL_EXISTS_PROMPT_MS", default_value = "250")]
    pub exists_prompt_ms: u64,

    /// Save the loaded document to this path before quitting.
    #[arg(long, value_name = "PATH")]
    pub save_as: Option<String>,

    /// Overwrite the save target if it already exists.
    #[arg(long)]
    pub overwrite: bool,

    /// Log format (json or text).
    #[arg(long, env = "LINKSCTL_LOG_FORMAT", default_value = "text")]
    pub log_format: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LINKSCTL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.program.is_empty() {
            anyhow::bail!("program must not be empty");
        }
        if self.cols == 0 || self.rows == 0 {
            anyhow::bail!("cols and rows must be non-zero");
        }
        if self.scan_size < 1024 {
            anyhow::bail!("scan size must be at least 1024 bytes");
        }
        Ok(())
    }

    pub fn exists_prompt_wait(&self) -> Duration {
        Duration::from_millis(self.exists_prompt_ms)
    }

    /// Deterministic defaults for tests.
    pub fn test() -> Self {
        Self {
            address: None,
            program: "links2".to_owned(),
            cols: 132,
            rows: 43,
            term: "xterm".to_owned(),
            scan_size: 65536,
            exists_prompt_ms: 250,
            save_as: None,
            overwrite: false,
            log_format: "text".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
