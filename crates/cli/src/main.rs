// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use linksctl::config::Config;
use linksctl::session::Browser;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("error: {e}");
        std::process::exit(2);
    }

    init_tracing(&config);

    match run(config).await {
        Ok(()) => {}
        Err(e) => {
            error!("fatal: {e:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    match config.log_format.as_str() {
        "json" => {
            fmt::fmt().with_env_filter(filter).json().init();
        }
        _ => {
            fmt::fmt().with_env_filter(filter).init();
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();

    // Ctrl-C terminates the subprocess via the session's shutdown token.
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, shutting down");
            signal_token.cancel();
        }
    });

    let address = config.address.clone();
    let save_as = config.save_as.clone();
    let overwrite = config.overwrite;

    let mut browser = Browser::new(config);
    browser.open(shutdown.clone())?;

    match address {
        Some(address) => {
            browser.navigate(address.as_str()).await?;
            if let Some(name) = save_as {
                browser.save_formatted_document(&name, overwrite).await?;
            }
            browser.quit().await?;
        }
        None => {
            browser.wait().await?;
        }
    }
    Ok(())
}
