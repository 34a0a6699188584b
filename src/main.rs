use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{error, info};

use statuswatch::api::StatusClient;
use statuswatch::config::{Config, INITIAL_LOOKBACK_SECS};
use statuswatch::notify::TelegramNotifier;
use statuswatch::watcher::PollScheduler;

/// Homework review status notifier
///
/// Credentials come from the environment: PRACTICUM_TOKEN, TELEGRAM_TOKEN
/// and TELEGRAM_CHAT_ID. There are no flags beyond process start.
#[derive(Parser)]
#[command(name = "statuswatch", version, about)]
struct Cli {}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let _cli = Cli::parse();

    // Refuse to enter the poll loop without all three secrets; looping
    // would only produce guaranteed failures.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("CRITICAL: cannot start: {err}");
            return Err(err).context("required credentials are not configured");
        }
    };

    println!("{}", "Starting homework status watcher...".cyan());

    let source = StatusClient::new(
        &config.endpoint,
        &config.practicum_token,
        config.request_timeout,
    )
    .context("failed to build status client")?;
    let notifier = TelegramNotifier::new(
        &config.telegram_token,
        &config.chat_id,
        config.request_timeout,
    )
    .context("failed to build Telegram notifier")?;

    // Wide look-back so the first cycle picks up the most recent verdict
    let initial_cursor = Utc::now().timestamp() - INITIAL_LOOKBACK_SECS;

    let mut scheduler = PollScheduler::new(
        Arc::new(source),
        Arc::new(notifier),
        config.poll_interval,
        initial_cursor,
    );

    tokio::select! {
        _ = scheduler.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("received Ctrl-C, shutting down");
        }
    }

    Ok(())
}
