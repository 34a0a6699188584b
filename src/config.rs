//! Runtime configuration
//!
//! One immutable struct built from the environment at startup and passed
//! into the clients and the scheduler. No global state: if a token is
//! missing the process refuses to enter the poll loop.

use std::time::Duration;

use crate::error::{Result, WatchError};

/// Homework status endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Seconds between poll cycles
pub const POLL_INTERVAL_SECS: u64 = 600;

/// HTTP request timeout, bounded so a hung connection cannot stall the loop
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Look-back window for the very first cycle, in seconds
pub const INITIAL_LOOKBACK_SECS: i64 = 12_000_000;

/// Immutable runtime configuration for the watcher
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework status API
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Telegram chat that receives notifications
    pub chat_id: String,
    /// Status endpoint URL
    pub endpoint: String,
    /// Interval between poll cycles
    pub poll_interval: Duration,
    /// Timeout applied to every outbound HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Build a config from explicit credentials, using the default
    /// endpoint and timings
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            practicum_token: practicum_token.into(),
            telegram_token: telegram_token.into(),
            chat_id: chat_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    /// Load credentials from the environment
    ///
    /// Fails with the name of the first missing variable; an empty value
    /// counts as missing.
    pub fn from_env() -> Result<Self> {
        let practicum_token = require_env("PRACTICUM_TOKEN")?;
        let telegram_token = require_env("TELEGRAM_TOKEN")?;
        let chat_id = require_env("TELEGRAM_CHAT_ID")?;
        Ok(Self::new(practicum_token, telegram_token, chat_id))
    }
}

fn require_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(WatchError::MissingEnv(name)),
    }
}
