//! Poll loop scheduler
//!
//! The top-level control loop. One cycle is fetch, validate, interpret the
//! first record, notify on change, advance the cursor; every failure below
//! the scheduler surfaces here and is reported to the chat at most once per
//! distinct error message. The loop sleeps a fixed interval after every
//! cycle, success or not, so it never busy-spins on a persistent failure.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use tokio::time::sleep;

use crate::api::{StatusSource, validate_response};
use crate::error::{Result, WatchError};
use crate::notify::Notifier;
use crate::status::parse_status;
use crate::watcher::ChangeDetector;

/// Owns the cursor, the dedup caches, and the cycle loop
pub struct PollScheduler {
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    cursor: i64,
    detector: ChangeDetector,
    last_error: Option<String>,
}

impl PollScheduler {
    pub fn new(
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        initial_cursor: i64,
    ) -> Self {
        Self {
            source,
            notifier,
            interval,
            cursor: initial_cursor,
            detector: ChangeDetector::new(),
            last_error: None,
        }
    }

    /// Current lower bound of the next query window
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Run until cancelled
    ///
    /// Cancellation happens from outside (the caller races this future
    /// against a shutdown signal); state only mutates after an awaited call
    /// completes, so dropping the future mid-cycle cannot corrupt anything.
    pub async fn run(&mut self) {
        info!(
            "poll loop started, interval {}s, cursor {}",
            self.interval.as_secs(),
            self.cursor
        );
        loop {
            self.run_cycle().await;
            sleep(self.interval).await;
        }
    }

    /// Execute one full cycle, routing any failure to the error report path
    pub async fn run_cycle(&mut self) {
        match self.poll_once().await {
            Ok(()) => {
                // A clean cycle resets error dedup
                self.last_error = None;
            }
            Err(err) => self.report_failure(&err).await,
        }
    }

    async fn poll_once(&mut self) -> Result<()> {
        let raw = self.source.fetch(Some(self.cursor)).await?;
        let checked = validate_response(&raw)?;

        // Only the first record matters: the server lists the most relevant
        // homework first.
        if let Some(first) = checked.homeworks.first() {
            let update = parse_status(first)?;
            self.detector
                .process(&update.name, &update.message, self.notifier.as_ref())
                .await?;
        } else {
            debug!("no homework updates since {}", self.cursor);
        }

        if let Some(reported) = checked.current_date {
            // The cursor never moves backward
            if reported > self.cursor {
                self.cursor = reported;
            }
        }
        Ok(())
    }

    /// Report a failure to the chat, at most once per distinct message
    async fn report_failure(&mut self, err: &WatchError) {
        let message = format!("Сбой в работе программы: {err}");
        error!("{message}");

        if self.last_error.as_deref() == Some(message.as_str()) {
            debug!("error already reported, not notifying again");
            return;
        }

        match self.notifier.send(&message).await {
            Ok(()) => self.last_error = Some(message),
            // Cache stays stale so the next cycle tries again
            Err(send_err) => error!("could not report the failure to the chat: {send_err}"),
        }
    }
}
