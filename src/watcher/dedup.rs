//! Change detection
//!
//! Tracks the last message delivered per homework so a status the chat has
//! already seen is never re-sent. The cache is updated only after the
//! notifier confirms delivery; a failed send leaves it untouched, so the
//! next cycle that derives the same verdict retries.

use std::collections::HashMap;

use log::debug;

use crate::error::Result;
use crate::notify::Notifier;

/// Per-homework last-notified state
#[derive(Debug, Default)]
pub struct ChangeDetector {
    sent: HashMap<String, String>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify about a verdict if it differs from the last one delivered
    ///
    /// Returns whether a notification went out. Delivery failures propagate
    /// without updating the cache.
    pub async fn process(
        &mut self,
        name: &str,
        message: &str,
        notifier: &dyn Notifier,
    ) -> Result<bool> {
        if self.sent.get(name).map(String::as_str) == Some(message) {
            debug!("status of \"{name}\" unchanged, not notifying");
            return Ok(false);
        }

        notifier.send(message).await?;
        self.sent.insert(name.to_string(), message.to_string());
        Ok(true)
    }

    /// Last message confirmed delivered for a homework, if any
    pub fn last_notified(&self, name: &str) -> Option<&str> {
        self.sent.get(name).map(String::as_str)
    }
}
