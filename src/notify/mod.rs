//! Notification delivery
//!
//! This module provides:
//! - Notifier trait abstracting the chat-delivery capability
//! - TelegramNotifier implementation
//! - MockNotifier for tests

pub mod telegram;

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, WatchError};

pub use telegram::TelegramNotifier;

/// Chat-delivery capability
///
/// A send either definitely succeeded or definitely failed; callers gate
/// their dedup caches on that distinction.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}

/// Recording notifier for tests
#[derive(Default)]
pub struct MockNotifier {
    /// Messages delivered so far, in send order
    pub sent: Mutex<Vec<String>>,
    fail: Mutex<bool>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent sends fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        *self.fail.lock().unwrap() = failing;
    }

    pub fn sent_messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        if *self.fail.lock().unwrap() {
            return Err(WatchError::Notify("mock delivery failure".to_string()));
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_sends() {
        let mock = MockNotifier::new();
        mock.send("hello").await.unwrap();
        mock.send("world").await.unwrap();
        assert_eq!(mock.sent_messages(), vec!["hello", "world"]);
    }

    #[tokio::test]
    async fn test_mock_failure_mode() {
        let mock = MockNotifier::new();
        mock.set_failing(true);
        let err = mock.send("lost").await.unwrap_err();
        assert!(matches!(err, WatchError::Notify(_)));
        assert!(mock.sent_messages().is_empty());

        mock.set_failing(false);
        mock.send("recovered").await.unwrap();
        assert_eq!(mock.sent_messages(), vec!["recovered"]);
    }
}
