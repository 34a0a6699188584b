//! Status endpoint client
//!
//! One authenticated GET per poll cycle. The client classifies failures but
//! never retries; retry is the scheduler's job via the outer loop.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::error::{Result, WatchError};

/// Source of raw status responses
///
/// `from_date` is the lower bound of the query window; `None` means
/// "from the current time".
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self, from_date: Option<i64>) -> Result<Value>;
}

/// HTTP client for the homework status endpoint
pub struct StatusClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl StatusClient {
    /// Create a client with an explicit request timeout
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WatchError::Connectivity(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl StatusSource for StatusClient {
    async fn fetch(&self, from_date: Option<i64>) -> Result<Value> {
        let from_date = from_date.unwrap_or_else(|| Utc::now().timestamp());

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| WatchError::Connectivity(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WatchError::Transport(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| WatchError::Format(e.to_string()))
    }
}

impl std::fmt::Debug for StatusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Token stays out of logs
        f.debug_struct("StatusClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Scripted status source for tests: answers with queued results in order
#[derive(Default)]
pub struct MockStatusSource {
    responses: Mutex<VecDeque<Result<Value>>>,
    /// from_date values received, in call order
    pub requests: Mutex<Vec<Option<i64>>>,
}

impl MockStatusSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body
    pub fn push_response(&self, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(body));
    }

    /// Queue a failure
    pub fn push_error(&self, err: WatchError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }
}

#[async_trait]
impl StatusSource for MockStatusSource {
    async fn fetch(&self, from_date: Option<i64>) -> Result<Value> {
        self.requests.lock().unwrap().push(from_date);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(WatchError::Connectivity("mock queue empty".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_new() {
        let client = StatusClient::new(
            "https://example.test/statuses/",
            "secret",
            Duration::from_secs(30),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = StatusClient::new(
            "https://example.test/statuses/",
            "secret-token",
            Duration::from_secs(30),
        )
        .unwrap();

        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("example.test"));
        assert!(!debug_str.contains("secret-token"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StatusClient>();
        assert_send_sync::<MockStatusSource>();
    }

    #[tokio::test]
    async fn test_mock_source_replays_in_order() {
        let mock = MockStatusSource::new();
        mock.push_response(json!({"homeworks": []}));
        mock.push_error(WatchError::Transport(500));

        assert!(mock.fetch(Some(10)).await.is_ok());
        let err = mock.fetch(Some(20)).await.unwrap_err();
        assert!(matches!(err, WatchError::Transport(500)));
        assert_eq!(*mock.requests.lock().unwrap(), vec![Some(10), Some(20)]);
    }

    #[tokio::test]
    async fn test_mock_source_empty_queue() {
        let mock = MockStatusSource::new();
        let err = mock.fetch(None).await.unwrap_err();
        assert!(matches!(err, WatchError::Connectivity(_)));
    }
}
