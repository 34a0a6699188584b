//! Telegram Bot API notifier

use std::time::Duration;

use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, WatchError};
use crate::notify::Notifier;

/// Telegram Bot API base URL
const TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Deserialize)]
struct SendMessageReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends chat messages through the Telegram Bot API
pub struct TelegramNotifier {
    client: Client,
    token: String,
    chat_id: String,
    base_url: String,
}

impl TelegramNotifier {
    /// Create a notifier with an explicit request timeout
    pub fn new(
        token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WatchError::Notify(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.into(),
            chat_id: chat_id.into(),
            base_url: TELEGRAM_API_URL.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let body = json!({ "chat_id": self.chat_id, "text": text });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Сбой при отправке сообщения в чат: {e}");
                WatchError::Notify(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Сбой при отправке сообщения в чат: HTTP {status}");
            return Err(WatchError::Notify(format!("HTTP {}", status.as_u16())));
        }

        let reply: SendMessageReply = response
            .json()
            .await
            .map_err(|e| WatchError::Notify(format!("unreadable API reply: {e}")))?;
        if !reply.ok {
            let reason = reply.description.unwrap_or_else(|| "unknown".to_string());
            error!("Сбой при отправке сообщения в чат: {reason}");
            return Err(WatchError::Notify(reason));
        }

        info!("Сообщение успешно отправлено в чат");
        Ok(())
    }
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Bot token stays out of logs
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
