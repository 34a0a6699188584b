//! statuswatch - homework review status notifier
//!
//! Polls the Practicum homework-status endpoint on a fixed interval,
//! detects status changes for the tracked homework, and forwards
//! human-readable notifications to a Telegram chat. Repeated identical
//! statuses and repeated identical errors are reported at most once.

pub mod api;
pub mod config;
pub mod error;
pub mod notify;
pub mod status;
pub mod watcher;

pub use error::{Result, WatchError};
