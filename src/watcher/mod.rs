//! Poll loop core
//!
//! The watcher is the long-running part of the process:
//! - ChangeDetector decides when a verdict is actually news
//! - PollScheduler runs the fetch/validate/interpret/notify cycle forever

pub mod dedup;
pub mod scheduler;

pub use dedup::ChangeDetector;
pub use scheduler::PollScheduler;
