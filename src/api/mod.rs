//! Homework status API layer
//!
//! This module provides:
//! - StatusSource trait for endpoint abstraction
//! - StatusClient reqwest implementation
//! - Response shape validation

pub mod client;
pub mod response;

pub use client::{MockStatusSource, StatusClient, StatusSource};
pub use response::{CheckedResponse, validate_response};
