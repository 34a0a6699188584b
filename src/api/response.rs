//! Response shape validation
//!
//! Checks a raw endpoint body before anything downstream touches it. An
//! empty homework list is a legitimate "nothing changed" result, not an
//! error; a missing `current_date` is surfaced in the log but does not
//! abort the cycle, it only stops the cursor from advancing.

use log::warn;
use serde_json::Value;

use crate::error::{Result, WatchError};

/// A validated response: homework records in server order plus the
/// server-reported cursor value, if any
#[derive(Debug, Clone)]
pub struct CheckedResponse {
    pub homeworks: Vec<Value>,
    pub current_date: Option<i64>,
}

/// Validate the shape of a raw status response
pub fn validate_response(raw: &Value) -> Result<CheckedResponse> {
    let object = raw
        .as_object()
        .ok_or_else(|| WatchError::Shape("response is not a JSON object".to_string()))?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| WatchError::Shape("missing \"homeworks\" key".to_string()))?
        .as_array()
        .ok_or_else(|| WatchError::Shape("\"homeworks\" is not a list".to_string()))?;

    let current_date = object.get("current_date").and_then(Value::as_i64);
    if current_date.is_none() {
        warn!("response carries no usable \"current_date\", cursor will not advance");
    }

    Ok(CheckedResponse {
        homeworks: homeworks.clone(),
        current_date,
    })
}
