//! Wire types for the sidecar's state and pub/sub APIs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed key under which the service persists its single value.
pub const SAVED_NUMBER_KEY: &str = "savedNumber";

/// Topics this service subscribes to via the sidecar's pub/sub discovery.
pub const TOPICS: [&str; 2] = ["A", "B"];

/// One entry in the state API's bulk-save payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateEntry {
    /// State store key.
    pub key: String,
    /// Arbitrary JSON value to persist.
    pub value: Value,
}

impl StateEntry {
    /// Build an entry for the given key and value.
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
