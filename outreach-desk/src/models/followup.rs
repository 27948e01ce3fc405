//! Follow-up record shape

use serde::{Deserialize, Serialize};

/// One follow-up note: a customer's reaction to an outreach letter and any
/// planned next action.
///
/// Persisted as part of a JSON array under one settings key, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowupRecord {
    /// Human-readable local timestamp, generated at save time
    pub timestamp: String,
    pub customer_name: String,
    /// Free text or enumerated reaction label
    pub reaction: String,
    /// Planned next-action date, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_date: Option<String>,
    /// Free-text memo, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}
