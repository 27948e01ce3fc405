//! Follow-up ledger
//!
//! Append-only, most-recent-first list of follow-up records, persisted as
//! a JSON array under one settings key. The stored list is never truncated
//! here; display layers cap at the newest 50. Unbounded growth of the
//! stored list is an accepted limitation.
//!
//! The single service process owns the database file, so the
//! load-prepend-persist sequence has no concurrent writer to race with.

use chrono::Local;
use outreach_common::db::settings::{get_setting, set_setting};
use outreach_common::{Error, Result};
use sqlx::SqlitePool;

use crate::models::FollowupRecord;

/// Settings key holding the JSON-encoded follow-up array
pub const FOLLOWUP_KEY: &str = "followup_records_v1";

/// Newest records shown by display layers
pub const DISPLAY_CAP: usize = 50;

/// Load the full persisted ledger, newest first.
///
/// An unset key is an empty ledger, not an error.
pub async fn load(db: &SqlitePool) -> Result<Vec<FollowupRecord>> {
    match get_setting::<String>(db, FOLLOWUP_KEY).await? {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| Error::Internal(format!("Corrupt follow-up ledger: {}", e))),
    }
}

/// Record a follow-up: validate, stamp, prepend, persist.
///
/// Refuses an empty customer name or reaction without touching the stored
/// list. On success returns the updated ledger, newest first.
pub async fn record(
    db: &SqlitePool,
    customer_name: &str,
    reaction: &str,
    next_date: Option<String>,
    memo: Option<String>,
) -> Result<Vec<FollowupRecord>> {
    let customer_name = customer_name.trim();
    let reaction = reaction.trim();
    if customer_name.is_empty() || reaction.is_empty() {
        return Err(Error::InvalidInput(
            "Customer name and reaction are required for a follow-up record".to_string(),
        ));
    }

    let entry = FollowupRecord {
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        customer_name: customer_name.to_string(),
        reaction: reaction.to_string(),
        next_date: next_date.filter(|d| !d.trim().is_empty()),
        memo: memo.filter(|m| !m.trim().is_empty()),
    };

    let mut list = load(db).await?;
    list.insert(0, entry);

    let encoded = serde_json::to_string(&list)
        .map_err(|e| Error::Internal(format!("Encode follow-up ledger failed: {}", e)))?;
    set_setting(db, FOLLOWUP_KEY, encoded).await?;

    tracing::info!(
        customer = customer_name,
        reaction = reaction,
        total = list.len(),
        "Follow-up recorded"
    );

    Ok(list)
}

// ============================================================================
// Tests
// ============================================================================
