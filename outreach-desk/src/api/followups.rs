//! Follow-up API: read and append ledger records
//!
//! GET /api/followups, POST /api/followups

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::models::FollowupRecord;
use crate::services::followup_ledger;
use crate::{ApiResult, AppState};

/// GET/POST /api/followups response
#[derive(Debug, Serialize)]
pub struct FollowupListResponse {
    pub records: Vec<FollowupRecord>,
    /// Newest records a display layer should show
    pub display_cap: usize,
}

/// POST /api/followups request
#[derive(Debug, Deserialize)]
pub struct SaveFollowupRequest {
    pub customer_name: String,
    pub reaction: String,
    #[serde(default)]
    pub next_date: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
}

/// GET /api/followups
///
/// Full persisted ledger, newest first.
pub async fn list_followups(State(state): State<AppState>) -> ApiResult<Json<FollowupListResponse>> {
    let records = followup_ledger::load(&state.db).await?;
    Ok(Json(FollowupListResponse {
        records,
        display_cap: followup_ledger::DISPLAY_CAP,
    }))
}

/// POST /api/followups
///
/// Records one follow-up. Missing customer name or reaction is a 400 and
/// leaves the stored ledger unchanged.
pub async fn save_followup(
    State(state): State<AppState>,
    Json(request): Json<SaveFollowupRequest>,
) -> ApiResult<Json<FollowupListResponse>> {
    let records = followup_ledger::record(
        &state.db,
        &request.customer_name,
        &request.reaction,
        request.next_date,
        request.memo,
    )
    .await?;

    Ok(Json(FollowupListResponse {
        records,
        display_cap: followup_ledger::DISPLAY_CAP,
    }))
}

/// Build follow-up routes
pub fn followup_routes() -> Router<AppState> {
    Router::new().route("/api/followups", get(list_followups).post(save_followup))
}
