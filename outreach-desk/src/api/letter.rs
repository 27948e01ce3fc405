//! Letter API: compose the outreach letter for selected customers
//!
//! POST /api/letter

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::services::letter_composer;
use crate::{ApiError, ApiResult, AppState};

/// POST /api/letter request
#[derive(Debug, Deserialize)]
pub struct LetterRequest {
    /// Priority-list row indices (0-based) chosen by the user
    pub selected: Vec<usize>,
    /// Free-text segment label; default substituted when blank
    #[serde(default)]
    pub segment: String,
}

/// POST /api/letter response
#[derive(Debug, Serialize)]
pub struct LetterResponse {
    pub letter: String,
    pub customer_count: usize,
}

/// POST /api/letter
///
/// Composes the letter for the selected priority-list rows, dated today.
/// An empty selection or an index past the end of the priority list is
/// refused; the session is left untouched either way.
pub async fn compose_letter(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> ApiResult<Json<LetterResponse>> {
    let session = state.session.read().await;

    let mut selected = Vec::with_capacity(request.selected.len());
    for idx in &request.selected {
        let scored = session.priority.get(*idx).ok_or_else(|| {
            ApiError::BadRequest(format!("No priority-list row at index {}", idx))
        })?;
        selected.push(scored.customer.clone());
    }

    let today = chrono::Local::now().date_naive();
    let letter = letter_composer::compose(&selected, &request.segment, today)?;

    tracing::info!(
        customers = selected.len(),
        segment = %request.segment,
        "Outreach letter composed"
    );

    Ok(Json(LetterResponse {
        customer_count: selected.len(),
        letter,
    }))
}

/// Build letter routes
pub fn letter_routes() -> Router<AppState> {
    Router::new().route("/api/letter", post(compose_letter))
}
