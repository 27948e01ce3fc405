//! Analysis API: merge, aggregate, and rank loaded rows
//!
//! POST /api/analyze

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::models::{AnalysisResult, ScoredCustomer};
use crate::services::{customer_analyzer, customer_merger, priority_scorer};
use crate::{ApiError, ApiResult, AppState};

/// POST /api/analyze response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub priority: Vec<ScoredCustomer>,
    /// Plain-text summary for direct display
    pub summary_text: String,
    /// Workbook paths the analyzed rows came from, in ingest order
    pub source_files: Vec<String>,
}

/// POST /api/analyze
///
/// Recomputes the whole pipeline over the session's loaded rows: dedup
/// merge, descriptive aggregation, and the scored top-50 priority list.
/// Requires a prior successful ingest.
pub async fn analyze(State(state): State<AppState>) -> ApiResult<Json<AnalyzeResponse>> {
    let mut session = state.session.write().await;

    if !session.has_data() {
        return Err(ApiError::BadRequest(
            "Load customer workbooks before analyzing".to_string(),
        ));
    }

    let merged = customer_merger::merge(&session.raw_rows);
    let priority = priority_scorer::build_priority_list(&merged);
    let analysis = customer_analyzer::analyze(merged);
    let summary_text = customer_analyzer::render_summary(&analysis);

    tracing::info!(
        raw_rows = session.raw_rows.len(),
        merged = analysis.total,
        priority = priority.len(),
        "Customer analysis complete"
    );

    session.priority = priority.clone();

    Ok(Json(AnalyzeResponse {
        analysis,
        priority,
        summary_text,
        source_files: session.loaded_files.clone(),
    }))
}

/// Build analysis routes
pub fn analysis_routes() -> Router<AppState> {
    Router::new().route("/api/analyze", post(analyze))
}
