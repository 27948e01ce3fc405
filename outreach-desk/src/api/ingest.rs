//! Ingest API: load customer workbooks into the session
//!
//! POST /api/ingest

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::services::workbook_reader;
use crate::{ApiError, ApiResult, AppState};

/// POST /api/ingest request
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    /// Workbook paths, processed sequentially in this order
    pub paths: Vec<String>,
}

/// Per-file ingest summary
#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub path: String,
    pub rows: usize,
}

/// POST /api/ingest response
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub files: Vec<FileSummary>,
    pub total_rows: usize,
}

/// POST /api/ingest
///
/// Decodes every listed workbook (first sheet each) in the given order and
/// replaces the session's loaded rows with the concatenated result. A
/// decode failure on any file aborts the whole batch: nothing is admitted
/// and the previously loaded rows stay intact.
pub async fn ingest(
    State(state): State<AppState>,
    Json(request): Json<IngestRequest>,
) -> ApiResult<Json<IngestResponse>> {
    if request.paths.is_empty() {
        return Err(ApiError::BadRequest(
            "Select at least one workbook to load".to_string(),
        ));
    }

    // Decode the full batch before touching the session
    let batch = workbook_reader::read_batch(&request.paths)?;

    let files: Vec<FileSummary> = batch
        .iter()
        .map(|w| FileSummary {
            path: w.path.clone(),
            rows: w.rows.len(),
        })
        .collect();

    let mut all_rows = Vec::new();
    let mut loaded_files = Vec::new();
    for workbook in batch {
        loaded_files.push(workbook.path);
        all_rows.extend(workbook.rows);
    }
    let total_rows = all_rows.len();

    state.session.write().await.load(loaded_files, all_rows);

    tracing::info!(
        files = files.len(),
        total_rows,
        "Customer workbooks loaded"
    );

    Ok(Json(IngestResponse { files, total_rows }))
}

/// Build ingest routes
pub fn ingest_routes() -> Router<AppState> {
    Router::new().route("/api/ingest", post(ingest))
}
