//! Guide template download
//!
//! GET /api/guide-template serves the bundled .docx template from the root
//! folder as an attachment.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::{ApiError, ApiResult, AppState};

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// GET /api/guide-template
///
/// Returns 404 when the template has not been installed into the root
/// folder.
pub async fn download_template(State(state): State<AppState>) -> ApiResult<Response> {
    let path = outreach_common::config::guide_template_path(&state.root_folder);

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Guide template not readable");
        if e.kind() == std::io::ErrorKind::NotFound {
            ApiError::NotFound("Guide template is not installed".to_string())
        } else {
            ApiError::Io(e)
        }
    })?;

    Ok((
        [
            ("content-type", DOCX_CONTENT_TYPE),
            (
                "content-disposition",
                "attachment; filename=\"guide-template.docx\"",
            ),
        ],
        bytes,
    )
        .into_response())
}

/// Build template routes
pub fn template_routes() -> Router<AppState> {
    Router::new().route("/api/guide-template", get(download_template))
}
