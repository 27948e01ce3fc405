//! outreach-desk library interface
//!
//! Exposes `AppState` and `build_router` for the binary and for
//! integration tests.

pub mod api;
pub mod error;
pub mod models;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::AnalysisSession;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (settings table, follow-up ledger)
    pub db: SqlitePool,
    /// Explicit per-process analysis session (no module globals)
    pub session: Arc<RwLock<AnalysisSession>>,
    /// Root folder holding the database and the bundled guide template
    pub root_folder: PathBuf,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(db: SqlitePool, root_folder: PathBuf) -> Self {
        Self {
            db,
            session: Arc::new(RwLock::new(AnalysisSession::default())),
            root_folder,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // UI routes (HTML pages and client script)
        .merge(api::ui_routes())
        // API routes
        .merge(api::ingest_routes())
        .merge(api::analysis_routes())
        .merge(api::letter_routes())
        .merge(api::followup_routes())
        .merge(api::template_routes())
        .merge(api::health_routes())
        .with_state(state)
}
