//! HTTP API handlers for the outreach desk

pub mod analysis;
pub mod followups;
pub mod health;
pub mod ingest;
pub mod letter;
pub mod template;
pub mod ui;

pub use analysis::analysis_routes;
pub use followups::followup_routes;
pub use health::health_routes;
pub use ingest::ingest_routes;
pub use letter::letter_routes;
pub use template::template_routes;
pub use ui::ui_routes;
