//! Domain models for the outreach desk

pub mod customer;
pub mod followup;
pub mod session;

pub use customer::{AnalysisResult, Customer, RawRecord, ScoredCustomer};
pub use followup::FollowupRecord;
pub use session::AnalysisSession;
