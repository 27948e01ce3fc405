//! In-process analysis session state
//!
//! All mutable pipeline state lives here, owned by `AppState` behind an
//! async lock. Operations receive the session explicitly; there are no
//! module-level globals, so independent sessions (tests, future multi-user
//! deployments) cannot cross-contaminate.

use super::{RawRecord, ScoredCustomer};

/// State accumulated across the ingest -> analyze -> letter flow.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    /// Raw rows from the last successful ingest, in file-then-row order
    pub raw_rows: Vec<RawRecord>,
    /// File paths of the last successful ingest, in supplied order;
    /// reported back by the analyze response as the data provenance
    pub loaded_files: Vec<String>,
    /// Priority list from the most recent analysis run
    pub priority: Vec<ScoredCustomer>,
}

impl AnalysisSession {
    /// Replace loaded rows with a new batch and invalidate derived state.
    ///
    /// Called only after every file in the batch decoded successfully, so
    /// a failed ingest never disturbs prior rows.
    pub fn load(&mut self, files: Vec<String>, rows: Vec<RawRecord>) {
        self.loaded_files = files;
        self.raw_rows = rows;
        self.priority.clear();
    }

    pub fn has_data(&self) -> bool {
        !self.raw_rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<RawRecord> {
        (0..n)
            .map(|i| {
                let mut r = RawRecord::new();
                r.insert("Name".to_string(), format!("c{}", i));
                r
            })
            .collect()
    }

    #[test]
    fn load_replaces_rows_and_files() {
        let mut session = AnalysisSession::default();
        assert!(!session.has_data());

        session.load(vec!["a.xlsx".to_string()], rows(2));
        assert!(session.has_data());
        assert_eq!(session.loaded_files, vec!["a.xlsx"]);
        assert_eq!(session.raw_rows.len(), 2);

        session.load(vec!["b.xlsx".to_string()], rows(1));
        assert_eq!(session.loaded_files, vec!["b.xlsx"]);
        assert_eq!(session.raw_rows.len(), 1);
    }

    #[test]
    fn load_invalidates_stale_priority_list() {
        let mut session = AnalysisSession::default();
        session.priority.push(ScoredCustomer {
            customer: crate::services::row_normalizer::normalize(&rows(1)[0]),
            score: 1,
            idx: 0,
        });

        session.load(vec!["a.xlsx".to_string()], rows(1));
        assert!(session.priority.is_empty());
    }
}
