//! Customer record shapes
//!
//! A `RawRecord` is one spreadsheet row as decoded: header text mapped to
//! trimmed cell text, no fixed schema. Normalization produces the canonical
//! `Customer`; merging, scoring, and aggregation build on that.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One raw spreadsheet row: header -> trimmed cell text.
///
/// Absent keys and empty values both mean "missing"; the normalizer treats
/// them identically.
pub type RawRecord = HashMap<String, String>;

/// Canonical customer shape produced by normalization.
///
/// Every string field may be empty. `budget` is derived by stripping all
/// non-digit characters from the raw value; absent or unparseable values
/// degrade to 0, never to an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub org: String,
    /// Research domain
    pub field: String,
    pub interest: String,
    /// Research budget, in 10k KRW units as supplied
    pub budget: u64,
    /// Free-text recency indicator (last purchase/inquiry)
    pub recent: String,
}

impl Customer {
    /// Deduplication key: lowercased email plus raw name.
    ///
    /// Two records producing the same key are the same customer.
    pub fn identity_key(&self) -> String {
        format!("{}|{}", self.email.to_lowercase(), self.name)
    }

    /// A customer with neither name nor email cannot be addressed or
    /// identified; the merger drops such records entirely.
    pub fn is_addressable(&self) -> bool {
        !self.name.is_empty() || !self.email.is_empty()
    }
}

/// Customer plus priority score, recomputed fully on every analysis run.
///
/// `idx` is the position in the merged sequence; it is a stable back
/// reference for selection, not an ordering input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCustomer {
    #[serde(flatten)]
    pub customer: Customer,
    pub score: u32,
    pub idx: usize,
}

/// Descriptive statistics over the merged customer set.
///
/// The grouped counts preserve first-appearance order so that top-N
/// reporting breaks ties deterministically. `high_budget` retains merge
/// order and is uncapped; display layers may truncate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total: usize,
    pub by_field: Vec<(String, usize)>,
    pub by_interest: Vec<(String, usize)>,
    pub high_budget: Vec<Customer>,
    pub merged: Vec<Customer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, email: &str) -> Customer {
        Customer {
            name: name.to_string(),
            email: email.to_string(),
            org: String::new(),
            field: String::new(),
            interest: String::new(),
            budget: 0,
            recent: String::new(),
        }
    }

    #[test]
    fn identity_key_lowercases_email_only() {
        let c = customer("Kim", "KIM@Example.COM");
        assert_eq!(c.identity_key(), "kim@example.com|Kim");
    }

    #[test]
    fn addressable_requires_name_or_email() {
        assert!(customer("Kim", "").is_addressable());
        assert!(customer("", "kim@example.com").is_addressable());
        assert!(!customer("", "").is_addressable());
    }
}
