//! Deduplicating merge
//!
//! Combines normalized rows from one or more workbooks into a unique
//! customer set, merging partial information for repeated identities.
//!
//! Algorithm:
//! 1. Normalize each raw row in input order (file order, then row order)
//! 2. Drop rows with neither name nor email (unaddressable)
//! 3. Key by lowercased email + raw name; first occurrence becomes the
//!    representative, preserving first-insertion order
//! 4. Later occurrences fill still-empty scalar fields (first-non-empty
//!    wins, a later value never overrides an existing non-empty one);
//!    budget takes the maximum across all contributors
//!
//! The result is invariant to which file a duplicate came from, but
//! sensitive to input order: first-non-empty-wins is deliberately not
//! commutative for conflicting non-empty values.

use std::collections::HashMap;

use crate::models::{Customer, RawRecord};
use crate::services::row_normalizer;

/// Merge raw rows into unique customers in first-occurrence order.
pub fn merge(rows: &[RawRecord]) -> Vec<Customer> {
    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<Customer> = Vec::new();

    for row in rows {
        let incoming = row_normalizer::normalize(row);
        if !incoming.is_addressable() {
            continue;
        }

        match by_key.get(&incoming.identity_key()) {
            None => {
                by_key.insert(incoming.identity_key(), merged.len());
                merged.push(incoming);
            }
            Some(&idx) => fill(&mut merged[idx], incoming),
        }
    }

    merged
}

/// Fill empty fields of `existing` from `incoming`; budget keeps the max.
fn fill(existing: &mut Customer, incoming: Customer) {
    if existing.org.is_empty() && !incoming.org.is_empty() {
        existing.org = incoming.org;
    }
    if existing.field.is_empty() && !incoming.field.is_empty() {
        existing.field = incoming.field;
    }
    if existing.interest.is_empty() && !incoming.interest.is_empty() {
        existing.interest = incoming.interest;
    }
    if existing.recent.is_empty() && !incoming.recent.is_empty() {
        existing.recent = incoming.recent;
    }
    if incoming.budget > existing.budget {
        existing.budget = incoming.budget;
    }
}
