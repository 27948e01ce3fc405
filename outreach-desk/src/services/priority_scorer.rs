//! Priority scoring
//!
//! Pure additive score over a merged customer, plus construction of the
//! truncated priority list. No side effects, no caps beyond the rule set.

use crate::models::{Customer, ScoredCustomer};

/// Budget threshold contributing +1
pub const BUDGET_SCORE_THRESHOLD: u64 = 300;
/// Budget threshold contributing a further +2 (cumulative: +3 total)
pub const HIGH_BUDGET_THRESHOLD: u64 = 1000;
/// Priority list length cap
pub const PRIORITY_LIST_CAP: usize = 50;

/// Score one customer.
///
/// +1 non-empty field, +1 non-empty interest, +1 budget >= 300, +2 more at
/// budget >= 1000, +1 non-empty recent. Maximum attainable score is 6.
pub fn score(customer: &Customer) -> u32 {
    let mut score = 0;
    if !customer.field.is_empty() {
        score += 1;
    }
    if !customer.interest.is_empty() {
        score += 1;
    }
    if customer.budget >= BUDGET_SCORE_THRESHOLD {
        score += 1;
    }
    if customer.budget >= HIGH_BUDGET_THRESHOLD {
        score += 2;
    }
    if !customer.recent.is_empty() {
        score += 1;
    }
    score
}

/// Build the priority list: score every merged customer, sort descending
/// by score, truncate to the top 50.
///
/// The sort key is the score alone and the sort is stable, so customers
/// with equal scores keep their merge order. That is a required property
/// of the list, relied on by selection indices.
pub fn build_priority_list(merged: &[Customer]) -> Vec<ScoredCustomer> {
    let mut list: Vec<ScoredCustomer> = merged
        .iter()
        .enumerate()
        .map(|(idx, customer)| ScoredCustomer {
            customer: customer.clone(),
            score: score(customer),
            idx,
        })
        .collect();

    list.sort_by(|a, b| b.score.cmp(&a.score));
    list.truncate(PRIORITY_LIST_CAP);
    list
}
