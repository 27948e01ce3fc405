//! Aggregation over the merged customer set
//!
//! Computes descriptive statistics independent of scoring: total count,
//! grouped counts by research field and interest, and the high-budget
//! subset. Recomputed wholly on each run; nothing is persisted.

use crate::models::{AnalysisResult, Customer};
use crate::services::priority_scorer::HIGH_BUDGET_THRESHOLD;

/// Compute the analysis result for a merged customer sequence.
///
/// A customer missing an attribute contributes to neither grouped count
/// (there is no "unknown" bucket). `high_budget` is a filter, not a sort:
/// it retains merge order and is uncapped here; display layers may cap.
pub fn analyze(merged: Vec<Customer>) -> AnalysisResult {
    let mut by_field: Vec<(String, usize)> = Vec::new();
    let mut by_interest: Vec<(String, usize)> = Vec::new();
    let mut high_budget = Vec::new();

    for customer in &merged {
        if !customer.field.is_empty() {
            count_into(&mut by_field, &customer.field);
        }
        if !customer.interest.is_empty() {
            count_into(&mut by_interest, &customer.interest);
        }
        if customer.budget >= HIGH_BUDGET_THRESHOLD {
            high_budget.push(customer.clone());
        }
    }

    AnalysisResult {
        total: merged.len(),
        by_field,
        by_interest,
        high_budget,
        merged,
    }
}

/// Increment a key's count, inserting at the tail on first appearance.
///
/// The table stays in first-appearance order so top-N ties break
/// deterministically.
fn count_into(table: &mut Vec<(String, usize)>, key: &str) {
    match table.iter_mut().find(|(k, _)| k == key) {
        Some((_, count)) => *count += 1,
        None => table.push((key.to_string(), 1)),
    }
}

/// Top-N presentation helper: descending by count, stable on ties, so
/// equal counts keep first-appearance order.
pub fn top_n(table: &[(String, usize)], n: usize) -> Vec<(String, usize)> {
    let mut sorted = table.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.truncate(n);
    sorted
}

/// Render the plain-text summary report shown in the UI.
pub fn render_summary(analysis: &AnalysisResult) -> String {
    let mut text = String::new();

    text.push_str(&format!(
        "■ Total customers after merge: {}\n\n",
        analysis.total
    ));

    text.push_str("■ Top 5 research fields\n");
    for (field, count) in top_n(&analysis.by_field, 5) {
        text.push_str(&format!("  - {}: {}\n", field, count));
    }

    text.push_str("\n■ Top 5 interests\n");
    for (interest, count) in top_n(&analysis.by_interest, 5) {
        text.push_str(&format!("  - {}: {}\n", interest, count));
    }

    text.push_str("\n■ Key customers with budget >= 1,000\n");
    if analysis.high_budget.is_empty() {
        text.push_str("  - none\n");
    } else {
        for c in analysis.high_budget.iter().take(10) {
            text.push_str(&format!(
                "  - {} / {} / approx. {} / field: {} / interest: {}\n",
                placeholder(&c.name, "(unnamed)"),
                placeholder(&c.org, "(no org)"),
                c.budget,
                placeholder(&c.field, "-"),
                placeholder(&c.interest, "-"),
            ));
        }
    }

    text
}

fn placeholder<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
