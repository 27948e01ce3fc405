//! Outreach letter composition
//!
//! Renders the fixed-structure guide letter for a caller-selected subset
//! of customers. Output is deterministic for a given selection, segment
//! label, and date: a purpose section referencing the segment, a dated
//! roster with one enumerated block per customer, and a fixed closing
//! (delivery method, next steps, contact) that never varies.

use chrono::NaiveDate;
use outreach_common::{Error, Result};

use crate::models::Customer;

/// Substituted when the caller leaves the segment label blank
pub const DEFAULT_SEGMENT_LABEL: &str = "the selected key customer group";

const NAME_FALLBACK: &str = "(unnamed)";
const ATTRIBUTE_FALLBACK: &str = "-";
const BUDGET_FALLBACK: &str = "unknown";

/// Compose the outreach letter.
///
/// Refuses an empty selection: the caller must pick at least one customer
/// from the priority list first.
pub fn compose(selected: &[Customer], segment: &str, date: NaiveDate) -> Result<String> {
    if selected.is_empty() {
        return Err(Error::InvalidInput(
            "Select at least one customer from the priority list before generating a letter"
                .to_string(),
        ));
    }

    let segment = if segment.trim().is_empty() {
        DEFAULT_SEGMENT_LABEL
    } else {
        segment.trim()
    };

    let mut sections: Vec<String> = Vec::new();

    sections.push(format!(
        "1. Purpose\n   \
         - To promptly introduce {} to overseas market research reports\n     \
         matched to their current research and interest topics.\n",
        segment
    ));

    sections.push(format!(
        "2. Target customers (as of {})\n   \
         - The customers below receive priority guidance.\n",
        date.format("%Y-%m-%d")
    ));

    for (i, c) in selected.iter().enumerate() {
        sections.push(customer_block(i + 1, c));
    }

    sections.push(closing_block());

    Ok(sections.join("\n"))
}

/// One enumerated roster entry (1-based index).
fn customer_block(index: usize, c: &Customer) -> String {
    let budget = if c.budget > 0 {
        format!("{}", c.budget)
    } else {
        BUDGET_FALLBACK.to_string()
    };

    format!(
        "   [{}] {} / {}\n        \
         - Research field : {}\n        \
         - Interest       : {}\n        \
         - Budget (est.)  : {}\n",
        index,
        placeholder(&c.name, NAME_FALLBACK),
        c.org,
        placeholder(&c.field, ATTRIBUTE_FALLBACK),
        placeholder(&c.interest, ATTRIBUTE_FALLBACK),
        budget,
    )
}

/// Fixed closing: delivery method, next steps, contact. Invariant across
/// invocations.
fn closing_block() -> String {
    [
        "3. Recommended report delivery",
        "   1) Reports closest to each customer's research topic are introduced first",
        "   2) Tables of contents and sample pages provided on request",
        "   3) Candidates split into first and second rounds to fit budget and schedule",
        "",
        "4. Suggested next step",
        "   - Reach out by phone, e-mail, or online meeting, and we will walk through",
        "     detailed contents, pricing, delivery, and usage examples.",
        "",
        "5. Contact",
        "   - WORLD INDUSTRIAL INFORMATION CENTER",
        "   - Tel : (02)333-8337 / Fax : (02)333-8330",
        "   - E-mail : info@worldic.co.kr",
    ]
    .join("\n")
}

fn placeholder<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, org: &str, field: &str, budget: u64) -> Customer {
        Customer {
            name: name.to_string(),
            email: String::new(),
            org: org.to_string(),
            field: field.to_string(),
            interest: String::new(),
            budget,
            recent: String::new(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn empty_selection_is_refused() {
        let result = compose(&[], "biotech labs", date());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn one_block_per_selected_customer() {
        let selected = vec![
            customer("Kim", "KAIST", "AI", 1200),
            customer("Lee", "SNU", "Bio", 0),
            customer("", "", "", 0),
        ];

        let letter = compose(&selected, "", date()).unwrap();
        assert!(letter.contains("[1] Kim / KAIST"));
        assert!(letter.contains("[2] Lee / SNU"));
        assert!(letter.contains("[3] (unnamed) /"));
        assert!(!letter.contains("[4]"));
    }

    #[test]
    fn blank_segment_uses_default_label() {
        let letter = compose(&[customer("Kim", "", "", 0)], "   ", date()).unwrap();
        assert!(letter.contains(DEFAULT_SEGMENT_LABEL));
    }

    #[test]
    fn placeholders_substitute_empty_fields() {
        let letter = compose(&[customer("Kim", "", "", 0)], "x", date()).unwrap();
        assert!(letter.contains("Research field : -"));
        assert!(letter.contains("Budget (est.)  : unknown"));
    }

    #[test]
    fn closing_block_is_verbatim_and_date_appears() {
        let letter = compose(&[customer("Kim", "", "", 0)], "x", date()).unwrap();
        assert!(letter.contains("as of 2026-03-02"));
        assert!(letter.contains("5. Contact"));
        assert!(letter.contains("WORLD INDUSTRIAL INFORMATION CENTER"));
        assert!(letter.contains("info@worldic.co.kr"));

        // Invariant across invocations with different inputs
        let other = compose(&[customer("Lee", "SNU", "Bio", 500)], "labs", date()).unwrap();
        assert!(other.ends_with(&closing_block()));
        assert!(letter.ends_with(&closing_block()));
    }
}
