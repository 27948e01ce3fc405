//! Row normalization
//!
//! Maps a heterogeneous raw spreadsheet row to the canonical `Customer`
//! shape. Source files use varying column names (Korean full, Korean
//! abbreviated, English full, English abbreviated), so each canonical field
//! carries an ordered alias list; the first alias present with a non-empty
//! value wins. Adding a new accepted header is a data change here, not a
//! code change.

use crate::models::{Customer, RawRecord};

/// Accepted headers per canonical field, in resolution priority order.
struct FieldAliases {
    name: &'static [&'static str],
    email: &'static [&'static str],
    org: &'static [&'static str],
    field: &'static [&'static str],
    interest: &'static [&'static str],
    budget: &'static [&'static str],
    recent: &'static [&'static str],
}

static ALIASES: FieldAliases = FieldAliases {
    name: &["성명", "이름", "Name", "name"],
    email: &["이메일", "email", "Email", "E-mail"],
    org: &["기관", "소속", "Organization", "소속기관"],
    field: &["연구분야", "연구 분야", "분야", "Field"],
    interest: &["관심분야", "관심 분야", "Interest", "관심"],
    budget: &["연구비", "예산", "Budget", "연구비(만원)", "연구비(만 원)"],
    recent: &["최근거래", "최근 거래", "최근구매", "최근 문의", "Recent"],
};

/// Normalize one raw row into a `Customer`.
///
/// Never fails: absent fields come out as empty strings, and an absent or
/// unparseable budget comes out as 0. Rows are not discarded here even if
/// effectively empty; dropping unaddressable customers is the merger's job.
pub fn normalize(row: &RawRecord) -> Customer {
    Customer {
        name: resolve(row, ALIASES.name),
        email: resolve(row, ALIASES.email),
        org: resolve(row, ALIASES.org),
        field: resolve(row, ALIASES.field),
        interest: resolve(row, ALIASES.interest),
        budget: parse_budget(&resolve(row, ALIASES.budget)),
        recent: resolve(row, ALIASES.recent),
    }
}

/// First alias present with a non-empty trimmed value wins.
fn resolve(row: &RawRecord, aliases: &[&str]) -> String {
    for alias in aliases {
        if let Some(value) = row.get(*alias) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    String::new()
}

/// Strip every non-digit character and parse the remainder.
///
/// "1,500만원" -> 1500, "0원" -> 0, "" -> 0, "미정" -> 0.
fn parse_budget(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
