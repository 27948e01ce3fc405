//! Customer ingest and analysis pipeline
//!
//! Data flow: workbook rows -> normalizer -> merger -> {scorer -> priority
//! list; analyzer -> summary} -> letter composer. The follow-up ledger is
//! independent, fed directly by user input.

pub mod customer_analyzer;
pub mod customer_merger;
pub mod followup_ledger;
pub mod letter_composer;
pub mod priority_scorer;
pub mod row_normalizer;
pub mod workbook_reader;
