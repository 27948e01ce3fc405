//! Workbook decoding
//!
//! Reads the first sheet of each uploaded workbook into header-keyed raw
//! records. Binary format handling is delegated entirely to calamine; this
//! module only shapes the decoded grid into `RawRecord`s.
//!
//! Batch contract: files decode sequentially in the supplied order, and a
//! failure on any file aborts the whole batch with nothing admitted. There
//! is no partial-success merge across files.

use calamine::{open_workbook_auto, Data, Reader};
use outreach_common::{Error, Result};
use std::path::Path;

use crate::models::RawRecord;

/// Rows decoded from one workbook, tagged with its path for reporting.
#[derive(Debug)]
pub struct WorkbookRows {
    pub path: String,
    pub rows: Vec<RawRecord>,
}

/// Read the first sheet of one workbook into ordered raw records.
///
/// The first row is taken as the header row. Cells are trimmed; rows whose
/// cells are all empty are skipped. Extra cells beyond the header width are
/// ignored.
pub fn read_workbook(path: &Path) -> Result<Vec<RawRecord>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::Workbook(format!("{}: {}", path.display(), e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::Workbook(format!("{}: workbook has no sheets", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| Error::Workbook(format!("{}: {}", path.display(), e)))?;

    let mut rows_iter = range.rows();
    let header_row = match rows_iter.next() {
        Some(row) => row,
        None => return Ok(Vec::new()),
    };
    let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();

    let mut records = Vec::new();
    for row in rows_iter {
        let mut record = RawRecord::new();
        let mut any_value = false;
        for (header, cell) in headers.iter().zip(row.iter()) {
            if header.is_empty() {
                continue;
            }
            let value = cell_to_string(cell);
            if !value.is_empty() {
                any_value = true;
            }
            record.insert(header.clone(), value);
        }
        if any_value {
            records.push(record);
        }
    }

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = records.len(),
        "Workbook decoded"
    );

    Ok(records)
}

/// Read a batch of workbooks sequentially in the supplied order.
///
/// All files are decoded before anything is returned, so a failure on file
/// N admits no rows from files 1..N either.
pub fn read_batch(paths: &[String]) -> Result<Vec<WorkbookRows>> {
    let mut batch = Vec::with_capacity(paths.len());
    for path in paths {
        let rows = read_workbook(Path::new(path))?;
        batch.push(WorkbookRows {
            path: path.clone(),
            rows,
        });
    }
    Ok(batch)
}

/// Render one cell as trimmed display text. Empty cells become "".
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => format!("{}", f),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR({:?})", e),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.trim().to_string(),
        Data::DurationIso(s) => s.trim().to_string(),
    }
}
