//! Delimited export of a summary table.

use std::path::Path;

use pd_core::units::pa_to_kpa;

use crate::ReportResult;
use crate::columns::{ALL_COLUMNS, TYPE_COLUMN};
use crate::format::format_g3;
use crate::summary::Summary;

/// Render the summary as CSV text: decorated headers, one row per element,
/// kPa columns rescaled from base Pa, empty cells for unset values.
pub fn to_csv_string(summary: &Summary) -> String {
    let mut headers: Vec<String> = Vec::with_capacity(ALL_COLUMNS.len() + 1);
    headers.push(ALL_COLUMNS[0].header());
    headers.push(TYPE_COLUMN.to_string());
    for column in &ALL_COLUMNS[1..] {
        headers.push(column.header());
    }

    let mut csv = headers.join(",");
    csv.push('\n');

    for row in summary.rows() {
        let mut cells: Vec<String> = Vec::with_capacity(headers.len());
        cells.push(row.name.clone());
        cells.push(
            row.kind
                .map(|k| k.label().to_string())
                .unwrap_or_default(),
        );
        for column in &ALL_COLUMNS[1..] {
            let cell = match row.numeric(column.key) {
                Some(v) => {
                    let v = if column.is_kilopascal() { pa_to_kpa(v) } else { v };
                    format_g3(v)
                }
                None => String::new(),
            };
            cells.push(cell);
        }
        csv.push_str(&cells.join(","));
        csv.push('\n');
    }

    csv
}

/// Write the summary CSV to `path`.
pub fn write_csv(summary: &Summary, path: &Path) -> ReportResult<()> {
    std::fs::write(path, to_csv_string(summary))?;
    Ok(())
}
