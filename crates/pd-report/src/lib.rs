//! pd-report: summary table and CSV export for evaluated networks.

pub mod columns;
pub mod export;
pub mod format;
pub mod summary;

pub use columns::{ALL_COLUMNS, Column, TYPE_COLUMN};
pub use export::{to_csv_string, write_csv};
pub use summary::{Summary, SummaryRow};

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
