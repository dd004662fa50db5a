//! CSV lead import: header alias matching and row parsing.

mod columns;
mod parser;

pub use columns::{ColumnBinding, ColumnDescriptor, ImportField, default_columns, resolve_columns};
pub use parser::{ImportRow, normalize_header, parse_csv, split_lines, tokenize_row};

use thiserror::Error;

/// Terminal failures of one import attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("CSV file must contain headers and at least one row")]
    EmptyOrMissingData,

    #[error("Could not find required columns: {}", .0.join(", "))]
    MissingRequiredColumns(Vec<String>),

    #[error("No valid data rows found in CSV")]
    NoValidRows,

    #[error("Column '{0}' cannot be optional")]
    OptionalLeadColumn(String),
}
