use crate::db::store::LeadStore;
use crate::errors::{AppError, AppResult};
use crate::import::{ImportRow, default_columns, parse_csv};
use crate::models::NewLead;
use crate::ui::messages::plural;
use crate::ui::notifier::{Notifier, Severity};
use crate::utils::table::{Column, Table};
use std::fs;
use std::path::Path;

/// Largest CSV accepted for import (5 MB).
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
pub const FILE_EXTENSIONS: [&str; 1] = ["csv"];

/// High-level business logic for the `import` command.
pub struct ImportLogic;

impl ImportLogic {
    /// Read and parse a CSV file with the default lead columns.
    pub fn read_rows(path: &Path) -> AppResult<Vec<ImportRow>> {
        let ext_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| FILE_EXTENSIONS.contains(&e.to_lowercase().as_str()));
        if !ext_ok {
            return Err(AppError::Validation(format!(
                "'{}' is not a .csv file",
                path.display()
            )));
        }

        let size = fs::metadata(path)?.len();
        if size > MAX_FILE_SIZE {
            return Err(AppError::Validation(format!(
                "CSV file is too large ({size} bytes, max {MAX_FILE_SIZE})"
            )));
        }

        let text = fs::read_to_string(path)?;
        Ok(parse_csv(&text, &default_columns())?)
    }

    /// [`read_rows`](Self::read_rows), reporting a failure through the
    /// notifier before handing it back.
    pub fn load(path: &Path, notifier: &dyn Notifier) -> AppResult<Vec<ImportRow>> {
        Self::read_rows(path).inspect_err(|e| {
            let description = match e {
                AppError::Import(inner) => inner.to_string(),
                other => other.to_string(),
            };
            notifier.notify("Error parsing CSV", &description, Severity::Destructive);
        })
    }

    /// Preview table shown before confirming the import.
    pub fn preview(rows: &[ImportRow]) -> String {
        let mut table = Table::new(vec![
            Column::new("#", 5),
            Column::new("Name", 30),
            Column::new("Email", 40),
            Column::new("Phone", 20),
            Column::new("Company", 30),
        ]);
        for (i, r) in rows.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                r.name.clone(),
                r.email.clone(),
                r.phone.clone(),
                r.company.clone().unwrap_or_default(),
            ]);
        }
        table.render()
    }

    /// Create the rows one at a time, in file order.
    ///
    /// The first failure stops the loop: leads already created stay, the
    /// rest are not attempted.
    pub fn create_all(
        store: &mut dyn LeadStore,
        notifier: &dyn Notifier,
        rows: &[ImportRow],
    ) -> AppResult<usize> {
        let mut created = 0;

        for row in rows {
            let new = NewLead {
                name: row.name.clone(),
                email: row.email.clone(),
                phone: row.phone.clone(),
                company: row.company.clone(),
            };

            if let Err(e) = store.create_record(&new) {
                notifier.notify("Error importing leads", &e.to_string(), Severity::Destructive);
                return Err(AppError::ImportAborted {
                    created,
                    reason: e.to_string(),
                });
            }
            created += 1;
        }

        notifier.notify(
            "Success",
            &format!("Successfully imported {}.", plural(created, "lead")),
            Severity::Success,
        );
        Ok(created)
    }
}
