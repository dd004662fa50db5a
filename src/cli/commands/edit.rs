use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::{CommitOutcome, GridController};
use crate::db::pool::DbPool;
use crate::db::queries::find_lead;
use crate::errors::{AppError, AppResult};
use crate::models::LeadField;
use crate::ui::messages::success;
use crate::ui::notifier::ConsoleNotifier;

/// One inline edit, committed the same way the grid does it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Edit { id, field, value } = cmd else {
        return Ok(());
    };

    let field =
        LeadField::from_name(field).ok_or_else(|| AppError::InvalidField(field.clone()))?;
    if !field.is_editable() {
        return Err(AppError::NotEditable(field.to_string()));
    }

    let mut pool = DbPool::open(&cfg.database)?;
    let current =
        find_lead(&pool.conn, id)?.ok_or_else(|| AppError::LeadNotFound(id.clone()))?;

    if current.field_value(field) == *value {
        success(format!("Nothing to change: {} already holds that value.", field));
        return Ok(());
    }

    let controller = GridController::new();
    match controller.commit_edit(&mut pool, &ConsoleNotifier, id, field, value) {
        CommitOutcome::Applied(_) => {
            success(format!("Lead {} updated: {} = '{}'", id, field, value));
            Ok(())
        }
        CommitOutcome::RevertRequired => {
            Err(AppError::Other(format!("lead {} was not updated", id)))
        }
    }
}
