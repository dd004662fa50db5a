use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::LeadStatus;
use crate::ui::messages::{plural, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { status, ids } = cmd {
        let status =
            LeadStatus::from_code(status).ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let mut pool = DbPool::open(&cfg.database)?;
        let changed = StatusLogic::apply(&mut pool, ids, status)?;
        success(format!(
            "Status set to '{}' on {}.",
            status.label(),
            plural(changed, "lead")
        ));
    }
    Ok(())
}
