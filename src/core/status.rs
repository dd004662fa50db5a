use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::update_status;
use crate::errors::{AppError, AppResult};
use crate::models::LeadStatus;
use chrono::Utc;

/// Bulk status change from the selection menu.
pub struct StatusLogic;

impl StatusLogic {
    pub fn apply(pool: &mut DbPool, ids: &[String], status: LeadStatus) -> AppResult<usize> {
        let tx = pool.conn.transaction()?;
        let changed = update_status(&tx, ids, status, Utc::now())?;
        if changed == 0 {
            return Err(AppError::LeadNotFound(ids.join(", ")));
        }
        audit(
            &tx,
            "status",
            status.to_db_str(),
            &format!("Status set to {} on {} lead(s)", status.label(), changed),
        );
        tx.commit()?;
        Ok(changed)
    }
}
