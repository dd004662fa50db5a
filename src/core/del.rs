use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::delete_leads;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the given leads. Fails only when none of them exists.
    pub fn apply(pool: &mut DbPool, ids: &[String]) -> AppResult<usize> {
        let tx = pool.conn.transaction()?;
        let removed = delete_leads(&tx, ids)?;
        if removed == 0 {
            return Err(AppError::LeadNotFound(ids.join(", ")));
        }
        for id in ids {
            audit(&tx, "del", id, "Lead deleted");
        }
        tx.commit()?;

        if removed < ids.len() {
            warning(format!(
                "{} of {} requested leads did not exist",
                ids.len() - removed,
                ids.len()
            ));
        }
        info(format!("Deleted {} lead(s)", removed));
        Ok(removed)
    }
}
