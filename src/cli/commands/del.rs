use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, plural, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ids, force } = cmd {
        if !*force {
            let prompt = format!(
                "Delete {}? This action is irreversible.",
                plural(ids.len(), "lead")
            );
            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut pool = DbPool::open(&cfg.database)?;
        let removed = DeleteLogic::apply(&mut pool, ids)?;
        success(format!("{} deleted.", plural(removed, "lead")));
    }
    Ok(())
}
