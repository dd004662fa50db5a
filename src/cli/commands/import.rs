use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, header, info, plural};
use crate::ui::notifier::ConsoleNotifier;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, dry_run, yes } = cmd {
        let path = expand_tilde(file);
        let rows = ImportLogic::load(&path, &ConsoleNotifier)?;

        header(format!("{} found in {}", plural(rows.len(), "lead"), path.display()));
        print!("{}", ImportLogic::preview(&rows));

        if *dry_run {
            info("Dry run: nothing imported.");
            return Ok(());
        }

        if !*yes && !confirm(&format!("Import {}?", plural(rows.len(), "lead"))) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::open(&cfg.database)?;
        let created = ImportLogic::create_all(&mut pool, &ConsoleNotifier, &rows)?;
        audit(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!("Imported {}", plural(created, "lead")),
        );
    }
    Ok(())
}
