use crate::cli::commands::list::resolve_query;
use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, PreferenceStore};
use crate::core::grid::session::GridSession;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::ui::notifier::ConsoleNotifier;
use std::io;

/// Run a grid session on stdin. The final sort is remembered unless in
/// test mode.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid { page, page_size } = &cli.command {
        let query = resolve_query(cfg, *page, *page_size, None, false)?;
        let mut pool = DbPool::open(&cfg.database)?;
        let notifier = ConsoleNotifier;

        let final_sort = {
            let mut session = GridSession::open(&mut pool, &notifier, query)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session.run(stdin.lock(), &mut stdout)?;
            session.query().sort
        };

        if !cli.test && final_sort != cfg.load_sort() {
            let mut prefs = cfg.clone();
            if let Err(e) = prefs.save_sort(final_sort) {
                warning(format!("Could not save grid preferences: {}", e));
            }
        }
    }
    Ok(())
}
