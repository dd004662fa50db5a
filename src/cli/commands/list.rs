use crate::cli::parser::Commands;
use crate::config::{Config, PreferenceStore};
use crate::core::list::{ListLogic, render_leads};
use crate::core::pagination::validate_page_size;
use crate::core::sort::{SortDirection, SortState};
use crate::db::pool::DbPool;
use crate::db::queries::LeadQuery;
use crate::errors::{AppError, AppResult};
use crate::models::LeadField;
use crate::ui::messages::{header, info};

/// Build the query shared by `list` and `grid`: explicit flags win over
/// the stored preferences.
pub fn resolve_query(
    cfg: &Config,
    page: usize,
    page_size: Option<usize>,
    sort: Option<&str>,
    desc: bool,
) -> AppResult<LeadQuery> {
    let page_size = match page_size {
        Some(size) => validate_page_size(size)?,
        None => cfg.load_page_size(),
    };

    let sort = match sort {
        Some(name) => {
            let field =
                LeadField::from_name(name).ok_or_else(|| AppError::InvalidField(name.to_string()))?;
            let direction = if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            SortState::new(field, direction)
        }
        None => cfg.load_sort(),
    };

    Ok(LeadQuery {
        sort,
        page: page.max(1),
        page_size,
    })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        page,
        page_size,
        sort,
        desc,
    } = cmd
    {
        let query = resolve_query(cfg, *page, *page_size, sort.as_deref(), *desc)?;
        let mut pool = DbPool::open(&cfg.database)?;
        let result = ListLogic::fetch(&mut pool, &query)?;

        if result.leads.is_empty() {
            info("No leads found.");
            return Ok(());
        }

        header("Leads");
        print!(
            "{}",
            render_leads(&result.leads, result.pagination.offset(), None)
        );
        println!("\n{}", result.pagination.summary());
    }
    Ok(())
}
