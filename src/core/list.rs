use crate::core::grid::EditingCursor;
use crate::core::pagination::Pagination;
use crate::db::pool::DbPool;
use crate::db::queries::{LeadQuery, load_leads_page};
use crate::errors::AppResult;
use crate::models::{Lead, LeadField};
use crate::utils::format_datetime;
use crate::utils::table::{Column, Table};

/// One fetched page of the grid.
#[derive(Debug, Clone)]
pub struct LeadPage {
    pub leads: Vec<Lead>,
    pub pagination: Pagination,
}

pub struct ListLogic;

impl ListLogic {
    /// Fetch a page; an out-of-range page is clamped and fetched again.
    pub fn fetch(pool: &mut DbPool, query: &LeadQuery) -> AppResult<LeadPage> {
        let (mut leads, total) = load_leads_page(&pool.conn, query)?;
        let pagination = Pagination::new(query.page, query.page_size, total);

        if pagination.page != query.page {
            let clamped = LeadQuery {
                page: pagination.page,
                ..*query
            };
            leads = load_leads_page(&pool.conn, &clamped)?.0;
        }

        Ok(LeadPage { leads, pagination })
    }
}

fn cell_text(lead: &Lead, field: LeadField) -> String {
    match field {
        LeadField::CreatedAt => format_datetime(&lead.created_at),
        LeadField::UpdatedAt => format_datetime(&lead.updated_at),
        LeadField::Status => lead.status.label().to_string(),
        other => lead.field_value(other),
    }
}

/// Render leads as a table. Row numbers start after `offset`.
/// The cell under `editing` shows the draft value between brackets.
pub fn render_leads(leads: &[Lead], offset: usize, editing: Option<(&EditingCursor, &str)>) -> String {
    let mut columns = vec![Column::new("#", 4)];
    columns.extend(LeadField::ALL.iter().map(|f| Column::new(f.label(), 32)));
    columns.push(Column::new("ID", 36));

    let mut table = Table::new(columns);

    for (i, lead) in leads.iter().enumerate() {
        let mut row = vec![(offset + i + 1).to_string()];
        for field in LeadField::ALL {
            let text = match editing {
                Some((cursor, draft)) if cursor.row_id == lead.id && cursor.field == field => {
                    format!("[{draft}]")
                }
                _ => cell_text(lead, field),
            };
            row.push(text);
        }
        row.push(lead.id.clone());
        table.add_row(row);
    }

    table.render()
}
