use crate::core::sort::{SortDirection, SortState};
use crate::errors::{AppError, AppResult};
use crate::models::lead::format_timestamp;
use crate::models::{Lead, LeadField, LeadPatch, LeadStatus, NewLead};
use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

/// Page request for the lead grid.
#[derive(Debug, Clone, Copy)]
pub struct LeadQuery {
    pub sort: SortState,
    pub page: usize,
    pub page_size: usize,
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_ts(idx: usize, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(idx, AppError::InvalidTimestamp(raw.to_string())))
}

pub fn map_row(row: &Row) -> Result<Lead> {
    let status_str: String = row.get("status")?;
    let status = LeadStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(5, AppError::InvalidStatus(status_str.clone())))?;

    let created_raw: String = row.get("created_at")?;
    let updated_raw: String = row.get("updated_at")?;

    Ok(Lead {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        company: row.get("company")?,
        status,
        created_at: parse_ts(6, &created_raw)?,
        updated_at: parse_ts(7, &updated_raw)?,
    })
}

/// Insert a new lead with status `pending`; id and timestamps are generated here.
pub fn insert_lead(conn: &Connection, new: &NewLead, now: DateTime<Utc>) -> AppResult<Lead> {
    let lead = Lead {
        id: uuid::Uuid::new_v4().to_string(),
        name: new.name.clone(),
        email: new.email.clone(),
        phone: new.phone.clone(),
        company: new.company.clone().filter(|c| !c.trim().is_empty()),
        status: LeadStatus::Pending,
        created_at: now,
        updated_at: now,
    };

    let ts = format_timestamp(&now);
    conn.execute(
        "INSERT INTO leads (id, name, email, phone, company, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            lead.id,
            lead.name,
            lead.email,
            lead.phone,
            lead.company,
            lead.status.to_db_str(),
            ts,
            ts,
        ],
    )?;

    Ok(lead)
}

/// Apply a partial update. Returns false when no lead has this id.
pub fn update_lead(
    conn: &Connection,
    id: &str,
    patch: &LeadPatch,
    now: DateTime<Utc>,
) -> AppResult<bool> {
    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(name) = &patch.name {
        sets.push("name = ?");
        values.push(Value::Text(name.clone()));
    }
    if let Some(email) = &patch.email {
        sets.push("email = ?");
        values.push(Value::Text(email.clone()));
    }
    if let Some(phone) = &patch.phone {
        sets.push("phone = ?");
        values.push(Value::Text(phone.clone()));
    }
    if let Some(company) = &patch.company {
        sets.push("company = ?");
        values.push(match company {
            Some(c) => Value::Text(c.clone()),
            None => Value::Null,
        });
    }
    if let Some(status) = patch.status {
        sets.push("status = ?");
        values.push(Value::Text(status.to_db_str().to_string()));
    }

    // updated_at never moves before created_at
    sets.push("updated_at = MAX(?, created_at)");
    values.push(Value::Text(format_timestamp(&now)));
    values.push(Value::Text(id.to_string()));

    let sql = format!("UPDATE leads SET {} WHERE id = ?", sets.join(", "));
    let changed = conn.execute(&sql, params_from_iter(values))?;
    Ok(changed > 0)
}

pub fn find_lead(conn: &Connection, id: &str) -> AppResult<Option<Lead>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM leads WHERE id = ?1")?;
    let lead = stmt.query_row([id], map_row).optional()?;
    Ok(lead)
}

pub fn count_leads(conn: &Connection) -> AppResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM leads", [], |row| row.get(0))?;
    Ok(usize::try_from(n).unwrap_or(0))
}

fn order_clause(sort: &SortState) -> String {
    let Some((column, direction)) = sort.active() else {
        return "rowid ASC".to_string();
    };

    let col = column.as_str();
    let collate = if column.is_timestamp() || column == LeadField::Status {
        ""
    } else {
        " COLLATE NOCASE"
    };
    // NULLs (company only) sort last ascending, first descending
    let nulls = match direction {
        SortDirection::Asc => format!("{col} IS NULL ASC"),
        SortDirection::Desc => format!("{col} IS NULL DESC"),
    };

    format!(
        "{nulls}, {col}{collate} {dir}, rowid ASC",
        dir = direction.as_sql()
    )
}

/// Load one sorted page plus the total number of leads.
pub fn load_leads_page(conn: &Connection, query: &LeadQuery) -> AppResult<(Vec<Lead>, usize)> {
    let total = count_leads(conn)?;
    let page_size = query.page_size.max(1);
    let offset = query.page.saturating_sub(1) * page_size;

    let sql = format!(
        "SELECT * FROM leads ORDER BY {} LIMIT ?1 OFFSET ?2",
        order_clause(&query.sort)
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![page_size as i64, offset as i64], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok((out, total))
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}

/// Delete the given leads; returns how many rows were removed.
pub fn delete_leads(conn: &Connection, ids: &[String]) -> AppResult<usize> {
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!("DELETE FROM leads WHERE id IN ({})", placeholders(ids.len()));
    let removed = conn.execute(&sql, params_from_iter(ids.iter()))?;
    Ok(removed)
}

/// Set the same status on every given lead.
pub fn update_status(
    conn: &Connection,
    ids: &[String],
    status: LeadStatus,
    now: DateTime<Utc>,
) -> AppResult<usize> {
    if ids.is_empty() {
        return Ok(0);
    }

    let mut values: Vec<Value> = vec![
        Value::Text(status.to_db_str().to_string()),
        Value::Text(format_timestamp(&now)),
    ];
    values.extend(ids.iter().map(|id| Value::Text(id.clone())));

    let sql = format!(
        "UPDATE leads SET status = ?, updated_at = MAX(?, created_at) WHERE id IN ({})",
        placeholders(ids.len())
    );
    let changed = conn.execute(&sql, params_from_iter(values))?;
    Ok(changed)
}
