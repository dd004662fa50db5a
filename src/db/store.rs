//! Narrow persistence interface used by the grid controller and the importer.

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_lead, update_lead};
use crate::errors::AppResult;
use crate::models::{Lead, LeadPatch, NewLead};
use chrono::Utc;

pub trait LeadStore {
    /// Partial update. `Ok(false)` is a recoverable rejection (e.g. unknown id),
    /// `Err` a failure of the store itself.
    fn update_record(&mut self, id: &str, patch: &LeadPatch) -> AppResult<bool>;

    /// Create one lead with status `pending` and fresh timestamps.
    fn create_record(&mut self, lead: &NewLead) -> AppResult<Lead>;
}

impl LeadStore for DbPool {
    fn update_record(&mut self, id: &str, patch: &LeadPatch) -> AppResult<bool> {
        let updated = update_lead(&self.conn, id, patch, Utc::now())?;
        if updated {
            audit(&self.conn, "edit", id, &describe_patch(patch));
        }
        Ok(updated)
    }

    fn create_record(&mut self, lead: &NewLead) -> AppResult<Lead> {
        let created = insert_lead(&self.conn, lead, Utc::now())?;
        audit(
            &self.conn,
            "add",
            &created.id,
            &format!("Lead created: {} <{}>", created.name, created.email),
        );
        Ok(created)
    }
}

fn describe_patch(patch: &LeadPatch) -> String {
    let mut parts = Vec::new();
    if let Some(v) = &patch.name {
        parts.push(format!("name='{v}'"));
    }
    if let Some(v) = &patch.email {
        parts.push(format!("email='{v}'"));
    }
    if let Some(v) = &patch.phone {
        parts.push(format!("phone='{v}'"));
    }
    if let Some(v) = &patch.company {
        parts.push(format!("company='{}'", v.as_deref().unwrap_or("")));
    }
    if let Some(v) = patch.status {
        parts.push(format!("status='{v}'"));
    }
    format!("Updated {}", parts.join(", "))
}
