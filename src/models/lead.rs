use super::{lead_field::LeadField, lead_status::LeadStatus};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A contact tracked through the status pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub id: String,              // ⇔ leads.id (TEXT, UUID v4)
    pub name: String,            // ⇔ leads.name
    pub email: String,           // ⇔ leads.email
    pub phone: String,           // ⇔ leads.phone
    pub company: Option<String>, // ⇔ leads.company (NULL allowed)
    pub status: LeadStatus,      // ⇔ leads.status
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a lead. Status and timestamps are set by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
}

/// Partial update of a lead. `company: Some(None)` clears the company.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<Option<String>>,
    pub status: Option<LeadStatus>,
}

/// Format used for timestamps in the DB and in outputs.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Lead {
    /// Textual value of a cell, as shown in the grid editor.
    /// A missing company is the empty string.
    pub fn field_value(&self, field: LeadField) -> String {
        match field {
            LeadField::Name => self.name.clone(),
            LeadField::Company => self.company.clone().unwrap_or_default(),
            LeadField::Phone => self.phone.clone(),
            LeadField::Email => self.email.clone(),
            LeadField::Status => self.status.to_db_str().to_string(),
            LeadField::UpdatedAt => format_timestamp(&self.updated_at),
            LeadField::CreatedAt => format_timestamp(&self.created_at),
        }
    }

    /// Apply a patch locally (optimistic update). `updated_at` never goes
    /// below `created_at`.
    pub fn apply(&mut self, patch: &LeadPatch, now: DateTime<Utc>) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
        }
        if let Some(company) = &patch.company {
            self.company = company.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now.max(self.created_at);
    }
}

impl LeadPatch {
    /// Build a single-field patch from the raw text typed in a cell.
    pub fn from_field(field: LeadField, value: &str) -> AppResult<Self> {
        let mut patch = LeadPatch::default();
        match field {
            LeadField::Name => patch.name = Some(value.to_string()),
            LeadField::Email => patch.email = Some(value.to_string()),
            LeadField::Phone => patch.phone = Some(value.to_string()),
            LeadField::Company => {
                let trimmed = value.trim();
                patch.company = Some(if trimmed.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                });
            }
            LeadField::Status => {
                let status = LeadStatus::from_code(value)
                    .ok_or_else(|| AppError::InvalidStatus(value.to_string()))?;
                patch.status = Some(status);
            }
            LeadField::CreatedAt | LeadField::UpdatedAt => {
                return Err(AppError::NotEditable(field.as_str().to_string()));
            }
        }
        Ok(patch)
    }

    pub fn status_only(status: LeadStatus) -> Self {
        LeadPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.status.is_none()
    }
}
