use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One AI voice call, as exported by the call provider.
/// Only `started_at` is mandatory; numeric fields default to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    #[serde(default)]
    pub id: String,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub duration_minutes: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ended_reason: Option<String>,
}

impl CallRecord {
    pub fn new(id: &str, started_at: DateTime<Utc>, duration_minutes: f64, cost: f64) -> Self {
        Self {
            id: id.to_string(),
            started_at,
            duration_minutes,
            cost,
            customer_name: None,
            customer_number: None,
            status: None,
            ended_reason: None,
        }
    }

    /// Load a JSON array of call records.
    pub fn load_json(path: &Path) -> AppResult<Vec<CallRecord>> {
        let content = fs::read_to_string(path)?;
        let calls: Vec<CallRecord> = serde_json::from_str(&content)?;
        Ok(calls)
    }
}
