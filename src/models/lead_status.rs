use serde::{Deserialize, Serialize};

/// Pipeline status of a lead (pending → in-progress → completed/failed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl LeadStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "pending",
            LeadStatus::InProgress => "in-progress",
            LeadStatus::Completed => "completed",
            LeadStatus::Failed => "failed",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(LeadStatus::Pending),
            "in-progress" => Some(LeadStatus::InProgress),
            "completed" => Some(LeadStatus::Completed),
            "failed" => Some(LeadStatus::Failed),
            _ => None,
        }
    }

    /// Helper: parse user input, tolerant on case and on `_`/space separators
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_lowercase().replace(['_', ' '], "-");
        LeadStatus::from_db_str(&normalized)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "Pending",
            LeadStatus::InProgress => "In Progress",
            LeadStatus::Completed => "Completed",
            LeadStatus::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_db_str())
    }
}
