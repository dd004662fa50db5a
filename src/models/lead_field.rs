use serde::{Deserialize, Serialize};

/// Displayable lead columns, in grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadField {
    Name,
    Company,
    Phone,
    Email,
    Status,
    UpdatedAt,
    CreatedAt,
}

/// Fields that are shown but can never be edited inline.
pub const NON_EDITABLE_FIELDS: [LeadField; 2] = [LeadField::CreatedAt, LeadField::UpdatedAt];

impl LeadField {
    pub const ALL: [LeadField; 7] = [
        LeadField::Name,
        LeadField::Company,
        LeadField::Phone,
        LeadField::Email,
        LeadField::Status,
        LeadField::UpdatedAt,
        LeadField::CreatedAt,
    ];

    /// Column name, also used as DB column.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Company => "company",
            LeadField::Phone => "phone",
            LeadField::Email => "email",
            LeadField::Status => "status",
            LeadField::UpdatedAt => "updated_at",
            LeadField::CreatedAt => "created_at",
        }
    }

    /// Column header shown in tables.
    pub fn label(&self) -> &'static str {
        match self {
            LeadField::Name => "Name",
            LeadField::Company => "Company",
            LeadField::Phone => "Phone",
            LeadField::Email => "Email",
            LeadField::Status => "Status",
            LeadField::UpdatedAt => "Last Updated",
            LeadField::CreatedAt => "Created At",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        LeadField::ALL
            .into_iter()
            .find(|f| f.as_str() == normalized)
    }

    pub fn is_editable(&self) -> bool {
        !NON_EDITABLE_FIELDS.contains(self)
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, LeadField::CreatedAt | LeadField::UpdatedAt)
    }
}

/// Ordered editable fields: every displayable field minus `non_editable`.
pub fn editable_fields(non_editable: &[LeadField]) -> Vec<LeadField> {
    LeadField::ALL
        .into_iter()
        .filter(|f| !non_editable.contains(f))
        .collect()
}

impl std::fmt::Display for LeadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
