use crate::models::{Lead, LeadField};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Current grid ordering. Both parts absent means "as fetched".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<LeadField>,
    pub direction: Option<SortDirection>,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: Some(LeadField::CreatedAt),
            direction: Some(SortDirection::Desc),
        }
    }
}

impl SortState {
    pub fn new(column: LeadField, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction: Some(direction),
        }
    }

    pub fn unsorted() -> Self {
        Self {
            column: None,
            direction: None,
        }
    }

    /// Header click: same column flips direction, another column starts ascending.
    pub fn toggle(&mut self, column: LeadField) {
        let direction = if self.column == Some(column) {
            match self.direction {
                Some(SortDirection::Asc) => SortDirection::Desc,
                _ => SortDirection::Asc,
            }
        } else {
            SortDirection::Asc
        };
        self.column = Some(column);
        self.direction = Some(direction);
    }

    pub fn active(&self) -> Option<(LeadField, SortDirection)> {
        match (self.column, self.direction) {
            (Some(c), Some(d)) => Some((c, d)),
            _ => None,
        }
    }

    /// Stable in-memory sort of a page of leads.
    pub fn sort_leads(&self, leads: &mut [Lead]) {
        let Some((column, direction)) = self.active() else {
            return;
        };

        leads.sort_by(|a, b| {
            let ord = compare_ascending(a, b, column);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Ascending order for one column. A missing company sorts after any value.
fn compare_ascending(a: &Lead, b: &Lead, column: LeadField) -> Ordering {
    match column {
        LeadField::CreatedAt => a.created_at.cmp(&b.created_at),
        LeadField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        LeadField::Company => match (&a.company, &b.company) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => compare_text(x, y),
        },
        other => compare_text(&a.field_value(other), &b.field_value(other)),
    }
}
