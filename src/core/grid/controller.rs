use super::navigation::{Direction, EditingCursor, step};
use crate::db::store::LeadStore;
use crate::errors::AppError;
use crate::models::lead_field::{NON_EDITABLE_FIELDS, editable_fields};
use crate::models::{Lead, LeadField, LeadPatch};
use crate::ui::notifier::{Notifier, Severity};
use std::str::FromStr;

/// Keys the grid editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKey {
    Escape,
    Enter,
    Tab,
    ShiftTab,
}

impl FromStr for GridKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "esc" | "escape" => Ok(GridKey::Escape),
            "enter" | "return" => Ok(GridKey::Enter),
            "tab" => Ok(GridKey::Tab),
            "shift-tab" | "shift+tab" | "backtab" => Ok(GridKey::ShiftTab),
            other => Err(AppError::InvalidKey(other.to_string())),
        }
    }
}

/// A commit the store accepted, for the caller's optimistic update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEdit {
    pub row_id: String,
    pub patch: LeadPatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied(AppliedEdit),
    /// The caller must re-fetch authoritative data to undo local changes.
    RevertRequired,
}

impl CommitOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommitOutcome::Applied(_))
    }
}

/// What an editing event needs from its host: the displayed rows (sorted and
/// filtered, as on screen), the store and the notification sink.
pub struct EditEnv<'a> {
    pub rows: &'a [Lead],
    pub store: &'a mut dyn LeadStore,
    pub notifier: &'a dyn Notifier,
}

/// Owns the editing cursor of one grid.
///
/// All methods take `&mut self`, so a commit for the cursor is always
/// finished before the next event is handled.
#[derive(Debug, Clone)]
pub struct GridController {
    cursor: Option<EditingCursor>,
    editable: Vec<LeadField>,
}

impl Default for GridController {
    fn default() -> Self {
        Self::new()
    }
}

impl GridController {
    pub fn new() -> Self {
        Self::with_non_editable(&NON_EDITABLE_FIELDS)
    }

    pub fn with_non_editable(non_editable: &[LeadField]) -> Self {
        Self {
            cursor: None,
            editable: editable_fields(non_editable),
        }
    }

    pub fn cursor(&self) -> Option<&EditingCursor> {
        self.cursor.as_ref()
    }

    pub fn editable_fields(&self) -> &[LeadField] {
        &self.editable
    }

    pub fn is_editing(&self, row_id: &str, field: LeadField) -> bool {
        self.cursor
            .as_ref()
            .is_some_and(|c| c.row_id == row_id && c.field == field)
    }

    /// Open a cell for editing. A missing part, or a non-editable field,
    /// closes the editor instead.
    pub fn start_edit(&mut self, row_id: Option<&str>, field: Option<LeadField>) {
        self.cursor = match (row_id, field) {
            (Some(id), Some(f)) if self.editable.contains(&f) => Some(EditingCursor::new(id, f)),
            _ => None,
        };
    }

    pub fn clear(&mut self) {
        self.cursor = None;
    }

    /// Persist one cell. Failures are notified and reported as
    /// `RevertRequired`; the cursor is never touched here.
    pub fn commit_edit(
        &self,
        store: &mut dyn LeadStore,
        notifier: &dyn Notifier,
        row_id: &str,
        field: LeadField,
        value: &str,
    ) -> CommitOutcome {
        let patch = match LeadPatch::from_field(field, value) {
            Ok(p) => p,
            Err(e) => {
                notifier.notify("Error updating lead", &e.to_string(), Severity::Destructive);
                return CommitOutcome::RevertRequired;
            }
        };

        match store.update_record(row_id, &patch) {
            Ok(true) => CommitOutcome::Applied(AppliedEdit {
                row_id: row_id.to_string(),
                patch,
            }),
            Ok(false) => {
                notifier.notify(
                    "Error",
                    "Failed to update lead. Please try again.",
                    Severity::Destructive,
                );
                CommitOutcome::RevertRequired
            }
            Err(e) => {
                notifier.notify("Error updating lead", &e.to_string(), Severity::Destructive);
                CommitOutcome::RevertRequired
            }
        }
    }

    /// Commit only when the draft differs from what the row currently holds.
    /// A row that vanished from the display counts as changed.
    fn commit_if_changed(
        &self,
        cell: &EditingCursor,
        draft: &str,
        env: &mut EditEnv<'_>,
    ) -> Option<CommitOutcome> {
        let persisted = env
            .rows
            .iter()
            .find(|l| l.id == cell.row_id)
            .map(|l| l.field_value(cell.field));

        if persisted.as_deref() == Some(draft) {
            return None;
        }

        Some(self.commit_edit(env.store, env.notifier, &cell.row_id, cell.field, draft))
    }

    /// Keyboard handling while a cell is open. Returns the commit made, if any.
    ///
    /// Tab and Shift+Tab move even when the commit failed, so an edit that
    /// the store rejected is left behind (after the revert notification).
    pub fn handle_key(
        &mut self,
        key: GridKey,
        draft: &str,
        env: &mut EditEnv<'_>,
    ) -> Option<CommitOutcome> {
        let current = self.cursor.clone()?;

        match key {
            GridKey::Escape => {
                self.cursor = None;
                None
            }
            GridKey::Enter => {
                let outcome = self.commit_if_changed(&current, draft, env);
                if !matches!(outcome, Some(CommitOutcome::RevertRequired)) {
                    self.cursor = None;
                }
                outcome
            }
            GridKey::Tab | GridKey::ShiftTab => {
                let outcome = self.commit_if_changed(&current, draft, env);
                let direction = if key == GridKey::Tab {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                let ids: Vec<&str> = env.rows.iter().map(|l| l.id.as_str()).collect();
                self.cursor = step(&ids, &self.editable, &current, direction);
                outcome
            }
        }
    }

    /// Focus left `cell` for a reason other than our own key handling.
    ///
    /// A blur for a cell that is no longer the cursor (it was just moved or
    /// closed by `handle_key`) is ignored.
    pub fn handle_blur(
        &mut self,
        cell: &EditingCursor,
        draft: &str,
        env: &mut EditEnv<'_>,
    ) -> Option<CommitOutcome> {
        if self.cursor.as_ref() != Some(cell) {
            return None;
        }

        let outcome = self.commit_if_changed(cell, draft, env);
        self.cursor = None;
        outcome
    }
}
