//! Line-driven grid editing: the terminal stand-in for clicking cells and
//! pressing keys in a spreadsheet-like view.

use super::controller::{CommitOutcome, EditEnv, GridController, GridKey};
use super::navigation::EditingCursor;
use crate::core::list::{ListLogic, LeadPage, render_leads};
use crate::db::pool::DbPool;
use crate::db::queries::LeadQuery;
use crate::errors::{AppError, AppResult};
use crate::models::LeadField;
use crate::ui::notifier::Notifier;
use chrono::Utc;
use std::io::{BufRead, Write};

pub const SESSION_HELP: &str = "\
Commands:
  edit <row#|id> <field>   open a cell (fields: name, company, phone, email, status)
  type <text>              replace the value being edited
  tab | shift-tab          save and move to the next / previous cell
  enter                    save and close the editor
  esc                      close the editor without saving
  blur                     leave the cell (saves only if changed)
  sort <field>             sort by a column (again to flip direction)
  next | prev              change page
  show                     print the grid
  refresh                  reload the page from the database
  quit                     leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Edit { row: String, field: LeadField },
    Type(String),
    Key(GridKey),
    Blur,
    Sort(LeadField),
    NextPage,
    PrevPage,
    Show,
    Refresh,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        let cmd = match word.to_lowercase().as_str() {
            "edit" => {
                let mut parts = rest.split_whitespace();
                let row = parts
                    .next()
                    .ok_or_else(|| AppError::Other("usage: edit <row#|id> <field>".into()))?;
                let field_name = parts
                    .next()
                    .ok_or_else(|| AppError::Other("usage: edit <row#|id> <field>".into()))?;
                let field = LeadField::from_name(field_name)
                    .ok_or_else(|| AppError::InvalidField(field_name.to_string()))?;
                SessionCommand::Edit {
                    row: row.to_string(),
                    field,
                }
            }
            // the raw remainder, so inner spaces survive
            "type" => SessionCommand::Type(rest.to_string()),
            "blur" => SessionCommand::Blur,
            "sort" => {
                let field = LeadField::from_name(rest)
                    .ok_or_else(|| AppError::InvalidField(rest.to_string()))?;
                SessionCommand::Sort(field)
            }
            "next" => SessionCommand::NextPage,
            "prev" => SessionCommand::PrevPage,
            "show" => SessionCommand::Show,
            "refresh" => SessionCommand::Refresh,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => SessionCommand::Key(other.parse()?),
        };

        Ok(Some(cmd))
    }
}

pub struct GridSession<'a> {
    pool: &'a mut DbPool,
    notifier: &'a dyn Notifier,
    controller: GridController,
    query: LeadQuery,
    page: LeadPage,
    draft: String,
}

impl<'a> GridSession<'a> {
    pub fn open(pool: &'a mut DbPool, notifier: &'a dyn Notifier, query: LeadQuery) -> AppResult<Self> {
        let page = ListLogic::fetch(pool, &query)?;
        let query = LeadQuery {
            page: page.pagination.page,
            ..query
        };
        Ok(Self {
            pool,
            notifier,
            controller: GridController::new(),
            query,
            page,
            draft: String::new(),
        })
    }

    pub fn query(&self) -> &LeadQuery {
        &self.query
    }

    pub fn controller(&self) -> &GridController {
        &self.controller
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Re-read the current page: the authoritative state after a failed commit.
    pub fn refresh(&mut self) -> AppResult<()> {
        self.page = ListLogic::fetch(self.pool, &self.query)?;
        self.query.page = self.page.pagination.page;
        Ok(())
    }

    /// Load the draft from the cell under the cursor (empty when closed).
    fn sync_draft(&mut self) {
        self.draft = match self.controller.cursor() {
            Some(c) => self
                .page
                .leads
                .iter()
                .find(|l| l.id == c.row_id)
                .map(|l| l.field_value(c.field))
                .unwrap_or_default(),
            None => String::new(),
        };
    }

    /// `3` is the third row of the page; anything else must be a lead id.
    fn resolve_row(&self, row: &str) -> Option<String> {
        if let Ok(n) = row.parse::<usize>() {
            let idx = n.checked_sub(self.page.pagination.offset() + 1)?;
            return self.page.leads.get(idx).map(|l| l.id.clone());
        }
        self.page
            .leads
            .iter()
            .find(|l| l.id == row)
            .map(|l| l.id.clone())
    }

    /// Optimistic local update, or re-fetch when the store refused.
    fn reconcile(&mut self, outcome: Option<CommitOutcome>) -> AppResult<()> {
        match outcome {
            Some(CommitOutcome::Applied(edit)) => {
                if let Some(lead) = self.page.leads.iter_mut().find(|l| l.id == edit.row_id) {
                    lead.apply(&edit.patch, Utc::now());
                }
                self.query.sort.sort_leads(&mut self.page.leads);
            }
            Some(CommitOutcome::RevertRequired) => self.refresh()?,
            None => {}
        }
        Ok(())
    }

    fn render(&self) -> String {
        let editing = self.controller.cursor().map(|c| (c, self.draft.as_str()));
        let mut out = render_leads(&self.page.leads, self.page.pagination.offset(), editing);
        out.push_str(&self.page.pagination.summary());
        if let Some(c) = self.controller.cursor() {
            out.push_str(&format!("\nEditing {} of {}", c.field, c.row_id));
        }
        out
    }

    /// Apply one command. Returns false on `quit`.
    pub fn execute<W: Write>(&mut self, cmd: SessionCommand, out: &mut W) -> AppResult<bool> {
        match cmd {
            SessionCommand::Edit { row, field } => {
                let Some(id) = self.resolve_row(&row) else {
                    writeln!(out, "No such row: {row}")?;
                    return Ok(true);
                };
                if !field.is_editable() {
                    writeln!(out, "Field '{field}' is not editable")?;
                    return Ok(true);
                }
                self.controller.start_edit(Some(&id), Some(field));
                self.sync_draft();
                writeln!(out, "Editing {field}: {}", self.draft)?;
            }
            SessionCommand::Type(text) => {
                if self.controller.cursor().is_none() {
                    writeln!(out, "No cell is being edited")?;
                } else {
                    self.draft = text;
                }
            }
            SessionCommand::Key(key) => {
                if self.controller.cursor().is_none() {
                    writeln!(out, "No cell is being edited")?;
                    return Ok(true);
                }
                let outcome = {
                    let mut env = EditEnv {
                        rows: &self.page.leads,
                        store: &mut *self.pool,
                        notifier: self.notifier,
                    };
                    self.controller.handle_key(key, &self.draft, &mut env)
                };
                self.report(&outcome, out)?;
                self.reconcile(outcome)?;
                self.sync_draft();
                self.print_cursor(out)?;
            }
            SessionCommand::Blur => {
                let Some(cell) = self.controller.cursor().cloned() else {
                    writeln!(out, "No cell is being edited")?;
                    return Ok(true);
                };
                let outcome = self.blur(&cell)?;
                self.report(&outcome, out)?;
                self.print_cursor(out)?;
            }
            SessionCommand::Sort(field) => {
                self.controller.clear();
                self.query.sort.toggle(field);
                self.refresh()?;
                self.sync_draft();
                writeln!(out, "{}", self.render())?;
            }
            SessionCommand::NextPage | SessionCommand::PrevPage => {
                let p = self.page.pagination;
                let moved = if cmd == SessionCommand::NextPage {
                    p.has_next()
                } else {
                    p.has_previous()
                };
                if moved {
                    self.controller.clear();
                    self.query.page = if cmd == SessionCommand::NextPage {
                        p.page + 1
                    } else {
                        p.page - 1
                    };
                    self.refresh()?;
                    self.sync_draft();
                }
                writeln!(out, "{}", self.render())?;
            }
            SessionCommand::Show => writeln!(out, "{}", self.render())?,
            SessionCommand::Refresh => {
                self.controller.clear();
                self.refresh()?;
                self.sync_draft();
                writeln!(out, "{}", self.render())?;
            }
            SessionCommand::Help => writeln!(out, "{SESSION_HELP}")?,
            SessionCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn blur(&mut self, cell: &EditingCursor) -> AppResult<Option<CommitOutcome>> {
        let outcome = {
            let mut env = EditEnv {
                rows: &self.page.leads,
                store: &mut *self.pool,
                notifier: self.notifier,
            };
            self.controller.handle_blur(cell, &self.draft, &mut env)
        };
        self.reconcile(outcome.clone())?;
        self.sync_draft();
        Ok(outcome)
    }

    fn report<W: Write>(&self, outcome: &Option<CommitOutcome>, out: &mut W) -> AppResult<()> {
        match outcome {
            Some(CommitOutcome::Applied(edit)) => writeln!(out, "Saved {}", edit.row_id)?,
            Some(CommitOutcome::RevertRequired) => writeln!(out, "Not saved, grid reloaded")?,
            None => {}
        }
        Ok(())
    }

    fn print_cursor<W: Write>(&self, out: &mut W) -> AppResult<()> {
        match self.controller.cursor() {
            Some(c) => writeln!(out, "Editing {}: {}", c.field, self.draft)?,
            None => writeln!(out, "Editor closed")?,
        }
        Ok(())
    }

    /// Read commands until `quit` or end of input. Bad lines are reported
    /// and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> AppResult<()> {
        writeln!(out, "{}", self.render())?;

        for line in input.lines() {
            let line = line?;
            let cmd = match SessionCommand::parse(&line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            };
            if !self.execute(cmd, out)? {
                break;
            }
        }

        Ok(())
    }
}
