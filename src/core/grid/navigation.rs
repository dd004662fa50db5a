use crate::models::LeadField;

/// The single (row, field) pair open for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingCursor {
    pub row_id: String,
    pub field: LeadField,
}

impl EditingCursor {
    pub fn new(row_id: &str, field: LeadField) -> Self {
        Self {
            row_id: row_id.to_string(),
            field,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Locate the cursor in the live rows and fields. `None` if either is gone.
fn locate<R: AsRef<str>>(
    rows: &[R],
    fields: &[LeadField],
    current: &EditingCursor,
) -> Option<(usize, usize)> {
    let r = rows.iter().position(|id| id.as_ref() == current.row_id)?;
    let i = fields.iter().position(|f| *f == current.field)?;
    Some((r, i))
}

/// Tab: next field of the same row, then the first field of the next row.
/// `None` after the last cell of the last row.
pub fn next_cell<R: AsRef<str>>(
    rows: &[R],
    fields: &[LeadField],
    current: &EditingCursor,
) -> Option<EditingCursor> {
    let (r, i) = locate(rows, fields, current)?;

    if i + 1 < fields.len() {
        Some(EditingCursor::new(rows[r].as_ref(), fields[i + 1]))
    } else if r + 1 < rows.len() {
        Some(EditingCursor::new(rows[r + 1].as_ref(), fields[0]))
    } else {
        None
    }
}

/// Shift+Tab: mirror of [`next_cell`].
pub fn previous_cell<R: AsRef<str>>(
    rows: &[R],
    fields: &[LeadField],
    current: &EditingCursor,
) -> Option<EditingCursor> {
    let (r, i) = locate(rows, fields, current)?;

    if i > 0 {
        Some(EditingCursor::new(rows[r].as_ref(), fields[i - 1]))
    } else if r > 0 {
        let last = *fields.last()?;
        Some(EditingCursor::new(rows[r - 1].as_ref(), last))
    } else {
        None
    }
}

pub fn step<R: AsRef<str>>(
    rows: &[R],
    fields: &[LeadField],
    current: &EditingCursor,
    direction: Direction,
) -> Option<EditingCursor> {
    match direction {
        Direction::Forward => next_cell(rows, fields, current),
        Direction::Backward => previous_cell(rows, fields, current),
    }
}
