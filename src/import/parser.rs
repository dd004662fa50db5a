use super::ImportError;
use super::columns::{ColumnBinding, ColumnDescriptor, ImportField, resolve_columns};
use csv::{ReaderBuilder, Trim};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex is valid"));

const QUOTE_CHARS: [char; 6] = ['"', '\'', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// One data line of an uploaded CSV, ready to become a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
}

/// Values collected for one line before validation.
#[derive(Debug, Default)]
struct PartialRow {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    company: Option<String>,
}

impl PartialRow {
    fn set(&mut self, field: ImportField, value: String) {
        match field {
            ImportField::Name => self.name = Some(value),
            ImportField::Email => self.email = Some(value),
            ImportField::Phone => self.phone = Some(value),
            ImportField::Company => self.company = Some(value),
        }
    }

    fn has(&self, field: ImportField) -> bool {
        match field {
            ImportField::Name => self.name.is_some(),
            ImportField::Email => self.email.is_some(),
            ImportField::Phone => self.phone.is_some(),
            ImportField::Company => self.company.is_some(),
        }
    }

    /// `parse_csv` refuses descriptors that make name, email or phone optional.
    fn into_row(self, bindings: &[ColumnBinding<'_>]) -> Option<ImportRow> {
        let complete = bindings
            .iter()
            .filter(|b| b.descriptor.required)
            .all(|b| self.has(b.descriptor.field));
        if !complete {
            return None;
        }

        Some(ImportRow {
            name: self.name?,
            email: self.email?,
            phone: self.phone?,
            company: self.company,
        })
    }
}

/// Split on `\n` / `\r\n` and drop blank lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.trim().is_empty()).collect()
}

/// Lowercase, unquote and snake_case a header cell.
///
/// `"  Contact Name "` → `contact_name`
pub fn normalize_header(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let unquoted: String = lowered.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect();
    WHITESPACE_RUN.replace_all(&unquoted, "_").into_owned()
}

/// Drop the blanks between a delimiter and an opening quote so the reader
/// sees ` "Acme, Inc"` as a quoted field.
fn tighten_quotes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut at_start = true;

    for c in line.chars() {
        if in_quotes {
            out.push(c);
            in_quotes = c != '"';
            continue;
        }
        match c {
            ',' => {
                out.push_str(&pending);
                out.push(c);
                pending.clear();
                quoted = false;
                at_start = true;
            }
            '"' if at_start || quoted => {
                // `""` inside a quoted field re-enters it
                pending.clear();
                out.push(c);
                in_quotes = true;
                quoted = true;
                at_start = false;
            }
            c if at_start && c.is_whitespace() => pending.push(c),
            _ => {
                out.push_str(&pending);
                out.push(c);
                pending.clear();
                at_start = false;
            }
        }
    }
    out.push_str(&pending);
    out
}

/// Split a data line into trimmed values.
///
/// A double-quoted field is kept whole (commas included) and unquoted, even
/// when blanks precede the opening quote. Unquoted commas always split:
/// `Acme, Inc` yields two values.
pub fn tokenize_row(line: &str) -> Vec<String> {
    let tightened = tighten_quotes(line.trim());
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(tightened.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

fn parse_row(line: &str, bindings: &[ColumnBinding<'_>]) -> Option<ImportRow> {
    let values = tokenize_row(line);
    let mut row = PartialRow::default();

    for binding in bindings {
        let Some(pos) = binding.position else {
            continue;
        };
        if let Some(value) = values.get(pos)
            && !value.is_empty()
        {
            row.set(binding.descriptor.field, value.clone());
        }
    }

    row.into_row(bindings)
}

/// Parse the full text of an uploaded CSV into lead rows.
///
/// Rows keep the file order; rows lacking a required value are skipped.
///
/// A lead cannot exist without name, email and phone, so descriptors that
/// mark one of them optional are rejected with
/// [`ImportError::OptionalLeadColumn`] before any line is read.
pub fn parse_csv(
    text: &str,
    descriptors: &[ColumnDescriptor],
) -> Result<Vec<ImportRow>, ImportError> {
    if let Some(d) = descriptors
        .iter()
        .find(|d| !d.required && d.field != ImportField::Company)
    {
        return Err(ImportError::OptionalLeadColumn(d.field.as_str().to_string()));
    }

    let lines = split_lines(text);
    if lines.len() < 2 {
        return Err(ImportError::EmptyOrMissingData);
    }

    let headers: Vec<String> = lines[0].split(',').map(normalize_header).collect();
    let bindings = resolve_columns(&headers, descriptors);

    let missing: Vec<String> = bindings
        .iter()
        .filter(|b| b.descriptor.required && !b.is_resolved())
        .map(|b| b.descriptor.field.as_str().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingRequiredColumns(missing));
    }

    let rows: Vec<ImportRow> = lines[1..]
        .iter()
        .filter_map(|line| parse_row(line, &bindings))
        .collect();

    if rows.is_empty() {
        return Err(ImportError::NoValidRows);
    }

    Ok(rows)
}
