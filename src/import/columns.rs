use serde::Serialize;

/// Logical lead field a CSV column can feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ImportField {
    Name,
    Company,
    Phone,
    Email,
}

impl ImportField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportField::Name => "name",
            ImportField::Company => "company",
            ImportField::Phone => "phone",
            ImportField::Email => "email",
        }
    }
}

/// Import-time description of a column: which field, whether it is
/// mandatory, and which (lowercase) header fragments identify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub field: ImportField,
    pub required: bool,
    pub aliases: Vec<String>,
}

impl ColumnDescriptor {
    pub fn new(field: ImportField, required: bool, aliases: &[&str]) -> Self {
        Self {
            field,
            required,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Substring match: the header contains one of the aliases.
    pub fn matches(&self, normalized_header: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| normalized_header.contains(alias.as_str()))
    }
}

/// A descriptor bound to the header position found for it (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBinding<'a> {
    pub descriptor: &'a ColumnDescriptor,
    pub position: Option<usize>,
}

impl ColumnBinding<'_> {
    pub fn is_resolved(&self) -> bool {
        self.position.is_some()
    }
}

/// Columns recognised by the lead importer.
pub fn default_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new(
            ImportField::Name,
            true,
            &["name", "contact name", "contact_name", "full name", "full_name"],
        ),
        ColumnDescriptor::new(
            ImportField::Company,
            false,
            &["company", "company name", "company_name", "business", "organization"],
        ),
        ColumnDescriptor::new(
            ImportField::Phone,
            true,
            &["phone", "tel", "telephone", "phone number", "phone_number"],
        ),
        ColumnDescriptor::new(
            ImportField::Email,
            true,
            &["email", "mail", "e-mail", "email address", "email_address"],
        ),
    ]
}

/// Bind every descriptor to the first normalized header that matches it.
/// Several descriptors may bind to the same position.
pub fn resolve_columns<'a>(
    headers: &[String],
    descriptors: &'a [ColumnDescriptor],
) -> Vec<ColumnBinding<'a>> {
    descriptors
        .iter()
        .map(|descriptor| ColumnBinding {
            descriptor,
            position: headers.iter().position(|h| descriptor.matches(h)),
        })
        .collect()
}
