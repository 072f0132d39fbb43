/// The closed set of field names the generator is expected to emit.
/// Anything outside this table is noise and gets skipped during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    Category,
    Description,
    Priority,
    DueDate,
}

impl FieldKey {
    /// Look up a normalized (trimmed, lowercased) key from a generator line.
    pub fn from_raw(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "category" => Some(Self::Category),
            "description" => Some(Self::Description),
            "priority" => Some(Self::Priority),
            "duedate" => Some(Self::DueDate),
            _ => None,
        }
    }
}

/// Transient output of the field parser: each recognized field is optional
/// until the validator turns the whole mapping into a typed record.
/// `priority` is already integer-parsed; a non-numeric value stays `None`
/// (never zero) so validation can reject it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFields {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub due_date: Option<String>,
}
