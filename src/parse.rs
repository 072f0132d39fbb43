use crate::models::{FieldKey, ParsedFields};

/// Extract recognized `key: value` fields from a raw generator blob.
///
/// Tolerant by design: blank lines, lines without a colon, empty values and
/// unrecognized keys are all skipped silently. Never fails — a blob with no
/// usable lines yields an empty mapping, which validation rejects downstream.
/// If a key repeats, the last occurrence wins.
pub fn parse(raw: &str) -> ParsedFields {
    let mut fields = ParsedFields::default();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let Some(key) = FieldKey::from_raw(&key.trim().to_lowercase()) else {
            continue;
        };

        match key {
            FieldKey::Name => fields.name = Some(value.to_string()),
            FieldKey::Category => fields.category = Some(value.to_string()),
            FieldKey::Description => fields.description = Some(value.to_string()),
            // Non-numeric priority stays absent so the validator rejects it.
            FieldKey::Priority => fields.priority = value.parse::<i32>().ok(),
            FieldKey::DueDate => fields.due_date = Some(value.to_string()),
        }
    }

    fields
}
