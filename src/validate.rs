use chrono::{Local, NaiveDate};

use crate::error::TaskdashError;
use crate::models::{Category, ParsedFields, Priority, TaskInput};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One inline message per invalid field, manual-form path only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Raw manual-form input as collected from the command line.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub name: String,
    pub category: String,
    pub priority: String,
    pub due_date: String,
    pub description: Option<String>,
}

/// A generated candidate that passed the generation-context checks.
/// Still missing the synthesized fields (`isFinished`, `createdDate`),
/// which the orchestrator fills in.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTask {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub priority: i32,
    pub due_date: String,
}

pub fn check_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Task name is required.".to_string());
    }
    Ok(name.to_string())
}

pub fn check_category(raw: &str) -> Result<Category, String> {
    Category::from_str(raw.trim()).ok_or_else(|| {
        "Category must be one of: work, school, personal, others.".to_string()
    })
}

pub fn check_priority(raw: &str) -> Result<Priority, String> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(Priority::from_i32)
        .ok_or_else(|| "Priority must be 1 (Low), 2 (Medium) or 3 (High).".to_string())
}

/// Parse an ISO date and require it to be strictly after today.
/// Date-only comparison, so "today" always fails regardless of wall clock.
pub fn check_due_date(raw: &str) -> Result<NaiveDate, String> {
    let due = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| format!("Due date must be a {DATE_FORMAT} date."))?;
    if due <= Local::now().date_naive() {
        return Err("Due date must be later than today.".to_string());
    }
    Ok(due)
}

/// Manual-form validation: every constraint is checked and every failure is
/// reported, one message per field. On success the returned input is a
/// complete create payload (`isFinished=false`, `createdDate=today`).
pub fn validate_form(form: &TaskForm) -> Result<TaskInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = check_name(&form.name).map_err(|m| errors.push(FieldError { field: "name", message: m }));
    let category = check_category(&form.category)
        .map_err(|m| errors.push(FieldError { field: "category", message: m }));
    let priority = check_priority(&form.priority)
        .map_err(|m| errors.push(FieldError { field: "priority", message: m }));
    let due_date = check_due_date(&form.due_date)
        .map_err(|m| errors.push(FieldError { field: "dueDate", message: m }));

    let (Ok(name), Ok(category), Ok(priority), Ok(due_date)) =
        (name, category, priority, due_date)
    else {
        return Err(errors);
    };

    Ok(TaskInput {
        name,
        category: category.as_str().to_string(),
        description: form.description.clone().unwrap_or_default(),
        is_finished: false,
        created_date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
        due_date: due_date.format(DATE_FORMAT).to_string(),
        priority: priority.as_i32(),
    })
}

/// Generation-context validation: all-or-nothing presence check over the
/// parsed mapping. `name`, `category` and `dueDate` must be present as
/// non-empty strings and `priority` must have survived integer parsing.
///
/// Deliberately weaker than the manual form: neither the future-date rule
/// nor the 1-3 priority range is re-checked here, matching the trust the
/// dashboard places in generator output. Keep the two paths separate.
pub fn validate_generated(fields: &ParsedFields) -> Result<GeneratedTask, TaskdashError> {
    let (Some(name), Some(category), Some(priority), Some(due_date)) = (
        fields.name.as_deref(),
        fields.category.as_deref(),
        fields.priority,
        fields.due_date.as_deref(),
    ) else {
        return Err(TaskdashError::parse_rejected());
    };

    Ok(GeneratedTask {
        name: name.to_string(),
        category: category.to_string(),
        description: fields.description.clone(),
        priority,
        due_date: due_date.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn form(name: &str, category: &str, priority: &str, due: &str) -> TaskForm {
        TaskForm {
            name: name.to_string(),
            category: category.to_string(),
            priority: priority.to_string(),
            due_date: due.to_string(),
            description: None,
        }
    }

    fn days_from_today(days: i64) -> String {
        (Local::now().date_naive() + Duration::days(days))
            .format(DATE_FORMAT)
            .to_string()
    }

    #[test]
    fn test_form_accepts_future_due_date() {
        let input = validate_form(&form("Finish report", "work", "2", &days_from_today(1)))
            .expect("valid form");
        assert_eq!(input.name, "Finish report");
        assert_eq!(input.category, "work");
        assert_eq!(input.priority, 2);
        assert!(!input.is_finished);
        assert_eq!(input.created_date, days_from_today(0));
    }

    #[test]
    fn test_form_rejects_today_and_past() {
        for due in [days_from_today(0), days_from_today(-1)] {
            let errors = validate_form(&form("x", "work", "1", &due)).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "dueDate");
            assert_eq!(errors[0].message, "Due date must be later than today.");
        }
    }

    #[test]
    fn test_form_rejects_unparseable_date() {
        let errors = validate_form(&form("x", "work", "1", "soonish")).unwrap_err();
        assert_eq!(errors[0].field, "dueDate");
    }

    #[test]
    fn test_form_collects_all_field_errors() {
        let errors = validate_form(&form("", "gardening", "7", "not-a-date")).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "category", "priority", "dueDate"]);
    }

    #[test]
    fn test_form_rejects_priority_outside_ordinals() {
        for p in ["0", "4", "-1", "high"] {
            let errors = validate_form(&form("x", "work", p, &days_from_today(1))).unwrap_err();
            assert_eq!(errors[0].field, "priority");
        }
    }

    #[test]
    fn test_form_blank_name_rejected() {
        let errors = validate_form(&form("   ", "work", "1", &days_from_today(1))).unwrap_err();
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_generated_requires_all_four_fields() {
        let mut fields = ParsedFields {
            name: Some("X".to_string()),
            category: Some("work".to_string()),
            description: None,
            priority: Some(2),
            due_date: Some("2025-12-31".to_string()),
        };
        assert!(validate_generated(&fields).is_ok());

        fields.priority = None;
        assert!(validate_generated(&fields).is_err());
    }

    #[test]
    fn test_generated_skips_future_date_check() {
        // The generation path trusts the generator's date as-is.
        let fields = ParsedFields {
            name: Some("X".to_string()),
            category: Some("work".to_string()),
            description: None,
            priority: Some(2),
            due_date: Some("2000-01-01".to_string()),
        };
        let task = validate_generated(&fields).expect("past date accepted here");
        assert_eq!(task.due_date, "2000-01-01");
    }

    #[test]
    fn test_generated_rejection_is_single_notice() {
        let err = validate_generated(&ParsedFields::default()).unwrap_err();
        assert_eq!(err.message, "Could not parse generated task");
    }

    #[test]
    fn test_generated_description_optional() {
        let fields = ParsedFields {
            name: Some("X".to_string()),
            category: Some("personal".to_string()),
            description: None,
            priority: Some(1),
            due_date: Some("2026-06-01".to_string()),
        };
        let task = validate_generated(&fields).unwrap();
        assert_eq!(task.description, None);
    }
}
