use chrono::Local;

use crate::client::{CreatedTask, TaskService};
use crate::error::TaskdashError;
use crate::models::{Task, TaskInput};
use crate::parse;
use crate::validate::{self, DATE_FORMAT};

/// Description used when the generator's blob carries no description line.
pub const GENERATED_DESCRIPTION: &str = "AI-generated task";

/// Serialize one task into the advisory dedup line sent to the generator.
/// The generator is free to ignore it; no local duplicate check happens.
pub fn dedup_line(task: &Task) -> String {
    format!(
        "{} - {} - {} - {} - {} - {}",
        task.name,
        task.category,
        task.description.as_deref().unwrap_or(""),
        task.created_date,
        task.due_date,
        task.priority
    )
}

/// Run the whole generation pipeline: generate → parse → validate → create.
///
/// Strictly sequential and all-or-nothing. A transport failure, an
/// unparseable blob or a rejected create all abort the invocation without
/// writing anything; the caller surfaces a single notice and the user
/// re-triggers manually. The `existing` snapshot is read-only and may be
/// stale by the time the create lands, which is accepted.
pub fn generate_and_commit(
    service: &dyn TaskService,
    existing: &[Task],
) -> Result<CreatedTask, TaskdashError> {
    let context: Vec<String> = existing.iter().map(dedup_line).collect();

    let blob = service.generate_task(&context)?;
    let fields = parse::parse(&blob);
    let candidate = validate::validate_generated(&fields)?;

    let input = TaskInput {
        name: candidate.name,
        category: candidate.category,
        description: candidate
            .description
            .unwrap_or_else(|| GENERATED_DESCRIPTION.to_string()),
        is_finished: false,
        created_date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
        due_date: candidate.due_date,
        priority: candidate.priority,
    };

    service.create_task(&input)
}
