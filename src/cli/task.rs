use serde_json::json;

use crate::client::{GraphqlClient, TaskService};
use crate::config;
use crate::error::TaskdashError;
use crate::models::Task;
use crate::output;
use crate::validate::{self, FieldError, TaskForm};

/// Build the production client from the stored config.
pub fn service() -> Result<GraphqlClient, TaskdashError> {
    let config = config::load_config()?;
    GraphqlClient::new(config.endpoint)
}

/// Shared tail for every command: unwrap or report the error once.
pub fn finish(result: Result<i32, TaskdashError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::error(&e)).unwrap()
                );
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

/// Manual-form rejection: print every field message, submit nothing.
fn report_field_errors(errors: &[FieldError], json_output: bool) -> i32 {
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::field_errors(errors)).unwrap()
        );
    } else {
        eprintln!("Invalid task:");
        for e in errors {
            eprintln!("  {}: {}", e.field, e.message);
        }
    }
    1
}

/// Re-read the store after a mutation. A refresh failure after a successful
/// mutation is reported but does not fail the command; the store already
/// holds the new state.
fn refetch(service: &GraphqlClient, json_output: bool) -> Option<Vec<Task>> {
    match service.tasks() {
        Ok(tasks) => Some(tasks),
        Err(e) => {
            if !json_output {
                eprintln!("Warning: could not refresh task list: {}", e.message);
            }
            None
        }
    }
}

fn find_task(tasks: &[Task], id: &str) -> Result<Task, TaskdashError> {
    tasks
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .ok_or_else(|| TaskdashError::task_not_found(id))
}

pub fn run_list(json_output: bool) -> i32 {
    finish(list_inner(json_output), json_output)
}

fn list_inner(json_output: bool) -> Result<i32, TaskdashError> {
    let service = service()?;
    let tasks = service.tasks()?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "tasks": output::json::task_list(&tasks)
            })))
            .unwrap()
        );
    } else {
        output::text::print_task_list(&tasks);
    }
    Ok(0)
}

pub fn run_show(id: &str, json_output: bool) -> i32 {
    finish(
        (|| {
            let service = service()?;
            let task = find_task(&service.tasks()?, id)?;

            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "task": output::json::task_json(&task)
                    })))
                    .unwrap()
                );
            } else {
                output::text::print_task(&task);
            }
            Ok(0)
        })(),
        json_output,
    )
}

pub fn run_add(
    name: &str,
    category: &str,
    priority: &str,
    due_date: &str,
    description: Option<&str>,
    json_output: bool,
) -> i32 {
    let form = TaskForm {
        name: name.to_string(),
        category: category.to_string(),
        priority: priority.to_string(),
        due_date: due_date.to_string(),
        description: description.map(str::to_string),
    };

    // Validate before touching the network; nothing is sent on rejection.
    let input = match validate::validate_form(&form) {
        Ok(input) => input,
        Err(errors) => return report_field_errors(&errors, json_output),
    };

    finish(
        (|| {
            let service = service()?;
            let created = service.create_task(&input)?;
            let tasks = refetch(&service, json_output);

            if json_output {
                let mut data = json!({ "created": output::json::created_json(&created) });
                if let Some(ref tasks) = tasks {
                    data["tasks"] = output::json::task_list(tasks);
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(data)).unwrap()
                );
            } else {
                println!("Created task: {} ({})", created.name, created.id);
                if let Some(ref tasks) = tasks {
                    output::text::print_task_list(tasks);
                }
            }
            Ok(0)
        })(),
        json_output,
    )
}

pub fn run_edit(
    id: &str,
    name: Option<&str>,
    category: Option<&str>,
    priority: Option<&str>,
    due_date: Option<&str>,
    description: Option<&str>,
    json_output: bool,
) -> i32 {
    // Validate the provided flags up front, all messages at once.
    let mut errors = Vec::new();
    let name = name.map(|raw| {
        validate::check_name(raw)
            .map_err(|m| errors.push(FieldError { field: "name", message: m }))
    });
    let category = category.map(|raw| {
        validate::check_category(raw)
            .map_err(|m| errors.push(FieldError { field: "category", message: m }))
    });
    let priority = priority.map(|raw| {
        validate::check_priority(raw)
            .map_err(|m| errors.push(FieldError { field: "priority", message: m }))
    });
    let due_date = due_date.map(|raw| {
        validate::check_due_date(raw)
            .map_err(|m| errors.push(FieldError { field: "dueDate", message: m }))
    });
    if !errors.is_empty() {
        return report_field_errors(&errors, json_output);
    }

    finish(
        (|| {
            let service = service()?;
            let task = find_task(&service.tasks()?, id)?;

            // Full-replace semantics: start from the stored record and merge
            // only the flags that were given. createdDate and isFinished are
            // preserved as-is.
            let mut input = task.to_input();
            if let Some(Ok(name)) = name {
                input.name = name;
            }
            if let Some(Ok(category)) = category {
                input.category = category.as_str().to_string();
            }
            if let Some(Ok(priority)) = priority {
                input.priority = priority.as_i32();
            }
            if let Some(Ok(due)) = due_date {
                input.due_date = due.format(validate::DATE_FORMAT).to_string();
            }
            if let Some(description) = description {
                input.description = description.to_string();
            }

            let updated = service.update_task(id, &input)?;
            let tasks = refetch(&service, json_output);

            if json_output {
                let mut data = json!({ "updated": output::json::updated_json(&updated) });
                if let Some(ref tasks) = tasks {
                    data["tasks"] = output::json::task_list(tasks);
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(data)).unwrap()
                );
            } else {
                println!("Updated task: {}", updated.id);
                if let Some(ref tasks) = tasks {
                    output::text::print_task_list(tasks);
                }
            }
            Ok(0)
        })(),
        json_output,
    )
}

/// Completion toggle. Sends the complete stored record with only
/// `isFinished` flipped, never a partial payload.
pub fn run_toggle(id: &str, finished: bool, json_output: bool) -> i32 {
    finish(
        (|| {
            let service = service()?;
            let task = find_task(&service.tasks()?, id)?;

            let mut input = task.to_input();
            input.is_finished = finished;

            let updated = service.update_task(id, &input)?;
            let tasks = refetch(&service, json_output);

            if json_output {
                let mut data = json!({ "updated": output::json::updated_json(&updated) });
                if let Some(ref tasks) = tasks {
                    data["tasks"] = output::json::task_list(tasks);
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(data)).unwrap()
                );
            } else if finished {
                println!("Task {} marked as done.", updated.id);
            } else {
                println!("Task {} reopened.", updated.id);
            }
            Ok(0)
        })(),
        json_output,
    )
}

pub fn run_delete(id: &str, json_output: bool) -> i32 {
    finish(
        (|| {
            let service = service()?;
            let message = service.delete_task(id)?;
            let tasks = refetch(&service, json_output);

            if json_output {
                let mut data = json!({ "deleted": { "id": id, "message": message } });
                if let Some(ref tasks) = tasks {
                    data["tasks"] = output::json::task_list(tasks);
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(data)).unwrap()
                );
            } else {
                println!("{message}");
                if let Some(ref tasks) = tasks {
                    output::text::print_task_list(tasks);
                }
            }
            Ok(0)
        })(),
        json_output,
    )
}
