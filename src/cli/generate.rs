use serde_json::json;

use crate::cli::task::{finish, service};
use crate::client::TaskService;
use crate::error::TaskdashError;
use crate::generate;
use crate::output;

pub fn run(json_output: bool) -> i32 {
    finish(run_inner(json_output), json_output)
}

fn run_inner(json_output: bool) -> Result<i32, TaskdashError> {
    let service = service()?;

    // Read-only snapshot for the dedup context. Tasks created concurrently
    // are not reflected until the refetch below.
    let existing = service.tasks()?;
    let created = generate::generate_and_commit(&service, &existing)?;

    let tasks = service.tasks().ok();

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
        println!("Generated task added: {} ({})", created.name, created.id);
        if let Some(ref tasks) = tasks {
            output::text::print_task_list(tasks);
        }
    }
    Ok(0)
}
