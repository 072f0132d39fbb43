use crate::models::{Priority, Task};

fn priority_label(priority: i32) -> String {
    Priority::from_i32(priority)
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| priority.to_string())
}

pub fn print_task(t: &Task) {
    let check = if t.is_finished { "x" } else { " " };
    println!("Task: {} ({})", t.name, t.id);
    println!("  Done: [{check}]");
    println!("  Category: {}", t.category);
    if let Some(ref desc) = t.description {
        if !desc.is_empty() {
            println!("  Description: {desc}");
        }
    }
    println!("  Priority: {}", priority_label(t.priority));
    println!("  Created: {}", t.created_date);
    println!("  Due: {}", t.due_date);
}

pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for t in tasks {
        let check = if t.is_finished { "x" } else { " " };
        println!(
            "  [{check}] {} ({}) {} due={} p={}",
            t.name,
            t.id,
            t.category,
            t.due_date,
            priority_label(t.priority)
        );
    }
}
