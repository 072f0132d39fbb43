use serde_json::{json, Value};

use crate::client::{CreatedTask, UpdatedTask};
use crate::error::TaskdashError;
use crate::models::Task;
use crate::validate::FieldError;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskdashError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

/// Manual-form rejection: one entry per invalid field.
pub fn field_errors(errors: &[FieldError]) -> Value {
    json!({
        "success": false,
        "error": {
            "code": "VALIDATION_ERROR",
            "fields": errors.iter().map(|e| json!({
                "field": e.field,
                "message": e.message
            })).collect::<Vec<_>>()
        }
    })
}

pub fn task_json(t: &Task) -> Value {
    json!({
        "id": t.id,
        "name": t.name,
        "category": t.category,
        "description": t.description,
        "isFinished": t.is_finished,
        "createdDate": t.created_date,
        "dueDate": t.due_date,
        "priority": t.priority
    })
}

pub fn task_list(tasks: &[Task]) -> Value {
    json!(tasks.iter().map(task_json).collect::<Vec<_>>())
}

pub fn created_json(c: &CreatedTask) -> Value {
    json!({
        "id": c.id,
        "name": c.name
    })
}

pub fn updated_json(u: &UpdatedTask) -> Value {
    json!({
        "id": u.id,
        "isFinished": u.is_finished
    })
}
