use std::time::Duration;

use serde_json::{json, Value};

use crate::client::{CreatedTask, TaskService, UpdatedTask};
use crate::error::TaskdashError;
use crate::models::{Task, TaskInput};

const TASKS_QUERY: &str = "\
query {
  tasks {
    id
    name
    category
    description
    isFinished
    createdDate
    dueDate
    priority
  }
}";

const CREATE_TASK: &str = "\
mutation CreateTask($input: TaskInput!) {
  createTask(input: $input) {
    success
    message
    task {
      id
      name
    }
  }
}";

const UPDATE_TASK: &str = "\
mutation UpdateTask($id: ID!, $input: TaskInput!) {
  updateTask(id: $id, input: $input) {
    success
    task {
      id
      isFinished
    }
  }
}";

const DELETE_TASK: &str = "\
mutation DeleteTask($id: ID!) {
  deleteTask(id: $id) {
    success
    message
  }
}";

const GENERATE_TASK: &str = "\
mutation GenerateTask($existing: [String!]!) {
  generateTask(existing: $existing)
}";

/// Blocking GraphQL-over-HTTP client for the remote task store.
pub struct GraphqlClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TaskdashError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// POST one operation and unwrap the `data` envelope. Transport problems
    /// become NETWORK_ERROR, GraphQL-level `errors` become SERVER_ERROR.
    fn post(&self, query: &str, variables: Value) -> Result<Value, TaskdashError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()?;

        let status = response.status();
        let body: Value = response
            .json()
            .map_err(|e| TaskdashError::server(format!("Invalid response from server: {e}")))?;

        if let Some(message) = body
            .get("errors")
            .and_then(|e| e.get(0))
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            return Err(TaskdashError::server(message));
        }
        if !status.is_success() {
            return Err(TaskdashError::server(format!(
                "Server returned HTTP {status}"
            )));
        }

        body.get("data")
            .cloned()
            .ok_or_else(|| TaskdashError::server("Response is missing the data field"))
    }
}

/// Check a mutation payload's `success` flag, surfacing the store's message.
fn require_success(payload: &Value, operation: &str) -> Result<(), TaskdashError> {
    if payload.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(());
    }
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("no message");
    Err(TaskdashError::server(format!("{operation} failed: {message}")))
}

impl TaskService for GraphqlClient {
    fn tasks(&self) -> Result<Vec<Task>, TaskdashError> {
        let data = self.post(TASKS_QUERY, json!({}))?;
        serde_json::from_value(data["tasks"].clone())
            .map_err(|e| TaskdashError::server(format!("Malformed task list: {e}")))
    }

    fn create_task(&self, input: &TaskInput) -> Result<CreatedTask, TaskdashError> {
        let data = self.post(CREATE_TASK, json!({ "input": input }))?;
        let payload = &data["createTask"];
        require_success(payload, "createTask")?;
        let id = payload["task"]["id"].as_str().unwrap_or_default();
        if id.is_empty() {
            return Err(TaskdashError::server("createTask returned no task id"));
        }
        Ok(CreatedTask {
            id: id.to_string(),
            name: payload["task"]["name"].as_str().unwrap_or_default().to_string(),
        })
    }

    fn update_task(&self, id: &str, input: &TaskInput) -> Result<UpdatedTask, TaskdashError> {
        let data = self.post(UPDATE_TASK, json!({ "id": id, "input": input }))?;
        let payload = &data["updateTask"];
        require_success(payload, "updateTask")?;
        Ok(UpdatedTask {
            id: payload["task"]["id"].as_str().unwrap_or(id).to_string(),
            is_finished: payload["task"]["isFinished"]
                .as_bool()
                .unwrap_or(input.is_finished),
        })
    }

    fn delete_task(&self, id: &str) -> Result<String, TaskdashError> {
        let data = self.post(DELETE_TASK, json!({ "id": id }))?;
        let payload = &data["deleteTask"];
        require_success(payload, "deleteTask")?;
        Ok(payload["message"]
            .as_str()
            .unwrap_or("Task deleted")
            .to_string())
    }

    fn generate_task(&self, existing: &[String]) -> Result<String, TaskdashError> {
        let data = self.post(GENERATE_TASK, json!({ "existing": existing }))?;
        data["generateTask"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| TaskdashError::server("generateTask returned no text"))
    }
}
