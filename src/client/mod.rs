pub mod graphql;

pub use graphql::GraphqlClient;

use crate::error::TaskdashError;
use crate::models::{Task, TaskInput};

/// Minimum fields callers need back from `createTask`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTask {
    pub id: String,
    pub name: String,
}

/// Minimum fields callers need back from `updateTask`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedTask {
    pub id: String,
    pub is_finished: bool,
}

/// The remote task store. One read query, three mutations, and the opaque
/// text generator. There is no optimistic local state anywhere: callers
/// re-issue `tasks()` after a mutation instead of patching a cache.
pub trait TaskService {
    fn tasks(&self) -> Result<Vec<Task>, TaskdashError>;

    fn create_task(&self, input: &TaskInput) -> Result<CreatedTask, TaskdashError>;

    /// Full-replace update: `input` carries every field of the record even
    /// when only one changed. The store's contract has no partial patch.
    fn update_task(&self, id: &str, input: &TaskInput) -> Result<UpdatedTask, TaskdashError>;

    /// Returns the store's confirmation message.
    fn delete_task(&self, id: &str) -> Result<String, TaskdashError>;

    /// Ask the external generator for one new task, passing the serialized
    /// existing tasks as advisory dedup context. Returns a raw text blob
    /// with no guaranteed format.
    fn generate_task(&self, existing: &[String]) -> Result<String, TaskdashError>;
}
