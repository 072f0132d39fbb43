pub mod parsed;
pub mod task;

pub use parsed::{FieldKey, ParsedFields};
pub use task::{Category, Priority, Task, TaskInput};
