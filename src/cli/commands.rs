use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "taskdash",
    version = VERSION,
    about = "CLI dashboard for a remote todo task service",
    after_help = "\
NOTE:
  Requires a git repository. Config is stored at <git-root>/.taskdash/config.json
  Run `taskdash init --endpoint <url>` before any other command, or set
  TASKDASH_ENDPOINT to override the config.

EXIT CODES:
  0  Success
  1  Error (validation, network, server rejection)

BEHAVIOR NOTES:
  The remote store is the single source of truth: after every mutation the
  task list is refetched rather than patched locally.
  `edit`, `done` and `reopen` send the complete record (full-replace update),
  never a partial payload.
  `generate` is all-or-nothing: if the generator's output cannot be parsed
  into a complete task, nothing is created. No automatic retry."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Point taskdash at a task service endpoint
    Init {
        /// GraphQL endpoint URL of the task store
        #[arg(long)]
        endpoint: String,
    },

    /// List all tasks
    List,

    /// Show one task in full
    Show {
        /// Task id
        id: String,
    },

    /// Create a task
    Add {
        /// Task name
        name: String,
        /// Category: work, school, personal or others
        #[arg(long)]
        category: String,
        /// Priority: 1 (Low), 2 (Medium) or 3 (High)
        #[arg(long, default_value = "1")]
        priority: String,
        /// Due date (yyyy-mm-dd), must be later than today
        #[arg(long = "due")]
        due_date: String,
        #[arg(long)]
        description: Option<String>,
    },

    /// Edit a task's fields
    Edit {
        /// Task id
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// Category: work, school, personal or others
        #[arg(long)]
        category: Option<String>,
        /// Priority: 1 (Low), 2 (Medium) or 3 (High)
        #[arg(long)]
        priority: Option<String>,
        /// Due date (yyyy-mm-dd)
        #[arg(long = "due")]
        due_date: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Mark a task finished
    Done {
        /// Task id
        id: String,
    },

    /// Mark a finished task as unfinished again
    Reopen {
        /// Task id
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: String,
    },

    /// Ask the AI generator for a new task and add it to the list
    #[command(after_help = "\
NOTE:
  Existing tasks are sent to the generator as advisory dedup context only;
  no local duplicate check is performed. Output that is missing any of
  name, category, priority or due date is rejected as a whole.")]
    Generate,
}
