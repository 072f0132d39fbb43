use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::TaskdashError;

/// Client configuration, stored at `<git-root>/.taskdash/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL of the task store's GraphQL endpoint.
    pub endpoint: String,
}

/// Find the .git root by walking up from the current directory.
pub fn find_git_root() -> Result<PathBuf, TaskdashError> {
    let mut dir = env::current_dir().map_err(|e| TaskdashError::config(e.to_string()))?;
    loop {
        if dir.join(".git").exists() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Err(TaskdashError::config(
                "Not inside a git repository. taskdash stores its config at the git root.",
            ));
        }
    }
}

pub fn config_path() -> Result<PathBuf, TaskdashError> {
    let root = find_git_root()?;
    Ok(root.join(".taskdash").join("config.json"))
}

/// Write the config, creating the directory as needed.
pub fn init_config(endpoint: &str) -> Result<PathBuf, TaskdashError> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TaskdashError::config(e.to_string()))?;
    }
    let config = Config {
        endpoint: endpoint.to_string(),
    };
    let body = serde_json::to_string_pretty(&config)
        .map_err(|e| TaskdashError::config(e.to_string()))?;
    fs::write(&path, body).map_err(|e| TaskdashError::config(e.to_string()))?;
    Ok(path)
}

/// Load the endpoint. The `TASKDASH_ENDPOINT` environment variable overrides
/// the config file; a missing config otherwise means `init` has not run.
pub fn load_config() -> Result<Config, TaskdashError> {
    if let Ok(endpoint) = env::var("TASKDASH_ENDPOINT") {
        if !endpoint.is_empty() {
            return Ok(Config { endpoint });
        }
    }

    let path = config_path()?;
    if !path.exists() {
        return Err(TaskdashError::not_initialized());
    }
    let body = fs::read_to_string(&path).map_err(|e| TaskdashError::config(e.to_string()))?;
    serde_json::from_str(&body)
        .map_err(|e| TaskdashError::config(format!("Invalid config at {}: {e}", path.display())))
}
