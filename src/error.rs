use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    ConfigError,
    ValidationError,
    ParseRejected,
    NetworkError,
    ServerError,
    TaskNotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::ParseRejected => "PARSE_REJECTED",
            Self::NetworkError => "NETWORK_ERROR",
            Self::ServerError => "SERVER_ERROR",
            Self::TaskNotFound => "TASK_NOT_FOUND",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TaskdashError {
    pub code: ErrorCode,
    pub message: String,
}

impl TaskdashError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "taskdash is not initialized. Run `taskdash init --endpoint <url>` first.",
        )
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Single all-or-nothing rejection for unparseable generator output.
    pub fn parse_rejected() -> Self {
        Self::new(ErrorCode::ParseRejected, "Could not parse generated task")
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServerError, message)
    }

    pub fn task_not_found(reference: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {reference}"),
        )
    }
}

impl From<reqwest::Error> for TaskdashError {
    fn from(e: reqwest::Error) -> Self {
        Self::network(e.to_string())
    }
}
