use thiserror::Error;

/// Errors that can occur during module execution
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("asadmin exited with code {rc}: {command}: {stderr}")]
    ToolFailed {
        command: String,
        rc: i32,
        stderr: String,
    },

    #[error("Module execution failed: {message}")]
    ExecutionFailed { message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during argument validation
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required argument: {arg}")]
    MissingRequiredArg { arg: String },

    #[error("Invalid argument value: {arg} = {value} - {reason}")]
    InvalidArgValue {
        arg: String,
        value: String,
        reason: String,
    },
}

impl From<std::io::Error> for ModuleError {
    fn from(err: std::io::Error) -> Self {
        ModuleError::ExecutionFailed {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ModuleError {
    fn from(err: serde_json::Error) -> Self {
        ModuleError::ExecutionFailed {
            message: err.to_string(),
        }
    }
}
