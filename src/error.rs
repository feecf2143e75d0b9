// file: src/error.rs
// version: 1.0.0
// guid: a3b4c5d6-e7f8-9012-3456-789012abcdef

use thiserror::Error;

/// Result type alias for the runner
pub type Result<T> = std::result::Result<T, RunnerError>;

/// Error types for the daily pipeline runner
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date: {0}")]
    Date(String),

    #[error("Step '{step}' failed with exit code {code:?}")]
    Step { step: String, code: Option<i32> },

    #[error("Execution error: {0}")]
    Execution(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RunnerError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new date error
    pub fn date(msg: impl Into<String>) -> Self {
        Self::Date(msg.into())
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a step-failure error carrying the child's exit code
    pub fn step(step: impl Into<String>, code: Option<i32>) -> Self {
        Self::Step {
            step: step.into(),
            code,
        }
    }

    /// Map this error to the process exit code.
    ///
    /// A failed downstream step propagates its own exit code; configuration
    /// and date errors exit 2 (clap's usage-error convention); everything
    /// else exits 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Step { code: Some(c), .. } if (1..=255).contains(c) => *c as u8,
            Self::Step { .. } => 1,
            Self::Config(_) | Self::Date(_) => 2,
            _ => 1,
        }
    }
}
