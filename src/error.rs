use thiserror::Error;

/// Unified error type for git-version-stamp operations
#[derive(Error, Debug)]
pub enum GitVersionError {
    /// Source control is unavailable or has no commit history
    #[error("Version resolution failed: {0}")]
    Resolution(String),

    #[error("Git command `git {args}` failed: {message}")]
    Command { args: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in git-version-stamp
pub type Result<T> = std::result::Result<T, GitVersionError>;

impl GitVersionError {
    /// Create a resolution error with context
    pub fn resolution(msg: impl Into<String>) -> Self {
        GitVersionError::Resolution(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitVersionError::Config(msg.into())
    }

    /// Create a command error for the given git arguments
    pub fn command(args: &[&str], msg: impl Into<String>) -> Self {
        GitVersionError::Command {
            args: args.join(" "),
            message: msg.into(),
        }
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, GitVersionError::Resolution(_))
    }
}
