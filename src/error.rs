//! Error types.

use thiserror::Error;

/// Generation failures, all of them a misconfigured request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no character categories selected")]
    EmptyCategoryPool,

    #[error("password length must be at least 1")]
    ZeroLength,
}

/// Errors surfaced by the CLI adapter.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to read password: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}
