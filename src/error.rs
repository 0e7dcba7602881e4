use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a reset or a load. None of these are recovered from.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Request could not be built or the cluster could not be reached.
    #[error("failed to send HTTP request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The cluster answered with a status outside the operation's success set.
    #[error("failed to {operation} (status {status}): {body}")]
    UnexpectedStatus {
        operation: String,
        status: StatusCode,
        body: String,
    },

    /// Malformed fixture data.
    #[error("invalid fixture input: {0}")]
    InvalidInput(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk fixture tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to parse cluster response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FixtureError {
    pub fn unexpected_status(
        operation: impl Into<String>,
        status: StatusCode,
        body: impl Into<String>
    ) -> Self {
        Self::UnexpectedStatus {
            operation: operation.into(),
            status,
            body: body.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
