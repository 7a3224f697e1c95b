// src/error.rs
//! Client error types with structured error handling.
//!
//! The taxonomy is deliberately small: failures either come from the
//! transport/service boundary (and propagate unchanged, with no retry at
//! this layer) or from asking the assembled data for something it does
//! not hold. Missing child references are *not* errors anywhere in this
//! crate; they surface as omitted results.

use crate::types::BlockId;
use thiserror::Error;

/// Main client error type.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Notion API returned an error ({status}) for {endpoint}: {body}")]
    Service {
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response from {endpoint}: {source}")]
    Malformed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
        /// Truncated response body, for diagnostics.
        body: String,
    },

    #[error("Record map contains no block table")]
    MissingBlockTable,

    #[error("Block {0} is not present in the record map")]
    MissingRoot(BlockId),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl ClientError {
    /// Whether the failure originated at the transport/service boundary
    /// rather than in locally assembled data.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Service { .. } | Self::Malformed { .. }
        )
    }
}

/// Result type alias for convenience
pub type Result<T, E = ClientError> = std::result::Result<T, E>;
