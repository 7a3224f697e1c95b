use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid record ID format: {0}")]
    InvalidId(String),

    #[error("Invalid auth token: {reason}")]
    InvalidAuthToken { reason: String },

    #[error("Invalid base URL: {url} - {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
